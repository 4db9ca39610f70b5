//! Union of sector profiles into one recommendation.

use std::collections::BTreeSet;

use thiserror::Error;

use crate::catalog::{labels, SectorTable};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecommendError {
    /// Neither classification produced a label present in the sector table.
    #[error("Could not determine a valid, mapped sector from any method to provide recommendations.")]
    NoSector,
}

/// Merged recommendation for every sector an organisation was placed in.
///
/// All lists are deduplicated and sorted alphabetically.
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    pub sectors: Vec<String>,
    pub key_services: Vec<String>,
    pub secondary_opportunities: Vec<String>,
    pub compliance_drivers: Vec<String>,
    pub regulators: Vec<String>,
    /// `true` if any contributing sector expects ISO/IEC 27001.
    pub iso27001_expected: bool,
}

impl Recommendation {
    pub fn has_sector(&self, label: &str) -> bool {
        self.sectors.iter().any(|s| s == label)
    }

    /// Whether the Cybersecurity Act mapping applies.
    pub fn is_government_related(&self) -> bool {
        labels::GOVERNMENT_RELATED.iter().any(|l| self.has_sector(l))
    }

    pub fn is_finance(&self) -> bool {
        self.has_sector(labels::FINANCE)
    }
}

/// Merge the profiles of every known label in `candidates`.
///
/// `None`, unknown and duplicate labels are ignored.  An empty result is
/// [`RecommendError::NoSector`], never a partial recommendation.
pub fn merge<'a, I>(candidates: I, sectors: &SectorTable) -> Result<Recommendation, RecommendError>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    let chosen: BTreeSet<&str> = candidates
        .into_iter()
        .flatten()
        .filter(|label| sectors.contains(label))
        .collect();

    if chosen.is_empty() {
        return Err(RecommendError::NoSector);
    }

    let mut key_services = BTreeSet::new();
    let mut secondary_opportunities = BTreeSet::new();
    let mut compliance_drivers = BTreeSet::new();
    let mut regulators = BTreeSet::new();
    let mut iso27001_expected = false;

    for profile in chosen.iter().filter_map(|label| sectors.get(label)) {
        key_services.extend(profile.key_services.iter().cloned());
        secondary_opportunities.extend(profile.secondary_opportunities.iter().cloned());
        compliance_drivers.extend(profile.compliance_drivers.iter().cloned());
        regulators.extend(profile.regulators.iter().cloned());
        iso27001_expected |= profile.iso27001_expected;
    }

    Ok(Recommendation {
        sectors: chosen.into_iter().map(str::to_string).collect(),
        key_services: key_services.into_iter().collect(),
        secondary_opportunities: secondary_opportunities.into_iter().collect(),
        compliance_drivers: compliance_drivers.into_iter().collect(),
        regulators: regulators.into_iter().collect(),
        iso27001_expected,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> SectorTable {
        SectorTable::builtin()
    }

    fn is_sorted_unique(items: &[String]) -> bool {
        items.windows(2).all(|w| w[0] < w[1])
    }

    #[test]
    fn single_sector_copies_profile_sorted() {
        let rec = merge([Some("Healthcare")], &table()).unwrap();
        assert_eq!(rec.sectors, vec!["Healthcare"]);
        assert_eq!(rec.key_services, vec!["IRP & TTX", "PDPA Consult"]);
        assert!(!rec.iso27001_expected);
    }

    #[test]
    fn two_sectors_union_not_intersection() {
        let rec = merge(
            [Some(labels::CRITICAL_INFRASTRUCTURE), Some(labels::FINANCE)],
            &table(),
        )
        .unwrap();

        // From CII only.
        assert!(rec.key_services.contains(&"Tabletop Exercise (TTX)".to_string()));
        // From BFSI only.
        assert!(rec.key_services.contains(&"Pentest".to_string()));
        // Shared driver appears once.
        let iso = rec
            .compliance_drivers
            .iter()
            .filter(|d| *d == "ISO/IEC 27001")
            .count();
        assert_eq!(iso, 1);

        assert!(is_sorted_unique(&rec.key_services));
        assert!(is_sorted_unique(&rec.secondary_opportunities));
        assert!(is_sorted_unique(&rec.compliance_drivers));
        assert!(is_sorted_unique(&rec.regulators));
        assert!(rec.iso27001_expected);
    }

    #[test]
    fn duplicate_labels_collapse() {
        let rec = merge([Some("Healthcare"), Some("Healthcare")], &table()).unwrap();
        assert_eq!(rec.sectors.len(), 1);
    }

    #[test]
    fn overlapping_services_deduplicated() {
        // Telco and Manufacturing both list "CIRP" and NCSA.
        let rec = merge([Some("Telco / ISP"), Some("Manufacturing / OT-heavy")], &table()).unwrap();
        let cirp = rec.key_services.iter().filter(|s| *s == "CIRP").count();
        assert_eq!(cirp, 1);
        assert_eq!(
            rec.regulators,
            vec!["กสทช. (NBTC)", "สกมช. (NCSA)"]
        );
    }

    #[test]
    fn none_and_unknown_labels_ignored() {
        let rec = merge([None, Some("Agriculture"), Some("Healthcare")], &table()).unwrap();
        assert_eq!(rec.sectors, vec!["Healthcare"]);
    }

    #[test]
    fn empty_label_set_is_error() {
        assert_eq!(merge([None, None], &table()), Err(RecommendError::NoSector));
        assert_eq!(merge([Some("Unknown")], &table()), Err(RecommendError::NoSector));
    }

    #[test]
    fn government_related_flag() {
        let gov = merge([Some(labels::REGULATOR)], &table()).unwrap();
        assert!(gov.is_government_related());
        assert!(!gov.is_finance());

        let bank = merge([Some(labels::FINANCE)], &table()).unwrap();
        assert!(!bank.is_government_related());
        assert!(bank.is_finance());
    }
}
