//! Rule-based organisation matching against the NCSA reference lists.
//!
//! [`StaticMatcher`] is pure: no I/O, no interior state after construction.
//! Entries are lowercased once up front so each lookup is a plain substring
//! scan.

use crate::catalog::{OrgCategory, ReferenceLists};

use super::ClassificationResult;

const MATCH_RATIONALE: &str = "Matched from a predefined NCSA list.";

/// Case-insensitive substring matcher over the three reference lists.
///
/// # Example
/// ```rust
/// use sector_mapper::catalog::{OrgCategory, ReferenceLists};
/// use sector_mapper::classify::StaticMatcher;
///
/// let matcher = StaticMatcher::new(&ReferenceLists::builtin());
/// assert_eq!(
///     matcher.classify("ธนาคารแห่งประเทศไทย สำนักงานใหญ่"),
///     Some(OrgCategory::CriticalInfrastructure)
/// );
/// ```
#[derive(Debug, Clone)]
pub struct StaticMatcher {
    /// `(category, lowercased entries)` in priority order.
    lists: Vec<(OrgCategory, Vec<String>)>,
    /// Combined sorted list, original casing, for suggestions.
    combined: Vec<String>,
}

impl StaticMatcher {
    pub fn new(reference: &ReferenceLists) -> Self {
        let lists = OrgCategory::PRIORITY
            .iter()
            .map(|category| {
                let lowered = reference
                    .list(*category)
                    .iter()
                    .map(|entry| entry.to_lowercase())
                    .filter(|entry| !entry.is_empty())
                    .collect();
                (*category, lowered)
            })
            .collect();

        Self {
            lists,
            combined: reference.combined(),
        }
    }

    /// First category (CII → regulator → government/SOE) with an entry
    /// contained in `name`, or `None`.
    pub fn classify(&self, name: &str) -> Option<OrgCategory> {
        if name.trim().is_empty() {
            return None;
        }
        let name = name.to_lowercase();
        self.lists
            .iter()
            .find(|(_, entries)| entries.iter().any(|entry| name.contains(entry.as_str())))
            .map(|(category, _)| *category)
    }

    /// [`classify`](Self::classify) wrapped as a [`ClassificationResult`].
    pub fn classify_result(&self, name: &str) -> ClassificationResult {
        match self.classify(name) {
            Some(category) => ClassificationResult::new(category.sector_label(), MATCH_RATIONALE),
            None => ClassificationResult::none(),
        }
    }

    /// Reference-list entries containing `keyword`, in sorted order.
    pub fn suggestions(&self, keyword: &str) -> Vec<String> {
        if keyword.is_empty() {
            return Vec::new();
        }
        let keyword = keyword.to_lowercase();
        self.combined
            .iter()
            .filter(|org| org.to_lowercase().contains(&keyword))
            .cloned()
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn matcher() -> StaticMatcher {
        StaticMatcher::new(&ReferenceLists::builtin())
    }

    fn custom() -> StaticMatcher {
        StaticMatcher::new(&ReferenceLists {
            critical_infrastructure: vec!["Metro Water".into()],
            regulators: vec!["Water Authority".into(), "Energy Board".into()],
            government: vec!["Ministry".into()],
        })
    }

    #[test]
    fn matches_exact_entry() {
        assert_eq!(
            matcher().classify("กองทัพบก"),
            Some(OrgCategory::CriticalInfrastructure)
        );
        assert_eq!(matcher().classify("กรมศุลกากร"), Some(OrgCategory::Regulator));
        assert_eq!(matcher().classify("กรมการกงสุล"), Some(OrgCategory::GovernmentSoe));
    }

    #[test]
    fn matches_entry_embedded_in_longer_name() {
        assert_eq!(
            matcher().classify("สำนักงานตำรวจแห่งชาติ กองบังคับการ"),
            Some(OrgCategory::Regulator)
        );
    }

    #[test]
    fn match_is_case_insensitive() {
        assert_eq!(custom().classify("the METRO WATER works"), Some(OrgCategory::CriticalInfrastructure));
        assert_eq!(custom().classify("energy board of thailand"), Some(OrgCategory::Regulator));
    }

    #[test]
    fn cii_takes_priority_over_regulator() {
        // ธนาคารแห่งประเทศไทย is in both CII and REG.
        assert_eq!(
            matcher().classify("ธนาคารแห่งประเทศไทย"),
            Some(OrgCategory::CriticalInfrastructure)
        );
    }

    #[test]
    fn regulator_takes_priority_over_government() {
        assert_eq!(
            custom().classify("Ministry Energy Board"),
            Some(OrgCategory::Regulator)
        );
    }

    #[test]
    fn unknown_name_is_no_match() {
        assert_eq!(matcher().classify("Bangkok Bank"), None);
        assert!(!matcher().classify_result("Bangkok Bank").is_classified());
    }

    #[test]
    fn empty_input_is_no_match() {
        assert_eq!(matcher().classify(""), None);
        assert_eq!(matcher().classify("   "), None);
    }

    #[test]
    fn classify_result_carries_label() {
        let result = matcher().classify_result("กองทัพเรือ");
        assert_eq!(result.sector.as_deref(), Some("Critical Infrastructure (CII)"));
        assert_eq!(result.rationale.as_deref(), Some(MATCH_RATIONALE));
    }

    #[test]
    fn suggestions_filter_combined_list() {
        let hits = matcher().suggestions("ธนาคาร");
        assert!(hits.len() >= 9);
        assert!(hits.iter().all(|h| h.contains("ธนาคาร")));

        let mut sorted = hits.clone();
        sorted.sort();
        assert_eq!(hits, sorted);
    }

    #[test]
    fn suggestions_are_deduplicated() {
        let hits = matcher().suggestions("กรมการปกครอง");
        assert_eq!(hits, vec!["กรมการปกครอง".to_string()]);
    }

    #[test]
    fn suggestions_case_insensitive() {
        assert_eq!(custom().suggestions("water"), vec!["Metro Water", "Water Authority"]);
    }

    #[test]
    fn empty_keyword_returns_no_suggestions() {
        assert!(matcher().suggestions("").is_empty());
    }
}
