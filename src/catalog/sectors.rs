//! Sector profiles: services, compliance drivers and regulators per sector.
//!
//! [`SectorTable`] is the closed set of sector labels that both the static
//! matcher and the AI classifier must resolve into.  Order is preserved so
//! label resolution and prompt rendering are stable.

use serde::{Deserialize, Serialize};

/// Sector labels referenced directly by code.
pub mod labels {
    pub const CRITICAL_INFRASTRUCTURE: &str = "Critical Infrastructure (CII)";
    pub const REGULATOR: &str = "Regulator";
    pub const GOVERNMENT_SOE: &str = "Government / SOE";
    pub const FINANCE: &str = "Banking / Finance / Insurance (BFSI)";

    /// Labels that pull in the Cybersecurity Act compliance table.
    pub const GOVERNMENT_RELATED: [&str; 3] = [CRITICAL_INFRASTRUCTURE, GOVERNMENT_SOE, REGULATOR];
}

// ---------------------------------------------------------------------------
// SectorProfile
// ---------------------------------------------------------------------------

/// Recommendation metadata for one sector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectorProfile {
    pub label: String,
    pub key_services: Vec<String>,
    pub secondary_opportunities: Vec<String>,
    pub iso27001_expected: bool,
    pub regulators: Vec<String>,
    pub compliance_drivers: Vec<String>,
}

impl SectorProfile {
    fn from_static(
        label: &str,
        key_services: &[&str],
        secondary_opportunities: &[&str],
        iso27001_expected: bool,
        regulators: &[&str],
        compliance_drivers: &[&str],
    ) -> Self {
        fn owned(items: &[&str]) -> Vec<String> {
            items.iter().map(|s| s.to_string()).collect()
        }

        Self {
            label: label.to_string(),
            key_services: owned(key_services),
            secondary_opportunities: owned(secondary_opportunities),
            iso27001_expected,
            regulators: owned(regulators),
            compliance_drivers: owned(compliance_drivers),
        }
    }
}

// ---------------------------------------------------------------------------
// SectorTable
// ---------------------------------------------------------------------------

/// Ordered, immutable table of [`SectorProfile`]s keyed by label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectorTable {
    profiles: Vec<SectorProfile>,
}

impl SectorTable {
    pub fn new(profiles: Vec<SectorProfile>) -> Self {
        Self { profiles }
    }

    /// The nine sectors compiled into the binary.
    pub fn builtin() -> Self {
        use labels::*;

        Self::new(vec![
            SectorProfile::from_static(
                CRITICAL_INFRASTRUCTURE,
                &["Cyber Risk Assessment (IT/OT)", "Tabletop Exercise (TTX)", "CIRP & Playbook"],
                &["Gap Assessment", "BCP Alignment"],
                true,
                &["สกมช. (NCSA)"],
                &["Cybersecurity Act B.E. 2562", "ISO/IEC 27001"],
            ),
            SectorProfile::from_static(
                REGULATOR,
                &[
                    "Cybersecurity Policy Consult",
                    "Regulatory Gap Assessment",
                    "Awareness for Regulators",
                ],
                &["TTX for National Crisis", "Threat Intelligence Briefing"],
                false,
                &["Self-Regulated / Government Oversight"],
                &["Relevant Royal Decrees", "Ministerial Regulations"],
            ),
            SectorProfile::from_static(
                GOVERNMENT_SOE,
                &["TTX", "IRP", "Cyber Risk Assessment"],
                &["Gap Assessment", "อว3/อช3 Consult"],
                false,
                &["สพธอ. (ETDA)", "สกมช. (NCSA)"],
                &["Cybersecurity Act B.E. 2562", "Official Information Act B.E. 2540"],
            ),
            SectorProfile::from_static(
                FINANCE,
                &["PDPA Consult", "Pentest", "IRP & Playbook"],
                &["Source Code Scan", "Awareness Training"],
                true,
                &["ธปท. (BOT)", "คปภ. (OIC)"],
                &[
                    "Bank of Thailand Cyber Resilience Standards",
                    "OIC Guidelines on Data Protection",
                    "PDPA",
                    "ISO/IEC 27001",
                ],
            ),
            SectorProfile::from_static(
                "Healthcare",
                &["PDPA Consult", "IRP & TTX"],
                &["Phishing Simulation", "Awareness Training"],
                false,
                &["กระทรวงสาธารณสุข (MOPH)", "สคส. (PDPC)"],
                &["PDPA", "National Health Act B.E. 2550"],
            ),
            SectorProfile::from_static(
                "Telco / ISP",
                &["Zero Trust Readiness", "CIRP"],
                &["Gap Assessment", "Managed CSOC"],
                true,
                &["กสทช. (NBTC)", "สกมช. (NCSA)"],
                &["NBTC Privacy Requirements", "Cybersecurity Act B.E. 2562"],
            ),
            SectorProfile::from_static(
                "Software / Tech / SaaS",
                &["Secure SDLC Gap Assessment", "Source Code Scan", "Pentest"],
                &["Awareness Training", "CI/CD Security"],
                true,
                &["สคส. (PDPC)", "สกมช. (NCSA)"],
                &["PDPA", "Secure SDLC Best Practices"],
            ),
            SectorProfile::from_static(
                "Retail / SME / Logistics",
                &["VA Scan", "PDPA Consult"],
                &["Awareness Training", "Phishing Simulation"],
                false,
                &["สคส. (PDPC)"],
                &["PDPA", "Business Continuity Planning"],
            ),
            SectorProfile::from_static(
                "Manufacturing / OT-heavy",
                &["Cyber Risk Assessment (IT/OT)", "CIRP"],
                &["TTX", "Backup/Restore Drill"],
                false,
                &["สกมช. (NCSA)"],
                &["Cybersecurity Act B.E. 2562", "Supply Chain Risk Framework"],
            ),
        ])
    }

    /// Look up a profile by its exact label.
    pub fn get(&self, label: &str) -> Option<&SectorProfile> {
        self.profiles.iter().find(|p| p.label == label)
    }

    pub fn contains(&self, label: &str) -> bool {
        self.get(label).is_some()
    }

    /// All labels in table order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.profiles.iter().map(|p| p.label.as_str())
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Map free-form model output onto a known label.
    ///
    /// Exact match first; otherwise the first label (in table order) that
    /// contains the lowercased text as a substring.  Blank text never resolves.
    pub fn resolve(&self, text: &str) -> Option<&str> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        if let Some(profile) = self.get(text) {
            return Some(profile.label.as_str());
        }
        let needle = text.to_lowercase();
        self.labels().find(|label| label.to_lowercase().contains(&needle))
    }
}

impl Default for SectorTable {
    fn default() -> Self {
        Self::builtin()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_has_nine_sectors() {
        let table = SectorTable::builtin();
        assert_eq!(table.len(), 9);
        assert!(table.contains(labels::FINANCE));
        for label in labels::GOVERNMENT_RELATED {
            assert!(table.contains(label), "missing {label}");
        }
    }

    #[test]
    fn resolve_exact_label() {
        let table = SectorTable::builtin();
        assert_eq!(table.resolve("Healthcare"), Some("Healthcare"));
        assert_eq!(table.resolve(labels::FINANCE), Some(labels::FINANCE));
    }

    #[test]
    fn resolve_partial_label_case_insensitive() {
        let table = SectorTable::builtin();
        assert_eq!(table.resolve("bfsi"), Some(labels::FINANCE));
        assert_eq!(table.resolve("Telco"), Some("Telco / ISP"));
        assert_eq!(table.resolve("  saas "), Some("Software / Tech / SaaS"));
    }

    #[test]
    fn resolve_rejects_unknown_and_blank() {
        let table = SectorTable::builtin();
        assert_eq!(table.resolve("Agriculture"), None);
        assert_eq!(table.resolve(""), None);
        assert_eq!(table.resolve("   "), None);
    }

    #[test]
    fn resolve_does_not_match_superstring() {
        // The AI text must be contained in the label, not the other way round.
        let table = SectorTable::builtin();
        assert_eq!(table.resolve("Healthcare and Pharma"), None);
    }
}
