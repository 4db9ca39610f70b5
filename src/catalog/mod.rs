//! Static reference data for sector mapping.
//!
//! Everything the pipeline looks up lives in a [`Catalog`]: the NCSA
//! reference lists, the sector table, the Cybersecurity Act mapping rows and
//! the finance sub-industry keywords.  The built-in catalog is compiled in;
//! a `catalog.toml` can replace any section of it without touching code.
//!
//! ```toml
//! [reference]
//! critical_infrastructure = ["การไฟฟ้านครหลวง"]
//! regulators = ["ธนาคารแห่งประเทศไทย"]
//! government = ["กรมการกงสุล"]
//!
//! [[sectors]]
//! label = "Healthcare"
//! key_services = ["PDPA Consult"]
//! secondary_opportunities = []
//! iso27001_expected = false
//! regulators = ["สคส. (PDPC)"]
//! compliance_drivers = ["PDPA"]
//! ```

pub mod compliance;
pub mod reference;
pub mod sectors;

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use compliance::{ComplianceRow, SubIndustry, SubIndustryKeywords};
pub use reference::{OrgCategory, ReferenceLists};
pub use sectors::{labels, SectorProfile, SectorTable};

// ---------------------------------------------------------------------------
// CatalogError
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid catalog file: {0}")]
    Toml(#[from] toml::de::Error),
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

/// All lookup tables, read-only after startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Catalog {
    pub reference: ReferenceLists,
    pub sectors: SectorTable,
    pub cyber_act: Vec<ComplianceRow>,
    pub sub_industries: Vec<SubIndustryKeywords>,
}

impl Catalog {
    pub fn builtin() -> Self {
        Self {
            reference: ReferenceLists::builtin(),
            sectors: SectorTable::builtin(),
            cyber_act: compliance::builtin_cyber_act_rows(),
            sub_industries: compliance::builtin_sub_industry_keywords(),
        }
    }

    /// Load a catalog override.  Sections missing from the file keep their
    /// built-in values; a missing file yields [`Catalog::builtin`].
    pub fn load_from(path: &Path) -> Result<Self, CatalogError> {
        if !path.exists() {
            return Ok(Self::builtin());
        }
        let content = std::fs::read_to_string(path)?;
        let catalog: Self = toml::from_str(&content)?;
        Ok(catalog)
    }

    /// Keyword lists for `industry`, if the catalog defines any.
    pub fn keywords_for(&self, industry: SubIndustry) -> Option<&SubIndustryKeywords> {
        self.sub_industries.iter().find(|k| k.industry == industry)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
