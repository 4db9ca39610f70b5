//! Per-request classification values and the rule-based matcher.

pub mod matcher;

pub use matcher::StaticMatcher;

/// Outcome of one classification method for one organisation.
///
/// `sector` is always a label from the catalog's sector table when present.
/// `rationale` may be set even without a sector (e.g. the model explained
/// itself but named a sector we do not know).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClassificationResult {
    pub sector: Option<String>,
    pub rationale: Option<String>,
}

impl ClassificationResult {
    /// "No classification".
    pub fn none() -> Self {
        Self::default()
    }

    pub fn new(sector: impl Into<String>, rationale: impl Into<String>) -> Self {
        Self {
            sector: Some(sector.into()),
            rationale: Some(rationale.into()),
        }
    }

    pub fn is_classified(&self) -> bool {
        self.sector.is_some()
    }
}
