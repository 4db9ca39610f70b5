//! Recommendation merging and supplementary compliance tables.

pub mod merger;
pub mod supplements;

pub use merger::{merge, Recommendation, RecommendError};
pub use supplements::{
    load_csv, plan_supplements, ComplianceError, ComplianceSource, Supplement, SupplementContent,
    SupplementTable,
};
