//! Supplementary compliance-mapping tables.
//!
//! Which tables appear depends on the merged recommendation:
//!
//! | Condition                             | Table                               |
//! |---------------------------------------|-------------------------------------|
//! | any government-related sector         | Cybersecurity Act (built-in or CSV) |
//! | BFSI + name hits banking keywords     | `bfsi_banking.csv`                  |
//! | BFSI + name hits insurance keywords   | `bfsi_insurance.csv`                |
//! | BFSI + name hits securities keywords  | `bfsi_securities.csv`               |
//!
//! CSV files are optional.  A missing file becomes
//! [`SupplementContent::NotFound`] so the UI can show a warning in place of
//! the table.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::catalog::{ComplianceRow, SubIndustry, SubIndustryKeywords};

use super::merger::Recommendation;

// ---------------------------------------------------------------------------
// ComplianceError
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ComplianceError {
    #[error("file not found: {0}")]
    NotFound(PathBuf),

    #[error("invalid CSV: {0}")]
    Csv(#[from] csv::Error),
}

/// Read compliance rows from a CSV file with a header row.
pub fn load_csv(path: &Path) -> Result<Vec<ComplianceRow>, ComplianceError> {
    if !path.exists() {
        return Err(ComplianceError::NotFound(path.to_path_buf()));
    }
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)?;

    let rows = reader
        .deserialize::<ComplianceRow>()
        .collect::<Result<Vec<_>, _>>()?;
    Ok(rows)
}

// ---------------------------------------------------------------------------
// Planning
// ---------------------------------------------------------------------------

/// A supplementary table that can be requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SupplementTable {
    CyberAct,
    SubIndustry(SubIndustry),
}

impl SupplementTable {
    pub fn title(&self) -> String {
        match self {
            SupplementTable::CyberAct => {
                "รายละเอียดข้อกำหนดตาม พ.ร.บ. ไซเบอร์ฯ ที่เกี่ยวข้อง".to_string()
            }
            SupplementTable::SubIndustry(industry) => {
                format!("BFSI compliance mapping: {}", industry.title())
            }
        }
    }
}

/// Decide which supplementary tables `rec` calls for.
pub fn plan_supplements(
    rec: &Recommendation,
    org_name: &str,
    keywords: &[SubIndustryKeywords],
) -> Vec<SupplementTable> {
    let mut plan = Vec::new();

    if rec.is_government_related() {
        plan.push(SupplementTable::CyberAct);
    }

    if rec.is_finance() {
        plan.extend(
            keywords
                .iter()
                .filter(|kw| kw.matches(org_name))
                .map(|kw| SupplementTable::SubIndustry(kw.industry)),
        );
    }

    plan
}

// ---------------------------------------------------------------------------
// Fetching
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub enum SupplementContent {
    Rows(Vec<ComplianceRow>),
    /// The backing CSV is absent.
    NotFound(PathBuf),
    /// The backing CSV exists but could not be read.
    Invalid { path: PathBuf, message: String },
}

/// One rendered supplementary table.
#[derive(Debug, Clone, PartialEq)]
pub struct Supplement {
    pub table: SupplementTable,
    pub title: String,
    pub content: SupplementContent,
}

/// Resolves [`SupplementTable`]s to rows.
#[derive(Debug, Clone)]
pub struct ComplianceSource {
    cyber_act_rows: Vec<ComplianceRow>,
    cyber_act_csv: Option<PathBuf>,
    data_dir: PathBuf,
}

impl ComplianceSource {
    /// * `cyber_act_rows`: built-in rows, used when no CSV override is set.
    /// * `cyber_act_csv` : optional CSV replacing the built-in rows.
    /// * `data_dir`      : directory holding the `bfsi_*.csv` files.
    pub fn new(
        cyber_act_rows: Vec<ComplianceRow>,
        cyber_act_csv: Option<PathBuf>,
        data_dir: PathBuf,
    ) -> Self {
        Self {
            cyber_act_rows,
            cyber_act_csv,
            data_dir,
        }
    }

    /// Path a table would be read from, or `None` for built-in rows.
    pub fn path_for(&self, table: SupplementTable) -> Option<PathBuf> {
        match table {
            SupplementTable::CyberAct => self.cyber_act_csv.clone(),
            SupplementTable::SubIndustry(industry) => {
                Some(self.data_dir.join(industry.csv_file_name()))
            }
        }
    }

    pub fn fetch(&self, table: SupplementTable) -> Supplement {
        let content = match self.path_for(table) {
            None => SupplementContent::Rows(self.cyber_act_rows.clone()),
            Some(path) => match load_csv(&path) {
                Ok(rows) => SupplementContent::Rows(rows),
                Err(ComplianceError::NotFound(path)) => {
                    log::warn!("Compliance table not found: {}", path.display());
                    SupplementContent::NotFound(path)
                }
                Err(e) => {
                    log::warn!("Could not read compliance table {}: {e}", path.display());
                    SupplementContent::Invalid {
                        path,
                        message: e.to_string(),
                    }
                }
            },
        };

        Supplement {
            table,
            title: table.title(),
            content,
        }
    }

    pub fn fetch_all(&self, plan: &[SupplementTable]) -> Vec<Supplement> {
        plan.iter().map(|table| self.fetch(*table)).collect()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
