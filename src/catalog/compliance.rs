//! Compliance-mapping rows and finance sub-industry keywords.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// ComplianceRow
// ---------------------------------------------------------------------------

/// One law-section → service mapping.
///
/// Field aliases accept the Thai column headers used in the published
/// mapping spreadsheets, so CSV exports can be dropped in unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceRow {
    #[serde(alias = "มาตรา (Section)", alias = "Section")]
    pub section: String,
    #[serde(alias = "หัวข้อกฎหมาย (โดยย่อ)", alias = "Summary")]
    pub summary: String,
    #[serde(alias = "Cybersecurity Service Mapping", alias = "Service Mapping")]
    pub service_mapping: String,
}

impl ComplianceRow {
    fn new(section: &str, summary: &str, service_mapping: &str) -> Self {
        Self {
            section: section.to_string(),
            summary: summary.to_string(),
            service_mapping: service_mapping.to_string(),
        }
    }
}

/// Cybersecurity Act B.E. 2562 sections relevant to government-related
/// organisations.
pub fn builtin_cyber_act_rows() -> Vec<ComplianceRow> {
    vec![
        ComplianceRow::new(
            "มาตรา 13(5)",
            "หน่วยงาน CII ต้องกำหนดมาตรฐานที่เหมาะสมเพื่อรับมือภัยคุกคามไซเบอร์",
            "🔹 NIST CSF Gap Assessment\n🔹 Cybersecurity Maturity Assessment",
        ),
        ComplianceRow::new(
            "มาตรา 43, 44, 45",
            "หน่วยงานต้องมีนโยบาย มาตรฐาน และแนวทางการป้องกันภัยไซเบอร์ตามแผนของชาติ",
            "🔹 NIST CSF Gap Assessment (Policy & Controls)\n🔹 Baseline Readiness Only",
        ),
        ComplianceRow::new(
            "มาตรา 54",
            "ประเมินความเสี่ยงและตรวจสอบระบบความมั่นคงไซเบอร์อย่างน้อยปีละครั้ง โดยผู้ประเมินภายใน/ภายนอก",
            "🔹 Cyber Risk Assessment (IT/OT)",
        ),
        ComplianceRow::new(
            "มาตรา 58",
            "หน่วยงานต้องรับมือกับภัยคุกคามไซเบอร์ โดยต้องประเมินสถานการณ์ ตรวจสอบ ป้องกัน แจ้งเหตุ ฯลฯ",
            "🔹 Cyber Incident Response Plan (IRP)",
        ),
        ComplianceRow::new(
            "มาตรา 59",
            "สนับสนุนหน่วยงานอื่นในการรับมือภัยไซเบอร์ และแจ้งเตือนเมื่อพบภัย",
            "🔹 CIRP Tabletop Exercise (TTX)",
        ),
    ]
}

// ---------------------------------------------------------------------------
// SubIndustry
// ---------------------------------------------------------------------------

/// Finance sub-industries with their own supplementary mapping table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SubIndustry {
    Banking,
    Insurance,
    Securities,
}

impl SubIndustry {
    pub const ALL: [SubIndustry; 3] = [
        SubIndustry::Banking,
        SubIndustry::Insurance,
        SubIndustry::Securities,
    ];

    /// File name looked up in the data directory.
    pub fn csv_file_name(&self) -> &'static str {
        match self {
            SubIndustry::Banking => "bfsi_banking.csv",
            SubIndustry::Insurance => "bfsi_insurance.csv",
            SubIndustry::Securities => "bfsi_securities.csv",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            SubIndustry::Banking => "Banking (ธปท.)",
            SubIndustry::Insurance => "Insurance (คปภ.)",
            SubIndustry::Securities => "Securities (ก.ล.ต.)",
        }
    }
}

/// Keyword list that flags an organisation name as a given sub-industry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubIndustryKeywords {
    pub industry: SubIndustry,
    pub keywords: Vec<String>,
}

impl SubIndustryKeywords {
    /// Returns `true` if the lowercased `name` contains any keyword.
    pub fn matches(&self, name: &str) -> bool {
        let name = name.to_lowercase();
        self.keywords
            .iter()
            .any(|kw| !kw.is_empty() && name.contains(&kw.to_lowercase()))
    }
}

pub fn builtin_sub_industry_keywords() -> Vec<SubIndustryKeywords> {
    fn entry(industry: SubIndustry, keywords: &[&str]) -> SubIndustryKeywords {
        SubIndustryKeywords {
            industry,
            keywords: keywords.iter().map(|s| s.to_string()).collect(),
        }
    }

    vec![
        entry(
            SubIndustry::Banking,
            &["bank", "ธนาคาร", "kbank", "krungsri", "ttb", "credit union", "สินเชื่อ"],
        ),
        entry(
            SubIndustry::Insurance,
            &[
                "insurance",
                "assurance",
                "ประกัน",
                "axa",
                "allianz",
                "prudential",
                "muang thai life",
            ],
        ),
        entry(
            SubIndustry::Securities,
            &[
                "securities",
                "หลักทรัพย์",
                "asset management",
                "จัดการกองทุน",
                "brokerage",
                "stock exchange",
            ],
        ),
    ]
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
