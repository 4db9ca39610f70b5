//! NCSA reference lists of Thai government organisations.
//!
//! Three fixed lists are published by the National Cyber Security Agency:
//! Critical Information Infrastructure operators, sector regulators and
//! general government agencies / state-owned enterprises.  An organisation
//! may appear in more than one list (e.g. the Bank of Thailand is both CII and
//! a regulator); [`OrgCategory::PRIORITY`] decides which one wins.

use serde::{Deserialize, Serialize};

use super::sectors::labels;

// ---------------------------------------------------------------------------
// Built-in lists
// ---------------------------------------------------------------------------

const NCSA_CII: &[&str] = &[
    "กรมการปกครอง",
    "กรมการแพทย์",
    "กรมการแพทย์แผนไทยและการแพทย์ทางเลือก",
    "กรมควบคุมโรค",
    "กรมป้องกันและบรรเทาสาธารณภัย",
    "กรมวิทยาศาสตร์การแพทย์",
    "กรมสนับสนุนบริการสุขภาพ",
    "กรมสุขภาพจิต",
    "กรมอนามัย",
    "กรมอุตุนิยมวิทยา",
    "กองการบินทหารเรือ",
    "กองทะเบียนประวัติอาชญากร",
    "กองทัพบก",
    "กองทัพเรือ",
    "กองทัพอากาศ",
    "กองบัญชาการกองทัพไทย",
    "กองอำนวยการรักษาความมั่นคงภายในราชอาณาจักร",
    "การท่าเรือแห่งประเทศไทย",
    "การท่าอากาศยานอู่ตะเภา",
    "การประปาส่วนภูมิภาค",
    "การไฟฟ้านครหลวง",
    "การไฟฟ้าฝ่ายผลิตแห่งประเทศไทย",
    "การไฟฟ้าส่วนภูมิภาค",
    "การรถไฟฟ้าขนส่งมวลชนแห่งประเทศไทย",
    "การรถไฟแห่งประเทศไทย",
    "ตลาดหลักทรัพย์แห่งประเทศไทย",
    "ธนาคารกรุงเทพ",
    "ธนาคารกรุงไทย",
    "ธนาคารกรุงศรีอยุธยา",
    "ธนาคารกสิกรไทย",
    "ธนาคารทหารไทยธนชาต",
    "ธนาคารไทยพาณิชย์",
    "ธนาคารเพื่อการเกษตรและสหกรณ์การเกษตร",
    "ธนาคารแห่งประเทศไทย",
    "ธนาคารออมสิน",
];

const NCSA_REG: &[&str] = &[
    "กรมการขนส่งทางราง",
    "กรมการปกครอง",
    "กรมชลประทาน",
    "กรมศุลกากร",
    "กระทรวงการคลัง",
    "กระทรวงพลังงาน",
    "การประปาส่วนภูมิภาค",
    "ธนาคารแห่งประเทศไทย",
    "สำนักงานการบินพลเรือนแห่งประเทศไทย",
    "สำนักงานคณะกรรมการกำกับหลักทรัพย์และตลาดหลักทรัพย์",
    "สำนักงานคณะกรรมการกิจการกระจายเสียง กิจการโทรทัศน์ และกิจการโทรคมนาคมแห่งชาติ",
    "สำนักงานคณะกรรรมการอาหารและยา",
    "สำนักงานตำรวจแห่งชาติ",
    "สำนักงานปรมาณูเพื่อสันติ",
    "สำนักงานปลัดกระทรวงกลาโหม",
    "สำนักงานปลัดกระทรวงคมนาคม",
    "สำนักงานปลัดกระทรวงสาธารณสุข",
    "สำนักงานพัฒนารัฐบาลดิจิทัล (องค์การมหาชน)",
    "สำนักงานสภาความมั่นคงแห่งชาติ",
];

const NCSA_GOV: &[&str] = &[
    "กรมการกงสุล",
    "กรมการขนส่งทางบก",
    "กรมการข้าว",
    "มหาวิทยาลัยเกษตรศาสตร์",
    "กระทรวงศึกษาธิการ",
    "กรมการค้าต่างประเทศ",
    "กรมการค้าภายใน",
    "กรมการจัดหางาน",
    "กรมการท่องเที่ยว",
    "กรมการเปลี่ยนแปลงสภาพภูมิอากาศและสิ่งแวดล้อม",
    "กรมการพัฒนาชุมชน",
    "กรมการศาสนา",
    "กรมกิจการเด็กและเยาวชน",
    "กรมกิจการผู้สูงอายุ",
    "กรมกิจการสตรีและสถาบันครอบครัว",
];

// ---------------------------------------------------------------------------
// OrgCategory
// ---------------------------------------------------------------------------

/// The three NCSA list categories an organisation can be matched into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrgCategory {
    CriticalInfrastructure,
    Regulator,
    GovernmentSoe,
}

impl OrgCategory {
    /// Match order used by the static matcher: the first list that hits wins.
    pub const PRIORITY: [OrgCategory; 3] = [
        OrgCategory::CriticalInfrastructure,
        OrgCategory::Regulator,
        OrgCategory::GovernmentSoe,
    ];

    /// Sector-table label this category resolves to.
    pub fn sector_label(&self) -> &'static str {
        match self {
            OrgCategory::CriticalInfrastructure => labels::CRITICAL_INFRASTRUCTURE,
            OrgCategory::Regulator => labels::REGULATOR,
            OrgCategory::GovernmentSoe => labels::GOVERNMENT_SOE,
        }
    }
}

// ---------------------------------------------------------------------------
// ReferenceLists
// ---------------------------------------------------------------------------

/// The three named organisation lists, one per [`OrgCategory`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceLists {
    pub critical_infrastructure: Vec<String>,
    pub regulators: Vec<String>,
    pub government: Vec<String>,
}

impl ReferenceLists {
    /// The NCSA lists compiled into the binary.
    pub fn builtin() -> Self {
        fn owned(list: &[&str]) -> Vec<String> {
            list.iter().map(|s| s.to_string()).collect()
        }

        Self {
            critical_infrastructure: owned(NCSA_CII),
            regulators: owned(NCSA_REG),
            government: owned(NCSA_GOV),
        }
    }

    /// Entries of the list backing `category`.
    pub fn list(&self, category: OrgCategory) -> &[String] {
        match category {
            OrgCategory::CriticalInfrastructure => &self.critical_infrastructure,
            OrgCategory::Regulator => &self.regulators,
            OrgCategory::GovernmentSoe => &self.government,
        }
    }

    /// All three lists merged, deduplicated and sorted.
    pub fn combined(&self) -> Vec<String> {
        let mut all: Vec<String> = OrgCategory::PRIORITY
            .iter()
            .flat_map(|c| self.list(*c).iter().cloned())
            .collect();
        all.sort();
        all.dedup();
        all
    }
}

impl Default for ReferenceLists {
    fn default() -> Self {
        Self::builtin()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
