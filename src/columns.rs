//! Column names read from the FedScope files and the derived columns the
//! pipeline appends.

// primary dataset
pub const AGYSUB: &str = "AGYSUB";
pub const SALARY: &str = "SALARY";
pub const LOS: &str = "LOS";
pub const EDLVL: &str = "EDLVL";
pub const GSEGRD: &str = "GSEGRD";
pub const AGELVL: &str = "AGELVL";
pub const LOSLVL: &str = "LOSLVL";
pub const PATCO: &str = "PATCO";
pub const WORKSTAT: &str = "WORKSTAT";

// reference table
pub const AGYSUBT: &str = "AGYSUBT";

// derived
pub const AGENCY_NAME: &str = "AGENCY_NAME";
pub const AGE_GROUP: &str = "AGE_GROUP";
pub const EDUCATION: &str = "EDUCATION";
pub const GS_GRADE: &str = "GS_GRADE";
pub const SERVICE_YEARS: &str = "SERVICE_YEARS";
pub const OCC_CATEGORY: &str = "OCC_CATEGORY";
pub const WORK_STATUS: &str = "WORK_STATUS";

/// Every column a pipeline stage reads from the primary dataset.
pub const REQUIRED: &[&str] = &[
    AGYSUB, SALARY, LOS, EDLVL, GSEGRD, AGELVL, LOSLVL, PATCO, WORKSTAT,
];

/// Appended columns, in output order.
pub const DERIVED: &[&str] = &[
    AGENCY_NAME,
    AGE_GROUP,
    EDUCATION,
    GS_GRADE,
    SERVICE_YEARS,
    OCC_CATEGORY,
    WORK_STATUS,
];
