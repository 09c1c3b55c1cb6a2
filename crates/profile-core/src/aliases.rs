//! Header spellings recognized for each canonical profile field.
//!
//! Candidate order is preference order: the first non-empty match wins.

/// Ordered candidate headers for one canonical field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AliasGroup {
    /// Canonical field name, used for logging and the `fields` listing.
    pub field: &'static str,
    pub candidates: &'static [&'static str],
}

impl AliasGroup {
    /// Label reported when no candidate matched.
    pub fn primary(&self) -> &'static str {
        self.candidates.first().copied().unwrap_or(self.field)
    }
}

pub const NAME: AliasGroup = AliasGroup {
    field: "name",
    candidates: &["Full Name", "Name"],
};

pub const DESIGNATION: AliasGroup = AliasGroup {
    field: "designation",
    candidates: &["Designation", "Role", "Rank"],
};

pub const DEPARTMENT: AliasGroup = AliasGroup {
    field: "department",
    candidates: &["Department", "Dept"],
};

pub const INSTITUTION: AliasGroup = AliasGroup {
    field: "institution",
    candidates: &["Institution Name", "Institution", "College"],
};

pub const EMPLOYEE_ID: AliasGroup = AliasGroup {
    field: "employee_id",
    candidates: &["Employee ID", "ID", "Emp ID"],
};

pub const EMAIL: AliasGroup = AliasGroup {
    field: "email",
    candidates: &["Official Email", "Email", "Mail"],
};

pub const PHONE: AliasGroup = AliasGroup {
    field: "phone",
    candidates: &["Phone Number", "Phone", "Mobile"],
};

pub const ORCID: AliasGroup = AliasGroup {
    field: "orcid",
    candidates: &["ORCID ID", "orcid id", "ORCID", "ORC Id"],
};

pub const SCHOLAR: AliasGroup = AliasGroup {
    field: "scholar",
    candidates: &[
        "Google Scholar Link",
        "google scholar",
        "Google Scholar",
        "Scholar",
    ],
};

pub const SCOPUS: AliasGroup = AliasGroup {
    field: "scopus",
    candidates: &["Scopus Link", "scopus", "Scopus ID", "Scopus"],
};

pub const GITHUB: AliasGroup = AliasGroup {
    field: "github",
    candidates: &["Github", "GitHub Link", "GitHub"],
};

pub const LINKEDIN: AliasGroup = AliasGroup {
    field: "linkedin",
    candidates: &["Linkedin", "LinkedIn Link", "LinkedIn"],
};

/// Every alias group, in display order.
pub const ALIAS_GROUPS: &[AliasGroup] = &[
    NAME,
    DESIGNATION,
    DEPARTMENT,
    INSTITUTION,
    EMPLOYEE_ID,
    EMAIL,
    PHONE,
    ORCID,
    SCHOLAR,
    SCOPUS,
    GITHUB,
    LINKEDIN,
];

/// Photo column. Only this exact spelling is read.
pub const PHOTO_COLUMN: &str = "Profile Photo Link";

/// Columns that are consumed elsewhere and never shown as extra fields.
pub const NON_FIELD_COLUMNS: &[&str] = &[PHOTO_COLUMN, "About", "Bio", "scopus "];
