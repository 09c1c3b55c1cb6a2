use serde::{Deserialize, Serialize};

use crate::deck::StatDeck;

/// Placeholder link meaning "no usable link". Affordances carrying it are not rendered.
pub const SENTINEL_LINK: &str = "#";

pub fn is_sentinel(link: &str) -> bool {
    link == SENTINEL_LINK
}

/// Result of an alias lookup against a [`crate::RawRow`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldEntry {
    /// Matched column header, or the first candidate when nothing matched.
    pub key: String,
    /// Cell text; empty when nothing matched.
    pub value: String,
}

impl FieldEntry {
    pub fn is_found(&self) -> bool {
        !self.value.is_empty()
    }
}

/// A resolved academic profile link with the column label it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileLink {
    pub link: String,
    pub label: String,
}

impl ProfileLink {
    pub fn is_available(&self) -> bool {
        !is_sentinel(&self.link)
    }
}

impl Default for ProfileLink {
    fn default() -> Self {
        Self {
            link: SENTINEL_LINK.to_string(),
            label: String::new(),
        }
    }
}

/// ORCID identifier as entered plus its canonical profile URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrcidField {
    pub id: String,
    pub link: String,
    pub label: String,
}

impl OrcidField {
    pub fn is_available(&self) -> bool {
        !is_sentinel(&self.link)
    }
}

impl Default for OrcidField {
    fn default() -> Self {
        Self {
            id: String::new(),
            link: SENTINEL_LINK.to_string(),
            label: String::new(),
        }
    }
}

/// Social affordances shown as icons under the contact details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLinks {
    /// Mail address from overrides or the row; may be empty.
    pub mail: String,
    /// Target of the mail icon and the call-to-action.
    pub contact_href: String,
    pub github: String,
    pub linkedin: String,
}

impl Default for SocialLinks {
    fn default() -> Self {
        Self {
            mail: String::new(),
            contact_href: "#contact".to_string(),
            github: SENTINEL_LINK.to_string(),
            linkedin: SENTINEL_LINK.to_string(),
        }
    }
}

/// A row column not claimed by any alias group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtraField {
    pub label: String,
    pub value: String,
}

impl ExtraField {
    /// Two-character uppercase badge shown next to the field.
    pub fn badge(&self) -> String {
        self.label.chars().take(2).collect::<String>().to_uppercase()
    }
}

/// Fully resolved, display-ready profile.
///
/// Every field is populated: either with trimmed row text or a fixed default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileView {
    pub name: String,
    pub designation: String,
    pub department: String,
    pub institution: String,
    pub employee_id: String,
    pub email: String,
    pub phone: String,
    pub orcid: OrcidField,
    pub scholar: ProfileLink,
    pub scopus: ProfileLink,
    pub social: SocialLinks,
    /// Directly embeddable image URL; empty when the row has no photo.
    pub photo_url: String,
    pub extras: Vec<ExtraField>,
    pub stats: StatDeck,
}

impl Default for ProfileView {
    fn default() -> Self {
        Self {
            name: "Faculty Member".to_string(),
            designation: "Designation".to_string(),
            department: String::new(),
            institution: String::new(),
            employee_id: String::new(),
            email: String::new(),
            phone: String::new(),
            orcid: OrcidField::default(),
            scholar: ProfileLink::default(),
            scopus: ProfileLink::default(),
            social: SocialLinks::default(),
            photo_url: String::new(),
            extras: Vec::new(),
            stats: StatDeck::default(),
        }
    }
}
