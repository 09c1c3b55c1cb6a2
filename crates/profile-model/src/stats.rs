use serde::{Deserialize, Serialize};

/// Publication counts supplied by the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicationStats {
    pub journals: u32,
    pub conferences: u32,
    pub books: u32,
}

/// Caller-supplied social links. Non-empty github/linkedin win over row values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialOverrides {
    pub mail: Option<String>,
    pub github: Option<String>,
    pub linkedin: Option<String>,
}

impl SocialOverrides {
    pub fn github(&self) -> Option<&str> {
        non_empty(self.github.as_deref())
    }

    pub fn linkedin(&self) -> Option<&str> {
        non_empty(self.linkedin.as_deref())
    }

    pub fn mail(&self) -> Option<&str> {
        non_empty(self.mail.as_deref())
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatKind {
    Journals,
    Conferences,
    Books,
}

impl StatKind {
    /// Card caption.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Journals => "Journals",
            Self::Conferences => "Conferences",
            Self::Books => "Books Published",
        }
    }

    /// Accent colour of the card.
    #[must_use]
    pub const fn color(&self) -> &'static str {
        match self {
            Self::Journals => "#064e3b",
            Self::Conferences => "#065f46",
            Self::Books => "#047857",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatCard {
    pub kind: StatKind,
    pub label: String,
    pub value: u32,
}

impl StatCard {
    pub fn new(kind: StatKind, value: u32) -> Self {
        Self {
            kind,
            label: kind.label().to_string(),
            value,
        }
    }
}
