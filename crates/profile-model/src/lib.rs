//! Faculty profile data model.
//!
//! Shared types passed between the ingest, core, report, and CLI crates:
//!
//! - [`RawRow`]: one spreadsheet record, header to cell text, in column order
//! - [`ProfileView`]: the fully resolved, display-ready profile
//! - [`PublicationStats`] and [`SocialOverrides`]: optional external inputs
//! - [`StatDeck`]: publication count cards plus which one is on top

pub mod deck;
pub mod profile;
pub mod row;
pub mod stats;

pub use deck::{CardPlacement, StatDeck};
pub use profile::{
    ExtraField, FieldEntry, OrcidField, ProfileLink, ProfileView, SENTINEL_LINK, SocialLinks,
    is_sentinel,
};
pub use row::RawRow;
pub use stats::{PublicationStats, SocialOverrides, StatCard, StatKind};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_link_is_unavailable() {
        let link = ProfileLink {
            link: SENTINEL_LINK.to_string(),
            label: "Scopus Link".to_string(),
        };
        assert!(!link.is_available());
        assert!(is_sentinel(&link.link));
        assert!(!is_sentinel("https://orcid.org/"));
    }

    #[test]
    fn view_serializes() {
        let view = ProfileView::default();
        let json = serde_json::to_string(&view).expect("serialize view");
        let round: ProfileView = serde_json::from_str(&json).expect("deserialize view");
        assert_eq!(round, view);
    }
}
