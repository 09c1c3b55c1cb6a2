//! Raw row to [`ProfileView`].

use profile_model::{
    OrcidField, ProfileLink, ProfileView, PublicationStats, RawRow, SocialLinks, SocialOverrides,
    StatDeck,
};

use crate::aliases;
use crate::extras::{extract_extra_fields, handled_keys};
use crate::links::{ensure_protocol, resolve_orcid_link};
use crate::photo::resolve_photo_url;
use crate::resolve::{format_label, resolve_group};

const DEFAULT_NAME: &str = "Faculty Member";
const DEFAULT_DESIGNATION: &str = "Designation";

fn or_default(value: String, default: &str) -> String {
    if value.is_empty() {
        default.to_string()
    } else {
        value
    }
}

fn profile_link(row: &RawRow, group: &aliases::AliasGroup) -> ProfileLink {
    let entry = resolve_group(row, group);
    ProfileLink {
        link: ensure_protocol(&entry.value),
        label: format_label(&entry.key),
    }
}

/// Resolve one row into a display-ready profile.
///
/// Pure: the same inputs always produce an equal view. A missing row (an
/// empty [`RawRow`]) yields every default.
pub fn build_profile(
    row: &RawRow,
    stats: Option<&PublicationStats>,
    overrides: &SocialOverrides,
) -> ProfileView {
    let name = resolve_group(row, &aliases::NAME).value;
    let designation = resolve_group(row, &aliases::DESIGNATION).value;
    let email = resolve_group(row, &aliases::EMAIL).value;

    let orcid_entry = resolve_group(row, &aliases::ORCID);
    let orcid = OrcidField {
        link: resolve_orcid_link(&orcid_entry.value),
        label: format_label(&orcid_entry.key),
        id: orcid_entry.value,
    };

    let github_raw = match overrides.github() {
        Some(link) => link.to_string(),
        None => resolve_group(row, &aliases::GITHUB).value,
    };
    let linkedin_raw = match overrides.linkedin() {
        Some(link) => link.to_string(),
        None => resolve_group(row, &aliases::LINKEDIN).value,
    };
    let social = SocialLinks {
        mail: overrides
            .mail()
            .map_or_else(|| email.clone(), ToString::to_string),
        github: ensure_protocol(&github_raw),
        linkedin: ensure_protocol(&linkedin_raw),
        ..SocialLinks::default()
    };

    let photo_url = resolve_photo_url(row.get(aliases::PHOTO_COLUMN).unwrap_or_default());

    ProfileView {
        name: or_default(name, DEFAULT_NAME),
        designation: or_default(designation, DEFAULT_DESIGNATION),
        department: resolve_group(row, &aliases::DEPARTMENT).value,
        institution: resolve_group(row, &aliases::INSTITUTION).value,
        employee_id: resolve_group(row, &aliases::EMPLOYEE_ID).value,
        email,
        phone: resolve_group(row, &aliases::PHONE).value,
        orcid,
        scholar: profile_link(row, &aliases::SCHOLAR),
        scopus: profile_link(row, &aliases::SCOPUS),
        social,
        photo_url,
        extras: extract_extra_fields(row, &handled_keys()),
        stats: StatDeck::from_stats(stats),
    }
}
