//! Faculty profile resolution.
//!
//! Turns a loosely structured spreadsheet row into a [`ProfileView`]:
//!
//! - [`resolve`]: alias lookup, exact header first then case-insensitive
//! - [`links`]: protocol completion and ORCID URLs
//! - [`photo`]: Google Drive share links to thumbnail URLs
//! - [`extras`]: columns no alias group claims
//! - [`builder`]: ties it together with defaults
//!
//! [`ProfileView`]: profile_model::ProfileView

#![deny(unsafe_code)]

pub mod aliases;
pub mod builder;
pub mod extras;
pub mod links;
pub mod photo;
pub mod resolve;

pub use aliases::{ALIAS_GROUPS, AliasGroup, NON_FIELD_COLUMNS, PHOTO_COLUMN};
pub use builder::build_profile;
pub use extras::{CaseInsensitiveSet, extract_extra_fields, handled_keys};
pub use links::{ORCID_BASE_URL, ensure_protocol, resolve_orcid_link};
pub use photo::{drive_file_id, drive_thumbnail_url, resolve_photo_url};
pub use resolve::{format_label, get_entry, resolve_group};
