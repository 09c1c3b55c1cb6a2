//! Integration tests for building profile views from sheet rows.

use profile_core::build_profile;
use profile_ingest::parse_rows;
use profile_model::{PublicationStats, RawRow, SocialOverrides};

const SHEET: &str = "\
Full Name,Designation,Department,Institution Name,Employee ID,Official Email,Phone Number,ORCID ID,Google Scholar Link,Scopus ID,Profile Photo Link,GitHub,Experience,About
 Dr. Ada Lovelace ,Professor,Computer Science,Analytical College,EMP-042,ada@college.edu,+44 123,0000-0001-2345-6789,scholar.google.com/citations?user=ada,https://www.scopus.com/authid/detail.uri?authorId=1,https://drive.google.com/file/d/1AbCdEfGhIjKlMnOpQrStUvWxYz012/view?usp=sharing,github.com/ada,12 years,Pioneer
";

fn sheet_row() -> RawRow {
    parse_rows(SHEET).expect("parse sheet").remove(0)
}

#[test]
fn resolves_full_row() {
    let view = build_profile(&sheet_row(), None, &SocialOverrides::default());

    assert_eq!(view.name, "Dr. Ada Lovelace");
    assert_eq!(view.designation, "Professor");
    assert_eq!(view.department, "Computer Science");
    assert_eq!(view.institution, "Analytical College");
    assert_eq!(view.employee_id, "EMP-042");
    assert_eq!(view.email, "ada@college.edu");
    assert_eq!(view.phone, "+44 123");

    assert_eq!(view.orcid.id, "0000-0001-2345-6789");
    assert_eq!(view.orcid.link, "https://orcid.org/0000-0001-2345-6789");
    assert_eq!(view.orcid.label, "ORCID ID");

    assert_eq!(
        view.scholar.link,
        "https://scholar.google.com/citations?user=ada"
    );
    assert_eq!(view.scholar.label, "Google Scholar Link");
    assert_eq!(view.scopus.label, "Scopus ID");
    assert!(view.scopus.is_available());

    assert_eq!(view.social.github, "https://github.com/ada");
    assert_eq!(view.social.linkedin, "#");
    assert_eq!(view.social.mail, "ada@college.edu");
    assert_eq!(view.social.contact_href, "#contact");

    assert_eq!(
        view.photo_url,
        "https://drive.google.com/thumbnail?id=1AbCdEfGhIjKlMnOpQrStUvWxYz012&sz=w1000"
    );
}

#[test]
fn extras_exclude_handled_columns() {
    let view = build_profile(&sheet_row(), None, &SocialOverrides::default());
    let labels: Vec<&str> = view.extras.iter().map(|e| e.label.as_str()).collect();
    assert_eq!(labels, vec!["Experience"]);
    assert_eq!(view.extras[0].value, "12 years");
}

#[test]
fn empty_row_yields_defaults() {
    let view = build_profile(&RawRow::new(), None, &SocialOverrides::default());

    assert_eq!(view.name, "Faculty Member");
    assert_eq!(view.designation, "Designation");
    assert_eq!(view.department, "");
    assert_eq!(view.orcid.link, "#");
    assert_eq!(view.orcid.label, "ORCID ID");
    assert_eq!(view.scholar.link, "#");
    assert_eq!(view.scholar.label, "Google Scholar Link");
    assert_eq!(view.scopus.link, "#");
    assert_eq!(view.social.github, "#");
    assert_eq!(view.social.linkedin, "#");
    assert_eq!(view.photo_url, "");
    assert!(view.extras.is_empty());
    assert!(view.stats.is_empty());
}

#[test]
fn overrides_take_precedence_for_social_links() {
    let overrides = SocialOverrides {
        mail: Some("office@college.edu".to_string()),
        github: Some("https://github.com/override".to_string()),
        linkedin: Some("linkedin.com/in/ada".to_string()),
    };
    let view = build_profile(&sheet_row(), None, &overrides);

    assert_eq!(view.social.github, "https://github.com/override");
    assert_eq!(view.social.linkedin, "https://linkedin.com/in/ada");
    assert_eq!(view.social.mail, "office@college.edu");
    assert_eq!(view.email, "ada@college.edu");
}

#[test]
fn empty_override_falls_back_to_row() {
    let overrides = SocialOverrides {
        github: Some(String::new()),
        ..SocialOverrides::default()
    };
    let view = build_profile(&sheet_row(), None, &overrides);
    assert_eq!(view.social.github, "https://github.com/ada");
}

#[test]
fn stats_build_three_cards() {
    let stats = PublicationStats {
        journals: 10,
        conferences: 4,
        books: 1,
    };
    let view = build_profile(&sheet_row(), Some(&stats), &SocialOverrides::default());
    assert_eq!(view.stats.len(), 3);
    assert_eq!(view.stats.cards()[1].value, 4);
    assert_eq!(view.stats.active(), 0);
}

#[test]
fn building_twice_is_identical() {
    let row = sheet_row();
    let stats = PublicationStats::default();
    let first = build_profile(&row, Some(&stats), &SocialOverrides::default());
    let second = build_profile(&row, Some(&stats), &SocialOverrides::default());
    assert_eq!(first, second);
}

#[test]
fn rank_resolves_designation_and_is_not_extra() {
    let row: RawRow = [("Name", "Grace"), ("rank", "Associate Professor")]
        .into_iter()
        .collect();
    let view = build_profile(&row, None, &SocialOverrides::default());
    assert_eq!(view.designation, "Associate Professor");
    assert!(view.extras.is_empty());
}

#[test]
fn non_drive_photo_passes_through() {
    let row: RawRow = [("Profile Photo Link", "https://example.edu/ada.png")]
        .into_iter()
        .collect();
    let view = build_profile(&row, None, &SocialOverrides::default());
    assert_eq!(view.photo_url, "https://example.edu/ada.png");
}

#[test]
fn photo_column_must_match_exactly() {
    // A case variant is not read as the photo but is still kept out of extras.
    let row: RawRow = [("profile photo link", "https://example.edu/ada.png")]
        .into_iter()
        .collect();
    let view = build_profile(&row, None, &SocialOverrides::default());
    assert_eq!(view.photo_url, "");
    assert!(view.extras.is_empty());
}

#[test]
fn labelled_column_with_colon_is_not_resolved() {
    // Matching is on the header as written; only the caption drops the colon.
    let row: RawRow = [("ORCID ID:", "0000-0001-2345-6789")]
        .into_iter()
        .collect();
    let view = build_profile(&row, None, &SocialOverrides::default());
    assert_eq!(view.orcid.link, "#");
    assert_eq!(view.extras.len(), 1);
}

#[test]
fn orcid_label_comes_from_matched_column() {
    let row: RawRow = [("orc id", "0000-0002-0000-0000")].into_iter().collect();
    let view = build_profile(&row, None, &SocialOverrides::default());
    assert_eq!(view.orcid.label, "orc id");
    assert_eq!(view.orcid.link, "https://orcid.org/0000-0002-0000-0000");
}
