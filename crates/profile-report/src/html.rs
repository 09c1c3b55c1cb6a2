//! Hero section HTML output.

use std::io::Write;

use anyhow::{Context, Result};
use quick_xml::Writer;

use profile_model::{ExtraField, OrcidField, ProfileLink, ProfileView, StatDeck, is_sentinel};

use crate::common::{end, icon, link_attrs, raw_text, start, text, void, write_text_element};

/// Minimal stylesheet for standalone pages. Layout only; no animation.
const HERO_CSS: &str = "\
body{margin:0;font-family:system-ui,sans-serif;background:#ecfdf5;color:#334155}\
.hero{min-height:100vh;display:flex;align-items:center}\
.hero-content{display:grid;grid-template-columns:1fr 1fr;gap:3rem;max-width:80rem;margin:0 auto;padding:5rem 1.5rem}\
.name{font-size:3rem;font-weight:900;color:#064e3b;margin:0}\
.designation{font-size:1.5rem;font-weight:700}\
.department{font-style:italic;color:#64748b}\
.info-row{display:flex;align-items:center;gap:.75rem}\
.label{font-weight:700;color:#64748b}\
.badge{font-size:10px;font-weight:700;border:1px solid #10b981;border-radius:4px;padding:0 4px}\
.social a{display:inline-block;width:3rem;height:3rem;border-radius:50%;border:1px solid #cbd5e1}\
.cta{display:inline-block;padding:1rem 2rem;border-radius:9999px;background:#10b981;color:#fff;font-weight:700}\
.photo img,.photo-placeholder{width:14rem;height:14rem;border-radius:50%;object-fit:cover;border:6px solid #fff}\
.photo-placeholder{background:#e2e8f0}\
.stat-deck{position:relative;height:340px}\
.stat-card{position:absolute;width:13rem;height:16rem;background:#fff;display:flex;flex-direction:column;align-items:center;justify-content:center}\
.stat-value{font-size:3.75rem;font-weight:900;color:var(--accent)}\
.stat-label{font-size:.75rem;font-weight:900;text-transform:uppercase;letter-spacing:.1em}";

/// Options for HTML output.
#[derive(Debug, Clone, Default)]
pub struct HtmlOptions {
    /// Wrap the section in a complete document with an embedded stylesheet.
    pub standalone: bool,
    /// Document title; defaults to the profile name.
    pub title: Option<String>,
}

impl HtmlOptions {
    pub fn standalone() -> Self {
        Self {
            standalone: true,
            title: None,
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

/// Render the hero section for a profile.
pub fn render_hero_html(view: &ProfileView, options: &HtmlOptions) -> Result<String> {
    let mut buffer = Vec::new();
    if options.standalone {
        buffer.extend_from_slice(b"<!DOCTYPE html>\n");
    }
    let mut xml = Writer::new(buffer);

    if options.standalone {
        let title = options.title.as_deref().unwrap_or(&view.name);
        start(&mut xml, "html", &[("lang", "en")])?;
        start(&mut xml, "head", &[])?;
        void(&mut xml, "meta", &[("charset", "utf-8")])?;
        void(
            &mut xml,
            "meta",
            &[
                ("name", "viewport"),
                ("content", "width=device-width, initial-scale=1"),
            ],
        )?;
        start(&mut xml, "title", &[])?;
        text(&mut xml, title)?;
        end(&mut xml, "title")?;
        start(&mut xml, "style", &[])?;
        raw_text(&mut xml, HERO_CSS)?;
        end(&mut xml, "style")?;
        end(&mut xml, "head")?;
        start(&mut xml, "body", &[])?;
    }

    write_hero(&mut xml, view).context("write hero section")?;

    if options.standalone {
        end(&mut xml, "body")?;
        end(&mut xml, "html")?;
    }

    let mut bytes = xml.into_inner();
    bytes.push(b'\n');
    String::from_utf8(bytes).context("hero html is not utf-8")
}

fn write_hero<W: Write>(xml: &mut Writer<W>, view: &ProfileView) -> Result<()> {
    start(xml, "section", &[("id", "basicInfo"), ("class", "hero")])?;
    start(xml, "div", &[("class", "hero-content")])?;

    start(xml, "div", &[("class", "hero-text")])?;
    write_text_element(xml, "h3", "greeting", "Hello, I'm")?;
    write_text_element(xml, "h1", "name", &view.name)?;
    start(xml, "div", &[("class", "role")])?;
    write_text_element(xml, "p", "designation", &view.designation)?;
    write_text_element(xml, "p", "department", &view.department)?;
    end(xml, "div")?;
    write_details(xml, view)?;
    write_social(xml, view)?;
    start(
        xml,
        "a",
        &[("class", "cta"), ("href", view.social.contact_href.as_str())],
    )?;
    text(xml, "Let's Connect")?;
    end(xml, "a")?;
    end(xml, "div")?;

    start(xml, "div", &[("class", "hero-visual")])?;
    write_photo(xml, view)?;
    write_stat_deck(xml, &view.stats)?;
    end(xml, "div")?;

    end(xml, "div")?;
    end(xml, "section")
}

fn write_details<W: Write>(xml: &mut Writer<W>, view: &ProfileView) -> Result<()> {
    start(xml, "div", &[("class", "details")])?;
    if !view.institution.is_empty() {
        write_info_row(xml, "building", &view.institution)?;
    }
    if !view.employee_id.is_empty() {
        write_info_row(xml, "id-card", &format!("ID: {}", view.employee_id))?;
    }
    if !view.email.is_empty() {
        write_info_row(xml, "mail", &view.email)?;
    }
    if !view.phone.is_empty() {
        write_info_row(xml, "phone", &view.phone)?;
    }
    write_orcid_row(xml, &view.orcid)?;
    write_profile_row(xml, "graduation-cap", &view.scholar)?;
    write_profile_row(xml, "library", &view.scopus)?;
    for extra in &view.extras {
        write_extra_row(xml, extra)?;
    }
    end(xml, "div")
}

fn write_info_row<W: Write>(xml: &mut Writer<W>, kind: &str, value: &str) -> Result<()> {
    start(xml, "div", &[("class", "info-row")])?;
    icon(xml, kind)?;
    write_text_element(xml, "span", "value", value)?;
    end(xml, "div")
}

fn write_link_row<W: Write>(
    xml: &mut Writer<W>,
    kind: &str,
    href: &str,
    label: &str,
    shown: &str,
) -> Result<()> {
    start(xml, "div", &[("class", "info-row")])?;
    icon(xml, kind)?;
    start(xml, "a", &link_attrs(href))?;
    write_text_element(xml, "span", "label", &format!("{label}:"))?;
    text(xml, shown)?;
    end(xml, "a")?;
    end(xml, "div")
}

fn write_orcid_row<W: Write>(xml: &mut Writer<W>, orcid: &OrcidField) -> Result<()> {
    if !orcid.is_available() {
        return Ok(());
    }
    write_link_row(xml, "link", &orcid.link, &orcid.label, &orcid.id)
}

fn write_profile_row<W: Write>(xml: &mut Writer<W>, kind: &str, link: &ProfileLink) -> Result<()> {
    if !link.is_available() {
        return Ok(());
    }
    write_link_row(xml, kind, &link.link, &link.label, "View Profile")
}

fn write_extra_row<W: Write>(xml: &mut Writer<W>, extra: &ExtraField) -> Result<()> {
    start(xml, "div", &[("class", "info-row extra")])?;
    write_text_element(xml, "span", "badge", &extra.badge())?;
    start(xml, "span", &[("class", "value")])?;
    write_text_element(xml, "span", "label", &format!("{}:", extra.label))?;
    text(xml, &format!(" {}", extra.value))?;
    end(xml, "span")?;
    end(xml, "div")
}

fn write_social<W: Write>(xml: &mut Writer<W>, view: &ProfileView) -> Result<()> {
    let social = &view.social;
    start(xml, "div", &[("class", "social")])?;
    write_social_icon(xml, "mail", "Mail", &social.contact_href)?;
    if !is_sentinel(&social.github) {
        write_social_icon(xml, "github", "GitHub", &social.github)?;
    }
    if !is_sentinel(&social.linkedin) {
        write_social_icon(xml, "linkedin", "LinkedIn", &social.linkedin)?;
    }
    end(xml, "div")
}

fn write_social_icon<W: Write>(
    xml: &mut Writer<W>,
    kind: &str,
    label: &str,
    href: &str,
) -> Result<()> {
    let class = format!("social-{kind}");
    let mut attrs = link_attrs(href);
    attrs.push(("class", class.as_str()));
    attrs.push(("aria-label", label));
    start(xml, "a", &attrs)?;
    icon(xml, kind)?;
    end(xml, "a")
}

fn write_photo<W: Write>(xml: &mut Writer<W>, view: &ProfileView) -> Result<()> {
    start(xml, "div", &[("class", "photo")])?;
    if view.photo_url.is_empty() {
        start(xml, "div", &[("class", "photo-placeholder")])?;
        icon(xml, "user")?;
        end(xml, "div")?;
    } else {
        void(
            xml,
            "img",
            &[
                ("src", view.photo_url.as_str()),
                ("alt", view.name.as_str()),
                ("referrerpolicy", "no-referrer"),
            ],
        )?;
    }
    end(xml, "div")
}

fn write_stat_deck<W: Write>(xml: &mut Writer<W>, deck: &StatDeck) -> Result<()> {
    if deck.is_empty() {
        return Ok(());
    }
    let active = deck.active().to_string();
    start(
        xml,
        "div",
        &[("class", "stat-deck"), ("data-active", active.as_str())],
    )?;
    for (card, placement) in deck.placed() {
        let z = placement.z_index().to_string();
        let x = placement.offset_x().to_string();
        let rotate = placement.rotate().to_string();
        let style = format!(
            "z-index:{z};transform:translateX({x}px) rotate({rotate}deg) scale({});--accent:{}",
            placement.scale(),
            card.kind.color()
        );
        start(
            xml,
            "div",
            &[
                ("class", "stat-card"),
                ("data-placement", placement.as_str()),
                ("data-z", z.as_str()),
                ("data-x", x.as_str()),
                ("data-rotate", rotate.as_str()),
                ("data-scale", placement.scale()),
                ("style", style.as_str()),
            ],
        )?;
        write_text_element(xml, "span", "stat-value", &card.value.to_string())?;
        write_text_element(xml, "span", "stat-label", &card.label)?;
        end(xml, "div")?;
    }
    end(xml, "div")
}
