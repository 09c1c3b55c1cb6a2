//! Faculty profile output generation.
//!
//! - **HTML**: the hero section, optionally as a standalone page
//! - **JSON**: the resolved view model for other front ends

mod common;
mod html;
mod json;

pub use html::{HtmlOptions, render_hero_html};
pub use json::{profile_json, write_output};
