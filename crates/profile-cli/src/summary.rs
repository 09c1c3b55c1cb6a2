use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use profile_model::{ProfileLink, ProfileView, is_sentinel};

use crate::types::RenderResult;

pub fn print_render_summary(result: &RenderResult) {
    let Some(path) = &result.output else {
        return;
    };
    println!("Profile: {}", result.view.name);
    println!("Records: {}", result.row_count);
    println!("Output: {} ({} bytes)", path.display(), result.bytes);
}

pub fn print_profile(view: &ProfileView) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Field"),
        header_cell("Value"),
        header_cell("Link"),
    ]);
    apply_table_style(&mut table);

    table.add_row(text_row("Name", &view.name));
    table.add_row(text_row("Designation", &view.designation));
    table.add_row(text_row("Department", &view.department));
    table.add_row(text_row("Institution", &view.institution));
    table.add_row(text_row("Employee ID", &view.employee_id));
    table.add_row(text_row("Email", &view.email));
    table.add_row(text_row("Phone", &view.phone));
    table.add_row(vec![
        Cell::new(&view.orcid.label),
        value_cell(&view.orcid.id),
        link_cell(&view.orcid.link),
    ]);
    table.add_row(profile_row(&view.scholar));
    table.add_row(profile_row(&view.scopus));
    table.add_row(vec![
        Cell::new("Mail"),
        value_cell(&view.social.mail),
        link_cell(&view.social.contact_href),
    ]);
    table.add_row(vec![
        Cell::new("GitHub"),
        dim_cell(""),
        link_cell(&view.social.github),
    ]);
    table.add_row(vec![
        Cell::new("LinkedIn"),
        dim_cell(""),
        link_cell(&view.social.linkedin),
    ]);
    table.add_row(vec![
        Cell::new("Photo"),
        dim_cell(""),
        if view.photo_url.is_empty() {
            dim_cell("-")
        } else {
            Cell::new(&view.photo_url)
        },
    ]);
    for extra in &view.extras {
        table.add_row(vec![
            Cell::new(&extra.label).fg(Color::Green),
            Cell::new(&extra.value),
            dim_cell(extra.badge()),
        ]);
    }
    println!("{table}");

    if view.stats.is_empty() {
        return;
    }
    let mut deck = Table::new();
    deck.set_header(vec![
        header_cell("Card"),
        header_cell("Count"),
        header_cell("Placement"),
    ]);
    apply_table_style(&mut deck);
    align_column(&mut deck, 1, CellAlignment::Right);
    for (card, placement) in view.stats.placed() {
        deck.add_row(vec![
            Cell::new(&card.label).fg(Color::Cyan),
            Cell::new(card.value).add_attribute(Attribute::Bold),
            Cell::new(placement.as_str()),
        ]);
    }
    println!("{deck}");
}

fn text_row(label: &str, value: &str) -> Vec<Cell> {
    vec![Cell::new(label), value_cell(value), dim_cell("")]
}

fn profile_row(link: &ProfileLink) -> Vec<Cell> {
    vec![Cell::new(&link.label), dim_cell(""), link_cell(&link.link)]
}

fn value_cell(value: &str) -> Cell {
    if value.is_empty() {
        dim_cell("-")
    } else {
        Cell::new(value)
    }
}

fn link_cell(link: &str) -> Cell {
    if is_sentinel(link) {
        dim_cell("-")
    } else {
        Cell::new(link).fg(Color::Blue)
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

pub fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

pub fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value.to_string()).fg(Color::DarkGrey)
}
