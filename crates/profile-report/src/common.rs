//! Shared markup helpers.

use std::io::Write;

use anyhow::Result;
use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};

/// Open an element with attributes.
pub fn start<W: Write>(writer: &mut Writer<W>, name: &str, attrs: &[(&str, &str)]) -> Result<()> {
    let mut node = BytesStart::new(name);
    for attr in attrs {
        node.push_attribute(*attr);
    }
    writer.write_event(Event::Start(node))?;
    Ok(())
}

pub fn end<W: Write>(writer: &mut Writer<W>, name: &str) -> Result<()> {
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

/// Escaped text node.
pub fn text<W: Write>(writer: &mut Writer<W>, content: &str) -> Result<()> {
    writer.write_event(Event::Text(BytesText::new(content)))?;
    Ok(())
}

/// Text written as is. For `<style>` bodies, where entities are not decoded.
pub fn raw_text<W: Write>(writer: &mut Writer<W>, content: &str) -> Result<()> {
    writer.write_event(Event::Text(BytesText::from_escaped(content)))?;
    Ok(())
}

/// `<name class="..">text</name>`.
pub fn write_text_element<W: Write>(
    writer: &mut Writer<W>,
    name: &str,
    class: &str,
    content: &str,
) -> Result<()> {
    start(writer, name, &[("class", class)])?;
    text(writer, content)?;
    end(writer, name)
}

/// Void element such as `<img>` or `<meta>`.
pub fn void<W: Write>(writer: &mut Writer<W>, name: &str, attrs: &[(&str, &str)]) -> Result<()> {
    let mut node = BytesStart::new(name);
    for attr in attrs {
        node.push_attribute(*attr);
    }
    writer.write_event(Event::Empty(node))?;
    Ok(())
}

/// Decorative icon placeholder; styling supplies the glyph.
pub fn icon<W: Write>(writer: &mut Writer<W>, name: &str) -> Result<()> {
    let class = format!("icon icon-{name}");
    start(writer, "span", &[("class", class.as_str()), ("aria-hidden", "true")])?;
    end(writer, "span")
}

/// External links open in a new tab; in-page anchors do not.
pub fn link_attrs(href: &str) -> Vec<(&str, &str)> {
    let mut attrs = vec![("href", href)];
    if href.starts_with("http") {
        attrs.push(("target", "_blank"));
        attrs.push(("rel", "noopener noreferrer"));
    }
    attrs
}
