use anyhow::Result;
use quick_xml::{
    Writer,
    events::{BytesEnd, BytesStart, BytesText, Event},
};
use std::io::Cursor;

pub type XmlWriter = Writer<Cursor<Vec<u8>>>;

/// Create an in-memory writer.
#[inline]
pub fn create_xml_writer() -> XmlWriter {
    Writer::new(Cursor::new(Vec::with_capacity(4096)))
}

/// Consume the writer and return its buffer as a string.
pub fn into_string(writer: XmlWriter) -> Result<String> {
    Ok(String::from_utf8(writer.into_inner().into_inner())?)
}

/// Write a text element: `<tag>text</tag>`.
#[inline]
pub fn write_text_element(writer: &mut XmlWriter, tag: &str, text: &str) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new(tag)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(tag)))?;
    Ok(())
}

/// Open an element: `<tag attr="val">`.
#[inline]
pub fn write_start(writer: &mut XmlWriter, tag: &str, attrs: &[(&str, &str)]) -> Result<()> {
    let mut elem = BytesStart::new(tag);
    for &attr in attrs {
        elem.push_attribute(attr);
    }
    writer.write_event(Event::Start(elem))?;
    Ok(())
}

/// Close an element: `</tag>`.
#[inline]
pub fn write_end(writer: &mut XmlWriter, tag: &str) -> Result<()> {
    writer.write_event(Event::End(BytesEnd::new(tag)))?;
    Ok(())
}

/// Write escaped text.
#[inline]
pub fn write_text(writer: &mut XmlWriter, text: &str) -> Result<()> {
    writer.write_event(Event::Text(BytesText::new(text)))?;
    Ok(())
}

/// Write `<tag attrs>text</tag>`.
pub fn write_elem(writer: &mut XmlWriter, tag: &str, attrs: &[(&str, &str)], text: &str) -> Result<()> {
    write_start(writer, tag, attrs)?;
    write_text(writer, text)?;
    write_end(writer, tag)
}

/// Write an icon placeholder: `<i class="..."></i>`.
pub fn write_icon(writer: &mut XmlWriter, class: &str) -> Result<()> {
    write_start(writer, "i", &[("class", class)])?;
    write_end(writer, "i")
}

/// Write an empty element with attributes: `<tag attr1="val1" ... />`.
#[inline]
pub fn write_empty_elem<K, V>(writer: &mut XmlWriter, tag: &str, attrs: &[(K, V)]) -> Result<()>
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut elem = BytesStart::new(tag);
    for (k, v) in attrs {
        elem.push_attribute((k.as_ref(), v.as_ref()));
    }
    writer.write_event(Event::Empty(elem))?;
    Ok(())
}

/// Write a script element with attributes and raw (unescaped) body.
///
/// The body must already be safe inside `<script>`; an empty body is
/// written as a single space so every parser sees a closing tag.
pub fn write_script<K, V>(writer: &mut XmlWriter, attrs: &[(K, V)], body: &str) -> Result<()>
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut elem = BytesStart::new("script");
    for (k, v) in attrs {
        elem.push_attribute((k.as_ref(), v.as_ref()));
    }
    writer.write_event(Event::Start(elem))?;
    let body = if body.is_empty() { " " } else { body };
    writer.write_event(Event::Text(BytesText::from_escaped(body)))?;
    writer.write_event(Event::End(BytesEnd::new("script")))?;
    Ok(())
}
