//! HTML writing helpers on top of `quick_xml`.

mod common;

pub use common::{
    XmlWriter, create_xml_writer, into_string, write_elem, write_empty_elem, write_end, write_icon,
    write_script, write_start, write_text, write_text_element,
};
