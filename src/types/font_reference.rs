use pdf_writer::{ Name, Ref };

use crate::types::Style;

/// one embedded standard font: its object id, the resource name used in content streams and
/// the PostScript base font name
#[derive(Debug)]
pub struct FontReference<'a> {
    pub id: Ref,
    pub label: Name<'a>,
    pub name: Name<'a>,
    pub style: Style,
}
