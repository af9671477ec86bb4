
/// horizontal placement of text inside its cell
#[derive(Debug,Clone,Copy,PartialEq,Eq,Default)]
pub enum TextAlignment {
   #[default]
    Left,
    Center,
    Right,
}

/// which sides of a cell get a stroked edge
#[derive(Debug,Clone,Copy,PartialEq,Eq,Default)]
pub struct Border {
    pub left: bool,
    pub top: bool,
    pub right: bool,
    pub bottom: bool,
}

impl Border {
    pub const NONE: Border = Border { left: false, top: false, right: false, bottom: false };
    pub const ALL: Border = Border { left: true, top: true, right: true, bottom: true };
    /// open bottom, first row of a stacked box
    pub const TOP: Border = Border { left: true, top: true, right: true, bottom: false };
    /// sides only, middle rows of a stacked box
    pub const SIDES: Border = Border { left: true, top: false, right: true, bottom: false };
    /// open top, last row of a stacked box
    pub const BOTTOM: Border = Border { left: true, top: false, right: true, bottom: true };

    pub fn is_empty(&self) -> bool {
        !(self.left || self.top || self.right || self.bottom)
    }
}

/// A single positioned text box, the unit every layout instruction is made of.
/// ```
/// use factura::types::{Border, Cell, TextAlignment};
///
/// let cell = Cell::new(25.0, 6.0, "$50.00")
///     .with_border(Border::ALL)
///     .and_alignment(TextAlignment::Right)
///     .and_break();
///
/// assert!(cell.ln);
/// ```
#[derive(Debug,Clone,PartialEq)]
pub struct Cell {
    /// millimetres; `0.0` stretches the cell to the right margin
    pub width: f32,
    pub height: f32,
    pub text: String,
    pub border: Border,
    pub alignment: TextAlignment,
    /// light grey background
    pub fill: bool,
    /// move the cursor to the next line after this cell
    pub ln: bool,
}

impl Cell {
    /// unbordered, left aligned, cursor stays on the line
    pub fn new(width: f32, height: f32, text: impl Into<String>) -> Self {
        Cell {
            width,
            height,
            text: text.into(),
            border: Border::NONE,
            alignment: TextAlignment::Left,
            fill: false,
            ln: false,
        }
    }

    /// builder function setting the stroked sides
    pub fn with_border(mut self, border: Border) -> Self {
        self.border = border;
        self
    }

    /// builder function setting text alignment
    pub fn and_alignment(mut self, alignment: TextAlignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// builder function enabling the background fill
    pub fn and_fill(mut self) -> Self {
        self.fill = true;
        self
    }

    /// builder function ending the line after this cell
    pub fn and_break(mut self) -> Self {
        self.ln = true;
        self
    }
}
