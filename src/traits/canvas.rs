use crate::types::{BackendError, Cell, Style};

/// The narrow set of drawing primitives the invoice layout needs from a rendering backend.
///
/// A canvas owns a cursor that starts at the top-left margin. Every call mutates that cursor,
/// so a canvas instance belongs to exactly one render call.
pub trait Canvas {
    /// sets the active font for every following cell
    fn set_font(&mut self, style: Style, size: f32);

    /// places a cell at the cursor and advances it, either to the right of the cell or, when
    /// `cell.ln` is set, to the start of the next line
    fn cell(&mut self, cell: Cell);

    /// moves the cursor down by `height` and back to the left margin
    fn feed(&mut self, height: f32);

    /// serializes everything drawn so far into the final document bytes
    fn finish(&mut self) -> Result<Vec<u8>, BackendError>;
}
