use crate::types::Style;

/// Glyph metrics for one of the standard PDF font families. Widths are given in the usual
/// 1/1000 em units of the AFM files and converted to millimetres by `standardize`, which is
/// what the cell layout works in.
pub trait FontType {
    fn new() -> Self;
    fn normal(&self, ch: &char, font_size: f32) -> f32;
    fn bold(&self, ch: &char, font_size: f32) -> f32;
    fn italic(&self, ch: &char, font_size: f32) -> f32;
    fn bold_italic(&self, ch: &char, font_size: f32) -> f32;
    fn standardize(width: f32, font_size: f32) -> f32;

    fn char_width(&self, ch: &char, font_style: &Style, font_size: f32) -> f32 {
        match *font_style {
            Style::Normal => self.normal(ch, font_size),
            Style::Bold => self.bold(ch, font_size),
            Style::Italic => self.italic(ch, font_size),
            Style::BoldItalic => self.bold_italic(ch, font_size),
        }
    }

    /// width of a whole run of text, in millimetres
    fn text_width(&self, text: &str, font_style: &Style, font_size: f32) -> f32 {
        text.chars()
            .map(|ch| self.char_width(&ch, font_style, font_size))
            .sum()
    }
}
