use crate::traits::FontType;

/// millimetres per PostScript point
pub const MM_PER_PT: f32 = 25.4 / 72.0;

/// AFM advance widths for printable ASCII (0x20..=0x7E), Helvetica and Helvetica-Oblique
const HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    278, 278, 584, 584, 584, 556, 1015,
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833,
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    278, 278, 278, 469, 556, 333,
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833,
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500,
    334, 260, 334, 584,
];

/// AFM advance widths for printable ASCII (0x20..=0x7E), Helvetica-Bold and Helvetica-BoldOblique
const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    333, 333, 584, 584, 584, 611, 975,
    722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833,
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    333, 278, 333, 584, 556, 333,
    556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889,
    611, 611, 611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500,
    389, 280, 389, 584,
];

const DEFAULT_WIDTH: u16 = 556;

/// Metrics of the Helvetica family, the only family the PDF backend embeds.
#[derive(Debug, Clone, Copy, Default)]
pub struct Font;

impl Font {
    /// accented Latin-1 letters share the advance width of their base letter
    fn base_letter(ch: char) -> char {
        match ch {
            'á' | 'à' | 'â' | 'ä' => 'a',
            'é' | 'è' | 'ê' | 'ë' => 'e',
            'í' | 'ì' | 'î' | 'ï' => 'i',
            'ó' | 'ò' | 'ô' | 'ö' => 'o',
            'ú' | 'ù' | 'û' | 'ü' => 'u',
            'ñ' => 'n',
            'Á' | 'À' | 'Â' | 'Ä' => 'A',
            'É' | 'È' | 'Ê' | 'Ë' => 'E',
            'Í' | 'Ì' | 'Î' | 'Ï' => 'I',
            'Ó' | 'Ò' | 'Ô' | 'Ö' => 'O',
            'Ú' | 'Ù' | 'Û' | 'Ü' => 'U',
            'Ñ' => 'N',
            '¿' => '?',
            '¡' => '!',
            _ => ch,
        }
    }

    fn lookup(table: &[u16; 95], ch: char) -> f32 {
        let ch = Font::base_letter(ch);
        let width = match ch as u32 {
            code @ 0x20..=0x7E => table[(code - 0x20) as usize],
            _ => DEFAULT_WIDTH,
        };

        f32::from(width)
    }
}

impl FontType for Font {
    fn new() -> Self {
        Font
    }

    fn normal(&self, ch: &char, font_size: f32) -> f32 {
        Font::standardize(Font::lookup(&HELVETICA, *ch), font_size)
    }

    fn bold(&self, ch: &char, font_size: f32) -> f32 {
        Font::standardize(Font::lookup(&HELVETICA_BOLD, *ch), font_size)
    }

    fn italic(&self, ch: &char, font_size: f32) -> f32 {
        self.normal(ch, font_size)
    }

    fn bold_italic(&self, ch: &char, font_size: f32) -> f32 {
        self.bold(ch, font_size)
    }

    fn standardize(width: f32, font_size: f32) -> f32 {
        width * font_size / 1000.0 * MM_PER_PT
    }
}
