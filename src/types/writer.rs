use pdf_writer::{ Content, Finish, Name, Pdf, Rect, Ref, Str, TextStr };

use crate::{
    traits::{ Canvas, FontType },
    types::{
        BackendError,
        Cell,
        Font,
        FontReference,
        Style,
        TextAlignment,
        MM_PER_PT,
}};

/// gap between a cell edge and left or right aligned text, in millimetres
const CELL_PADDING: f32 = 1.0;
/// grey level of filled cells
const FILL_GRAY: f32 = 0.9;
/// stroke width of cell borders, in millimetres
const LINE_WIDTH: f32 = 0.2;

/// the PDF rendering engine: A4 pages with a cursor measured in millimetres from the top-left
/// corner of the current page
/// contains
/// - ref allocator
/// - the four Helvetica faces
/// - the finished pages and the content stream of the current one
/// - default page settings
pub struct Writer<'a> {
    pub x: f32,
    pub y: f32,
    pub alloc: Ref,
    pub font: Font,
    pub font_refs: Vec<FontReference<'a>>,
    pub style: Style,
    pub font_size: f32,
    pub page_height: f32,
    pub page_width: f32,
    pub page_margin: f32,
    pub title: Option<String>,
    pages: Vec<Content>,
    content: Option<Content>,
    // deepest point drawn on any page, only passes the bottom margin for a cell taller than a page
    lowest: f32,
}

/// Puts the write head at the top-left margin and registers Helvetica, Helvetica-Bold,
/// Helvetica-Oblique and Helvetica-BoldOblique
impl Default for Writer<'_> {
    fn default() -> Self {
        let mut alloc = Ref::new(1);
        let page_height: f32 = 297.0;
        let page_width: f32 = 210.0;
        let page_margin: f32 = 10.0;

        let faces: [(Style, &[u8], &[u8]); 4] = [
            (Style::Normal, b"F1", b"Helvetica"),
            (Style::Bold, b"F2", b"Helvetica-Bold"),
            (Style::Italic, b"F3", b"Helvetica-Oblique"),
            (Style::BoldItalic, b"F4", b"Helvetica-BoldOblique"),
        ];

        let font_refs = faces
            .into_iter()
            .map(|(style, label, name)| FontReference {
                id: alloc.bump(),
                label: Name(label),
                name: Name(name),
                style,
            })
            .collect();

        Writer {
            x: page_margin,
            y: page_margin,
            alloc,
            font: Font::new(),
            font_refs,
            style: Style::Normal,
            font_size: 10.0,
            page_height,
            page_width,
            page_margin,
            title: None,
            pages: Vec::new(),
            content: Some(blank_page()),
            lowest: page_margin,
        }
    }
}

impl Writer<'_> {
    pub fn new() -> Self {
        Writer::default()
    }

    /// builder function setting the document title stored in the info dictionary
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// get a new reference for indirect object
    pub fn bump(&mut self) -> Ref {
        self.alloc.bump()
    }

    /// scrolls the writer down the page and back to the left margin
    pub fn feed(&mut self, num: f32) {
        self.x = self.page_margin;
        self.y += num;
    }

    /// moves the writer to a new position
    pub fn go_to(&mut self, num_x: f32, num_y: f32) {
        self.x = num_x;
        self.y = num_y;
    }

    /// number of pages started so far, the current one included
    pub fn page_count(&self) -> usize {
        self.pages.len() + 1
    }

    /// closes the current page and continues at the top margin of a new one, keeping the
    /// horizontal position so a row split by the break stays in its columns
    pub fn build_new_page(&mut self) {
        if let Some(content) = self.content.as_mut() {
            self.pages.push(std::mem::replace(content, blank_page()));
        }
        self.go_to(self.x, self.page_margin);
    }

    /// does the heavy lifting of drawing a `Cell` at the write head
    pub fn write(&mut self, cell: Cell) {
        // fonts must exist by now
        debug_assert!(!self.font_refs.is_empty());

        let width = if cell.width > 0.0 {
            cell.width
        } else {
            self.page_width - self.page_margin - self.x
        };

        // a cell that would cross the bottom margin goes to the next page, unless the page is
        // still empty at that height
        if self.y + cell.height > self.page_height - self.page_margin && self.y > self.page_margin {
            self.build_new_page();
        }

        let (left, top, height) = (self.x, self.y, cell.height);
        let bottom = self.page_height - (top + height);

        let font_label = self
            .font_refs
            .iter()
            .find(|font| font.style == self.style)
            .map(|font| font.label);
        let text_width = self.font.text_width(&cell.text, &self.style, self.font_size);
        let offset = match cell.alignment {
            TextAlignment::Left => CELL_PADDING,
            TextAlignment::Center => (width - text_width) / 2.0,
            TextAlignment::Right => width - text_width - CELL_PADDING,
        };
        let baseline = top + height / 2.0 + 0.3 * self.font_size * MM_PER_PT;

        if let Some(target) = self.content.as_mut() {
            if cell.fill {
                target.set_fill_gray(FILL_GRAY);
                target.rect(to_points(left), to_points(bottom), to_points(width), to_points(height));
                target.fill_nonzero();
                target.set_fill_gray(0.0);
            }

            if !cell.border.is_empty() {
                let (x0, x1) = (to_points(left), to_points(left + width));
                let (y0, y1) = (to_points(bottom), to_points(bottom + height));

                if cell.border.left {
                    target.move_to(x0, y0);
                    target.line_to(x0, y1);
                }
                if cell.border.top {
                    target.move_to(x0, y1);
                    target.line_to(x1, y1);
                }
                if cell.border.right {
                    target.move_to(x1, y1);
                    target.line_to(x1, y0);
                }
                if cell.border.bottom {
                    target.move_to(x0, y0);
                    target.line_to(x1, y0);
                }

                target.stroke();
            }

            if let (false, Some(label)) = (cell.text.is_empty(), font_label) {
                target.begin_text();
                target.set_font(label, self.font_size);
                target.next_line(to_points(left + offset), to_points(self.page_height - baseline));
                target.show(Str(&encode(&cell.text)));
                target.end_text();
            }
        }

        self.lowest = self.lowest.max(top + height);

        if cell.ln {
            self.x = self.page_margin;
            self.y += height;
        } else {
            self.x += width;
        }
    }

    /// assembles the catalog, page tree, fonts and every page's content stream into the final PDF
    fn serialize(&mut self) -> Result<Vec<u8>, BackendError> {
        let last = self.content.take().ok_or(BackendError::AlreadyFinished)?;
        let limit = self.page_height - self.page_margin;

        if self.lowest > limit {
            return Err(BackendError::PageOverflow { bottom: self.lowest, limit });
        }

        let mut contents = std::mem::take(&mut self.pages);
        contents.push(last);

        let mut pdf = Pdf::new();
        let catalog_id = self.bump();
        let page_tree_id = self.bump();
        let info_id = self.bump();
        let page_ids: Vec<(Ref, Ref)> = contents
            .iter()
            .map(|_| (self.alloc.bump(), self.alloc.bump()))
            .collect();

        pdf.catalog(catalog_id).pages(page_tree_id);
        pdf.pages(page_tree_id)
            .kids(page_ids.iter().map(|(page_id, _)| *page_id))
            .count(page_ids.len() as i32);

        for (content, (page_id, content_id)) in contents.into_iter().zip(page_ids) {
            {
                let mut pdf_page = pdf.page(page_id);

                pdf_page.media_box(Rect::new(0.0, 0.0, to_points(self.page_width), to_points(self.page_height)));
                pdf_page.parent(page_tree_id);
                pdf_page.contents(content_id);

                {
                    let mut obj = pdf_page.resources();
                    let mut fonts = obj.fonts();

                    for ref_obj in self.font_refs.iter() {
                        fonts.pair(ref_obj.label, ref_obj.id);
                    }
                }

                pdf_page.finish();
            }

            pdf.stream(content_id, &content.finish());
        }

        for ref_obj in self.font_refs.iter() {
            pdf.type1_font(ref_obj.id)
                .base_font(ref_obj.name)
                .encoding_predefined(Name(b"WinAnsiEncoding"));
        }

        {
            let mut info = pdf.document_info(info_id);
            info.producer(TextStr(env!("CARGO_PKG_NAME")));

            if let Some(title) = self.title.as_deref() {
                info.title(TextStr(title));
            }
        }

        Ok(pdf.finish())
    }
}

impl Canvas for Writer<'_> {
    fn set_font(&mut self, style: Style, size: f32) {
        self.style = style;
        self.font_size = size;
    }

    fn cell(&mut self, cell: Cell) {
        self.write(cell);
    }

    fn feed(&mut self, height: f32) {
        Writer::feed(self, height);
    }

    fn finish(&mut self) -> Result<Vec<u8>, BackendError> {
        self.serialize()
    }
}

fn blank_page() -> Content {
    let mut content = Content::new();
    content.set_line_width(to_points(LINE_WIDTH));
    content
}

fn to_points(mm: f32) -> f32 {
    mm / MM_PER_PT
}

/// WinAnsiEncoding matches Latin-1 outside 0x80..=0x9F; anything it can't show becomes `?`
fn encode(text: &str) -> Vec<u8> {
    text.chars()
        .map(|ch| match ch as u32 {
            0x20..=0x7E | 0xA0..=0xFF => ch as u32 as u8,
            0x20AC => 0x80,
            _ => b'?',
        })
        .collect()
}
