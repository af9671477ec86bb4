use crate::{
    traits::Canvas,
    types::{ BackendError, Cell, Style },
};

/// A cell together with the font that was active when it was placed.
#[derive(Debug,Clone,PartialEq)]
pub struct RecordedCell {
    pub cell: Cell,
    pub style: Style,
    pub font_size: f32,
}

/// one recorded drawing instruction
#[derive(Debug,Clone,PartialEq)]
pub enum Instruction {
    Font { style: Style, size: f32 },
    Cell(RecordedCell),
    Feed(f32),
}

/// In-memory canvas that keeps every instruction instead of drawing it.
///
/// `finish` produces a plain-text transcript: one line per layout row, the non-empty cells of
/// that row joined by `" | "`.
#[derive(Debug,Default)]
pub struct RecordingCanvas {
    pub instructions: Vec<Instruction>,
    style: Style,
    font_size: f32,
    fail_with: Option<String>,
    finished: bool,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        RecordingCanvas {
            font_size: 10.0,
            ..RecordingCanvas::default()
        }
    }

    /// a canvas whose `finish` always fails with `BackendError::Rejected`
    pub fn failing(reason: impl Into<String>) -> Self {
        RecordingCanvas {
            fail_with: Some(reason.into()),
            ..RecordingCanvas::new()
        }
    }

    /// every placed cell, in drawing order
    pub fn cells(&self) -> impl Iterator<Item = &RecordedCell> {
        self.instructions.iter().filter_map(|instruction| match instruction {
            Instruction::Cell(cell) => Some(cell),
            _ => None,
        })
    }

    /// the first cell whose text is exactly `text`
    pub fn find(&self, text: &str) -> Option<&RecordedCell> {
        self.cells().find(|recorded| recorded.cell.text == text)
    }

    /// rows of non-empty cell texts, split wherever a cell ends its line or the cursor is fed
    pub fn rows(&self) -> Vec<Vec<String>> {
        let mut rows = Vec::new();
        let mut current: Vec<String> = Vec::new();

        for instruction in &self.instructions {
            match instruction {
                Instruction::Cell(recorded) => {
                    if !recorded.cell.text.is_empty() {
                        current.push(recorded.cell.text.clone());
                    }
                    if recorded.cell.ln && !current.is_empty() {
                        rows.push(std::mem::take(&mut current));
                    }
                },
                Instruction::Feed(_) => {
                    if !current.is_empty() {
                        rows.push(std::mem::take(&mut current));
                    }
                },
                Instruction::Font { .. } => {},
            }
        }

        if !current.is_empty() {
            rows.push(current);
        }

        rows
    }

    pub fn transcript(&self) -> String {
        self.rows()
            .iter()
            .map(|row| row.join(" | "))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Canvas for RecordingCanvas {
    fn set_font(&mut self, style: Style, size: f32) {
        self.style = style;
        self.font_size = size;
        self.instructions.push(Instruction::Font { style, size });
    }

    fn cell(&mut self, cell: Cell) {
        self.instructions.push(Instruction::Cell(RecordedCell {
            cell,
            style: self.style,
            font_size: self.font_size,
        }));
    }

    fn feed(&mut self, height: f32) {
        self.instructions.push(Instruction::Feed(height));
    }

    fn finish(&mut self) -> Result<Vec<u8>, BackendError> {
        if self.finished {
            return Err(BackendError::AlreadyFinished);
        }
        if let Some(reason) = &self.fail_with {
            return Err(BackendError::Rejected(reason.clone()));
        }

        self.finished = true;
        Ok(self.transcript().into_bytes())
    }
}
