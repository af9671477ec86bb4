mod cell;
mod error;
mod font;
mod font_reference;
mod font_style;
mod invoice;
mod memory_source;
mod recorder;
mod renderer;
mod settings;
mod writer;

pub mod format;
pub mod totals;
pub mod validator;

pub use cell::{ Border, Cell, TextAlignment };
pub use error::{ BackendError, Error, Result, SourceError };
pub use font::{ Font, MM_PER_PT };
pub use font_reference::FontReference;
pub use font_style::Style;
pub use invoice::{ InvoiceHeader, InvoiceId, LineItem, RenderedDocument };
pub use memory_source::MemorySource;
pub use recorder::{ Instruction, RecordedCell, RecordingCanvas };
pub use renderer::Renderer;
pub use settings::{ Issuer, Settings };
pub use totals::reconcile;
pub use validator::validate;
pub use writer::Writer;
