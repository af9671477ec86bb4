mod canvas;
mod clock;
mod font_type;
mod source;

pub use canvas::Canvas;
pub use clock::{Clock, FixedClock, SystemClock};
pub use font_type::FontType;
pub use source::InvoiceSource;
