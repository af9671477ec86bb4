use core::fmt;
use derive_more::From;
use rust_decimal::Decimal;

use crate::types::InvoiceId;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug,From)]
pub enum Error {
    /// no invoice record behind the identifier
    NotFound(InvoiceId),
    /// the data source failed while reading the header or the line items
    DataAccess {
        invoice: InvoiceId,
        source: SourceError,
    },
    /// only raised by the validation gate
    EmptyInvoice(InvoiceId),
    /// line totals disagree with the stored subtotal
    TotalsMismatch {
        invoice: InvoiceId,
        expected: Decimal,
        computed: Decimal,
    },
    /// a line total or their sum does not fit in a `Decimal`
    AmountOverflow(InvoiceId),
   #[from]
    RenderBackend(BackendError),
   #[from]
    Config(serde_json::Error),
   #[from]
    Io(std::io::Error),
}

impl Error {
    /// maps a failed read to the matching error kind
    pub(crate) fn from_source(invoice: InvoiceId, source: SourceError) -> Self {
        match source {
            SourceError::NotFound => Error::NotFound(invoice),
            source => Error::DataAccess { invoice, source },
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::DataAccess { source, .. } => Some(source),
            Error::RenderBackend(e) => Some(e),
            Error::Config(e) => Some(e),
            Error::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::NotFound(id) => write!(f, "invoice {id} not found"),
            Error::DataAccess { invoice, source } => write!(f, "failed to read invoice {invoice}: {source}"),
            Error::EmptyInvoice(id) => write!(f, "invoice {id} has no line items"),
            Error::TotalsMismatch { invoice, expected, computed } => write!(
                f,
                "invoice {invoice}: line items add up to {computed} but the stored subtotal is {expected}"
            ),
            Error::AmountOverflow(id) => write!(f, "invoice {id}: line item amounts are out of range"),
            Error::RenderBackend(e) => write!(f, "rendering backend failed: {e}"),
            Error::Config(e) => write!(f, "invalid settings: {e}"),
            Error::Io(e) => write!(f, "{e}"),
        }
    }
}

/// Failure reported by an `InvoiceSource`.
#[derive(Debug)]
pub enum SourceError {
    NotFound,
    Access(Box<dyn std::error::Error + Send + Sync>),
}

impl SourceError {
    pub fn access(cause: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        SourceError::Access(cause.into())
    }
}

impl std::error::Error for SourceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SourceError::NotFound => None,
            SourceError::Access(cause) => Some(cause.as_ref()),
        }
    }
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SourceError::NotFound => write!(f, "record not found"),
            SourceError::Access(cause) => write!(f, "{cause}"),
        }
    }
}

/// Failure raised by a `Canvas` while serializing.
#[derive(Debug,Clone,PartialEq)]
pub enum BackendError {
    /// content was placed below the bottom margin, in millimetres from the top edge
    PageOverflow { bottom: f32, limit: f32 },
    /// `finish` was already called on this canvas
    AlreadyFinished,
    Rejected(String),
}

impl std::error::Error for BackendError {}

impl fmt::Display for BackendError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            BackendError::PageOverflow { bottom, limit } => {
                write!(f, "content reaches {bottom:.1}mm, past the page limit of {limit:.1}mm")
            },
            BackendError::AlreadyFinished => write!(f, "canvas already serialized"),
            BackendError::Rejected(reason) => write!(f, "{reason}"),
        }
    }
}
