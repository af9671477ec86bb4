use crate::{
    traits::InvoiceSource,
    types::{ Error, InvoiceId, Result },
};

/// Checks that an invoice can be rendered: it exists and has at least one line item.
///
/// Purely advisory. The renderer does not call it and happily prints an invoice without items.
pub fn validate<S: InvoiceSource + ?Sized>(source: &S, id: InvoiceId) -> Result<()> {
    let outcome = check(source, id);

    match &outcome {
        Ok(()) => tracing::debug!(invoice = %id, "invoice is renderable"),
        Err(e) => tracing::warn!(invoice = %id, error = %e, "invoice failed validation"),
    }

    outcome
}

fn check<S: InvoiceSource + ?Sized>(source: &S, id: InvoiceId) -> Result<()> {
    source
        .fetch_invoice(&id)
        .map_err(|e| Error::from_source(id, e))?;

    let items = source
        .fetch_line_items(&id)
        .map_err(|source| Error::DataAccess { invoice: id, source })?;

    if items.is_empty() {
        return Err(Error::EmptyInvoice(id));
    }

    Ok(())
}
