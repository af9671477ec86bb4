use rust_decimal::Decimal;

use crate::types::{ Error, InvoiceHeader, LineItem, Result };

/// sum of `quantity × unit price − discount` over all items, `None` once it leaves the
/// `Decimal` range
pub fn line_items_total(items: &[LineItem]) -> Option<Decimal> {
    items
        .iter()
        .try_fold(Decimal::ZERO, |sum, item| sum.checked_add(item.line_total()?))
}

/// Compares the line items against the header's stored subtotal and returns their sum.
///
/// Fails with `Error::TotalsMismatch` when the two differ by more than `tolerance`.
pub fn reconcile(header: &InvoiceHeader, items: &[LineItem], tolerance: Decimal) -> Result<Decimal> {
    let computed = line_items_total(items).ok_or(Error::AmountOverflow(header.id))?;
    check_running_total(header, computed, tolerance)?;
    Ok(computed)
}

pub(crate) fn check_running_total(header: &InvoiceHeader, computed: Decimal, tolerance: Decimal) -> Result<()> {
    if (computed - header.subtotal).abs() > tolerance {
        return Err(Error::TotalsMismatch {
            invoice: header.id,
            expected: header.subtotal,
            computed,
        });
    }

    Ok(())
}
