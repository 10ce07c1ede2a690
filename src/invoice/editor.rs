//! Line item editing.
//!
//! Every operation takes the current document and returns the next one; the
//! input is never mutated. Each one finishes with [`recompute_aggregates`] so
//! the cached totals always match the list they were built from.

use super::line_item::parse_number;
use super::{DocumentField, InvoiceData, LineItem, LineItemChange, LineItemId, Totals};

/// Append a fresh row (quantity 1, zero prices) at the end of the list
pub fn add_line_item(doc: &InvoiceData) -> InvoiceData {
    let mut next = doc.clone();
    next.line_items.push(LineItem::new());
    recompute_aggregates(&next)
}

/// Remove the row with `id`. The last remaining row is never removed, and an
/// unknown id leaves the list untouched.
pub fn remove_line_item(doc: &InvoiceData, id: &LineItemId) -> InvoiceData {
    if doc.line_items.len() <= 1 {
        return doc.clone();
    }
    let mut next = doc.clone();
    next.line_items.retain(|item| &item.id != id);
    recompute_aggregates(&next)
}

/// Apply `change` to the row with `id`; other rows are returned as they were
pub fn update_line_item(doc: &InvoiceData, id: &LineItemId, change: LineItemChange) -> InvoiceData {
    let mut next = doc.clone();
    next.line_items = doc
        .line_items
        .iter()
        .map(|item| {
            if &item.id == id {
                item.with_change(change.clone())
            } else {
                item.clone()
            }
        })
        .collect();
    recompute_aggregates(&next)
}

pub fn increment_quantity(doc: &InvoiceData, id: &LineItemId) -> InvoiceData {
    match doc.line_item(id) {
        Some(item) => update_line_item(doc, id, LineItemChange::Quantity(item.quantity + 1.0)),
        None => doc.clone(),
    }
}

/// Lower the quantity by one, never below 1
pub fn decrement_quantity(doc: &InvoiceData, id: &LineItemId) -> InvoiceData {
    match doc.line_item(id) {
        Some(item) if item.quantity > 1.0 => {
            let qty = (item.quantity - 1.0).max(1.0);
            update_line_item(doc, id, LineItemChange::Quantity(qty))
        }
        _ => doc.clone(),
    }
}

pub fn set_field(doc: &InvoiceData, field: DocumentField, value: &str) -> InvoiceData {
    let mut next = doc.clone();
    *field.slot(&mut next) = value.to_string();
    recompute_aggregates(&next)
}

/// Discount percent from free-form input: garbage reads as 0, and the value
/// is kept within 0..=100.
pub fn set_discount_percent(doc: &InvoiceData, raw: &str) -> InvoiceData {
    let mut next = doc.clone();
    next.discount_percent = coerce_percent(raw).clamp(0.0, 100.0);
    recompute_aggregates(&next)
}

pub fn set_tax_rate(doc: &InvoiceData, raw: &str) -> InvoiceData {
    let mut next = doc.clone();
    next.tax_rate = coerce_percent(raw).max(0.0);
    recompute_aggregates(&next)
}

// Percent input; garbage reads as 0
fn coerce_percent(raw: &str) -> f64 {
    parse_number(raw).unwrap_or(0.0)
}

/// Refresh the document-level totals from the current line items
pub fn recompute_aggregates(doc: &InvoiceData) -> InvoiceData {
    let mut next = doc.clone();
    next.totals = Totals::compute(&next.line_items, next.discount_percent, next.tax_rate);
    next
}
