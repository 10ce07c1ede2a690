mod document;
pub mod editor;
mod line_item;
mod totals;

pub use document::{DocumentField, InvoiceData, DATE_FORMAT};
pub use line_item::{
    coerce_money, coerce_quantity, parse_number, LineItem, LineItemChange, LineItemField,
    LineItemId,
};
pub use totals::Totals;
