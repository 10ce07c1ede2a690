mod print;
mod text;

pub use print::print_document;
pub use text::{render_items_table, render_text};

use chrono::NaiveDate;

use crate::invoice::{InvoiceData, Totals, DATE_FORMAT};

/// One line of the printed item table
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewRow {
    pub description: String,
    pub is_service: bool,
    pub quantity: f64,
    pub rate: f64,
    pub amount: f64,
}

/// Read-only projection of an invoice, ready for display.
///
/// Totals are always recomputed from the line items; the document's cached
/// totals are ignored.
#[derive(Debug, Clone, PartialEq)]
pub struct Preview {
    pub invoice_number: String,
    pub invoice_date: String,
    pub due_date: String,
    pub reference: Option<String>,
    pub from: Vec<String>,
    pub bill_to: Vec<String>,
    pub rows: Vec<PreviewRow>,
    pub discount_percent: f64,
    pub tax_rate: f64,
    pub totals: Totals,
    pub notes: Option<String>,
}

impl Preview {
    pub fn from_document(doc: &InvoiceData) -> Self {
        let rows = doc
            .line_items
            .iter()
            .map(|item| PreviewRow {
                description: item.description.clone(),
                is_service: item.is_service,
                quantity: item.quantity,
                rate: item.selling_price,
                amount: item.amount,
            })
            .collect();

        Self {
            invoice_number: doc.invoice_number.clone(),
            invoice_date: format_display_date(&doc.invoice_date),
            due_date: format_display_date(&doc.due_date),
            reference: non_empty(&doc.previous_product),
            from: party_lines(&[
                doc.company_name.as_str(),
                doc.company_address.as_str(),
                doc.company_phone.as_str(),
                doc.company_email.as_str(),
            ]),
            bill_to: party_lines(&[
                doc.client_name.as_str(),
                doc.client_address.as_str(),
                doc.client_phone.as_str(),
                doc.client_email.as_str(),
            ]),
            rows,
            discount_percent: doc.discount_percent,
            tax_rate: doc.tax_rate,
            totals: Totals::compute(&doc.line_items, doc.discount_percent, doc.tax_rate),
            notes: non_empty(&doc.notes),
        }
    }

    pub fn shows_discount(&self) -> bool {
        self.discount_percent > 0.0
    }

    pub fn shows_tax(&self) -> bool {
        self.tax_rate > 0.0
    }

    pub fn shows_profit(&self) -> bool {
        self.totals.total_profit != 0.0
    }
}

/// Long-form date such as "October 19, 2026". Empty or unreadable input
/// renders as an empty string.
pub fn format_display_date(value: &str) -> String {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
        .map(|date| date.format("%B %-d, %Y").to_string())
        .unwrap_or_default()
}

pub fn format_money(value: f64, currency_symbol: &str) -> String {
    format!("{currency_symbol}{value:.2}")
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

// Multi-line addresses keep their line breaks; blank parts are dropped.
fn party_lines(parts: &[&str]) -> Vec<String> {
    parts
        .iter()
        .flat_map(|part| part.lines())
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
