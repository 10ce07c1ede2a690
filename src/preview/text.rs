use tabled::{
    settings::{object::Columns, Alignment, Style},
    Table, Tabled,
};

use super::{format_money, Preview};
use crate::invoice::InvoiceData;

// Table row structs for tabled
#[derive(Tabled)]
struct PreviewLine {
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Type")]
    kind: &'static str,
    #[tabled(rename = "Qty")]
    quantity: String,
    #[tabled(rename = "Rate")]
    rate: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

#[derive(Tabled)]
struct EditorLine {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "DESCRIPTION")]
    description: String,
    #[tabled(rename = "TYPE")]
    kind: &'static str,
    #[tabled(rename = "QTY")]
    quantity: String,
    #[tabled(rename = "BUYING")]
    buying: String,
    #[tabled(rename = "SELLING")]
    selling: String,
    #[tabled(rename = "PROFIT")]
    profit: String,
    #[tabled(rename = "AMOUNT")]
    amount: String,
}

fn kind_label(is_service: bool) -> &'static str {
    if is_service {
        "Service"
    } else {
        "Product"
    }
}

/// Render the printable invoice document
pub fn render_text(doc: &InvoiceData, currency_symbol: &str) -> String {
    let preview = Preview::from_document(doc);
    let mut out = String::new();

    out.push_str("INVOICE\n");
    out.push_str(&format!("Invoice #: {}\n", preview.invoice_number));
    out.push_str(&format!("Date: {}\n", preview.invoice_date));
    out.push_str(&format!("Due Date: {}\n", preview.due_date));
    if let Some(reference) = &preview.reference {
        out.push_str(&format!("Ref: {reference}\n"));
    }

    out.push_str("\nFROM\n");
    for line in &preview.from {
        out.push_str(&format!("{line}\n"));
    }
    out.push_str("\nBILL TO\n");
    for line in &preview.bill_to {
        out.push_str(&format!("{line}\n"));
    }
    out.push('\n');

    let rows: Vec<PreviewLine> = preview
        .rows
        .iter()
        .map(|row| PreviewLine {
            description: if row.description.is_empty() {
                "—".to_string()
            } else {
                row.description.clone()
            },
            kind: kind_label(row.is_service),
            quantity: row.quantity.to_string(),
            rate: format_money(row.rate, currency_symbol),
            amount: format_money(row.amount, currency_symbol),
        })
        .collect();

    let table = Table::new(rows)
        .with(Style::rounded())
        .modify(Columns::new(2..), Alignment::right())
        .to_string();
    out.push_str(&table);
    out.push_str("\n\n");

    let totals = &preview.totals;
    let mut summary = vec![(
        "Subtotal:".to_string(),
        format_money(totals.subtotal, currency_symbol),
    )];
    if preview.shows_discount() {
        summary.push((
            format!("Discount ({}%):", preview.discount_percent),
            format!("-{}", format_money(totals.discount, currency_symbol)),
        ));
    }
    if preview.shows_tax() {
        summary.push((
            format!("Tax ({}%):", preview.tax_rate),
            format_money(totals.tax, currency_symbol),
        ));
    }
    summary.push(("Total:".to_string(), format_money(totals.total, currency_symbol)));
    if preview.shows_profit() {
        summary.push((
            "Total Profit:".to_string(),
            format_money(totals.total_profit, currency_symbol),
        ));
    }

    let label_width = summary.iter().map(|(l, _)| l.chars().count()).max().unwrap_or(0);
    let value_width = summary.iter().map(|(_, v)| v.chars().count()).max().unwrap_or(0);
    for (label, value) in &summary {
        out.push_str(&format!(
            "{label:>label_width$} {value:>value_width$}\n"
        ));
    }

    if let Some(notes) = &preview.notes {
        out.push_str("\nNOTES\n");
        out.push_str(notes);
        out.push('\n');
    }

    out
}

/// Editor view of the rows, with ids and cost columns the printout leaves out
pub fn render_items_table(doc: &InvoiceData, currency_symbol: &str) -> String {
    let rows: Vec<EditorLine> = doc
        .line_items
        .iter()
        .enumerate()
        .map(|(idx, item)| EditorLine {
            index: idx + 1,
            id: item.id.short(),
            description: item.description.clone(),
            kind: kind_label(item.is_service),
            quantity: item.quantity.to_string(),
            buying: format_money(item.buying_price, currency_symbol),
            selling: format_money(item.selling_price, currency_symbol),
            profit: format_money(item.profit, currency_symbol),
            amount: format_money(item.amount, currency_symbol),
        })
        .collect();

    Table::new(rows)
        .with(Style::rounded())
        .modify(Columns::new(4..), Alignment::right())
        .to_string()
}
