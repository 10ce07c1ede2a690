use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::{LineItem, Totals};
use crate::config::Config;
use crate::error::EditorError;

/// Storage format for the calendar-date fields
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// The whole invoice being edited
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceData {
    pub invoice_number: String,
    pub invoice_date: String,
    pub due_date: String,
    pub previous_product: String,

    pub company_name: String,
    pub company_address: String,
    pub company_phone: String,
    pub company_email: String,

    pub client_name: String,
    pub client_address: String,
    pub client_phone: String,
    pub client_email: String,

    /// Display order is entry order. Never empty.
    pub line_items: Vec<LineItem>,
    pub discount_percent: f64,
    pub tax_rate: f64,
    pub notes: String,

    /// Cached roll-up of `line_items`, refreshed after every edit
    pub totals: Totals,
}

impl InvoiceData {
    /// Starting document for a new editing session
    pub fn seed(config: &Config, now: DateTime<Local>) -> Self {
        let settings = &config.invoice;
        let today = now.date_naive();
        let due = today
            .checked_add_signed(chrono::Duration::days(i64::from(settings.due_days)))
            .unwrap_or(today);

        let line_items = vec![LineItem::new()];
        let discount_percent = settings.discount_percent.clamp(0.0, 100.0);
        let tax_rate = settings.tax_rate.max(0.0);
        let totals = Totals::compute(&line_items, discount_percent, tax_rate);

        Self {
            invoice_number: format!(
                "{}{:06}",
                settings.number_prefix,
                now.timestamp_millis().rem_euclid(1_000_000)
            ),
            invoice_date: today.format(DATE_FORMAT).to_string(),
            due_date: due.format(DATE_FORMAT).to_string(),
            previous_product: String::new(),
            company_name: config.company.name.clone(),
            company_address: config.company.address.clone(),
            company_phone: config.company.phone.clone(),
            company_email: config.company.email.clone(),
            client_name: String::new(),
            client_address: String::new(),
            client_phone: String::new(),
            client_email: String::new(),
            line_items,
            discount_percent,
            tax_rate,
            notes: String::new(),
            totals,
        }
    }

    pub fn line_item(&self, id: &super::LineItemId) -> Option<&LineItem> {
        self.line_items.iter().find(|item| &item.id == id)
    }
}

/// Free-text document fields editable from the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentField {
    InvoiceNumber,
    InvoiceDate,
    DueDate,
    PreviousProduct,
    CompanyName,
    CompanyAddress,
    CompanyPhone,
    CompanyEmail,
    ClientName,
    ClientAddress,
    ClientPhone,
    ClientEmail,
    Notes,
}

impl DocumentField {
    pub const ALL: [DocumentField; 13] = [
        Self::InvoiceNumber,
        Self::InvoiceDate,
        Self::DueDate,
        Self::PreviousProduct,
        Self::CompanyName,
        Self::CompanyAddress,
        Self::CompanyPhone,
        Self::CompanyEmail,
        Self::ClientName,
        Self::ClientAddress,
        Self::ClientPhone,
        Self::ClientEmail,
        Self::Notes,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::InvoiceNumber => "number",
            Self::InvoiceDate => "date",
            Self::DueDate => "due",
            Self::PreviousProduct => "ref",
            Self::CompanyName => "company-name",
            Self::CompanyAddress => "company-address",
            Self::CompanyPhone => "company-phone",
            Self::CompanyEmail => "company-email",
            Self::ClientName => "client-name",
            Self::ClientAddress => "client-address",
            Self::ClientPhone => "client-phone",
            Self::ClientEmail => "client-email",
            Self::Notes => "notes",
        }
    }

    pub fn slot(self, doc: &mut InvoiceData) -> &mut String {
        match self {
            Self::InvoiceNumber => &mut doc.invoice_number,
            Self::InvoiceDate => &mut doc.invoice_date,
            Self::DueDate => &mut doc.due_date,
            Self::PreviousProduct => &mut doc.previous_product,
            Self::CompanyName => &mut doc.company_name,
            Self::CompanyAddress => &mut doc.company_address,
            Self::CompanyPhone => &mut doc.company_phone,
            Self::CompanyEmail => &mut doc.company_email,
            Self::ClientName => &mut doc.client_name,
            Self::ClientAddress => &mut doc.client_address,
            Self::ClientPhone => &mut doc.client_phone,
            Self::ClientEmail => &mut doc.client_email,
            Self::Notes => &mut doc.notes,
        }
    }
}

impl FromStr for DocumentField {
    type Err = EditorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.to_ascii_lowercase();
        let alias = match wanted.as_str() {
            "invoice-number" => "number",
            "invoice-date" => "date",
            "due-date" => "due",
            "reference" | "previous-product" => "ref",
            other => other,
        };
        Self::ALL
            .into_iter()
            .find(|field| field.name() == alias)
            .ok_or_else(|| EditorError::UnknownField(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_now() -> DateTime<Local> {
        Local.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap()
    }

    #[test]
    fn seed_has_one_line_item_and_due_date_thirty_days_out() {
        let doc = InvoiceData::seed(&Config::default(), fixed_now());
        assert_eq!(doc.line_items.len(), 1);
        assert_eq!(doc.invoice_date, "2026-10-19");
        assert_eq!(doc.due_date, "2026-11-18");
        assert_eq!(doc.totals, Totals::default());
    }

    #[test]
    fn seed_number_is_prefix_plus_six_timestamp_digits() {
        let now = fixed_now();
        let doc = InvoiceData::seed(&Config::default(), now);
        let digits = now.timestamp_millis().to_string();
        let expected = format!("INV-{}", &digits[digits.len() - 6..]);
        assert_eq!(doc.invoice_number, expected);
    }

    #[test]
    fn seed_copies_company_from_config() {
        let mut config = Config::default();
        config.company.name = "BOT Engineers".into();
        config.invoice.due_days = 7;
        let doc = InvoiceData::seed(&config, fixed_now());
        assert_eq!(doc.company_name, "BOT Engineers");
        assert_eq!(doc.due_date, "2026-10-26");
    }

    #[test]
    fn field_names_resolve() {
        for field in DocumentField::ALL {
            assert_eq!(field.name().parse::<DocumentField>().unwrap(), field);
        }
        assert_eq!(
            "due-date".parse::<DocumentField>().unwrap(),
            DocumentField::DueDate
        );
        assert!("tax".parse::<DocumentField>().is_err());
    }
}
