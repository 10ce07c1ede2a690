use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub company: Company,
    pub invoice: InvoiceSettings,
}

/// Seller details copied into every new invoice's "From" block.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(default)]
pub struct Company {
    pub name: String,
    pub address: String,
    pub phone: String,
    pub email: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct InvoiceSettings {
    pub number_prefix: String,
    pub currency_symbol: String,
    pub due_days: u32,
    pub discount_percent: f64,
    /// Percentage, e.g. 7.5 for 7.5%.
    pub tax_rate: f64,
}

impl Default for InvoiceSettings {
    fn default() -> Self {
        Self {
            number_prefix: "INV-".to_string(),
            currency_symbol: "৳".to_string(),
            due_days: 30,
            discount_percent: 0.0,
            tax_rate: 0.0,
        }
    }
}
