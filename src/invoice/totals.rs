use serde::{Deserialize, Serialize};

use super::LineItem;

/// Document-level roll-up of the line items.
///
/// This is the single formula for every total shown or stored:
/// `discount = subtotal * discount_percent / 100`,
/// `tax = (subtotal - discount) * tax_rate / 100`,
/// `total = subtotal - discount + tax`. Profit is informational and never
/// part of the billed total.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Totals {
    pub subtotal: f64,
    pub discount: f64,
    pub tax: f64,
    pub total_profit: f64,
    pub total: f64,
}

impl Totals {
    pub fn compute(items: &[LineItem], discount_percent: f64, tax_rate: f64) -> Self {
        let subtotal: f64 = items.iter().map(|item| item.amount).sum();
        let total_profit: f64 = items.iter().map(|item| item.profit).sum();
        let discount = subtotal * (discount_percent / 100.0);
        let taxable = subtotal - discount;
        let tax = taxable * (tax_rate / 100.0);

        Self {
            subtotal,
            discount,
            tax,
            total_profit,
            total: taxable + tax,
        }
    }
}
