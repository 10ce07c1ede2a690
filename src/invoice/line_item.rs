use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::EditorError;

/// Opaque row identity. Assigned once when the row is created and never recomputed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LineItemId(Uuid);

impl LineItemId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// First eight hex digits, enough to tell rows apart on screen
    pub fn short(&self) -> String {
        self.0.simple().to_string()[..8].to_string()
    }
}

impl Default for LineItemId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for LineItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for LineItemId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// One billable row: a quantity of a product or service sold at a price
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub id: LineItemId,
    pub description: String,
    pub is_service: bool,
    pub quantity: f64,
    pub buying_price: f64,
    pub selling_price: f64,
    /// Always `quantity * selling_price`
    pub amount: f64,
    /// Always `(selling_price - buying_price) * quantity`
    pub profit: f64,
}

impl LineItem {
    pub fn new() -> Self {
        Self {
            id: LineItemId::new(),
            description: String::new(),
            is_service: false,
            quantity: 1.0,
            buying_price: 0.0,
            selling_price: 0.0,
            amount: 0.0,
            profit: 0.0,
        }
    }

    /// Returns a copy with `change` applied. Amount and profit follow any
    /// quantity or price change.
    pub fn with_change(&self, change: LineItemChange) -> Self {
        let mut item = self.clone();
        let recompute = change.affects_totals();

        match change {
            LineItemChange::Description(text) => item.description = text,
            LineItemChange::IsService(flag) => item.is_service = flag,
            LineItemChange::Quantity(qty) => item.quantity = qty,
            LineItemChange::BuyingPrice(price) => item.buying_price = price,
            LineItemChange::SellingPrice(price) => item.selling_price = price,
        }

        if recompute {
            item.amount = item.quantity * item.selling_price;
            item.profit = (item.selling_price - item.buying_price) * item.quantity;
        }
        item
    }
}

impl Default for LineItem {
    fn default() -> Self {
        Self::new()
    }
}

/// Editable columns of a line item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineItemField {
    Description,
    IsService,
    Quantity,
    BuyingPrice,
    SellingPrice,
}

impl FromStr for LineItemField {
    type Err = EditorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "description" | "desc" => Ok(Self::Description),
            "service" | "is-service" | "isservice" => Ok(Self::IsService),
            "quantity" | "qty" => Ok(Self::Quantity),
            "buying" | "buying-price" | "buyingprice" | "cost" => Ok(Self::BuyingPrice),
            "selling" | "selling-price" | "sellingprice" | "price" | "rate" => {
                Ok(Self::SellingPrice)
            }
            _ => Err(EditorError::UnknownField(s.to_string())),
        }
    }
}

/// A single typed field edit
#[derive(Debug, Clone, PartialEq)]
pub enum LineItemChange {
    Description(String),
    IsService(bool),
    Quantity(f64),
    BuyingPrice(f64),
    SellingPrice(f64),
}

impl LineItemChange {
    /// Build a change from free-form input. Numbers that fail to parse fall
    /// back to 1 for quantity and 0 for prices.
    pub fn parse(field: LineItemField, raw: &str) -> Self {
        match field {
            LineItemField::Description => Self::Description(raw.to_string()),
            LineItemField::IsService => Self::IsService(parse_flag(raw)),
            LineItemField::Quantity => Self::Quantity(coerce_quantity(raw)),
            LineItemField::BuyingPrice => Self::BuyingPrice(coerce_money(raw)),
            LineItemField::SellingPrice => Self::SellingPrice(coerce_money(raw)),
        }
    }

    pub fn affects_totals(&self) -> bool {
        matches!(
            self,
            Self::Quantity(_) | Self::BuyingPrice(_) | Self::SellingPrice(_)
        )
    }
}

/// Quantity input; zero and garbage both become 1
pub fn coerce_quantity(raw: &str) -> f64 {
    parse_number(raw).filter(|qty| *qty != 0.0).unwrap_or(1.0)
}

pub fn coerce_money(raw: &str) -> f64 {
    parse_number(raw).unwrap_or(0.0)
}

fn parse_flag(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "y" | "on" | "service"
    )
}

/// Parse the leading numeric part of `raw`, so "12.5kg" reads as 12.5.
/// Returns `None` when no digits lead the input.
pub fn parse_number(raw: &str) -> Option<f64> {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    let mut seen_digit = false;
    let mut seen_dot = false;
    while end < bytes.len() {
        match bytes[end] {
            b'0'..=b'9' => seen_digit = true,
            b'.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        end += 1;
    }

    if !seen_digit {
        return None;
    }

    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp = end + 1;
        if exp < bytes.len() && matches!(bytes[exp], b'+' | b'-') {
            exp += 1;
        }
        let digits_start = exp;
        while exp < bytes.len() && bytes[exp].is_ascii_digit() {
            exp += 1;
        }
        if exp > digits_start {
            end = exp;
        }
    }

    s[..end].parse::<f64>().ok().filter(|value| value.is_finite())
}
