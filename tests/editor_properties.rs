use chrono::Local;
use invoice_editor::invoice::editor::{
    add_line_item, decrement_quantity, increment_quantity, remove_line_item, set_discount_percent,
    update_line_item,
};
use invoice_editor::invoice::{coerce_money, coerce_quantity};
use invoice_editor::{Config, InvoiceData, LineItemChange, LineItemField, Preview};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// Raw prompt input, including the kind of junk people actually type
const RAW_INPUTS: &[&str] = &[
    "", "abc", "0", "0.5", "-3", "12kg", "2.25", "7", "1e2", "  40 ", "+8", ".75", "$5", "1,000",
];

fn seeded() -> InvoiceData {
    InvoiceData::seed(&Config::default(), Local::now())
}

fn assert_consistent(doc: &InvoiceData) {
    assert!(!doc.line_items.is_empty());
    for item in &doc.line_items {
        assert_eq!(item.amount, item.quantity * item.selling_price);
        assert_eq!(
            item.profit,
            (item.selling_price - item.buying_price) * item.quantity
        );
    }
    let preview = Preview::from_document(doc);
    assert_eq!(preview.totals, doc.totals);
    let sum: f64 = doc.line_items.iter().map(|item| item.amount).sum();
    assert_eq!(preview.totals.subtotal, sum);
}

#[test]
fn random_edit_sequences_stay_consistent() {
    for seed in 1..=20u64 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut doc = seeded();

        for _ in 0..200 {
            let idx = rng.random_range(0..doc.line_items.len());
            let id = doc.line_items[idx].id;
            let before = doc.line_items.len();

            doc = match rng.random_range(0..8) {
                0 => {
                    let next = add_line_item(&doc);
                    assert_eq!(next.line_items.len(), before + 1);
                    next
                }
                1 => {
                    let next = remove_line_item(&doc, &id);
                    let expected = if before == 1 { 1 } else { before - 1 };
                    assert_eq!(next.line_items.len(), expected);
                    next
                }
                2 => {
                    let qty = doc.line_items[idx].quantity;
                    let next = increment_quantity(&doc, &id);
                    assert_eq!(next.line_items[idx].quantity, qty + 1.0);
                    next
                }
                3 => {
                    let qty = doc.line_items[idx].quantity;
                    let next = decrement_quantity(&doc, &id);
                    let after = next.line_items[idx].quantity;
                    if qty <= 1.0 {
                        assert_eq!(after, qty);
                    } else {
                        assert_eq!(after, (qty - 1.0).max(1.0));
                        assert!(after >= 1.0);
                    }
                    next
                }
                4 => {
                    let price = rng.random_range(0..10_000) as f64 / 4.0;
                    update_line_item(&doc, &id, LineItemChange::SellingPrice(price))
                }
                5 => {
                    let price = rng.random_range(0..10_000) as f64 / 4.0;
                    update_line_item(&doc, &id, LineItemChange::BuyingPrice(price))
                }
                6 => {
                    let raw = RAW_INPUTS[rng.random_range(0..RAW_INPUTS.len())];
                    let field = match rng.random_range(0..3) {
                        0 => LineItemField::Quantity,
                        1 => LineItemField::BuyingPrice,
                        _ => LineItemField::SellingPrice,
                    };
                    let next = update_line_item(&doc, &id, LineItemChange::parse(field, raw));
                    let item = &next.line_items[idx];
                    match field {
                        LineItemField::Quantity => {
                            assert_eq!(item.quantity, coerce_quantity(raw));
                            assert_ne!(item.quantity, 0.0);
                        }
                        LineItemField::BuyingPrice => {
                            assert_eq!(item.buying_price, coerce_money(raw))
                        }
                        _ => assert_eq!(item.selling_price, coerce_money(raw)),
                    }
                    next
                }
                _ => {
                    let pct = rng.random_range(0..=100).to_string();
                    set_discount_percent(&doc, &pct)
                }
            };

            assert_consistent(&doc);
        }
    }
}

#[test]
fn typed_half_quantity_survives_decrement() {
    let doc = seeded();
    let id = doc.line_items[0].id;
    let doc = update_line_item(&doc, &id, LineItemChange::parse(LineItemField::Quantity, "0.5"));
    let doc = update_line_item(
        &doc,
        &id,
        LineItemChange::parse(LineItemField::SellingPrice, "10"),
    );
    assert_eq!(doc.line_items[0].amount, 5.0);

    let doc = decrement_quantity(&doc, &id);
    assert_eq!(doc.line_items[0].quantity, 0.5);
    assert_eq!(doc.totals.subtotal, 5.0);

    let doc = update_line_item(&doc, &id, LineItemChange::parse(LineItemField::Quantity, "junk"));
    assert_eq!(doc.line_items[0].quantity, 1.0);
}

#[test]
fn scenario_two_items_with_discount() {
    let doc = add_line_item(&seeded());
    let (a, b) = (doc.line_items[0].id, doc.line_items[1].id);
    let doc = update_line_item(&doc, &a, LineItemChange::SellingPrice(100.0));
    let doc = update_line_item(&doc, &b, LineItemChange::SellingPrice(50.0));
    let doc = set_discount_percent(&doc, "10");

    let preview = Preview::from_document(&doc);
    assert_eq!(preview.totals.subtotal, 150.0);
    assert_eq!(preview.totals.discount, 15.0);
    assert_eq!(preview.totals.total, 135.0);
}

#[test]
fn scenario_add_on_single_row() {
    let doc = seeded();
    let next = add_line_item(&doc);
    assert_eq!(next.line_items.len(), 2);
    assert_ne!(next.line_items[0].id, next.line_items[1].id);

    let added = &next.line_items[1];
    assert_eq!(added.quantity, 1.0);
    assert_eq!(added.buying_price, 0.0);
    assert_eq!(added.selling_price, 0.0);
    assert_eq!(added.amount, 0.0);
    assert_eq!(added.profit, 0.0);
}

#[test]
fn remove_on_single_row_returns_same_item() {
    let doc = seeded();
    let id = doc.line_items[0].id;
    let next = remove_line_item(&doc, &id);
    assert_eq!(next, doc);
}
