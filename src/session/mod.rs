mod command;

pub use command::{Command, HELP};

use chrono::Local;

use crate::config::Config;
use crate::error::{EditorError, Result};
use crate::invoice::editor;
use crate::invoice::{DocumentField, InvoiceData, LineItemChange, LineItemId};

/// A change to the live document
#[derive(Debug, Clone, PartialEq)]
pub enum Edit {
    AddLineItem,
    RemoveLineItem(LineItemId),
    UpdateLineItem(LineItemId, LineItemChange),
    IncrementQuantity(LineItemId),
    DecrementQuantity(LineItemId),
    SetField(DocumentField, String),
    SetDiscount(String),
    SetTax(String),
}

/// Owner of the one invoice being edited in this run.
///
/// Edits never patch the document in place: each one builds the next value
/// from the current one and the session swaps it in.
#[derive(Debug, Clone)]
pub struct Session {
    document: InvoiceData,
}

impl Session {
    pub fn new(document: InvoiceData) -> Self {
        Self { document }
    }

    /// Seed a fresh document from config and the current time
    pub fn start(config: &Config) -> Self {
        Self::new(InvoiceData::seed(config, Local::now()))
    }

    pub fn document(&self) -> &InvoiceData {
        &self.document
    }

    pub fn apply(&mut self, edit: Edit) {
        tracing::debug!(?edit, "applying edit");
        let doc = &self.document;
        let next = match edit {
            Edit::AddLineItem => editor::add_line_item(doc),
            Edit::RemoveLineItem(id) => editor::remove_line_item(doc, &id),
            Edit::UpdateLineItem(id, change) => editor::update_line_item(doc, &id, change),
            Edit::IncrementQuantity(id) => editor::increment_quantity(doc, &id),
            Edit::DecrementQuantity(id) => editor::decrement_quantity(doc, &id),
            Edit::SetField(field, value) => editor::set_field(doc, field, &value),
            Edit::SetDiscount(raw) => editor::set_discount_percent(doc, &raw),
            Edit::SetTax(raw) => editor::set_tax_rate(doc, &raw),
        };
        self.document = next;
        tracing::debug!(
            rows = self.document.line_items.len(),
            subtotal = self.document.totals.subtotal,
            total = self.document.totals.total,
            "document updated"
        );
    }

    /// Resolve a row reference to a line item id.
    /// Accepts a 1-based index from 'items', a full id, or a unique id prefix.
    pub fn resolve_row(&self, reference: &str) -> Result<LineItemId> {
        let items = &self.document.line_items;

        if let Ok(idx) = reference.parse::<usize>() {
            if (1..=items.len()).contains(&idx) {
                return Ok(items[idx - 1].id);
            }
        }

        if let Ok(id) = reference.parse::<LineItemId>() {
            if self.document.line_item(&id).is_some() {
                return Ok(id);
            }
            return Err(EditorError::RowNotFound(reference.to_string()));
        }

        // Prefixes shorter than the displayed short id are too ambiguous
        if reference.len() < 8 {
            return Err(EditorError::RowNotFound(reference.to_string()));
        }
        let wanted = reference.to_ascii_lowercase();
        let mut matches = items
            .iter()
            .filter(|item| item.id.to_string().replace('-', "").starts_with(&wanted));
        match (matches.next(), matches.next()) {
            (Some(item), None) => Ok(item.id),
            _ => Err(EditorError::RowNotFound(reference.to_string())),
        }
    }

    /// Translate a prompt command into an edit. Read-only commands give `None`.
    pub fn edit_for(&self, command: &Command) -> Result<Option<Edit>> {
        let edit = match command {
            Command::Add => Edit::AddLineItem,
            Command::Remove(row) => Edit::RemoveLineItem(self.resolve_row(row)?),
            Command::Inc(row) => Edit::IncrementQuantity(self.resolve_row(row)?),
            Command::Dec(row) => Edit::DecrementQuantity(self.resolve_row(row)?),
            Command::Set { row, field, value } => Edit::UpdateLineItem(
                self.resolve_row(row)?,
                LineItemChange::parse(*field, value),
            ),
            Command::Field { field, value } => Edit::SetField(*field, value.clone()),
            Command::Discount(raw) => Edit::SetDiscount(raw.clone()),
            Command::Tax(raw) => Edit::SetTax(raw.clone()),
            Command::Help
            | Command::Show
            | Command::Items
            | Command::Json
            | Command::Print
            | Command::Quit => return Ok(None),
        };
        Ok(Some(edit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session::start(&Config::default())
    }

    #[test]
    fn apply_replaces_the_document() {
        let mut session = session();
        let before = session.document().clone();
        session.apply(Edit::AddLineItem);
        assert_eq!(before.line_items.len(), 1);
        assert_eq!(session.document().line_items.len(), 2);
    }

    #[test]
    fn rows_resolve_by_index_id_and_prefix() {
        let mut session = session();
        session.apply(Edit::AddLineItem);
        let second = session.document().line_items[1].id;

        assert_eq!(session.resolve_row("2").unwrap(), second);
        assert_eq!(session.resolve_row(&second.to_string()).unwrap(), second);
        assert_eq!(session.resolve_row(&second.short()).unwrap(), second);
        assert!(session.resolve_row("0").is_err());
        assert!(session.resolve_row("3").is_err());
        assert!(session.resolve_row(&LineItemId::new().to_string()).is_err());
    }

    #[test]
    fn commands_become_edits() {
        let mut session = session();
        let cmd = Command::parse("set 1 selling 100").unwrap().unwrap();
        let edit = session.edit_for(&cmd).unwrap().unwrap();
        session.apply(edit);
        let cmd = Command::parse("set 1 qty 2").unwrap().unwrap();
        let edit = session.edit_for(&cmd).unwrap().unwrap();
        session.apply(edit);

        let item = &session.document().line_items[0];
        assert_eq!(item.amount, 200.0);
        assert_eq!(item.profit, 200.0);
        assert_eq!(session.document().totals.total, 200.0);

        for read_only in [
            Command::Help,
            Command::Show,
            Command::Items,
            Command::Json,
            Command::Print,
            Command::Quit,
        ] {
            assert_eq!(session.edit_for(&read_only).unwrap(), None);
        }
    }

    #[test]
    fn remove_on_single_row_keeps_it() {
        let mut session = session();
        let only = session.document().line_items[0].clone();
        session.apply(Edit::RemoveLineItem(only.id));
        assert_eq!(session.document().line_items, vec![only]);
    }
}
