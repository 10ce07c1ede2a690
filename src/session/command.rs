use crate::error::{EditorError, Result};
use crate::invoice::{DocumentField, LineItemField};

/// One line of input from the editing prompt
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Help,
    Show,
    Items,
    Json,
    Print,
    Quit,
    Add,
    Remove(String),
    Set {
        row: String,
        field: LineItemField,
        value: String,
    },
    Inc(String),
    Dec(String),
    Field {
        field: DocumentField,
        value: String,
    },
    Discount(String),
    Tax(String),
}

pub const HELP: &str = "Commands:
  show | preview                 Render the invoice
  items                          List line items with ids, cost and profit
  add                            Append a new line item
  remove <row>                   Remove a line item (the last one is kept)
  set <row> <field> <value>      Edit a line item field:
                                   description, service, quantity, buying, selling
  inc <row> | dec <row>          Raise or lower a quantity by one (never below 1)
  field <name> <value>           Edit a document field:
                                   number, date, due, ref, notes,
                                   company-name, company-address, company-phone, company-email,
                                   client-name, client-address, client-phone, client-email
  discount <percent>             Discount on the subtotal (0-100)
  tax <percent>                  Tax on the discounted subtotal
  json                           Dump the invoice as JSON
  print                          Send the rendered invoice to the system printer
  quit | exit                    End the session

<row> is the number shown by 'items' or a line item id.
Use \\n inside a value for a line break.";

impl Command {
    /// Parse a prompt line. Blank lines and `#` comments yield `None`.
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let (name, rest) = split_word(line);
        let command = match name.to_ascii_lowercase().as_str() {
            "help" | "?" => Self::Help,
            "show" | "preview" => Self::Show,
            "items" | "list" => Self::Items,
            "json" => Self::Json,
            "print" => Self::Print,
            "quit" | "exit" => Self::Quit,
            "add" => Self::Add,
            "remove" | "rm" => Self::Remove(required(rest, "remove", "<row>")?),
            "inc" | "+" => Self::Inc(required(rest, "inc", "<row>")?),
            "dec" | "-" => Self::Dec(required(rest, "dec", "<row>")?),
            "set" => {
                let (row, rest) = split_word(rest);
                let row = required(row, "set", "<row> <field> <value>")?;
                let (field, value) = split_word(rest);
                let field = required(field, "set", "<row> <field> <value>")?;
                Self::Set {
                    row,
                    field: field.parse()?,
                    value: unescape(value),
                }
            }
            "field" => {
                let (field, value) = split_word(rest);
                let field = required(field, "field", "<name> <value>")?;
                Self::Field {
                    field: field.parse()?,
                    value: unescape(value),
                }
            }
            "discount" => Self::Discount(required(rest, "discount", "<percent>")?),
            "tax" => Self::Tax(required(rest, "tax", "<percent>")?),
            other => return Err(EditorError::UnknownCommand(other.to_string())),
        };
        Ok(Some(command))
    }
}

fn split_word(input: &str) -> (&str, &str) {
    let input = input.trim_start();
    match input.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim_start()),
        None => (input, ""),
    }
}

fn required(value: &str, command: &'static str, expected: &'static str) -> Result<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(EditorError::MissingArgument { command, expected });
    }
    Ok(value.to_string())
}

fn unescape(value: &str) -> String {
    value.trim_end().replace("\\n", "\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_and_comment_lines_are_skipped() {
        assert_eq!(Command::parse("   ").unwrap(), None);
        assert_eq!(Command::parse("# seed data").unwrap(), None);
    }

    #[test]
    fn set_keeps_the_rest_of_the_line_as_value() {
        let cmd = Command::parse("set 2 description Fiber patch cable  ").unwrap();
        assert_eq!(
            cmd,
            Some(Command::Set {
                row: "2".into(),
                field: LineItemField::Description,
                value: "Fiber patch cable".into(),
            })
        );
    }

    #[test]
    fn set_allows_empty_value() {
        let cmd = Command::parse("set 1 qty").unwrap();
        assert_eq!(
            cmd,
            Some(Command::Set {
                row: "1".into(),
                field: LineItemField::Quantity,
                value: String::new(),
            })
        );
    }

    #[test]
    fn field_values_unescape_line_breaks() {
        let cmd = Command::parse("field client-address 12 Road\\nDhaka").unwrap();
        assert_eq!(
            cmd,
            Some(Command::Field {
                field: DocumentField::ClientAddress,
                value: "12 Road\nDhaka".into(),
            })
        );
    }

    #[test]
    fn missing_arguments_are_reported() {
        let err = Command::parse("remove").unwrap_err();
        assert!(err.to_string().contains("remove"));
        assert!(matches!(
            Command::parse("set 1").unwrap_err(),
            EditorError::MissingArgument { command: "set", .. }
        ));
    }

    #[test]
    fn unknown_names_are_errors() {
        assert!(matches!(
            Command::parse("frobnicate").unwrap_err(),
            EditorError::UnknownCommand(_)
        ));
        assert!(matches!(
            Command::parse("set 1 colour red").unwrap_err(),
            EditorError::UnknownField(_)
        ));
    }
}
