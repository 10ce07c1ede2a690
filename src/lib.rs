pub mod config;
pub mod error;
pub mod invoice;
pub mod preview;
pub mod session;

pub use config::{Company, Config, InvoiceSettings};
pub use error::{EditorError, Result};
pub use invoice::{InvoiceData, LineItem, LineItemChange, LineItemField, LineItemId, Totals};
pub use preview::{render_text, Preview};
pub use session::{Command, Edit, Session};
