mod company;

pub use company::{Company, Config, InvoiceSettings};

use crate::error::{EditorError, Result};
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

/// Get the config directory path (XDG config dir, falling back to ~/.invoice-editor/)
pub fn config_dir() -> Result<PathBuf> {
    if let Some(proj_dirs) = ProjectDirs::from("", "", "invoice-editor") {
        return Ok(proj_dirs.config_dir().to_path_buf());
    }

    let home = std::env::var_os("HOME").map(PathBuf::from).ok_or_else(|| {
        EditorError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "Could not determine home directory",
        ))
    })?;

    Ok(home.join(".invoice-editor"))
}

pub fn config_file(config_dir: &Path) -> PathBuf {
    config_dir.join("config.toml")
}

/// Load config.toml, falling back to built-in defaults when the file is absent
pub fn load_config(config_dir: &Path) -> Result<Config> {
    let path = config_file(config_dir);
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(Config::default());
    }
    let content = fs::read_to_string(&path)?;
    parse_config(&content).map_err(|source| EditorError::ConfigParse { path, source })
}

pub fn parse_config(content: &str) -> std::result::Result<Config, toml::de::Error> {
    toml::from_str(content)
}

/// Create the config directory and write the template config.toml
pub fn init_config(config_dir: &Path) -> Result<PathBuf> {
    if config_dir.exists() {
        return Err(EditorError::AlreadyInitialized(config_dir.to_path_buf()));
    }
    fs::create_dir_all(config_dir)?;
    let path = config_file(config_dir);
    fs::write(&path, CONFIG_TEMPLATE)?;
    Ok(path)
}

/// Template content for config.toml
pub const CONFIG_TEMPLATE: &str = r#"# Seed values for every new editing session.

[company]
name = "Your Company Name"
address = "123 Business Street"
# phone = "+1-555-123-4567"     # optional
# email = "billing@example.com" # optional

[invoice]
number_prefix = "INV-"     # followed by the last six digits of the current timestamp
currency_symbol = "৳"
due_days = 30
discount_percent = 0.0     # 0-100, applied to the subtotal
tax_rate = 0.0             # percent, applied after the discount
"#;
