use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Hand the rendered invoice to the system print facility.
///
/// Returns as soon as the print command is spawned. Whether the job prints,
/// gets cancelled or fails is never observed; problems are only logged.
pub fn print_document(text: &str, invoice_number: &str) {
    let path = match spool(text, invoice_number) {
        Ok(path) => path,
        Err(e) => {
            tracing::warn!(error = %e, "could not write print spool file");
            return;
        }
    };

    match print_command(&path)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
    {
        Ok(child) => tracing::info!(pid = child.id(), path = %path.display(), "sent to printer"),
        Err(e) => tracing::warn!(error = %e, "print command unavailable"),
    }
}

/// Write `text` to a fresh, uniquely named file in the temp dir and keep it
/// on disk, since the print command reads it after we return.
fn spool(text: &str, invoice_number: &str) -> std::io::Result<PathBuf> {
    let safe: String = invoice_number
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' { c } else { '_' })
        .collect();
    let mut file = tempfile::Builder::new()
        .prefix(&format!("invoice-{safe}-"))
        .suffix(".txt")
        .tempfile()?;
    file.write_all(text.as_bytes())?;
    let (_, path) = file.keep().map_err(|e| e.error)?;
    Ok(path)
}

#[cfg(not(target_os = "windows"))]
fn print_command(path: &Path) -> Command {
    let mut cmd = Command::new("lp");
    cmd.arg(path);
    cmd
}

#[cfg(target_os = "windows")]
fn print_command(path: &Path) -> Command {
    let mut cmd = Command::new("notepad");
    cmd.arg("/p").arg(path);
    cmd
}
