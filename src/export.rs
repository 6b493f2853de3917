use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use time::{Date, OffsetDateTime, macros::format_description};
use tracing::{info, warn};

const FILE_PREFIX: &str = "Bao_cao_IELTS";
const FALLBACK_CONTEXT: &str = "thu";

/// Today's date in the local timezone, or in UTC when the local offset is unknown.
pub fn today() -> Date {
    match OffsetDateTime::now_local() {
        Ok(now) => now.date(),
        Err(e) => {
            warn!("Local offset unavailable ({}), using UTC date", e);
            OffsetDateTime::now_utc().date()
        }
    }
}

/// Filename-safe context derived from the recipient, e.g. `Cô Tuyết Anna` -> `Cô_Tuyết_Anna`.
pub fn file_context(recipient: &str) -> String {
    let context = recipient
        .split_whitespace()
        .map(|word| {
            word.chars()
                .filter(|c| c.is_alphanumeric() || *c == '_' || *c == '-')
                .collect::<String>()
        })
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join("_");
    if context.is_empty() {
        FALLBACK_CONTEXT.to_string()
    } else {
        context
    }
}

/// `Bao_cao_IELTS_<context>_<DD-MM-YYYY>.txt`
pub fn export_file_name(context: &str, date: Date) -> anyhow::Result<String> {
    let date = date.format(format_description!("[day]-[month]-[year]"))?;
    Ok(format!("{}_{}_{}.txt", FILE_PREFIX, context, date))
}

/// Write the letter verbatim as UTF-8 into `dir/file_name`, returning the full path.
pub fn write_letter<P: AsRef<Path>>(dir: P, file_name: &str, text: &str) -> anyhow::Result<PathBuf> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create export directory {:?}", dir))?;
    let path = dir.join(file_name);
    fs::write(&path, text).with_context(|| format!("Failed to write letter to {:?}", path))?;
    info!(path = ?path, bytes = text.len(), "letter exported");
    Ok(path)
}

/// Place `text` on the system clipboard.
pub fn copy_to_clipboard(text: &str) -> anyhow::Result<()> {
    let mut clipboard = arboard::Clipboard::new().context("Failed to open the clipboard")?;

    // On X11/Wayland the selection lives as long as its owner, so hold it until
    // another application has taken the text.
    #[cfg(target_os = "linux")]
    {
        use arboard::SetExtLinux;
        clipboard
            .set()
            .wait()
            .text(text.to_string())
            .context("Failed to write letter to the clipboard")?;
    }
    #[cfg(not(target_os = "linux"))]
    {
        clipboard
            .set_text(text.to_string())
            .context("Failed to write letter to the clipboard")?;
    }

    info!(bytes = text.len(), "letter copied to clipboard");
    Ok(())
}
