mod json;
mod text;

use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use crate::error::RectanglesError;

pub use json::{batch_to_json, error_to_json, relationship_to_json};
pub use text::relationship_to_text;

/// Write a rendered report to `path`, or to stdout when no path is given
pub fn write_report(content: &str, path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => {
            if let Some(parent) = path.parent()
                && !parent.as_os_str().is_empty()
                && !parent.exists()
            {
                fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create {}", parent.display()))?;
            }
            fs::write(path, content).map_err(|e| RectanglesError::OutputWrite {
                path: path.to_path_buf(),
                source: e,
            })?;
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(content.as_bytes())?;
            if !content.ends_with('\n') {
                stdout.write_all(b"\n")?;
            }
        }
    }

    Ok(())
}
