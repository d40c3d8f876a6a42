use std::io::Write;
use std::path::{Path, PathBuf};

use propgen_core::CoreError;
use serde::Serialize;

/// Where the generated document ended up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "path", rename_all = "snake_case")]
pub enum Written {
    File(PathBuf),
    Console,
}

/// Print a serializable value as pretty JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Write `text` to `dir/file_name`, then `dir/fallback_name`, then stdout.
pub fn write_document(
    dir: &Path,
    file_name: &str,
    fallback_name: &str,
    text: &str,
) -> Result<Written, CoreError> {
    write_document_to(dir, file_name, fallback_name, text, &mut std::io::stdout().lock())
}

/// [`write_document`] with an explicit console sink.
pub fn write_document_to(
    dir: &Path,
    file_name: &str,
    fallback_name: &str,
    text: &str,
    console: &mut impl Write,
) -> Result<Written, CoreError> {
    let primary = dir.join(file_name);
    for path in [primary.clone(), dir.join(fallback_name)] {
        match write_file(&path, text) {
            Ok(()) => {
                tracing::info!(path = %path.display(), "wrote props types");
                return Ok(Written::File(path));
            }
            Err(source) => {
                let error = CoreError::Write {
                    path: path.clone(),
                    source,
                    exhausted: false,
                };
                tracing::warn!(%error, "trying next output target");
            }
        }
    }

    console
        .write_all(text.as_bytes())
        .and_then(|()| console.flush())
        .map_err(|source| CoreError::Write {
            path: primary,
            source,
            exhausted: true,
        })?;
    Ok(Written::Console)
}

fn write_file(path: &Path, text: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, text)
}
