//! JSON sink.
//!
//! The array is pretty-printed with two-space indentation and non-ASCII text
//! left unescaped. The write is not atomic; the output is regenerable.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use vocab_core::{Result, WordEntry};

/// Write `entries` to `path`, creating parent directories. Returns the size of
/// the written file in bytes.
pub fn write_json(path: &Path, entries: &[WordEntry]) -> Result<u64> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let mut writer = BufWriter::new(File::create(path)?);
    write_json_to(&mut writer, entries)?;
    writer.flush()?;
    drop(writer);

    let size = std::fs::metadata(path)?.len();
    tracing::info!(path = %path.display(), entries = entries.len(), size, "wrote output");
    Ok(size)
}

/// Write `entries` to any writer, e.g. stdout.
pub fn write_json_to<W: Write>(writer: &mut W, entries: &[WordEntry]) -> Result<()> {
    serde_json::to_writer_pretty(&mut *writer, entries)?;
    writeln!(writer)?;
    Ok(())
}
