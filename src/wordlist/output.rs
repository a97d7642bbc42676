//! Wordlist file output

use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{PwToolkitError, Result};

/// Write entries to `path`, sorted ascending, one per line.
///
/// Any existing file is truncated. The write is not atomic: an interrupted
/// run can leave a partial file behind. Returns the number of lines written.
pub fn write_wordlist<'a, I>(entries: I, path: &Path) -> Result<usize>
where
    I: IntoIterator<Item = &'a String>,
{
    let mut sorted: Vec<&String> = entries.into_iter().collect();
    sorted.sort();
    sorted.dedup();

    let file = File::create(path).map_err(|e| PwToolkitError::io_at(&e, path))?;
    let mut writer = BufWriter::new(file);
    for entry in &sorted {
        writeln!(writer, "{}", entry).map_err(|e| PwToolkitError::io_at(&e, path))?;
    }
    writer.flush().map_err(|e| PwToolkitError::io_at(&e, path))?;

    tracing::debug!(path = %path.display(), entries = sorted.len(), "Wordlist written");
    Ok(sorted.len())
}

/// Read a wordlist file back into a set, one entry per line
pub fn read_wordlist(path: &Path) -> Result<BTreeSet<String>> {
    let content = std::fs::read_to_string(path).map_err(|e| PwToolkitError::io_at(&e, path))?;
    Ok(content.lines().map(str::to_string).collect())
}
