use log::debug;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write a transaction history to a text file, one entry per line.
///
/// The file is created or truncated. Every line ends with a newline,
/// including the last; an empty history produces an empty file.
pub fn write_history(path: &Path, history: &[String]) -> std::io::Result<()> {
    debug!(
        "Writing {} transactions to {}",
        history.len(),
        path.display()
    );

    let mut writer = BufWriter::new(File::create(path)?);
    for entry in history {
        writeln!(writer, "{}", entry)?;
    }
    writer.flush()
}
