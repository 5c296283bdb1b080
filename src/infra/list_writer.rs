// ============================================================
// Layer 6 - List Writer
// ============================================================
// Writes one identifier per line, each line ending in '\n'.
//
// Output files (default names):
//   train_val_list/
//     TDA_ReCTS_train_list.txt
//     TDA_ReCTS_val_list.txt
//
// An empty list produces an empty file. Existing files are
// overwritten.

use anyhow::{Context, Result};
use std::{fs, path::PathBuf};

pub struct ListWriter {
    /// Directory the list files are written into
    dir: PathBuf,
}

impl ListWriter {
    /// Create the writer, creating `dir` if it does not exist yet.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)
            .with_context(|| format!("Cannot create list directory '{}'", dir.display()))?;
        Ok(Self { dir })
    }

    /// Write `ids` to `<dir>/<file_name>` and return the full path.
    pub fn write(&self, file_name: &str, ids: &[String]) -> Result<PathBuf> {
        let path = self.dir.join(file_name);
        fs::write(&path, render(ids))
            .with_context(|| format!("Cannot write '{}'", path.display()))?;

        tracing::info!("Wrote {} ids to '{}'", ids.len(), path.display());
        Ok(path)
    }
}

fn render(ids: &[String]) -> String {
    let mut out = String::with_capacity(ids.iter().map(|id| id.len() + 1).sum());
    for id in ids {
        out.push_str(id);
        out.push('\n');
    }
    out
}
