// ============================================================
// Layer 4 - Annotation Loader
// ============================================================
// Two jobs:
//
//   GtDirLoader      - enumerates the .json annotation files in
//                      a ground-truth directory and parses them
//                      with serde_json.
//
//   load_annotation  - turns a parsed record into the four
//                      parallel lists the classifier works on:
//                      (line polygons, line labels,
//                       char polygons, char labels)
//
// Only entries with ignore == 0 are kept. Every kept entry must
// have exactly 8 point values; anything else is a fatal error
// that aborts the run (no per-file recovery).
//
// Enumeration is non-recursive and sorted by file name, so two
// runs over the same directory see the files in the same order.
//
// Reference: Rust Book §9 (Error Handling)
//            Rust Book §12 (I/O and File Handling)

use anyhow::{Context, Result};
use std::{fs, path::PathBuf};

use crate::domain::annotation::{AnnotationEntry, AnnotationRecord, LoadedAnnotation};
use crate::domain::errors::AnnotationError;
use crate::domain::polygon::Quad;
use crate::domain::traits::AnnotationSource;

/// File suffix of annotation files.
pub const ANNOTATION_SUFFIX: &str = ".json";

/// Reads annotation files from one ground-truth directory.
pub struct GtDirLoader {
    /// Directory holding the annotation files
    dir: PathBuf,

    /// Only file names ending with this suffix are listed
    suffix: String,
}

impl GtDirLoader {
    /// Loader for `dir`, listing files that end in `.json`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir:    dir.into(),
            suffix: ANNOTATION_SUFFIX.to_string(),
        }
    }

    /// Replace the file-name suffix used for listing and id stripping.
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }
}

impl AnnotationSource for GtDirLoader {
    fn file_names(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();

        for entry in fs::read_dir(&self.dir)
            .with_context(|| format!("Cannot read annotation directory '{}'", self.dir.display()))?
        {
            let entry = entry?;

            // Path::is_file follows symlinks, so linked annotation files are kept
            if !entry.path().is_file() {
                continue;
            }

            // Non UTF-8 names cannot be written to the text lists
            let Some(name) = entry.file_name().to_str().map(str::to_owned) else {
                tracing::warn!("Skipping non UTF-8 file name in '{}'", self.dir.display());
                continue;
            };

            // Hidden files (e.g. macOS "._img_1.json" resource forks) are not annotations
            if name.starts_with('.') {
                tracing::debug!("Skipping hidden file '{}'", name);
                continue;
            }

            if name.ends_with(&self.suffix) {
                names.push(name);
            }
        }

        names.sort();
        tracing::info!(
            "Found {} annotation files in '{}'",
            names.len(),
            self.dir.display()
        );
        Ok(names)
    }

    fn load(&self, file_name: &str) -> Result<AnnotationRecord> {
        let path = self.dir.join(file_name);
        let text = fs::read_to_string(&path)
            .with_context(|| format!("Cannot read '{}'", path.display()))?;

        let record: AnnotationRecord = serde_json::from_str(&text).map_err(|source| AnnotationError::Parse {
            source_name: file_name.to_string(),
            source,
        })?;
        Ok(record)
    }

    fn file_id(&self, file_name: &str) -> String {
        file_name
            .strip_suffix(self.suffix.as_str())
            .unwrap_or(file_name)
            .to_string()
    }
}

/// Filter and reshape one record. `source_name` only feeds error messages.
pub fn load_annotation(
    record:      &AnnotationRecord,
    source_name: &str,
) -> Result<LoadedAnnotation, AnnotationError> {
    let (line_polys, line_labels) = load_polys(&record.lines, "lines", source_name)?;
    let (char_polys, char_labels) = load_polys(&record.chars, "chars", source_name)?;

    Ok(LoadedAnnotation {
        line_polys,
        line_labels,
        char_polys,
        char_labels,
    })
}

fn load_polys(
    entries:     &[AnnotationEntry],
    field:       &'static str,
    source_name: &str,
) -> Result<(Vec<Quad>, Vec<String>), AnnotationError> {
    let mut polys  = Vec::new();
    let mut labels = Vec::new();

    for (index, entry) in entries.iter().enumerate() {
        if entry.is_ignored() {
            continue;
        }

        let quad = Quad::from_flat(&entry.points).ok_or_else(|| AnnotationError::MalformedPoints {
            source_name: source_name.to_string(),
            field,
            index,
            count: entry.points.len(),
        })?;

        polys.push(quad);
        labels.push(entry.transcription.clone());
    }

    Ok((polys, labels))
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn square(x: f64) -> Vec<f64> {
        vec![x, 0.0, x + 1.0, 0.0, x + 1.0, 1.0, x, 1.0]
    }

    #[test]
    fn test_ignored_entries_are_dropped() {
        let record = AnnotationRecord {
            lines: vec![
                AnnotationEntry::new(square(0.0), "ab", 0),
                AnnotationEntry::new(square(5.0), "###", 1),
            ],
            chars: vec![
                AnnotationEntry::new(square(0.0), "a", 0),
                AnnotationEntry::new(square(1.0), "b", 1),
                AnnotationEntry::new(square(2.0), "c", 0),
            ],
        };
        let ann = load_annotation(&record, "x.json").unwrap();

        assert_eq!(ann.line_polys.len(), ann.line_labels.len());
        assert_eq!(ann.char_polys.len(), ann.char_labels.len());
        assert_eq!(ann.line_labels, vec!["ab"]);
        assert_eq!(ann.char_labels, vec!["a", "c"]);
        assert_eq!(ann.char_polys[1], Quad::from_flat(&square(2.0)).unwrap());
    }

    #[test]
    fn test_malformed_points_are_fatal() {
        let record = AnnotationRecord {
            lines: vec![],
            chars: vec![
                AnnotationEntry::new(square(0.0), "a", 0),
                AnnotationEntry::new(vec![0.0; 6], "b", 0),
            ],
        };
        let err = load_annotation(&record, "bad.json").unwrap_err();
        match &err {
            AnnotationError::MalformedPoints { source_name, field, index, count } => {
                assert_eq!(source_name, "bad.json");
                assert_eq!(*field, "chars");
                assert_eq!(*index, 1);
                assert_eq!(*count, 6);
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(err.to_string().contains("bad.json"));
    }

    #[test]
    fn test_malformed_but_ignored_entry_is_skipped() {
        let record = AnnotationRecord {
            lines: vec![AnnotationEntry::new(vec![1.0, 2.0], "", 1)],
            chars: vec![],
        };
        let ann = load_annotation(&record, "x.json").unwrap();
        assert_eq!(ann.line_count(), 0);
    }

    #[test]
    fn test_dir_listing_filters_and_sorts() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.json"), "{}").unwrap();
        fs::write(dir.path().join("a.json"), "{}").unwrap();
        fs::write(dir.path().join("notes.txt"), "").unwrap();
        fs::create_dir(dir.path().join("nested.json")).unwrap();

        let loader = GtDirLoader::new(dir.path());
        assert_eq!(loader.file_names().unwrap(), vec!["a.json", "b.json"]);
    }

    #[test]
    fn test_dir_listing_skips_hidden_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("img_1.json"), "{}").unwrap();
        fs::write(dir.path().join("._img_1.json"), [0u8, 5, 22, 7]).unwrap();
        fs::write(dir.path().join(".hidden.json"), "{}").unwrap();

        let loader = GtDirLoader::new(dir.path());
        assert_eq!(loader.file_names().unwrap(), vec!["img_1.json"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_dir_listing_follows_symlinks() {
        let store = tempfile::tempdir().unwrap();
        let dir   = tempfile::tempdir().unwrap();
        let target = store.path().join("real.json");
        fs::write(&target, "{}").unwrap();
        fs::write(dir.path().join("img_1.json"), "{}").unwrap();
        std::os::unix::fs::symlink(&target, dir.path().join("linked.json")).unwrap();

        let loader = GtDirLoader::new(dir.path());
        assert_eq!(loader.file_names().unwrap(), vec!["img_1.json", "linked.json"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_dir_listing_drops_dangling_symlinks() {
        let dir = tempfile::tempdir().unwrap();
        std::os::unix::fs::symlink(dir.path().join("gone.json"), dir.path().join("dangling.json")).unwrap();

        let loader = GtDirLoader::new(dir.path());
        assert!(loader.file_names().unwrap().is_empty());
    }

    #[test]
    fn test_custom_suffix() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.gt.json"), "{}").unwrap();
        fs::write(dir.path().join("b.json"), "{}").unwrap();

        let loader = GtDirLoader::new(dir.path()).with_suffix(".gt.json");
        assert_eq!(loader.file_names().unwrap(), vec!["a.gt.json"]);
        assert_eq!(loader.file_id("a.gt.json"), "a");
    }

    #[test]
    fn test_missing_dir_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let loader = GtDirLoader::new(dir.path().join("nope"));
        assert!(loader.file_names().is_err());
    }

    #[test]
    fn test_load_parses_record() {
        let dir = tempfile::tempdir().unwrap();
        let json = r#"{
            "lines": [{"points": [0, 0, 4, 0, 4, 1, 0, 1], "transcription": "abcd", "ignore": 0}],
            "chars": [{"points": [0, 0, 1, 0, 1, 1, 0, 1], "transcription": "a", "ignore": 0, "extra": true}]
        }"#;
        fs::write(dir.path().join("img_1.json"), json).unwrap();

        let loader = GtDirLoader::new(dir.path());
        let record = loader.load("img_1.json").unwrap();
        assert_eq!(record.lines.len(), 1);
        assert_eq!(record.chars[0].points.len(), 8);
        assert_eq!(record.lines[0].transcription, "abcd");
    }

    #[test]
    fn test_load_reports_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("broken.json"), "{ not json").unwrap();

        let loader = GtDirLoader::new(dir.path());
        let err = loader.load("broken.json").unwrap_err();
        assert!(err.downcast_ref::<AnnotationError>().is_some());
    }

    #[test]
    fn test_file_id_strips_suffix() {
        let loader = GtDirLoader::new("unused");
        assert_eq!(loader.file_id("train_ReCTS_000001.json"), "train_ReCTS_000001");
        assert_eq!(loader.file_id("no_suffix"), "no_suffix");
    }
}
