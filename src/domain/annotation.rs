// ============================================================
// Layer 3 - Annotation Domain Types
// ============================================================
// One annotation file describes one document image:
//
//   {
//     "lines": [ { "points": [8 numbers], "transcription": "...", "ignore": 0 }, ... ],
//     "chars": [ { "points": [8 numbers], "transcription": "x",   "ignore": 0 }, ... ]
//   }
//
// AnnotationRecord mirrors that JSON exactly (serde does the
// parsing). LoadedAnnotation is what the loader hands to the
// classifier: only non-ignored entries, already reshaped into
// Quads, with their transcriptions in matching order.
//
// Reference: serde documentation (derive)
//            Rust Book §8 (Vectors)

use serde::{Deserialize, Serialize};

use crate::domain::polygon::Quad;

/// A single line or character entry as stored on disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotationEntry {
    /// Flattened polygon coordinates, expected to hold 8 values
    pub points: Vec<f64>,

    /// Ground-truth text; carried through but unused by the classifier
    #[serde(default)]
    pub transcription: String,

    /// 1 marks an entry that should not take part in evaluation
    pub ignore: u8,
}

impl AnnotationEntry {
    #[cfg(test)]
    pub fn new(points: Vec<f64>, transcription: impl Into<String>, ignore: u8) -> Self {
        Self {
            points,
            transcription: transcription.into(),
            ignore,
        }
    }

    pub fn is_ignored(&self) -> bool {
        self.ignore != 0
    }
}

/// The full record for one image.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnnotationRecord {
    pub lines: Vec<AnnotationEntry>,
    pub chars: Vec<AnnotationEntry>,
}

/// Filtered, reshaped polygons for one image.
///
/// `line_polys[i]` is labelled by `line_labels[i]`, and likewise
/// for characters. Order is the order of the source file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadedAnnotation {
    pub line_polys:  Vec<Quad>,
    pub line_labels: Vec<String>,
    pub char_polys:  Vec<Quad>,
    pub char_labels: Vec<String>,
}

impl LoadedAnnotation {
    pub fn line_count(&self) -> usize {
        debug_assert_eq!(self.line_polys.len(), self.line_labels.len());
        self.line_polys.len()
    }

    pub fn char_count(&self) -> usize {
        debug_assert_eq!(self.char_polys.len(), self.char_labels.len());
        self.char_polys.len()
    }
}
