// ============================================================
// Layer 5 - Hard-Sample Classifier
// ============================================================
// Turns one annotation file into one HardType:
//
//   Step 1: Load and filter the record            (Layer 4 - data)
//   Step 2: Assign characters to every line       (assign.rs)
//   Step 3: Run both predicates on every line     (predicates.rs)
//   Step 4: Count how many lines fired each one
//   Step 5: LargeSpacing if any line had large spacing,
//           else Juxtaposed if any line was abreast,
//           else NotHard
//
// Both predicates run on every line, so the counts are complete
// even though only "> 0" matters for the label.

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::data::loader::load_annotation;
use crate::domain::annotation::LoadedAnnotation;
use crate::domain::hard_type::HardType;
use crate::domain::traits::AnnotationSource;
use crate::heuristics::assign::{assign_all, DEFAULT_CONTAINMENT_THRESHOLD};
use crate::heuristics::predicates::{
    is_large_character_spacing, is_multiple_lines_abreast, AbreastThresholds,
};

// ─── Thresholds ───────────────────────────────────────────────────────────────
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HardnessThresholds {
    /// Mean nearest-neighbour distance / mean scale must exceed this
    pub large_spacing: f64,

    /// Gap factor and scale-ratio bound for juxtaposed lines
    pub abreast: AbreastThresholds,

    /// Minimum fraction of a character covered by a line
    pub containment: f64,
}

impl Default for HardnessThresholds {
    fn default() -> Self {
        Self {
            large_spacing: 2.0,
            abreast:       AbreastThresholds::default(),
            containment:   DEFAULT_CONTAINMENT_THRESHOLD,
        }
    }
}

/// Per-file line counts for each predicate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineVerdicts {
    pub large_spacing_lines: usize,
    pub juxtaposed_lines:    usize,
}

impl LineVerdicts {
    /// Large spacing takes priority when both predicates fired.
    pub fn hard_type(&self) -> HardType {
        if self.large_spacing_lines > 0 {
            HardType::LargeSpacing
        } else if self.juxtaposed_lines > 0 {
            HardType::Juxtaposed
        } else {
            HardType::NotHard
        }
    }
}

// ─── HardSampleClassifier ─────────────────────────────────────────────────────
pub struct HardSampleClassifier {
    thresholds: HardnessThresholds,
}

impl HardSampleClassifier {
    pub fn new(thresholds: HardnessThresholds) -> Self {
        Self { thresholds }
    }

    /// Count, line by line, which predicates fire.
    pub fn verdicts(&self, ann: &LoadedAnnotation) -> LineVerdicts {
        let t = &self.thresholds;
        let line_chars = assign_all(&ann.line_polys, &ann.char_polys, t.containment);

        let mut verdicts = LineVerdicts::default();
        for (i, chars) in line_chars.iter().enumerate() {
            if is_large_character_spacing(chars, t.large_spacing) {
                verdicts.large_spacing_lines += 1;
            }
            if is_multiple_lines_abreast(i, &ann.line_polys, &line_chars, t.abreast) {
                verdicts.juxtaposed_lines += 1;
            }
        }
        verdicts
    }

    /// Load `file_name` from `source` and classify it.
    /// Any load or validation error is returned unchanged.
    pub fn classify_file<S: AnnotationSource + ?Sized>(
        &self,
        source:    &S,
        file_name: &str,
    ) -> Result<HardType> {
        let record = source.load(file_name)?;
        let ann = load_annotation(&record, file_name)?;
        let verdicts  = self.verdicts(&ann);
        let hard_type = verdicts.hard_type();

        tracing::debug!(
            "{}: {} lines, {} chars, large-spacing lines={}, juxtaposed lines={} → hard type {}",
            file_name,
            ann.line_count(),
            ann.char_count(),
            verdicts.large_spacing_lines,
            verdicts.juxtaposed_lines,
            hard_type.code(),
        );

        Ok(hard_type)
    }
}

impl Default for HardSampleClassifier {
    fn default() -> Self {
        Self::new(HardnessThresholds::default())
    }
}
