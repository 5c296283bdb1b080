// ============================================================
// Layer 2 - PartitionUseCase
// ============================================================
// Orchestrates the full partitioning run in order:
//
//   Step 1: List annotation files        (Layer 4 - data)
//   Step 2: Classify every file          (Layer 5 - heuristics)
//   Step 3: Bucket hard file ids         (Layer 4 - data)
//   Step 4: Sample validation, derive    (Layer 4 - data)
//           train from the rest
//   Step 5: Write both lists             (Layer 6 - infra)
//
// A malformed annotation anywhere aborts the run in Step 2,
// before any list file is touched.

use anyhow::Result;
use rand::{rngs::StdRng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::data::{
    loader::{GtDirLoader, ANNOTATION_SUFFIX},
    splitter::{split_train_val, HardBuckets, DEFAULT_BUCKET_CAP},
};
use crate::domain::traits::AnnotationSource;
use crate::heuristics::classifier::{HardSampleClassifier, HardnessThresholds};
use crate::infra::list_writer::ListWriter;

// ─── Partition Configuration ─────────────────────────────────────────────────
// Every fixed parameter of a run. Only data_root comes from
// the command line; the rest keep their defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartitionConfig {
    pub data_root:          PathBuf,
    pub list_dir:           PathBuf,
    pub train_list_name:    String,
    pub val_list_name:      String,
    pub annotation_suffix:  String,
    pub val_cap_per_bucket: usize,
    pub thresholds:         HardnessThresholds,
    pub seed:               u64,
    pub progress_every:     usize,
}

impl Default for PartitionConfig {
    fn default() -> Self {
        Self {
            data_root:          PathBuf::from("."),
            list_dir:           PathBuf::from("train_val_list"),
            train_list_name:    "TDA_ReCTS_train_list.txt".to_string(),
            val_list_name:      "TDA_ReCTS_val_list.txt".to_string(),
            annotation_suffix:  ANNOTATION_SUFFIX.to_string(),
            val_cap_per_bucket: DEFAULT_BUCKET_CAP,
            thresholds:         HardnessThresholds::default(),
            seed:               123456,
            progress_every:     1000,
        }
    }
}

impl PartitionConfig {
    /// `<data_root>/train/gt`
    pub fn gt_dir(&self) -> PathBuf {
        self.data_root.join("train").join("gt")
    }
}

/// What a run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartitionReport {
    pub total_files:   usize,
    pub large_spacing: usize,
    pub juxtaposed:    usize,
    pub train_count:   usize,
    pub val_count:     usize,
    pub train_list:    PathBuf,
    pub val_list:      PathBuf,
}

// ─── PartitionUseCase ─────────────────────────────────────────────────────────
pub struct PartitionUseCase {
    config: PartitionConfig,
}

impl PartitionUseCase {
    pub fn new(config: PartitionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PartitionConfig {
        &self.config
    }

    /// Run against `<data_root>/train/gt`.
    pub fn execute(&self) -> Result<PartitionReport> {
        let source = GtDirLoader::new(self.config.gt_dir()).with_suffix(&self.config.annotation_suffix);
        self.execute_with(&source)
    }

    /// Run against any annotation source.
    pub fn execute_with<S: AnnotationSource + ?Sized>(&self, source: &S) -> Result<PartitionReport> {
        let cfg = &self.config;

        // ── Step 1: List annotation files ────────────────────────────────────
        let file_names = source.file_names()?;
        let total = file_names.len();

        // ── Step 2 + 3: Classify and bucket ──────────────────────────────────
        let classifier = HardSampleClassifier::new(cfg.thresholds);
        let mut buckets = HardBuckets::new();
        let mut all_ids = Vec::with_capacity(total);

        for (i, file_name) in file_names.iter().enumerate() {
            if cfg.progress_every > 0 && i % cfg.progress_every == 0 {
                tracing::info!("{} / {}", i, total);
            }

            let hard_type = classifier.classify_file(source, file_name)?;
            let id = source.file_id(file_name);
            if hard_type.is_hard() {
                tracing::debug!("{} is hard ({})", id, hard_type);
            }
            buckets.push(id.clone(), hard_type);
            all_ids.push(id);
        }

        let large_spacing = buckets.large_spacing.len();
        let juxtaposed    = buckets.juxtaposed.len();
        tracing::info!(
            "Classified {} files: {} hard ({} large-spacing, {} juxtaposed)",
            total,
            buckets.hard_count(),
            large_spacing,
            juxtaposed,
        );

        // ── Step 4: Sample validation, rest is train ─────────────────────────
        // One seeded rng per run, consumed by exactly the two bucket shuffles
        let mut rng = StdRng::seed_from_u64(cfg.seed);
        let (train, val) = split_train_val(&all_ids, buckets, cfg.val_cap_per_bucket, &mut rng);
        tracing::info!("Split: {} train, {} validation", train.len(), val.len());

        // ── Step 5: Write lists ──────────────────────────────────────────────
        let writer     = ListWriter::new(&cfg.list_dir)?;
        let train_list = writer.write(&cfg.train_list_name, &train)?;
        let val_list   = writer.write(&cfg.val_list_name, &val)?;

        Ok(PartitionReport {
            total_files: total,
            large_spacing,
            juxtaposed,
            train_count: train.len(),
            val_count:   val.len(),
            train_list,
            val_list,
        })
    }
}
