// ============================================================
// Layer 4 - Hard-Sample Train/Validation Splitter
// ============================================================
// The validation set is NOT a uniform random slice. It is built
// only from hard samples:
//
//   1. Every file id lands in at most one bucket:
//        large_spacing  (HardType::LargeSpacing)
//        juxtaposed     (HardType::Juxtaposed)
//   2. Each bucket is shuffled and cut to at most `cap` ids.
//   3. validation = large_spacing[..cap] ++ juxtaposed[..cap]
//   4. train      = every id not in validation, enumeration order
//
// The rng is passed in. Shuffling large_spacing first and
// juxtaposed second, with the same seed, reproduces the same
// validation list every time.
//
// Uses Fisher-Yates shuffle via rand::seq::SliceRandom.
//
// Reference: rand crate documentation

use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;

use crate::domain::hard_type::HardType;

/// Default number of ids kept from each hard bucket.
pub const DEFAULT_BUCKET_CAP: usize = 500;

/// File ids grouped by hard type, in classification order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HardBuckets {
    pub large_spacing: Vec<String>,
    pub juxtaposed:    Vec<String>,
}

impl HardBuckets {
    pub fn new() -> Self {
        Self::default()
    }

    /// File `id` under `hard_type`; NotHard ids are not kept.
    pub fn push(&mut self, id: impl Into<String>, hard_type: HardType) {
        match hard_type {
            HardType::LargeSpacing => self.large_spacing.push(id.into()),
            HardType::Juxtaposed   => self.juxtaposed.push(id.into()),
            HardType::NotHard      => {}
        }
    }

    pub fn hard_count(&self) -> usize {
        self.large_spacing.len() + self.juxtaposed.len()
    }
}

/// Shuffle and cap both buckets, returning the validation ids.
pub fn sample_validation<R: Rng + ?Sized>(
    buckets: HardBuckets,
    cap:     usize,
    rng:     &mut R,
) -> Vec<String> {
    let HardBuckets { mut large_spacing, mut juxtaposed } = buckets;

    large_spacing.shuffle(rng);
    juxtaposed.shuffle(rng);

    large_spacing.truncate(cap);
    juxtaposed.truncate(cap);

    tracing::debug!(
        "Validation sample: {} large-spacing, {} juxtaposed (cap {})",
        large_spacing.len(),
        juxtaposed.len(),
        cap,
    );

    large_spacing.extend(juxtaposed);
    large_spacing
}

/// Split `all_ids` into (train, validation).
///
/// `all_ids` keeps its order in the train list. The validation list
/// comes from `sample_validation`.
pub fn split_train_val<R: Rng + ?Sized>(
    all_ids: &[String],
    buckets: HardBuckets,
    cap:     usize,
    rng:     &mut R,
) -> (Vec<String>, Vec<String>) {
    let val = sample_validation(buckets, cap, rng);

    let held_out: HashSet<&str> = val.iter().map(String::as_str).collect();
    let train: Vec<String> = all_ids
        .iter()
        .filter(|id| !held_out.contains(id.as_str()))
        .cloned()
        .collect();

    (train, val)
}
