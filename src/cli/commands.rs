// ============================================================
// Layer 1 - CLI Arguments
// ============================================================
// The tool takes exactly one argument: the dataset root.
// Every other parameter is fixed (see PartitionConfig).
//
// clap's derive macros generate --help, the "required argument"
// error, and the String → PathBuf conversion.

use clap::Args;
use std::path::PathBuf;

use crate::application::partition_use_case::PartitionConfig;

#[derive(Args, Debug)]
pub struct PartitionArgs {
    /// Dataset root; annotations are read from <DATA_ROOT>/train/gt/
    #[arg(long = "data_root", visible_alias = "data-root", value_name = "DATA_ROOT")]
    pub data_root: PathBuf,
}

/// The application layer never sees clap types.
impl From<PartitionArgs> for PartitionConfig {
    fn from(a: PartitionArgs) -> Self {
        PartitionConfig {
            data_root: a.data_root,
            ..PartitionConfig::default()
        }
    }
}
