// ============================================================
// Layer 1 - CLI / Presentation Layer
// ============================================================
// Parses the command line and hands off to Layer 2.
//
//   tda-val-split --data_root /data/ReCTS/
//
// Missing --data_root is rejected by clap before any directory
// is touched.

pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::PartitionArgs;

use crate::application::partition_use_case::PartitionUseCase;

#[derive(Parser, Debug)]
#[command(
    name = "tda-val-split",
    version,
    about = "Pick hard text-detection samples as a validation set and write train/val file lists."
)]
pub struct Cli {
    #[command(flatten)]
    pub args: PartitionArgs,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let use_case = PartitionUseCase::new(self.args.into());
        tracing::info!(
            "Reading annotations from '{}'",
            use_case.config().gt_dir().display()
        );

        let report = use_case.execute()?;

        println!(
            "{} files: {} train, {} val ({} large-spacing, {} juxtaposed hard samples)",
            report.total_files,
            report.train_count,
            report.val_count,
            report.large_spacing,
            report.juxtaposed,
        );
        println!("train list: {}", report.train_list.display());
        println!("val list:   {}", report.val_list.display());
        Ok(())
    }
}
