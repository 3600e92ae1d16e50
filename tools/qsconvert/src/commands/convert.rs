use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use qsrecord::{BadRecordPolicy, RecordReader};

use super::SchemaDeclArgs;
use crate::{
    format::OutputFormat,
    writer::{CsvWriter, JsonlWriter, ParquetWriter, RecordBatchWriter},
};

#[derive(Args)]
pub struct ConvertArgs {
    /// Path to the record file (one `<key>\t<query>` record per line)
    input: PathBuf,

    #[command(flatten)]
    decl: SchemaDeclArgs,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Jsonl)]
    format: OutputFormat,

    /// Output file path (stdout if not specified)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Number of records per RecordBatch
    #[arg(long, default_value_t = 1024)]
    batch_size: usize,

    /// Skip records that fail to decode instead of aborting
    #[arg(long)]
    skip_bad_records: bool,

    /// Decode on the calling thread only
    #[arg(long)]
    sequential: bool,
}

impl ConvertArgs {
    pub fn run(self) -> Result<()> {
        let policy = if self.skip_bad_records {
            BadRecordPolicy::Skip
        } else {
            BadRecordPolicy::Fail
        };
        let reader = RecordReader::builder()
            .with_decoder(Box::new(self.decl.decoder()?))
            .with_batch_size(self.batch_size)
            .with_bad_record_policy(policy)
            .with_parallelism(!self.sequential)
            .build()?;

        let count = reader.line_count(&self.input)?;
        let pb = ProgressBar::new(count as u64);
        pb.set_style(
            ProgressStyle::with_template(
                "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({per_sec}, ETA: {eta})",
            )?
            .progress_chars("=>-"),
        );

        let mut writer: Box<dyn RecordBatchWriter> = match self.format {
            OutputFormat::Jsonl => Box::new(JsonlWriter::new(self.output.as_deref())?),
            OutputFormat::Csv => Box::new(CsvWriter::new(self.output.as_deref())?),
            OutputFormat::Parquet => {
                let path = self
                    .output
                    .as_deref()
                    .ok_or_else(|| anyhow::anyhow!("Parquet output requires -o <file>"))?;
                Box::new(ParquetWriter::new(path, reader.arrow_schema()))
            }
        };

        let stats = reader.for_each_record_batch(&self.input, |batch| {
            let n = batch.num_rows() as u64;
            writer.write_batch(batch)?;
            pb.inc(n);
            Ok(())
        })?;

        writer.finish()?;
        pb.finish_with_message("done");
        if stats.skipped > 0 {
            eprintln!(
                "Skipped {} of {} records",
                stats.skipped,
                stats.records + stats.skipped
            );
        }
        Ok(())
    }
}
