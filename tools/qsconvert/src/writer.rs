use std::{
    fs,
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use anyhow::Result;
use arrow::{datatypes::SchemaRef, record_batch::RecordBatch};
use parquet::{arrow::ArrowWriter, file::properties::WriterProperties};

pub trait RecordBatchWriter {
    fn write_batch(&mut self, batch: RecordBatch) -> Result<()>;
    fn finish(&mut self) -> Result<()>;
}

fn open_destination(output: Option<&Path>) -> Result<Box<dyn Write>> {
    Ok(match output {
        Some(path) => Box::new(BufWriter::new(fs::File::create(path)?)),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    })
}

// --- JSON Lines ---

pub struct JsonlWriter {
    dest: Box<dyn Write>,
    flush_each_batch: bool,
}

impl JsonlWriter {
    pub fn new(output: Option<&Path>) -> Result<Self> {
        Ok(Self {
            dest: open_destination(output)?,
            flush_each_batch: output.is_none(),
        })
    }
}

impl RecordBatchWriter for JsonlWriter {
    fn write_batch(&mut self, batch: RecordBatch) -> Result<()> {
        let mut json_writer = arrow::json::LineDelimitedWriter::new(Vec::new());
        json_writer.write(&batch)?;
        json_writer.finish()?;
        self.dest.write_all(&json_writer.into_inner())?;
        if self.flush_each_batch {
            self.dest.flush()?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.dest.flush()?;
        Ok(())
    }
}

// --- CSV ---

pub struct CsvWriter {
    dest: Box<dyn Write>,
    header_written: bool,
    flush_each_batch: bool,
}

impl CsvWriter {
    pub fn new(output: Option<&Path>) -> Result<Self> {
        Ok(Self {
            dest: open_destination(output)?,
            header_written: false,
            flush_each_batch: output.is_none(),
        })
    }
}

impl RecordBatchWriter for CsvWriter {
    fn write_batch(&mut self, batch: RecordBatch) -> Result<()> {
        let with_header = !self.header_written;
        self.header_written = true;
        let mut csv_writer = arrow::csv::WriterBuilder::new()
            .with_header(with_header)
            .build(&mut self.dest);
        csv_writer.write(&batch)?;
        drop(csv_writer);
        if self.flush_each_batch {
            self.dest.flush()?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.dest.flush()?;
        Ok(())
    }
}

// --- Parquet ---

/// Parquet output; an input without records still yields a valid file
/// carrying the schema.
pub struct ParquetWriter {
    output_path: PathBuf,
    schema: SchemaRef,
    inner: Option<ArrowWriter<fs::File>>,
}

impl ParquetWriter {
    pub fn new(output: &Path, schema: SchemaRef) -> Self {
        Self {
            output_path: output.to_path_buf(),
            schema,
            inner: None,
        }
    }

    fn writer(&mut self) -> Result<&mut ArrowWriter<fs::File>> {
        if self.inner.is_none() {
            let file = fs::File::create(&self.output_path)?;
            let props = WriterProperties::builder().build();
            self.inner = Some(ArrowWriter::try_new(
                file,
                self.schema.clone(),
                Some(props),
            )?);
        }
        self.inner
            .as_mut()
            .ok_or_else(|| anyhow::anyhow!("parquet writer was not initialized"))
    }
}

impl RecordBatchWriter for ParquetWriter {
    fn write_batch(&mut self, batch: RecordBatch) -> Result<()> {
        self.writer()?.write(&batch)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer()?;
        if let Some(writer) = self.inner.take() {
            writer.close()?;
        }
        eprintln!("Written to {}", self.output_path.display());
        Ok(())
    }
}
