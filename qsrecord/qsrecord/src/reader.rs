//! Line-oriented record file reader.

use std::{borrow::Cow, fs, path::Path, sync::Arc};

use arrow::{datatypes::SchemaRef, record_batch::RecordBatch};
use memmap2::Mmap;
use qsrecord_arrow::{records_to_record_batch, schema_to_arrow_schema};
use qsrecord_core::{DecodedRecord, DecoderError, RecordDecoder, Schema};
use rayon::prelude::*;

use crate::error::ReaderError;

type CallbackError = Box<dyn std::error::Error + Send + Sync>;

/// What to do with a line that fails to decode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BadRecordPolicy {
    /// Stop reading and return the decode error. Default.
    #[default]
    Fail,
    /// Log the error, count the line as skipped, and keep reading.
    Skip,
}

/// Counters returned after a file has been read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReadStats {
    /// Rows successfully decoded and handed to the callback.
    pub records: usize,
    /// Lines dropped under [`BadRecordPolicy::Skip`].
    pub skipped: usize,
}

/// Reads newline-delimited record files and decodes every line with a
/// [`RecordDecoder`].
pub struct RecordReader {
    decoder: Arc<dyn RecordDecoder>,
    arrow_schema: SchemaRef,
    batch_size: usize,
    bad_record_policy: BadRecordPolicy,
    parallel: bool,
}

/// Builder for configuring [`RecordReader`].
pub struct RecordReaderBuilder {
    decoder: Option<Arc<dyn RecordDecoder>>,
    batch_size: usize,
    bad_record_policy: BadRecordPolicy,
    parallel: bool,
}

impl RecordReader {
    /// Create a builder for [`RecordReader`].
    pub fn builder() -> RecordReaderBuilder {
        RecordReaderBuilder {
            decoder: None,
            batch_size: 1024,
            bad_record_policy: BadRecordPolicy::Fail,
            parallel: true,
        }
    }

    /// Schema of every decoded row.
    pub fn schema(&self) -> &Schema {
        self.decoder.schema()
    }

    /// Arrow schema of every emitted RecordBatch.
    pub fn arrow_schema(&self) -> SchemaRef {
        Arc::clone(&self.arrow_schema)
    }

    fn mmap_file(&self, path: &Path) -> Result<Mmap, ReaderError> {
        let file = fs::File::open(path)?;
        Ok(unsafe { Mmap::map(&file) }?)
    }

    /// Count the records (lines) in a file without decoding them.
    pub fn line_count(&self, path: &Path) -> Result<usize, ReaderError> {
        let mmap = self.mmap_file(path)?;
        Ok(split_lines(&mmap).count())
    }

    /// Decode every line of `path` and pass each row to `callback`.
    pub fn for_each_record(
        &self,
        path: &Path,
        mut callback: impl FnMut(DecodedRecord) -> Result<(), CallbackError>,
    ) -> Result<ReadStats, ReaderError> {
        tracing::debug!(path = %path.display(), "reading records");
        let mmap = self.mmap_file(path)?;
        let mut stats = ReadStats::default();

        for (line, raw) in split_lines(&mmap) {
            match self.decoder.decode(&raw) {
                Ok(record) => {
                    callback(record).map_err(ReaderError::Callback)?;
                    stats.records += 1;
                }
                Err(e) => self.handle_bad_record(line, e, &mut stats)?,
            }
        }

        Ok(stats)
    }

    /// Decode every line of `path` and emit Arrow RecordBatches of at most
    /// `batch_size` rows to `callback`.
    pub fn for_each_record_batch(
        &self,
        path: &Path,
        mut callback: impl FnMut(RecordBatch) -> Result<(), CallbackError>,
    ) -> Result<ReadStats, ReaderError> {
        tracing::debug!(
            path = %path.display(),
            batch_size = self.batch_size,
            "reading record batches"
        );
        let mmap = self.mmap_file(path)?;
        let mut stats = ReadStats::default();
        let mut chunk = Vec::with_capacity(self.batch_size);

        for line in split_lines(&mmap) {
            chunk.push(line);
            if chunk.len() >= self.batch_size {
                self.flush_chunk(&mut chunk, &mut stats, &mut callback)?;
            }
        }
        self.flush_chunk(&mut chunk, &mut stats, &mut callback)?;

        Ok(stats)
    }

    fn flush_chunk<F>(
        &self,
        chunk: &mut Vec<(usize, Cow<'_, str>)>,
        stats: &mut ReadStats,
        callback: &mut F,
    ) -> Result<(), ReaderError>
    where
        F: FnMut(RecordBatch) -> Result<(), CallbackError>,
    {
        if chunk.is_empty() {
            return Ok(());
        }

        let rows = self.decode_chunk(chunk, stats)?;
        chunk.clear();
        if rows.is_empty() {
            return Ok(());
        }

        let batch = records_to_record_batch(&self.arrow_schema, &rows)?;
        tracing::debug!(rows = rows.len(), "emitting record batch");
        stats.records += rows.len();
        callback(batch).map_err(ReaderError::Callback)
    }

    /// Decode a chunk of lines, each into its own freshly allocated row.
    fn decode_chunk(
        &self,
        lines: &[(usize, Cow<'_, str>)],
        stats: &mut ReadStats,
    ) -> Result<Vec<DecodedRecord>, ReaderError> {
        let decoder = self.decoder.as_ref();
        let decode = |(line, raw): &(usize, Cow<'_, str>)| (*line, decoder.decode(raw));
        let results: Vec<(usize, Result<DecodedRecord, DecoderError>)> = if self.parallel {
            lines.par_iter().map(decode).collect()
        } else {
            lines.iter().map(decode).collect()
        };

        let mut rows = Vec::with_capacity(results.len());
        for (line, result) in results {
            match result {
                Ok(record) => rows.push(record),
                Err(e) => self.handle_bad_record(line, e, stats)?,
            }
        }
        Ok(rows)
    }

    fn handle_bad_record(
        &self,
        line: usize,
        error: DecoderError,
        stats: &mut ReadStats,
    ) -> Result<(), ReaderError> {
        let skippable = matches!(
            error,
            DecoderError::MalformedRecord { .. } | DecoderError::TypeCoercion { .. }
        );
        if self.bad_record_policy == BadRecordPolicy::Skip && skippable {
            tracing::warn!(line, error = %error, "skipping bad record");
            stats.skipped += 1;
            return Ok(());
        }
        Err(ReaderError::RecordDecodeFailed {
            line,
            source: error,
        })
    }
}

impl RecordReaderBuilder {
    /// Set the decoder applied to every line.
    pub fn with_decoder(mut self, decoder: Box<dyn RecordDecoder>) -> Self {
        self.decoder = Some(Arc::from(decoder));
        self
    }

    /// Set a decoder shared with other readers.
    pub fn with_shared_decoder(mut self, decoder: Arc<dyn RecordDecoder>) -> Self {
        self.decoder = Some(decoder);
        self
    }

    /// Set the number of rows per RecordBatch (default: 1024, minimum: 1).
    pub fn with_batch_size(mut self, size: usize) -> Self {
        self.batch_size = size.max(1);
        self
    }

    /// Set how lines that fail to decode are handled (default: fail).
    pub fn with_bad_record_policy(mut self, policy: BadRecordPolicy) -> Self {
        self.bad_record_policy = policy;
        self
    }

    /// Decode each batch in parallel on the rayon pool (default: enabled).
    pub fn with_parallelism(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Build the reader.
    pub fn build(self) -> Result<RecordReader, ReaderError> {
        let decoder = self.decoder.ok_or(ReaderError::NoDecoder)?;
        let arrow_schema = Arc::new(schema_to_arrow_schema(decoder.schema()));
        Ok(RecordReader {
            decoder,
            arrow_schema,
            batch_size: self.batch_size,
            bad_record_policy: self.bad_record_policy,
            parallel: self.parallel,
        })
    }
}

/// Split file contents into 1-based numbered lines.
///
/// A trailing `\r` is stripped from each line, no record follows a final
/// newline, and invalid UTF-8 is replaced with U+FFFD.
fn split_lines(data: &[u8]) -> impl Iterator<Item = (usize, Cow<'_, str>)> {
    let body = data.strip_suffix(b"\n").unwrap_or(data);
    let count = if data.is_empty() { 0 } else { usize::MAX };
    body.split(|b| *b == b'\n')
        .take(count)
        .enumerate()
        .map(|(i, line)| {
            let line = line.strip_suffix(b"\r").unwrap_or(line);
            (i + 1, String::from_utf8_lossy(line))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(data: &[u8]) -> Vec<(usize, String)> {
        split_lines(data)
            .map(|(n, line)| (n, line.into_owned()))
            .collect()
    }

    #[test]
    fn split_lines_handles_trailing_newline_and_crlf() {
        assert_eq!(
            collect(b"a\tx=1\r\nb\tx=2\n"),
            vec![(1, "a\tx=1".to_string()), (2, "b\tx=2".to_string())]
        );
    }

    #[test]
    fn split_lines_without_trailing_newline() {
        assert_eq!(collect(b"a\nb"), vec![(1, "a".into()), (2, "b".into())]);
    }

    #[test]
    fn split_lines_empty_input_has_no_lines() {
        assert!(collect(b"").is_empty());
    }

    #[test]
    fn split_lines_keeps_blank_lines() {
        assert_eq!(
            collect(b"a\n\nb\n"),
            vec![(1, "a".into()), (2, String::new()), (3, "b".into())]
        );
    }

    #[test]
    fn split_lines_replaces_invalid_utf8() {
        assert_eq!(collect(b"k\xff\tx=1"), vec![(1, "k\u{fffd}\tx=1".into())]);
    }
}
