use std::{io::Write, path::Path};

use arrow::array::{Array, Int32Array, StringArray};
use qsrecord::{BadRecordPolicy, ReadStats, ReaderError, RecordReader};
use qsrecord_core::{DecoderError, Value};
use qsrecord_querystring::QueryStringDecoder;
use tempfile::NamedTempFile;

fn write_lines(lines: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(lines.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

fn reader_builder() -> qsrecord::RecordReaderBuilder {
    let decoder =
        QueryStringDecoder::from_declarations("key,n,name", "string,int,string").unwrap();
    RecordReader::builder().with_decoder(Box::new(decoder))
}

fn batch_rows(reader: &RecordReader, path: &Path) -> (Vec<usize>, ReadStats) {
    let mut rows = Vec::new();
    let stats = reader
        .for_each_record_batch(path, |batch| {
            rows.push(batch.num_rows());
            Ok(())
        })
        .unwrap();
    (rows, stats)
}

#[test]
fn build_without_decoder_fails() {
    let err = RecordReader::builder().build().err().unwrap();
    assert!(matches!(err, ReaderError::NoDecoder));
}

#[test]
fn for_each_record_decodes_every_line() {
    let file = write_lines("k1\tn=1&name=a%20b\nk2\tn=2\n");
    let reader = reader_builder().build().unwrap();

    let mut records = Vec::new();
    let stats = reader
        .for_each_record(file.path(), |record| {
            records.push(record);
            Ok(())
        })
        .unwrap();

    assert_eq!(stats, ReadStats { records: 2, skipped: 0 });
    assert_eq!(records[0].get(0), Some(&Value::text("k1")));
    assert_eq!(records[0].get(2), Some(&Value::text("a b")));
    assert_eq!(records[1].get(1), Some(&Value::Int(2)));
    assert_eq!(records[1].get(2), None);
}

#[test]
fn for_each_record_batch_emits_batches_by_batch_size() {
    let file = write_lines("a\tn=1\nb\tn=2\nc\tn=3\n");
    let reader = reader_builder().with_batch_size(2).build().unwrap();

    let (rows, stats) = batch_rows(&reader, file.path());
    assert_eq!(rows, vec![2, 1]);
    assert_eq!(stats.records, 3);
}

#[test]
fn for_each_record_batch_sequential_matches_parallel() {
    let lines: String = (0..50).map(|i| format!("k{i}\tn={i}\n")).collect();
    let file = write_lines(&lines);

    let collect = |parallel: bool| {
        let reader = reader_builder()
            .with_batch_size(16)
            .with_parallelism(parallel)
            .build()
            .unwrap();
        let mut values = Vec::new();
        reader
            .for_each_record_batch(file.path(), |batch| {
                let n = batch
                    .column(1)
                    .as_any()
                    .downcast_ref::<Int32Array>()
                    .unwrap();
                values.extend(n.iter().flatten());
                Ok(())
            })
            .unwrap();
        values
    };

    let expected: Vec<i32> = (0..50).collect();
    assert_eq!(collect(true), expected);
    assert_eq!(collect(false), expected);
}

#[test]
fn for_each_record_batch_column_contents() {
    let file = write_lines("k1\tname=x&n=7\r\nk2\tother=1\r\n");
    let reader = reader_builder().build().unwrap();

    let mut batches = Vec::new();
    reader
        .for_each_record_batch(file.path(), |batch| {
            batches.push(batch);
            Ok(())
        })
        .unwrap();
    assert_eq!(batches.len(), 1);

    let batch = &batches[0];
    assert_eq!(batch.schema(), reader.arrow_schema());
    let keys = batch
        .column(0)
        .as_any()
        .downcast_ref::<StringArray>()
        .unwrap();
    assert_eq!(keys.value(0), "k1");
    assert_eq!(keys.value(1), "k2");
    let n = batch
        .column(1)
        .as_any()
        .downcast_ref::<Int32Array>()
        .unwrap();
    assert_eq!(n.value(0), 7);
    assert!(n.is_null(1));
}

#[test]
fn bad_record_fails_by_default_with_line_number() {
    let file = write_lines("a\tn=1\nno-tab\nc\tn=3\n");
    let reader = reader_builder().build().unwrap();

    let err = reader
        .for_each_record_batch(file.path(), |_batch| Ok(()))
        .unwrap_err();
    match err {
        ReaderError::RecordDecodeFailed { line, source } => {
            assert_eq!(line, 2);
            assert!(matches!(source, DecoderError::MalformedRecord { .. }));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn bad_records_are_skipped_when_configured() {
    let file = write_lines("a\tn=1\nno-tab\nc\tn=oops\nd\tn=4\n");
    let reader = reader_builder()
        .with_bad_record_policy(BadRecordPolicy::Skip)
        .build()
        .unwrap();

    let (rows, stats) = batch_rows(&reader, file.path());
    assert_eq!(rows, vec![2]);
    assert_eq!(stats, ReadStats { records: 2, skipped: 2 });

    let stats = reader.for_each_record(file.path(), |_record| Ok(())).unwrap();
    assert_eq!(stats, ReadStats { records: 2, skipped: 2 });
}

#[test]
fn fully_skipped_batch_is_not_emitted() {
    let file = write_lines("bad\nworse\n");
    let reader = reader_builder()
        .with_bad_record_policy(BadRecordPolicy::Skip)
        .build()
        .unwrap();

    let (rows, stats) = batch_rows(&reader, file.path());
    assert!(rows.is_empty());
    assert_eq!(stats, ReadStats { records: 0, skipped: 2 });
}

#[test]
fn for_each_record_batch_propagates_callback_error() {
    let file = write_lines("a\tn=1\n");
    let reader = reader_builder().build().unwrap();

    let err = reader
        .for_each_record_batch(file.path(), |_batch| Err("callback failed".into()))
        .unwrap_err();
    assert!(matches!(err, ReaderError::Callback(_)));
    assert_eq!(err.to_string(), "callback failed");
}

#[test]
fn line_count_counts_records() {
    let file = write_lines("a\tn=1\nb\tn=2\nc\tn=3");
    let reader = reader_builder().build().unwrap();
    assert_eq!(reader.line_count(file.path()).unwrap(), 3);
}

#[test]
fn missing_file_is_io_error() {
    let reader = reader_builder().build().unwrap();
    let err = reader
        .line_count(Path::new("/nonexistent/qsrecord/input.tsv"))
        .unwrap_err();
    assert!(matches!(err, ReaderError::Io(_)));
}
