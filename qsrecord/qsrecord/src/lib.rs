mod error;
mod reader;

pub use error::ReaderError;
pub use qsrecord_arrow as arrow;
pub use qsrecord_core as core;
pub use qsrecord_querystring as querystring;
pub use reader::{BadRecordPolicy, ReadStats, RecordReader, RecordReaderBuilder};
