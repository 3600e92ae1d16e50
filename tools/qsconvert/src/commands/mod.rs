pub mod convert;
pub mod schema;

use clap::Args;
use qsrecord::{core::DecoderError, querystring::QueryStringDecoder};

/// Column declarations shared by every subcommand.
#[derive(Args)]
pub struct SchemaDeclArgs {
    /// Comma-separated column names (a column named `key` binds the record key)
    #[arg(short, long)]
    columns: String,

    /// Comma-separated column types: double, bigint, int, tinyint, float, boolean, string
    #[arg(long = "types")]
    types: String,
}

impl SchemaDeclArgs {
    pub fn decoder(&self) -> Result<QueryStringDecoder, DecoderError> {
        QueryStringDecoder::from_declarations(&self.columns, &self.types)
    }
}
