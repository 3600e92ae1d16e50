use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use qsrecord::{
    arrow::scalar_type_to_datatype,
    core::{RecordDecoder, format_schema_with},
};

use super::SchemaDeclArgs;

#[derive(Args)]
pub struct SchemaArgs {
    #[command(flatten)]
    decl: SchemaDeclArgs,

    /// Output file path (stdout if not specified)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl SchemaArgs {
    pub fn run(self) -> Result<()> {
        let decoder = self.decl.decoder()?;
        let text = format_schema_with(decoder.schema(), |field| {
            Some(format!("arrow: {}", scalar_type_to_datatype(field.scalar_type)))
        });

        match self.output {
            Some(path) => fs::write(path, text)?,
            None => print!("{text}"),
        }
        Ok(())
    }
}
