use anyhow::Error;
use clap::Parser;

use manazza_layout::{
    metadata::SITE_METADATA,
    structured_data::SITE_PERSON,
};

/// Print JSON-LD document embedded into every page
#[derive(Parser)]
pub struct ShowMetadata {}

impl ShowMetadata {
    fn json_ld(&self) -> Result<String, Error> {
        let json_ld = serde_json::to_string_pretty(&SITE_PERSON)?;
        Ok(json_ld)
    }

    pub fn execute(&self) -> Result<(), Error> {
        let json_ld = self.json_ld()?;
        println!("{json_ld}");
        Ok(())
    }
}

/// Validate page metadata (URLs, title)
#[derive(Parser)]
pub struct CheckMetadata {}

impl CheckMetadata {
    pub fn execute(&self) -> Result<(), Error> {
        SITE_METADATA.validate()?;
        println!("metadata is valid: {}", SITE_METADATA.canonical);
        Ok(())
    }
}
