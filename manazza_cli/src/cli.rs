use clap::Parser;
use log::Level;

use crate::commands::{
    metadata::{CheckMetadata, ShowMetadata},
    pages::{Export, RenderPage},
};

/// Portfolio site admin CLI
#[derive(Parser)]
#[command(version)]
pub struct Cli {
    #[arg(long, default_value_t = Level::Warn)]
    pub log_level: Level,

    #[clap(subcommand)]
    pub subcmd: SubCommand,
}

#[derive(Parser)]
pub enum SubCommand {
    RenderPage(RenderPage),
    Export(Export),
    ShowMetadata(ShowMetadata),
    CheckMetadata(CheckMetadata),
}
