use clap::Parser;

use manazza::{
    init::{initialize_app, prepare_layout},
    logger::configure_logger,
};

mod cli;
mod commands;

use cli::{Cli, SubCommand};

fn main() {
    let opts: Cli = Cli::parse();

    match opts.subcmd {
        SubCommand::RenderPage(cmd) => {
            configure_logger(opts.log_level);
            cmd.execute().unwrap();
        },
        SubCommand::ShowMetadata(cmd) => cmd.execute().unwrap(),
        SubCommand::CheckMetadata(cmd) => cmd.execute().unwrap(),
        SubCommand::Export(cmd) => {
            // Export requires initialized app
            let config = initialize_app(Some(opts.log_level));
            let layout = prepare_layout(&config);
            cmd.execute(&config, &layout).unwrap();
        },
    };
}
