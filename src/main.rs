mod cli;

use clap::Parser;

use crate::cli::{App, Args};

fn main() -> anyhow::Result<()> {
    cli::init_tracing();

    let args = Args::parse();
    App::new(&args).run()
}
