use std::io::{self, Write};

use anyhow::Result;
use clap::Parser;

use runtime_generics::{DemoConfig, Demonstration, Mode};

#[derive(Parser, Debug)]
#[command(name = "runtime_generics")]
#[command(about = "Build typed lists from type names resolved at run time")]
pub struct Args {
    /// Pass `fail` to push a string into the integer list
    #[arg(allow_hyphen_values = true)]
    pub mode: Option<String>,
}

impl Args {
    pub fn mode(&self) -> Mode {
        Mode::from_arg(self.mode.as_deref())
    }
}

pub struct App {
    mode: Mode,
    config: DemoConfig,
}

impl App {
    pub fn new(args: &Args) -> Self {
        Self::with_config(args, DemoConfig::default())
    }

    pub fn with_config(args: &Args, config: DemoConfig) -> Self {
        Self {
            mode: args.mode(),
            config,
        }
    }

    /// Runs the demonstration and prints both sizes to `out`.
    ///
    /// Errors from the demonstration are not handled here. They propagate
    /// to the caller and nothing is written.
    pub fn run_with<W: Write>(self, out: &mut W) -> Result<()> {
        let report = Demonstration::new(self.config).run(self.mode)?;
        report.print(out)?;
        out.flush()?;
        Ok(())
    }

    pub fn run(self) -> Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.run_with(&mut out)
    }
}
