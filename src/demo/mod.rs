//! The demonstration routine: build lists for type names known only at run
//! time, fill them, and optionally break one of them on purpose.

pub mod config;

pub use config::DemoConfig;

use std::io::{self, Write};

use tracing::{debug, info};

use crate::core::Result;
use crate::list::DynamicList;
use crate::registry::TypeRegistry;

/// Which path the demonstration takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Standard,
    /// Push a mismatched value into the integer list.
    Fail,
}

impl Mode {
    pub const FAIL_ARG: &'static str = "fail";

    /// Only the exact literal `"fail"` selects [`Mode::Fail`].
    pub fn from_arg(arg: Option<&str>) -> Self {
        match arg {
            Some(Self::FAIL_ARG) => Self::Fail,
            _ => Self::Standard,
        }
    }
}

/// Both lists after a successful run.
#[derive(Debug, Clone)]
pub struct DemoReport {
    pub ints: DynamicList,
    pub strs: DynamicList,
}

impl DemoReport {
    /// Prints the size of each list, one per line.
    pub fn print<W: Write>(&self, out: &mut W) -> io::Result<()> {
        print_len(out, &self.ints)?;
        print_len(out, &self.strs)
    }
}

pub fn print_len<W: Write>(out: &mut W, list: &DynamicList) -> io::Result<()> {
    writeln!(out, "{}", list.size())
}

pub struct Demonstration<'a> {
    registry: &'a TypeRegistry,
    config: DemoConfig,
}

impl Demonstration<'static> {
    /// Runs against the shared default registry.
    pub fn new(config: DemoConfig) -> Self {
        Self::with_registry(TypeRegistry::global(), config)
    }
}

impl<'a> Demonstration<'a> {
    pub fn with_registry(registry: &'a TypeRegistry, config: DemoConfig) -> Self {
        Self { registry, config }
    }

    pub fn config(&self) -> &DemoConfig {
        &self.config
    }

    /// Builds and fills both lists.
    ///
    /// In [`Mode::Fail`] the mismatched append error is returned as soon as
    /// it happens; the second list is never built.
    pub fn run(&self, mode: Mode) -> Result<DemoReport> {
        info!(?mode, "starting demonstration");

        let mut ints = self.new_list_for(&self.config.int_type_name)?;
        for value in &self.config.int_values {
            ints.append(value.clone())?;
        }

        if mode == Mode::Fail {
            debug!(value = %self.config.mismatched_value, "appending mismatched value");
            ints.append(self.config.mismatched_value.clone())?;
        }

        let mut strs = self.new_list_for(&self.config.text_type_name)?;
        for value in &self.config.text_values {
            strs.append(value.clone())?;
        }

        Ok(DemoReport { ints, strs })
    }

    fn new_list_for(&self, type_name: &str) -> Result<DynamicList> {
        let descriptor = self.registry.resolve(type_name)?;
        Ok(DynamicList::new(descriptor))
    }
}
