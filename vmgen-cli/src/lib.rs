//! The vmgen CLI.

mod cmd;

use anyhow::Result;
use structopt::StructOpt;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// The vmgen CLI.
#[derive(StructOpt)]
#[structopt(name = "vmgen")]
pub struct Vmgen {
    #[structopt(subcommand)]
    action: VmgenSubcommands,
    /// Enable debug logging.
    #[structopt(short)]
    verbose: bool,
}

impl Vmgen {
    pub fn run(self) -> Result<()> {
        // Initialize logging based on CLI config.
        let fmt_layer = fmt::layer().with_target(true);
        let filter_layer;
        let level_filter;
        if self.verbose {
            filter_layer = EnvFilter::new("debug");
            level_filter = LevelFilter::DEBUG;
        } else {
            filter_layer = EnvFilter::new("info");
            level_filter = LevelFilter::INFO;
        }
        tracing_subscriber::registry()
            .with(filter_layer)
            .with(fmt_layer)
            .with(level_filter)
            .init();

        match &self.action {
            VmgenSubcommands::Cluster(inner) => inner.run(),
            VmgenSubcommands::Single(inner) => inner.run(),
            VmgenSubcommands::Crd(inner) => inner.run(),
        }
    }
}

#[derive(StructOpt)]
pub enum VmgenSubcommands {
    /// Render a VMCluster manifest.
    #[structopt(name = "cluster")]
    Cluster(cmd::cluster::Cluster),
    /// Render a VMSingle manifest.
    #[structopt(name = "single")]
    Single(cmd::single::Single),
    /// Emit the VictoriaMetrics CRD schemas.
    #[structopt(name = "crd")]
    Crd(cmd::crd::Crd),
}
