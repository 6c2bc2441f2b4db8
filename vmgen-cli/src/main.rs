use anyhow::Result;
use structopt::StructOpt;

use vmgen_cli::Vmgen;

fn main() -> Result<()> {
    Vmgen::from_args().run()
}
