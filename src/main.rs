use std::io::{self, Write};

use anyhow::Context;
use log::info;

use gen_convert::catalog::Catalog;
use gen_convert::core_name::ClcCoreNames;
use gen_convert::generate::Generator;
use gen_convert::guards::ClcGuards;

/// Prints the conversion functions for `convert-clc.cl` to stdout; the
/// invoker decides where the text lands. Diagnostics go to stderr.
fn main() -> anyhow::Result<()> {
    env_logger::init();

    let generator = Generator::new(Catalog::opencl(), ClcGuards, ClcCoreNames);

    let stdout = io::stdout();
    let mut dest = io::BufWriter::new(stdout.lock());
    let emitted = generator.write(&mut dest).context("writing conversion functions")?;
    dest.flush().context("flushing conversion functions")?;

    info!("emitted {emitted} conversion functions");
    Ok(())
}
