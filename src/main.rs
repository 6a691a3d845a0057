mod config;
mod exporter;
mod models;
mod utils;

use anyhow::Result;

fn main() -> Result<()> {
    let config = config::Config::new()?;
    let summary = exporter::FixtureExporter::export_all(&config)?;

    println!(
        "[INFO] Exported {} fixture(s) from {}",
        summary.exported.len(),
        config.input_dir.display()
    );
    Ok(())
}
