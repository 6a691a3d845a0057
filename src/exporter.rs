use crate::config::{Config, INPUT_EXTENSION};
use crate::models::TestFixture;
use crate::utils::{file_stem, has_extension};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Default)]
pub struct ExportSummary {
    pub exported: Vec<PathBuf>,
}

pub struct FixtureExporter;

impl FixtureExporter {
    /// Exports every `orig/*.json` fixture in file-name order.
    ///
    /// Stops at the first fixture that cannot be read, decoded or written.
    /// Outputs written before that point are left in place.
    pub fn export_all(config: &Config) -> Result<ExportSummary> {
        if !config.input_dir.is_dir() {
            return Err(anyhow::anyhow!(
                "Fixture directory not found at: {}",
                config.input_dir.display()
            ));
        }

        let mut summary = ExportSummary::default();

        for entry in Self::fixture_paths(&config.input_dir)? {
            summary.exported.push(Self::export_file(&entry, config)?);
        }

        Ok(summary)
    }

    pub fn export_file(path: &Path, config: &Config) -> Result<PathBuf> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read fixture at {}", path.display()))?;
        let fixture = TestFixture::from_json(&raw)
            .with_context(|| format!("Failed to parse fixture at {}", path.display()))?;

        let out_path = config.output_path_for(&file_stem(path)?);
        std::fs::write(&out_path, fixture.test_in.as_bytes())
            .with_context(|| format!("Failed to write output to {}", out_path.display()))?;

        println!("[DEBUG] {} -> {}", path.display(), out_path.display());
        Ok(out_path)
    }

    fn fixture_paths(input_dir: &Path) -> Result<Vec<PathBuf>> {
        let mut paths = Vec::new();
        for entry in WalkDir::new(input_dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            let entry = entry
                .with_context(|| format!("Failed to list {}", input_dir.display()))?;
            // Symlinks are kept unresolved so a dangling one faults on read.
            let candidate = entry.file_type().is_file() || entry.path_is_symlink();
            if candidate && has_extension(entry.path(), INPUT_EXTENSION) {
                paths.push(entry.into_path());
            }
        }
        Ok(paths)
    }
}
