use std::path::{Path, PathBuf};
use anyhow::Result;

pub const INPUT_DIR_NAME: &str = "orig";
pub const INPUT_EXTENSION: &str = "json";
pub const OUTPUT_EXTENSION: &str = "txt";

pub struct Config {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
}

impl Config {
    pub fn new() -> Result<Self> {
        let current_dir = std::env::current_dir()?;
        Ok(Self::with_root(&current_dir))
    }

    pub fn with_root(root: &Path) -> Self {
        Self {
            input_dir: root.join(INPUT_DIR_NAME),
            output_dir: root.to_path_buf(),
        }
    }

    /// Text files land next to the `orig` directory, not inside it.
    pub fn output_path_for(&self, stem: &str) -> PathBuf {
        self.output_dir.join(format!("{}.{}", stem, OUTPUT_EXTENSION))
    }
}
