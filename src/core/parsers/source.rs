use std::{fs, path::Path};

use anyhow::{Context, Result};
use rayon::prelude::*;

use crate::core::data::SourceUnit;

pub fn read_source_file(path: &Path) -> Result<SourceUnit> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read source file: {}", path.display()))?;
    Ok(SourceUnit::new(path.to_string_lossy(), text))
}

/// Read every source view in parallel, keeping `paths` order.
pub fn read_source_files<P: AsRef<Path> + Sync>(paths: &[P]) -> Result<Vec<SourceUnit>> {
    paths
        .par_iter()
        .map(|path| read_source_file(path.as_ref()))
        .collect::<Vec<_>>()
        .into_iter()
        .collect()
}
