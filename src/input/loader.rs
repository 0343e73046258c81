use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::info;
use rayon::prelude::*;
use serde_json::Value;

use super::Coordinates;
use crate::error::RectanglesError;

const SUPPORTED_EXTENSIONS: &[&str] = &["json"];

/// One pair of coordinates along with where it was read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoordinateSet {
    /// File the entry came from, relative to its base directory when known
    pub source: String,
    /// Position of the entry within its file
    pub index: usize,
    pub coordinates: Coordinates,
}

/// Input path with its base directory for computing relative names
struct InputPath {
    path: PathBuf,
    base: Option<PathBuf>,
}

/// Load coordinate sets from input paths (files or directories)
///
/// Directories are walked recursively for `.json` files. Entries keep the
/// order of the inputs, then the order within each file.
pub fn load_coordinates(
    inputs: &[impl AsRef<Path>],
    base_dir: Option<&Path>,
) -> Result<Vec<CoordinateSet>> {
    let input_paths = collect_input_paths(inputs, base_dir)?;

    if input_paths.is_empty() {
        return Err(RectanglesError::NoCoordinates.into());
    }

    info!("Reading {} coordinate files...", input_paths.len());

    let files: Result<Vec<_>> = input_paths.par_iter().map(load_single_file).collect();
    let sets: Vec<CoordinateSet> = files?.into_iter().flatten().collect();

    if sets.is_empty() {
        return Err(RectanglesError::NoCoordinates.into());
    }

    Ok(sets)
}

fn collect_input_paths(
    inputs: &[impl AsRef<Path>],
    base_dir: Option<&Path>,
) -> Result<Vec<InputPath>> {
    let mut paths = Vec::new();

    for input in inputs {
        let path = input.as_ref();
        if !path.exists() {
            return Err(RectanglesError::InputNotFound(path.to_path_buf()).into());
        }

        if path.is_file() {
            paths.push(InputPath {
                path: path.to_path_buf(),
                base: base_dir.map(Path::to_path_buf),
            });
        } else if path.is_dir() {
            collect_from_directory(path, path, &mut paths)?;
        }
    }

    Ok(paths)
}

fn collect_from_directory(base: &Path, dir: &Path, paths: &mut Vec<InputPath>) -> Result<()> {
    let mut entries = std::fs::read_dir(dir)
        .with_context(|| format!("Failed to read directory: {}", dir.display()))?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<std::io::Result<Vec<_>>>()?;
    entries.sort();

    for path in entries {
        if path.is_file() && is_supported_file(&path) {
            paths.push(InputPath {
                path,
                base: Some(base.to_path_buf()),
            });
        } else if path.is_dir() {
            collect_from_directory(base, &path, paths)?;
        }
    }

    Ok(())
}

/// Check if a path names a coordinates file
pub(crate) fn is_supported_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| SUPPORTED_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

fn load_single_file(input: &InputPath) -> Result<Vec<CoordinateSet>> {
    let content = std::fs::read_to_string(&input.path)
        .with_context(|| format!("failed to read coordinates file: {}", input.path.display()))?;

    let parse_error = |e| RectanglesError::InputParse {
        path: input.path.clone(),
        source: e,
    };

    // A file holds either a single request body or a list of them
    let entries: Vec<Coordinates> = match serde_json::from_str::<Value>(&content).map_err(parse_error)? {
        Value::Array(list) => list
            .into_iter()
            .map(serde_json::from_value)
            .collect::<Result<_, _>>()
            .map_err(parse_error)?,
        single => vec![serde_json::from_value(single).map_err(parse_error)?],
    };

    let source = source_name(&input.path, input.base.as_deref());

    Ok(entries
        .into_iter()
        .enumerate()
        .map(|(index, coordinates)| CoordinateSet {
            source: source.clone(),
            index,
            coordinates,
        })
        .collect())
}

fn source_name(path: &Path, base: Option<&Path>) -> String {
    match base {
        Some(base_dir) => path
            .strip_prefix(base_dir)
            .unwrap_or(path)
            .to_string_lossy()
            .to_string(),
        None => path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("unknown")
            .to_string(),
    }
}
