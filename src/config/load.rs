use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::debug;

use super::types::RectanglesConfig;
use crate::input::is_supported_file;

/// A loaded configuration file with its associated directory.
///
/// Paths in the config are relative to the config file location,
/// so we need to track where the config was loaded from.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    /// The parsed configuration
    pub config: RectanglesConfig,
    /// The directory containing the config file
    pub config_dir: PathBuf,
}

impl LoadedConfig {
    /// Load a config file from the given path.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;

        let config: RectanglesConfig = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse config file: {}", path.display()))?;

        let config_dir = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));

        Ok(Self { config, config_dir })
    }

    /// Resolve input entries to paths relative to the config file directory.
    ///
    /// Glob patterns expand to the directories and coordinates files they
    /// match; anything else the pattern catches, such as the config file
    /// itself, is skipped. Plain entries are passed through unchanged.
    pub fn resolve_inputs(&self) -> Result<Vec<PathBuf>> {
        let mut results = Vec::new();

        for entry in &self.config.input {
            let joined = self.config_dir.join(entry);
            if !is_glob_pattern(entry) {
                results.push(joined);
                continue;
            }

            let matches = glob::glob(&joined.to_string_lossy())
                .with_context(|| format!("invalid glob pattern: {}", entry))?;
            for path in matches {
                let path = path.with_context(|| format!("failed to read glob entry: {}", entry))?;
                if path.is_dir() || is_supported_file(&path) {
                    results.push(path);
                } else {
                    debug!("Skipping {} matched by {}", path.display(), entry);
                }
            }
        }

        Ok(results)
    }

    /// Resolve the report path relative to the config file directory.
    pub fn resolve_output(&self) -> Option<PathBuf> {
        self.config
            .output
            .as_ref()
            .map(|output| self.config_dir.join(output))
    }
}

/// Check if a pattern contains glob characters.
fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?') || pattern.contains('[')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_glob_pattern() {
        assert!(is_glob_pattern("*.json"));
        assert!(is_glob_pattern("cases/*.json"));
        assert!(is_glob_pattern("cases/**/*.json"));
        assert!(is_glob_pattern("case?.json"));
        assert!(is_glob_pattern("case[0-9].json"));
        assert!(!is_glob_pattern("cases.json"));
        assert!(!is_glob_pattern("cases/edges.json"));
    }

    #[test]
    fn test_paths_resolve_against_config_dir() {
        let loaded = LoadedConfig {
            config: RectanglesConfig {
                input: vec!["edges.json".to_string()],
                output: Some("out/report.json".to_string()),
                ..RectanglesConfig::default()
            },
            config_dir: PathBuf::from("/project"),
        };

        assert_eq!(
            loaded.resolve_inputs().unwrap(),
            vec![PathBuf::from("/project/edges.json")]
        );
        assert_eq!(
            loaded.resolve_output(),
            Some(PathBuf::from("/project/out/report.json"))
        );
    }

    #[test]
    fn test_load_reads_json() {
        let dir = std::env::temp_dir().join(format!("rectangles-config-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("batch.rectangles");
        std::fs::write(&path, r#"{"version": 1, "input": ["a.json"], "pretty": true}"#).unwrap();

        let loaded = LoadedConfig::load(&path).unwrap();
        std::fs::remove_dir_all(&dir).unwrap();

        assert_eq!(loaded.config_dir, dir);
        assert!(loaded.config.pretty);
        assert_eq!(loaded.config.input, vec!["a.json".to_string()]);
    }

    #[test]
    fn test_glob_keeps_only_coordinates_files() {
        let dir = std::env::temp_dir().join(format!("rectangles-glob-{}", std::process::id()));
        std::fs::create_dir_all(dir.join("more")).unwrap();
        std::fs::write(dir.join("a.json"), "[]").unwrap();
        std::fs::write(dir.join("notes.txt"), "").unwrap();
        std::fs::write(dir.join("run.rectangles"), "{}").unwrap();

        let loaded = LoadedConfig {
            config: RectanglesConfig {
                input: vec!["*".to_string()],
                ..RectanglesConfig::default()
            },
            config_dir: dir.clone(),
        };
        let mut inputs = loaded.resolve_inputs().unwrap();
        std::fs::remove_dir_all(&dir).unwrap();
        inputs.sort();

        assert_eq!(inputs, vec![dir.join("a.json"), dir.join("more")]);
    }
}
