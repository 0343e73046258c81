use serde::{Deserialize, Serialize};

/// Rectangles batch configuration file structure.
///
/// All paths in the config are relative to the config file location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RectanglesConfig {
    /// Config file version (currently 1)
    pub version: u32,
    /// Coordinates file paths, directories or glob patterns
    pub input: Vec<String>,
    /// Report file; the report goes to stdout when unset
    pub output: Option<String>,
    /// Pretty-print the JSON report
    pub pretty: bool,
    /// Stop as soon as an entry cannot be evaluated
    pub fail_fast: bool,
}

impl Default for RectanglesConfig {
    fn default() -> Self {
        Self {
            version: 1,
            input: Vec::new(),
            output: None,
            pretty: false,
            fail_fast: false,
        }
    }
}
