use std::path::PathBuf;
use thiserror::Error;

/// Corner points that do not describe a rectangle with positive width and height.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
#[error(
    "Invalid rectangle points. X1={x1} and Y1={y1} must be bottom left; X2={x2} and Y2={y2} must be upper right."
)]
pub struct InvalidRectangle {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

/// Failures turning textual coordinates into rectangles.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoordinateError {
    #[error("{}", required_message(.field))]
    MissingCoordinate { field: &'static str },

    #[error("Coordinate {field} is not a number: '{value}'")]
    NumericParse { field: &'static str, value: String },

    #[error(transparent)]
    InvalidRectangle(#[from] InvalidRectangle),
}

impl CoordinateError {
    /// Short category used in error report bodies.
    pub fn category(&self) -> String {
        match self {
            CoordinateError::MissingCoordinate { field } => required_message(field),
            CoordinateError::NumericParse { .. } => "Data must be numeric.".to_string(),
            CoordinateError::InvalidRectangle(_) => "Invalid order of rectangle points.".to_string(),
        }
    }
}

fn required_message(field: &str) -> String {
    let (corner, axis, which) = match field {
        "r1x1" => ("Bottom left", "X", "first"),
        "r1y1" => ("Bottom left", "Y", "first"),
        "r1x2" => ("Upper right", "X", "first"),
        "r1y2" => ("Upper right", "Y", "first"),
        "r2x1" => ("Bottom left", "X", "second"),
        "r2y1" => ("Bottom left", "Y", "second"),
        "r2x2" => ("Upper right", "X", "second"),
        "r2y2" => ("Upper right", "Y", "second"),
        other => return format!("Coordinate {} is required.", other),
    };
    format!("{} {} of {} rectangle is required.", corner, axis, which)
}

#[derive(Error, Debug)]
pub enum RectanglesError {
    #[error("Input path does not exist: {0}")]
    InputNotFound(PathBuf),

    #[error("No coordinate sets found in input")]
    NoCoordinates,

    #[error("Failed to parse coordinates file '{path}': {source}")]
    InputParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Failed to write output file '{path}': {source}")]
    OutputWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Entry {index} in '{source_name}' failed: {source}")]
    Entry {
        index: usize,
        source_name: String,
        source: CoordinateError,
    },
}
