use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::CoordinateError;
use crate::geometry::{Point, Rectangle};

/// Textual corner coordinates for a pair of rectangles.
///
/// `x1`/`y1` is the bottom-left corner and `x2`/`y2` the upper-right corner.
/// JSON values may be strings or numbers; numbers are kept in their textual form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Coordinates {
    #[serde(deserialize_with = "text_or_number")]
    pub r1x1: String,
    #[serde(deserialize_with = "text_or_number")]
    pub r1x2: String,
    #[serde(deserialize_with = "text_or_number")]
    pub r1y1: String,
    #[serde(deserialize_with = "text_or_number")]
    pub r1y2: String,
    #[serde(deserialize_with = "text_or_number")]
    pub r2x1: String,
    #[serde(deserialize_with = "text_or_number")]
    pub r2x2: String,
    #[serde(deserialize_with = "text_or_number")]
    pub r2y1: String,
    #[serde(deserialize_with = "text_or_number")]
    pub r2y2: String,
}

impl Coordinates {
    /// Build from two `[x1, y1, x2, y2]` corner lists, as given on the command line.
    pub fn from_corners(first: [String; 4], second: [String; 4]) -> Self {
        let [r1x1, r1y1, r1x2, r1y2] = first;
        let [r2x1, r2y1, r2x2, r2y2] = second;
        Self {
            r1x1,
            r1x2,
            r1y1,
            r1y2,
            r2x1,
            r2x2,
            r2y1,
            r2y2,
        }
    }

    /// Parse and validate both rectangles.
    ///
    /// Every field is checked for presence before any is parsed, so a blank
    /// field is reported ahead of a malformed one.
    pub fn rectangles(&self) -> Result<(Rectangle, Rectangle), CoordinateError> {
        let fields = self.fields();

        if let Some((name, _)) = fields.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(CoordinateError::MissingCoordinate { field: *name });
        }

        let [r1x1, r1x2, r1y1, r1y2, r2x1, r2x2, r2y1, r2y2] = fields;

        let first = Rectangle::new(
            Point::new(parse_field(r1x1)?, parse_field(r1y1)?),
            Point::new(parse_field(r1x2)?, parse_field(r1y2)?),
        )?;
        let second = Rectangle::new(
            Point::new(parse_field(r2x1)?, parse_field(r2y1)?),
            Point::new(parse_field(r2x2)?, parse_field(r2y2)?),
        )?;

        Ok((first, second))
    }

    fn fields(&self) -> [(&'static str, &str); 8] {
        [
            ("r1x1", self.r1x1.as_str()),
            ("r1x2", self.r1x2.as_str()),
            ("r1y1", self.r1y1.as_str()),
            ("r1y2", self.r1y2.as_str()),
            ("r2x1", self.r2x1.as_str()),
            ("r2x2", self.r2x2.as_str()),
            ("r2y1", self.r2y1.as_str()),
            ("r2y2", self.r2y2.as_str()),
        ]
    }
}

fn parse_field((name, value): (&'static str, &str)) -> Result<f64, CoordinateError> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|_e| CoordinateError::NumericParse {
            field: name,
            value: value.to_string(),
        })
}

struct TextOrNumber;

impl Visitor<'_> for TextOrNumber {
    type Value = String;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a coordinate as a string or a number")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<String, E> {
        Ok(v.to_string())
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<String, E> {
        Ok(v)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<String, E> {
        Ok(v.to_string())
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<String, E> {
        Ok(v.to_string())
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<String, E> {
        Ok(v.to_string())
    }
}

fn text_or_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    deserializer.deserialize_any(TextOrNumber)
}
