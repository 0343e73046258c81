use anyhow::Result;
use serde::Serialize;

use crate::batch::BatchEntry;
use crate::error::CoordinateError;
use crate::geometry::{AdjacencyKind, Rectangle};
use crate::relation::Relationship;

#[derive(Serialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
struct RelationshipJson {
    adjacent: bool,
    contained: bool,
    intersected: bool,
    adjacency_type: Option<AdjacencyKind>,
    container_rectangle: Option<Rectangle>,
    containee_rectangle: Option<Rectangle>,
    intersection: Option<Rectangle>,
}

impl From<&Relationship> for RelationshipJson {
    fn from(rel: &Relationship) -> Self {
        Self {
            adjacent: rel.is_adjacent(),
            contained: rel.is_contained(),
            intersected: rel.is_intersected(),
            adjacency_type: rel.adjacency_kind(),
            container_rectangle: rel.containment.map(|c| c.container),
            containee_rectangle: rel.containment.map(|c| c.containee),
            intersection: rel.intersection,
        }
    }
}

#[derive(Serialize, Debug, PartialEq)]
struct ErrorJson {
    error: String,
    detail: String,
}

impl From<&CoordinateError> for ErrorJson {
    fn from(err: &CoordinateError) -> Self {
        Self {
            error: err.category(),
            detail: err.to_string(),
        }
    }
}

#[derive(Serialize)]
struct BatchJson {
    meta: Meta,
    results: Vec<BatchItemJson>,
}

#[derive(Serialize)]
struct Meta {
    app: &'static str,
    version: &'static str,
}

#[derive(Serialize)]
struct BatchItemJson {
    source: String,
    index: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<RelationshipJson>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<ErrorJson>,
}

/// Render a single relationship as a JSON object
pub fn relationship_to_json(rel: &Relationship, pretty: bool) -> Result<String> {
    to_string(&RelationshipJson::from(rel), pretty)
}

/// Render a coordinate error as a JSON error body
pub fn error_to_json(err: &CoordinateError, pretty: bool) -> Result<String> {
    to_string(&ErrorJson::from(err), pretty)
}

/// Render a whole batch run as a JSON report
pub fn batch_to_json(entries: &[BatchEntry], pretty: bool) -> Result<String> {
    let results = entries
        .iter()
        .map(|entry| {
            let (result, error) = match &entry.outcome {
                Ok(rel) => (Some(RelationshipJson::from(rel)), None),
                Err(err) => (None, Some(ErrorJson::from(err))),
            };
            BatchItemJson {
                source: entry.source.clone(),
                index: entry.index,
                result,
                error,
            }
        })
        .collect();

    let report = BatchJson {
        meta: Meta {
            app: "rectangles",
            version: env!("CARGO_PKG_VERSION"),
        },
        results,
    };

    to_string(&report, pretty)
}

fn to_string(value: &impl Serialize, pretty: bool) -> Result<String> {
    let content = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InvalidRectangle;
    use crate::relation::evaluate;
    use serde_json::{Value, json};

    fn rect(x1: f64, y1: f64, x2: f64, y2: f64) -> Rectangle {
        Rectangle::from_corners(x1, y1, x2, y2).unwrap()
    }

    #[test]
    fn test_containment_json() {
        let rel = evaluate(rect(3.0, -8.0, 10.0, -4.0), rect(4.0, -7.0, 9.0, -5.0));
        let value: Value = serde_json::from_str(&relationship_to_json(&rel, false).unwrap()).unwrap();

        let inner = json!({
            "bottomLeft": { "x": 4.0, "y": -7.0 },
            "upperRight": { "x": 9.0, "y": -5.0 }
        });
        assert_eq!(value["adjacent"], json!(false));
        assert_eq!(value["contained"], json!(true));
        assert_eq!(value["intersected"], json!(true));
        assert_eq!(value["adjacencyType"], Value::Null);
        assert_eq!(value["containeeRectangle"], inner);
        assert_eq!(value["intersection"], inner);
        assert_eq!(value["containerRectangle"]["bottomLeft"]["x"], json!(3.0));
    }

    #[test]
    fn test_adjacency_json() {
        let rel = evaluate(rect(-13.0, 4.0, -8.0, 6.0), rect(-8.0, 5.0, -5.0, 9.0));
        let value: Value = serde_json::from_str(&relationship_to_json(&rel, true).unwrap()).unwrap();

        assert_eq!(value["adjacent"], json!(true));
        assert_eq!(value["adjacencyType"], json!("PARTIAL"));
        assert_eq!(value["intersection"], Value::Null);
    }

    #[test]
    fn test_error_json() {
        let err = CoordinateError::from(InvalidRectangle {
            x1: 4.0,
            y1: 10.0,
            x2: 0.0,
            y2: 7.0,
        });
        let value: Value = serde_json::from_str(&error_to_json(&err, false).unwrap()).unwrap();

        assert_eq!(value["error"], json!("Invalid order of rectangle points."));
        assert_eq!(value["detail"], json!(err.to_string()));
    }

    #[test]
    fn test_batch_json() {
        let entries = vec![
            BatchEntry {
                source: "a.json".to_string(),
                index: 0,
                outcome: Ok(evaluate(rect(0.0, 7.0, 4.0, 10.0), rect(-3.0, 7.0, 0.0, 10.0))),
            },
            BatchEntry {
                source: "a.json".to_string(),
                index: 1,
                outcome: Err(CoordinateError::NumericParse {
                    field: "r1x1",
                    value: "asd".to_string(),
                }),
            },
        ];
        let value: Value = serde_json::from_str(&batch_to_json(&entries, false).unwrap()).unwrap();

        assert_eq!(value["meta"]["app"], json!("rectangles"));
        assert_eq!(value["results"][0]["result"]["adjacencyType"], json!("PROPER"));
        assert!(value["results"][0].get("error").is_none());
        assert_eq!(value["results"][1]["error"]["error"], json!("Data must be numeric."));
        assert!(value["results"][1].get("result").is_none());
    }
}
