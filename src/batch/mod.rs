use anyhow::Result;
use log::{debug, info};
use rayon::prelude::*;

use crate::error::{CoordinateError, RectanglesError};
use crate::input::CoordinateSet;
use crate::relation::{Relationship, evaluate};

/// Outcome of evaluating one coordinate set
#[derive(Debug, Clone, PartialEq)]
pub struct BatchEntry {
    pub source: String,
    pub index: usize,
    pub outcome: Result<Relationship, CoordinateError>,
}

/// Evaluates many coordinate sets in parallel
#[derive(Debug, Clone, Copy, Default)]
pub struct BatchEvaluator {
    fail_fast: bool,
}

impl BatchEvaluator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stop as soon as an entry cannot be evaluated and return its error
    pub fn fail_fast(mut self, fail_fast: bool) -> Self {
        self.fail_fast = fail_fast;
        self
    }

    /// Evaluate every set. Results keep the input order.
    pub fn run(&self, sets: &[CoordinateSet]) -> Result<Vec<BatchEntry>> {
        let entries: Vec<BatchEntry> = if self.fail_fast {
            sets.par_iter()
                .map(|set| {
                    let entry = evaluate_set(set);
                    match entry.outcome {
                        Err(source) => Err(RectanglesError::Entry {
                            index: entry.index,
                            source_name: entry.source,
                            source,
                        }),
                        Ok(_) => Ok(entry),
                    }
                })
                .collect::<Result<_, _>>()?
        } else {
            sets.par_iter().map(evaluate_set).collect()
        };

        let mut failed = 0;
        for entry in &entries {
            if let Err(err) = &entry.outcome {
                failed += 1;
                debug!("{}[{}]: {}", entry.source, entry.index, err);
            }
        }

        info!(
            "Evaluated {} rectangle pairs ({} failed)",
            entries.len(),
            failed
        );

        Ok(entries)
    }
}

fn evaluate_set(set: &CoordinateSet) -> BatchEntry {
    BatchEntry {
        source: set.source.clone(),
        index: set.index,
        outcome: set
            .coordinates
            .rectangles()
            .map(|(first, second)| evaluate(first, second)),
    }
}
