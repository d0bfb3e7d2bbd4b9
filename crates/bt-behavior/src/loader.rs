//! CSV pattern loader.
//!
//! # CSV format
//!
//! One row per pattern, in ring order.  `dx`/`dz` are both empty for a
//! stationary pattern; a half-filled pair is an error.
//!
//! ```csv
//! animation,duration_ticks,dx,dz
//! idle,3,,
//! typing,5,,
//! walk,3,2,0
//! walk,3,-2,0
//! ```

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use bt_core::{Animation, Displacement};

use crate::{BehaviorError, BehaviorPattern, BehaviorResult, PatternCatalog};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct PatternRecord {
    animation:      String,
    duration_ticks: u32,
    dx:             Option<f64>,
    dz:             Option<f64>,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load and validate a [`PatternCatalog`] from a CSV file.
pub fn load_patterns_csv(path: &Path) -> BehaviorResult<PatternCatalog> {
    let file = std::fs::File::open(path).map_err(BehaviorError::Io)?;
    load_patterns_reader(file)
}

/// Like [`load_patterns_csv`] but accepts any `Read` source.
pub fn load_patterns_reader<R: Read>(reader: R) -> BehaviorResult<PatternCatalog> {
    let mut csv_reader = csv::Reader::from_reader(reader);

    let patterns = csv_reader
        .deserialize::<PatternRecord>()
        .enumerate()
        .map(|(i, result)| {
            let row = result.map_err(|e| BehaviorError::Parse(e.to_string()))?;
            let animation: Animation = row
                .animation
                .parse()
                .map_err(|e| BehaviorError::Parse(format!("row {i}: {e}")))?;
            let displacement = match (row.dx, row.dz) {
                (None, None)         => None,
                (Some(dx), Some(dz)) => Some(Displacement::new(dx, dz)),
                _ => {
                    return Err(BehaviorError::Parse(format!(
                        "row {i}: dx and dz must both be set or both be empty"
                    )));
                }
            };
            Ok(BehaviorPattern { animation, duration_ticks: row.duration_ticks, displacement })
        })
        .collect::<BehaviorResult<Vec<_>>>()?;

    PatternCatalog::new(patterns)
}
