use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::components::ConfigError;
use crate::utils::lerp;

/// Coefficients measured at one rotation speed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropellerTableRow {
    /// Rotation speed of this row (RPM)
    pub rpm: f64,
    /// Advance ratio breakpoints, strictly ascending
    pub advance_ratio: Vec<f64>,
    /// Thrust coefficient at each advance ratio
    pub thrust_coefficient: Vec<f64>,
    /// Power coefficient at each advance ratio
    pub power_coefficient: Vec<f64>,
}

impl PropellerTableRow {
    /// Interpolates (CT, CP) along the row, clamping outside the breakpoints.
    fn coefficients(&self, advance_ratio: f64) -> (f64, f64) {
        if self.advance_ratio.is_empty() {
            return (0.0, 0.0);
        }
        let (lower, upper, t) = bracket(&self.advance_ratio, advance_ratio);
        (
            lerp(self.thrust_coefficient[lower], self.thrust_coefficient[upper], t),
            lerp(self.power_coefficient[lower], self.power_coefficient[upper], t),
        )
    }
}

/// Thrust and power coefficients over (rotation speed, advance ratio).
///
/// Rows need not share advance ratio breakpoints. The table is validated on
/// construction and never changes afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<PropellerTableRow>", into = "Vec<PropellerTableRow>")]
pub struct PropellerTable {
    rows: Vec<PropellerTableRow>,
}

impl PropellerTable {
    pub fn new(rows: Vec<PropellerTableRow>) -> Result<Self, ConfigError> {
        if !is_strictly_ascending(rows.iter().map(|r| r.rpm)) {
            return Err(ConfigError::ValidationError(
                "propeller table rows must have strictly ascending rpm".to_string(),
            ));
        }
        for row in &rows {
            let n = row.advance_ratio.len();
            if row.thrust_coefficient.len() != n || row.power_coefficient.len() != n {
                return Err(ConfigError::ValidationError(format!(
                    "propeller table row at {} rpm has mismatched array lengths",
                    row.rpm
                )));
            }
            if !is_strictly_ascending(row.advance_ratio.iter().copied()) {
                return Err(ConfigError::ValidationError(format!(
                    "propeller table row at {} rpm must have strictly ascending advance ratios",
                    row.rpm
                )));
            }
        }
        debug!("Propeller table validated with {} rows", rows.len());
        Ok(Self { rows })
    }

    pub fn rows(&self) -> &[PropellerTableRow] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns (CT, CP) at rotation speed `rpm` and advance ratio `advance_ratio`.
    ///
    /// Each bracketing row is interpolated along its own advance ratio
    /// breakpoints, then the two results are blended along rpm. Queries off the
    /// grid clamp to the nearest edge. An empty table yields (0, 0).
    pub fn coefficients(&self, rpm: f64, advance_ratio: f64) -> (f64, f64) {
        if self.rows.is_empty() {
            return (0.0, 0.0);
        }
        let speeds: Vec<f64> = self.rows.iter().map(|r| r.rpm).collect();
        let (lower, upper, t) = bracket(&speeds, rpm);

        let (ct_lower, cp_lower) = self.rows[lower].coefficients(advance_ratio);
        if lower == upper {
            return (ct_lower, cp_lower);
        }
        let (ct_upper, cp_upper) = self.rows[upper].coefficients(advance_ratio);
        (lerp(ct_lower, ct_upper, t), lerp(cp_lower, cp_upper, t))
    }
}

impl TryFrom<Vec<PropellerTableRow>> for PropellerTable {
    type Error = ConfigError;

    fn try_from(rows: Vec<PropellerTableRow>) -> Result<Self, Self::Error> {
        Self::new(rows)
    }
}

impl From<PropellerTable> for Vec<PropellerTableRow> {
    fn from(table: PropellerTable) -> Self {
        table.rows
    }
}

fn is_strictly_ascending(mut values: impl Iterator<Item = f64>) -> bool {
    let Some(mut previous) = values.next() else {
        return true;
    };
    for value in values {
        if !(value > previous) {
            return false;
        }
        previous = value;
    }
    true
}

/// Finds the breakpoints bracketing `query` and the clamped fraction between them.
///
/// `upper` is the first index whose breakpoint is greater than `query`, clamped
/// to the array; `lower` is the one before it. `breakpoints` must be non-empty.
fn bracket(breakpoints: &[f64], query: f64) -> (usize, usize, f64) {
    let last = breakpoints.len() - 1;
    let upper = breakpoints.partition_point(|&b| b <= query).min(last);
    let lower = upper.saturating_sub(1);

    let span = breakpoints[upper] - breakpoints[lower];
    let t = if span > 0.0 {
        ((query - breakpoints[lower]) / span).clamp(0.0, 1.0)
    } else {
        0.0
    };
    (lower, upper, t)
}
