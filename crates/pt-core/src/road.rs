//! Road types and the per-type cost multiplier table.
//!
//! The effective cost of an edge is its base weight times the multiplier of
//! its road type.  The table is external configuration supplied fresh for
//! every search run.

use crate::{CoreError, CoreResult};

/// Base weight used for a new edge when its endpoints have no known
/// positions to measure.
pub const DEFAULT_ROAD_WEIGHT: f64 = 10.0;

/// Surface class of a road edge.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RoadType {
    Highway,
    #[default]
    City,
    Dirt,
}

impl RoadType {
    /// Every road type, in table order.
    pub const ALL: [RoadType; 3] = [RoadType::Highway, RoadType::City, RoadType::Dirt];

    /// Human-readable label, useful for CSV column values.
    pub fn as_str(self) -> &'static str {
        match self {
            RoadType::Highway => "Highway",
            RoadType::City    => "City",
            RoadType::Dirt    => "Dirt",
        }
    }
}

impl std::str::FromStr for RoadType {
    type Err = CoreError;

    /// Case-insensitive match on the type name.
    fn from_str(s: &str) -> CoreResult<RoadType> {
        RoadType::ALL
            .into_iter()
            .find(|r| r.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CoreError::Parse(format!("unknown road type {s:?}")))
    }
}

impl std::fmt::Display for RoadType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── CostMultipliers ───────────────────────────────────────────────────────────

/// Mapping from road type to a positive cost scalar.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "PascalCase", default))]
pub struct CostMultipliers {
    pub highway: f64,
    pub city:    f64,
    pub dirt:    f64,
}

impl CostMultipliers {
    /// Every road costs exactly its base weight.
    pub const UNIT: CostMultipliers = CostMultipliers { highway: 1.0, city: 1.0, dirt: 1.0 };

    pub const fn new(highway: f64, city: f64, dirt: f64) -> Self {
        Self { highway, city, dirt }
    }

    #[inline]
    pub fn get(&self, road: RoadType) -> f64 {
        match road {
            RoadType::Highway => self.highway,
            RoadType::City    => self.city,
            RoadType::Dirt    => self.dirt,
        }
    }

    pub fn set(&mut self, road: RoadType, value: f64) {
        match road {
            RoadType::Highway => self.highway = value,
            RoadType::City    => self.city = value,
            RoadType::Dirt    => self.dirt = value,
        }
    }

    /// Builder-style variant of [`set`](Self::set).
    pub fn with(mut self, road: RoadType, value: f64) -> Self {
        self.set(road, value);
        self
    }

    /// Effective cost of traversing `weight` on a road of type `road`.
    #[inline]
    pub fn cost(&self, weight: f64, road: RoadType) -> f64 {
        weight * self.get(road)
    }

    /// Check that every multiplier is finite and strictly positive.
    ///
    /// The search engine itself does not call this; loaders and the CLI do.
    pub fn validate(&self) -> CoreResult<()> {
        for road in RoadType::ALL {
            let m = self.get(road);
            if !m.is_finite() || m <= 0.0 {
                return Err(CoreError::Config(format!(
                    "multiplier for {road} must be a positive finite number, got {m}"
                )));
            }
        }
        Ok(())
    }
}

impl Default for CostMultipliers {
    fn default() -> Self {
        Self { highway: 1.0, city: 1.5, dirt: 2.5 }
    }
}
