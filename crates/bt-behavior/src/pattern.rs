//! Behavior patterns and the ordered catalog that holds them.

use bt_core::{Animation, Displacement};

use crate::{BehaviorError, BehaviorResult};

// ── BehaviorPattern ───────────────────────────────────────────────────────────

/// One timed idle behavior.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BehaviorPattern {
    pub animation: Animation,

    /// Idle updates spent in this pattern before moving to the next.  `>= 1`.
    pub duration_ticks: u32,

    /// Step taken on entering this pattern, if any.
    pub displacement: Option<Displacement>,
}

impl BehaviorPattern {
    /// A pattern that stays in place.
    pub fn stationary(animation: Animation, duration_ticks: u32) -> Self {
        Self { animation, duration_ticks, displacement: None }
    }

    /// A pattern that steps by `(dx, dz)` when entered.
    pub fn moving(animation: Animation, duration_ticks: u32, dx: f64, dz: f64) -> Self {
        Self { animation, duration_ticks, displacement: Some(Displacement::new(dx, dz)) }
    }
}

// ── PatternCatalog ────────────────────────────────────────────────────────────

/// Nonempty, ordered ring of patterns.  Immutable once built.
#[derive(Clone, Debug)]
pub struct PatternCatalog {
    patterns: Vec<BehaviorPattern>,
}

impl PatternCatalog {
    /// Validate and wrap `patterns`.
    ///
    /// Fails on an empty list, a zero duration, or a non-finite displacement.
    pub fn new(patterns: Vec<BehaviorPattern>) -> BehaviorResult<Self> {
        if patterns.is_empty() {
            return Err(BehaviorError::Config("pattern catalog is empty".into()));
        }
        for (i, p) in patterns.iter().enumerate() {
            if p.duration_ticks == 0 {
                return Err(BehaviorError::Config(format!(
                    "pattern {i} ({}) has duration_ticks = 0",
                    p.animation
                )));
            }
            let finite = p.displacement.is_none_or(|d| d.dx.is_finite() && d.dz.is_finite());
            if !finite {
                return Err(BehaviorError::Config(format!(
                    "pattern {i} ({}) has a non-finite displacement",
                    p.animation
                )));
            }
        }
        Ok(Self { patterns })
    }

    /// The teller's default routine: four desk activities, then a walk
    /// around a small square that ends where it started.
    pub fn banking() -> Self {
        Self {
            patterns: vec![
                BehaviorPattern::stationary(Animation::Idle,      3),
                BehaviorPattern::stationary(Animation::Typing,    5),
                BehaviorPattern::stationary(Animation::Looking,   2),
                BehaviorPattern::stationary(Animation::Paperwork, 4),
                BehaviorPattern::moving(Animation::Walk, 3,  2.0,  0.0),
                BehaviorPattern::moving(Animation::Walk, 3, -2.0,  0.0),
                BehaviorPattern::moving(Animation::Walk, 3,  0.0,  2.0),
                BehaviorPattern::moving(Animation::Walk, 3,  0.0, -2.0),
            ],
        }
    }

    /// Pattern at `index`.  Callers keep `index < len()`.
    #[inline]
    pub fn get(&self, index: usize) -> &BehaviorPattern {
        &self.patterns[index]
    }

    pub fn patterns(&self) -> &[BehaviorPattern] {
        &self.patterns
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Always `false` for a validated catalog.
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Sum of all durations: idle ticks needed to go once around the ring.
    pub fn cycle_ticks(&self) -> u64 {
        self.patterns.iter().map(|p| p.duration_ticks as u64).sum()
    }
}

impl Default for PatternCatalog {
    fn default() -> Self {
        Self::banking()
    }
}
