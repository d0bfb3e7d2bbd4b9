//! The cyclic behavior scheduler.

use std::sync::Arc;

use bt_core::{Animation, Displacement};

use crate::{BehaviorPattern, PatternCatalog};

// ── SchedulerCursor ───────────────────────────────────────────────────────────

/// Where the scheduler is in the ring.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SchedulerCursor {
    /// Index of the active pattern.  Always `< catalog.len()`.
    pub current_index: usize,
    /// Idle ticks spent in the active pattern.  Reset on every transition.
    pub elapsed_ticks: u32,
}

// ── SchedulerStep ─────────────────────────────────────────────────────────────

/// Result of one scheduler tick.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SchedulerStep {
    /// Animation of the active pattern after this tick.
    pub animation: Animation,
    /// Step to apply this tick.  Only ever `Some` on a transition.
    pub displacement: Option<Displacement>,
    /// `true` if this tick moved to a new pattern.
    pub transitioned: bool,
}

// ── BehaviorScheduler ─────────────────────────────────────────────────────────

/// Walks a [`PatternCatalog`] one tick per idle update, wrapping at the end.
#[derive(Clone, Debug)]
pub struct BehaviorScheduler {
    catalog: Arc<PatternCatalog>,
    cursor:  SchedulerCursor,
}

impl BehaviorScheduler {
    /// Start at pattern 0 with nothing elapsed.
    pub fn new(catalog: Arc<PatternCatalog>) -> Self {
        Self { catalog, cursor: SchedulerCursor::default() }
    }

    #[inline]
    pub fn cursor(&self) -> SchedulerCursor {
        self.cursor
    }

    pub fn catalog(&self) -> &PatternCatalog {
        &self.catalog
    }

    #[inline]
    pub fn current(&self) -> &BehaviorPattern {
        self.catalog.get(self.cursor.current_index)
    }

    /// Advance by one idle update.
    pub fn tick(&mut self) -> SchedulerStep {
        self.cursor.elapsed_ticks += 1;

        if self.cursor.elapsed_ticks < self.current().duration_ticks {
            return SchedulerStep {
                animation:    self.current().animation,
                displacement: None,
                transitioned: false,
            };
        }

        self.cursor.elapsed_ticks = 0;
        self.cursor.current_index = (self.cursor.current_index + 1) % self.catalog.len();

        let next = self.current();
        SchedulerStep {
            animation:    next.animation,
            displacement: next.displacement,
            transitioned: true,
        }
    }
}
