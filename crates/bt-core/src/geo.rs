//! Scene coordinates, headings, and the axis-aligned scene boundary.
//!
//! The scene is a flat floor: all logic works on the `x`/`z` plane.  `y` is
//! carried through so snapshots keep the 3-component shape clients render.

/// A point in scene units.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Position {
    pub const ORIGIN: Position = Position { x: 0.0, y: 0.0, z: 0.0 };

    #[inline]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Euclidean distance on the `x`/`z` plane.  `y` is ignored.
    #[inline]
    pub fn planar_distance(self, other: Position) -> f64 {
        (other.x - self.x).hypot(other.z - self.z)
    }

    /// Heading that points from `self` toward `target`.
    #[inline]
    pub fn heading_to(self, target: Position) -> Rotation {
        Rotation::new((target.z - self.z).atan2(target.x - self.x))
    }

    /// Translate by `d` on the floor plane, then clamp into `bounds`.
    pub fn displaced(self, d: Displacement, bounds: SceneBounds) -> Position {
        Position {
            x: bounds.clamp(self.x + d.dx),
            y: self.y,
            z: bounds.clamp(self.z + d.dz),
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.2}, {:.2}, {:.2})", self.x, self.y, self.z)
    }
}

// ── Rotation ──────────────────────────────────────────────────────────────────

/// Heading about the vertical axis, in radians.
///
/// Serialized as `{"y": yaw}`, the rotation-about-Y shape scene clients use.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rotation {
    #[cfg_attr(feature = "serde", serde(rename = "y"))]
    pub yaw: f64,
}

impl Rotation {
    #[inline]
    pub fn new(yaw: f64) -> Self {
        Self { yaw }
    }
}

// ── Displacement ──────────────────────────────────────────────────────────────

/// A planar step applied to a position.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Displacement {
    pub dx: f64,
    pub dz: f64,
}

impl Displacement {
    #[inline]
    pub fn new(dx: f64, dz: f64) -> Self {
        Self { dx, dz }
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        self.dx == 0.0 && self.dz == 0.0
    }

    /// Direction of travel.  `None` for a zero step, which has no direction.
    pub fn heading(self) -> Option<Rotation> {
        if self.is_zero() {
            None
        } else {
            Some(Rotation::new(self.dz.atan2(self.dx)))
        }
    }
}

// ── SceneBounds ───────────────────────────────────────────────────────────────

/// Closed range `[min, max]` applied independently to `x` and `z`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SceneBounds {
    pub min: f64,
    pub max: f64,
}

impl SceneBounds {
    #[inline]
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    #[inline]
    pub fn clamp(self, v: f64) -> f64 {
        v.clamp(self.min, self.max)
    }

    /// `true` if both floor coordinates of `p` lie inside the range.
    #[inline]
    pub fn contains(self, p: Position) -> bool {
        (self.min..=self.max).contains(&p.x) && (self.min..=self.max).contains(&p.z)
    }
}

impl Default for SceneBounds {
    /// The branch floor: `[-10, 10]` on both axes.
    fn default() -> Self {
        Self { min: -10.0, max: 10.0 }
    }
}
