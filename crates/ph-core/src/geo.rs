//! Planar map coordinates.
//!
//! `Point` uses `f32` like the map it models: station coordinates are pixel
//! positions and vehicles move a few units per step, so single precision is
//! exact for every integral position the simulation produces.

/// A point on the 2-D map.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(self, other: Point) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Move at most `max_step` units towards `target`.
    ///
    /// If `target` is further than `max_step`, returns the point exactly
    /// `max_step` along the normalized direction.  Otherwise returns `target`
    /// itself, so repeated stepping never overshoots or oscillates and lands
    /// on the target in a finite number of steps.
    pub fn step_towards(self, target: Point, max_step: f32) -> Point {
        let dx = target.x - self.x;
        let dy = target.y - self.y;
        let distance = (dx * dx + dy * dy).sqrt();

        if distance > max_step {
            Point {
                x: self.x + dx / distance * max_step,
                y: self.y + dy / distance * max_step,
            }
        } else {
            target
        }
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.1}, {:.1})", self.x, self.y)
    }
}
