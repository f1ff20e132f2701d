use serde::{Deserialize, Serialize};

pub mod plan;
pub mod problem;
pub mod report;

/// Home location: every flight departs from and returns to the origin.
pub const BASE: Point = Point { x: 0.0, y: 0.0, z: 0.0 };

#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Point {
    pub fn dist_xy(&self, other: &Point) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Unit direction towards `other` in the horizontal plane, or the zero
    /// vector when the two points coincide horizontally.
    pub fn dir_xy(&self, other: &Point) -> Point {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        let mag = (dx * dx + dy * dy).sqrt();
        if mag == 0.0 {
            return Point { x: 0.0, y: 0.0, z: 0.0 };
        }
        Point { x: dx / mag, y: dy / mag, z: 0.0 }
    }

    pub fn dot_xy(&self, other: &Point) -> f32 {
        self.x * other.x + self.y * other.y
    }
}
