use serde::{Deserialize, Serialize};

use crate::Point;

/// One delivery run: a single drone, the packages asked for, and an optional
/// wind field. `env: None` disables wind modeling entirely.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Problem {
    pub profile: DroneProfile,
    pub packages: Vec<Package>,
    pub env: Option<Environment>,
}

/// Physical constants of the drone. Planning never mutates these.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DroneProfile {
    pub capacity: f32,
    pub speed: f32,
    pub max_battery: f32,
    pub bcr: f32,
    pub charge_rate: f32,
    pub drain_rate: f32,
    pub height_rate: f32,
    /// Cruise-altitude offset above the higher endpoint of a leg.
    pub altitude: f32,
    pub takeoff_rate: f32,
    /// Margin that must still be available after flying any single pool.
    pub reserve_battery: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    Normal,
    Fast,
    Urgent,
}

impl Priority {
    /// Elapsed-time budget for delivering a package of this class.
    pub fn deadline(&self) -> f32 {
        match self {
            Priority::Normal => 1.0e8,
            Priority::Fast => 20.0,
            Priority::Urgent => 10.0,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Package {
    pub id: usize,
    pub loc: Point,
    /// Total weight, unit weight times quantity. Fixed at construction.
    pub weight: f32,
    pub quantity: u32,
    pub priority: Priority,
}

impl Package {
    pub fn new(id: usize, loc: Point, unit_weight: f32, quantity: u32, priority: Priority) -> Package {
        Package {
            id,
            loc,
            weight: unit_weight * quantity as f32,
            quantity,
            priority,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Environment {
    pub wind_speed: f32,
    /// Direction the wind blows towards, in degrees.
    pub wind_dir: f32,
    pub factor: f32,
    pub wind_unit: Point,
}

impl Environment {
    pub fn new(wind_speed: f32, wind_dir: f32, factor: f32) -> Environment {
        let rad = wind_dir.to_radians();
        Environment {
            wind_speed,
            wind_dir,
            factor,
            wind_unit: Point { x: rad.cos(), y: rad.sin(), z: 0.0 },
        }
    }
}
