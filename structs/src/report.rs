use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a package was dropped before planning even started. Informational:
/// exclusions never abort the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum ExclusionReason {
    #[error("package weight exceeds drone capacity")]
    OverCapacity,
    #[error("round trip not possible even on a full battery")]
    BatteryUnreachable,
    #[error("one-way travel time exceeds the priority deadline")]
    DeadlineUnreachable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exclusion {
    pub package: usize,
    pub reason: ExclusionReason,
}

/// One entry of the replay log produced by the execution engine.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum DeliveryEvent {
    Delivered { package: usize, elapsed: f32, battery: f32 },
    ReturnedToBase { elapsed: f32, battery: f32 },
}
