use droprun_structs::problem::{DroneProfile, Environment, Package, Priority, Problem};
use droprun_structs::Point;

fn standard_profile() -> DroneProfile {
    DroneProfile {
        capacity: 40.0,
        speed: 5.0,
        max_battery: 15000.0,
        bcr: 10.0,
        charge_rate: 100.0,
        drain_rate: 50.0,
        height_rate: 1.5,
        altitude: 10.0,
        takeoff_rate: 2.0,
        reserve_battery: 100.0,
    }
}

/// Two deliverable packages close to the base.
pub fn tiny() -> Problem {
    Problem {
        profile: standard_profile(),
        packages: vec![
            Package::new(1, Point { x: 5.0, y: 10.0, z: 10.0 }, 10.0, 1, Priority::Normal),
            Package::new(2, Point { x: -5.0, y: 10.0, z: 10.0 }, 11.0, 1, Priority::Normal),
        ],
        env: None,
    }
}

/// The five-package run used for manual testing.
pub fn medium() -> Problem {
    Problem {
        profile: standard_profile(),
        packages: vec![
            Package::new(1, Point { x: 5.0, y: 10.0, z: 10.0 }, 10.0, 1, Priority::Normal),
            Package::new(2, Point { x: -5.0, y: 10.0, z: 10.0 }, 11.0, 1, Priority::Normal),
            Package::new(3, Point { x: -10.0, y: 20.0, z: 20.0 }, 12.0, 1, Priority::Normal),
            Package::new(4, Point { x: -25.0, y: 26.0, z: 7.0 }, 13.0, 1, Priority::Normal),
            Package::new(5, Point { x: -15.0, y: 11.0, z: 15.0 }, 14.0, 1, Priority::Normal),
        ],
        env: None,
    }
}

/// Same run with the wind field attached. Strong headwinds can push outlying
/// packages past the battery pre-filter; that is the point of the demo.
pub fn windy() -> Problem {
    Problem {
        env: Some(Environment::new(25.0, -63.0, 0.1)),
        ..medium()
    }
}

/// A single package the drone cannot lift.
pub fn overweight() -> Problem {
    Problem {
        profile: standard_profile(),
        packages: vec![Package::new(30, Point { x: 1.0, y: 10.0, z: 0.0 }, 50.0, 1, Priority::Normal)],
        env: None,
    }
}
