use std::collections::HashMap;

use log::debug;

use droprun_planner::cost::{leg_energy, leg_time, pool_energy};
use droprun_structs::plan::Plan;
use droprun_structs::problem::{DroneProfile, Package, Problem};
use droprun_structs::report::DeliveryEvent;
use droprun_structs::{Point, BASE};

pub mod scenarios;

/// Live drone state, owned exclusively by the replay. Planning works on the
/// immutable profile only and never sees this. Battery bounds are modeling
/// invariants here, not clamps.
pub struct DroneState {
    pub battery: f32,
    pub loc: Point,
    pub carrying: Vec<usize>,
}

impl DroneState {
    pub fn new(profile: &DroneProfile) -> DroneState {
        DroneState {
            battery: profile.max_battery,
            loc: BASE,
            carrying: Vec::new(),
        }
    }
}

/// Replay a verified plan against the live drone: per pool, wait for the
/// charger if the pool's requirement plus the reserve is out of reach, then
/// fly each leg, dropping packages off as they are reached, and return to
/// base empty. An empty plan performs no actions at all.
pub fn execute(problem: &Problem, plan: &Plan, drone: &mut DroneState) -> Vec<DeliveryEvent> {
    let by_id: HashMap<usize, &Package> =
        problem.packages.iter().map(|p| (p.id, p)).collect();
    let profile = &problem.profile;
    let env = problem.env.as_ref();

    let mut events = Vec::new();
    let mut elapsed = 0.0f32;
    for pool in &plan.pools {
        let refs: Vec<&Package> = pool.iter().map(|id| by_id[id]).collect();
        let required = pool_energy(profile, env, &refs);
        if required + profile.reserve_battery > drone.battery {
            let charge = (required + profile.reserve_battery - drone.battery) / profile.charge_rate;
            debug!("charging for {:.1}", charge);
            elapsed += charge;
            drone.battery = required + profile.reserve_battery;
        }

        drone.carrying.extend(pool.iter().copied());
        for (i, package) in refs.iter().enumerate() {
            let payload: f32 = refs[i..].iter().map(|p| p.weight).sum();
            drone.battery -= leg_energy(profile, env, &drone.loc, &package.loc, payload);
            elapsed += leg_time(profile, &drone.loc, &package.loc);
            drone.loc = package.loc;
            drone.carrying.retain(|&id| id != package.id);
            events.push(DeliveryEvent::Delivered {
                package: package.id,
                elapsed,
                battery: drone.battery,
            });
        }

        drone.battery -= leg_energy(profile, env, &drone.loc, &BASE, 0.0);
        elapsed += leg_time(profile, &drone.loc, &BASE);
        drone.loc = BASE;
        events.push(DeliveryEvent::ReturnedToBase { elapsed, battery: drone.battery });
    }
    events
}
