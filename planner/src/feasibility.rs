use log::info;

use droprun_structs::problem::{DroneProfile, Environment, Package, Problem};
use droprun_structs::report::{Exclusion, ExclusionReason};
use droprun_structs::BASE;

use crate::cost::{leg_time, pool_energy, pool_weight};
use crate::partitions::Pool;

/// Drop packages no plan could ever contain: too heavy for the drone, out of
/// round-trip range on a full battery, or too far away for their own
/// deadline. Exclusions are reported, never fatal.
pub fn prefilter(problem: &Problem) -> (Vec<Package>, Vec<Exclusion>) {
    let profile = &problem.profile;
    let env = problem.env.as_ref();
    let mut kept = Vec::new();
    let mut excluded = Vec::new();
    for package in &problem.packages {
        let reason = if pool_energy(profile, env, &[package]) + profile.reserve_battery
            > profile.max_battery
        {
            Some(ExclusionReason::BatteryUnreachable)
        } else if package.weight > profile.capacity {
            Some(ExclusionReason::OverCapacity)
        } else if leg_time(profile, &BASE, &package.loc) > package.priority.deadline() {
            Some(ExclusionReason::DeadlineUnreachable)
        } else {
            None
        };
        match reason {
            Some(reason) => {
                info!("package {} excluded: {}", package.id, reason);
                excluded.push(Exclusion { package: package.id, reason });
            }
            None => kept.push(*package),
        }
    }
    (kept, excluded)
}

fn pool_refs<'a>(packages: &'a [Package], pool: &Pool) -> Vec<&'a Package> {
    pool.iter().map(|&i| &packages[i]).collect()
}

pub fn weight_ok(profile: &DroneProfile, packages: &[Package], plan: &[Pool]) -> bool {
    plan.iter()
        .all(|pool| pool_weight(&pool_refs(packages, pool)) <= profile.capacity)
}

pub fn battery_ok(
    profile: &DroneProfile,
    env: Option<&Environment>,
    packages: &[Package],
    plan: &[Pool],
) -> bool {
    plan.iter().all(|pool| {
        pool_energy(profile, env, &pool_refs(packages, pool)) + profile.reserve_battery
            <= profile.max_battery
    })
}

/// Forward simulation of a plan from a full charge: per pool, wait for the
/// charger whenever the pool's requirement plus the reserve is out of reach,
/// then accumulate leg times, recording when each package hits the ground.
/// Returns (package index, elapsed time) pairs in delivery order.
pub fn delivery_times(
    profile: &DroneProfile,
    env: Option<&Environment>,
    packages: &[Package],
    plan: &[Pool],
) -> Vec<(usize, f32)> {
    let mut elapsed = 0.0f32;
    let mut battery = profile.max_battery;
    let mut times = Vec::new();
    for pool in plan {
        let required = pool_energy(profile, env, &pool_refs(packages, pool));
        if required + profile.reserve_battery > battery {
            elapsed += (required + profile.reserve_battery - battery) / profile.charge_rate;
            battery = required + profile.reserve_battery;
        }
        let mut loc = BASE;
        for &idx in pool.iter() {
            elapsed += leg_time(profile, &loc, &packages[idx].loc);
            times.push((idx, elapsed));
            loc = packages[idx].loc;
        }
        elapsed += leg_time(profile, &loc, &BASE);
        battery -= required;
    }
    times
}

pub fn deadlines_ok(
    profile: &DroneProfile,
    env: Option<&Environment>,
    packages: &[Package],
    plan: &[Pool],
) -> bool {
    delivery_times(profile, env, packages, plan)
        .iter()
        .all(|&(idx, t)| t <= packages[idx].priority.deadline())
}

pub fn plan_feasible(
    profile: &DroneProfile,
    env: Option<&Environment>,
    packages: &[Package],
    plan: &[Pool],
) -> bool {
    weight_ok(profile, packages, plan)
        && battery_ok(profile, env, packages, plan)
        && deadlines_ok(profile, env, packages, plan)
}

/// Total battery requirement of a plan, the selection objective.
pub fn plan_energy(
    profile: &DroneProfile,
    env: Option<&Environment>,
    packages: &[Package],
    plan: &[Pool],
) -> f32 {
    plan.iter()
        .map(|pool| pool_energy(profile, env, &pool_refs(packages, pool)))
        .sum()
}
