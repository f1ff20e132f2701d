use droprun_structs::problem::{DroneProfile, Environment, Package};
use droprun_structs::{Point, BASE};

/// Normalization keeping the payload multiplier on vertical drain dimensionless.
pub const HEIGHT_CONSTANT: f32 = 1000.0;
/// Normalization keeping the payload multiplier on cruise drain dimensionless.
pub const BCR_CONSTANT: f32 = 1000.0;

/// Exponential multiplier on cruise drain from the alignment of travel
/// direction and wind. 1.0 with no environment. A leg with no horizontal
/// extent gets a zero direction vector, which also yields 1.0.
pub fn wind_factor(env: Option<&Environment>, from: &Point, to: &Point) -> f32 {
    match env {
        Some(env) => {
            let dir = from.dir_xy(to);
            (-env.wind_speed * env.factor * dir.dot_xy(&env.wind_unit)).exp()
        }
        None => 1.0,
    }
}

/// Battery drained by one leg carrying `payload`: climb to the cruise
/// altitude (the higher endpoint plus the profile offset), cruise
/// horizontally, descend to the destination altitude. A leg between
/// identical points costs nothing.
pub fn leg_energy(
    profile: &DroneProfile,
    env: Option<&Environment>,
    from: &Point,
    to: &Point,
    payload: f32,
) -> f32 {
    if from == to {
        return 0.0;
    }
    let cruise_alt = from.z.max(to.z) + profile.altitude;
    let vertical_rate =
        (1.0 + payload * profile.bcr / HEIGHT_CONSTANT) * profile.drain_rate * profile.height_rate;

    let mut drain = (cruise_alt - from.z).abs() * vertical_rate;
    drain += profile.drain_rate
        * (1.0 + payload * profile.bcr / BCR_CONSTANT)
        * wind_factor(env, from, to)
        * from.dist_xy(to);
    drain += (cruise_alt - to.z).abs() * vertical_rate;
    drain
}

/// Elapsed time for the same three phases. Independent of payload and wind.
pub fn leg_time(profile: &DroneProfile, from: &Point, to: &Point) -> f32 {
    if from == to {
        return 0.0;
    }
    let cruise_alt = from.z.max(to.z) + profile.altitude;
    (cruise_alt - from.z).abs() / profile.takeoff_rate
        + from.dist_xy(to) / profile.speed
        + (cruise_alt - to.z).abs() / profile.takeoff_rate
}

/// Battery required to fly one pool: base to each package in order, then
/// back to base. The leg into package `i` carries everything not yet
/// dropped off; the return leg is empty.
pub fn pool_energy(profile: &DroneProfile, env: Option<&Environment>, pool: &[&Package]) -> f32 {
    let mut required = 0.0;
    let mut curr = BASE;
    for (i, package) in pool.iter().enumerate() {
        let payload: f32 = pool[i..].iter().map(|p| p.weight).sum();
        required += leg_energy(profile, env, &curr, &package.loc, payload);
        curr = package.loc;
    }
    required + leg_energy(profile, env, &curr, &BASE, 0.0)
}

pub fn pool_weight(pool: &[&Package]) -> f32 {
    pool.iter().map(|p| p.weight).sum()
}
