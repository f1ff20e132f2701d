#[cfg(test)]
mod tests {
    use droprun_structs::plan::Plan;
    use droprun_structs::problem::{DroneProfile, Environment, Package, Priority, Problem};
    use droprun_structs::report::ExclusionReason;
    use droprun_structs::{Point, BASE};

    use crate::brute::solve;
    use crate::cost::{leg_energy, leg_time, pool_energy};
    use crate::feasibility::{deadlines_ok, delivery_times};
    use crate::partitions::Pool;

    fn profile() -> DroneProfile {
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

    fn package(id: usize, x: f32, y: f32, z: f32, weight: f32) -> Package {
        Package::new(id, Point { x, y, z }, weight, 1, Priority::Normal)
    }

    #[test]
    pub fn overweight_package_is_excluded() {
        let _ = env_logger::try_init();
        let problem = Problem {
            profile: profile(),
            packages: vec![package(30, 1.0, 10.0, 0.0, 50.0)],
            env: None,
        };
        let solution = solve(&problem);
        assert!(solution.plan.is_empty());
        assert_eq!(solution.excluded.len(), 1);
        assert_eq!(solution.excluded[0].package, 30);
        assert_eq!(solution.excluded[0].reason, ExclusionReason::OverCapacity);
    }

    #[test]
    pub fn unreachable_deadlines_empty_the_run() {
        let _ = env_logger::try_init();
        // one-way times 12.2 and 12.4 against an urgent budget of 10
        let p1 = Package::new(1, Point { x: 5.0, y: 10.0, z: 0.0 }, 5.0, 1, Priority::Urgent);
        let p2 = Package::new(2, Point { x: 0.0, y: 12.0, z: 0.0 }, 5.0, 1, Priority::Urgent);
        let problem = Problem { profile: profile(), packages: vec![p1, p2], env: None };
        let solution = solve(&problem);
        assert!(solution.plan.is_empty());
        assert_eq!(solution.excluded.len(), 2);
        for e in &solution.excluded {
            assert_eq!(e.reason, ExclusionReason::DeadlineUnreachable);
        }
    }

    #[test]
    pub fn package_at_base_costs_nothing() {
        let prof = profile();
        let p = package(1, 0.0, 0.0, 0.0, 5.0);
        assert_eq!(pool_energy(&prof, None, &[&p]), 0.0);
        assert_eq!(leg_time(&prof, &BASE, &p.loc), 0.0);
    }

    #[test]
    pub fn heavier_payload_never_cheaper() {
        let prof = profile();
        let light = package(1, 5.0, 10.0, 10.0, 10.0);
        let heavy = package(1, 5.0, 10.0, 10.0, 15.0);
        assert!(pool_energy(&prof, None, &[&heavy]) >= pool_energy(&prof, None, &[&light]));

        let other = package(2, -5.0, 10.0, 10.0, 11.0);
        assert!(
            pool_energy(&prof, None, &[&heavy, &other])
                >= pool_energy(&prof, None, &[&light, &other])
        );
    }

    #[test]
    pub fn wind_alignment_orders_leg_energy() {
        let prof = profile();
        let to = Point { x: 10.0, y: 0.0, z: 0.0 };
        let tail = Environment::new(25.0, 0.0, 0.1);
        let head = Environment::new(25.0, 180.0, 0.1);
        let calm = leg_energy(&prof, None, &BASE, &to, 5.0);
        assert!(leg_energy(&prof, Some(&tail), &BASE, &to, 5.0) < calm);
        assert!(leg_energy(&prof, Some(&head), &BASE, &to, 5.0) > calm);
    }

    #[test]
    pub fn pooling_shares_the_climb() {
        let _ = env_logger::try_init();
        let p1 = package(1, 5.0, 10.0, 10.0, 10.0);
        let p2 = package(2, -5.0, 10.0, 10.0, 11.0);
        let problem = Problem { profile: profile(), packages: vec![p1, p2], env: None };
        let solution = solve(&problem);
        assert!(solution.excluded.is_empty());
        // one combined flight beats two round trips, heavier drop first
        assert_eq!(solution.plan, Plan { pools: vec![vec![2, 1]] });
        assert!((solution.cost - 8407.9).abs() < 1.0);
    }

    #[test]
    pub fn selected_plan_respects_pool_invariants() {
        let _ = env_logger::try_init();
        let packages = vec![
            package(1, 5.0, 10.0, 10.0, 10.0),
            package(2, -5.0, 10.0, 10.0, 11.0),
            package(3, -10.0, 20.0, 20.0, 12.0),
            package(4, -25.0, 26.0, 7.0, 13.0),
        ];
        let problem = Problem { profile: profile(), packages: packages.clone(), env: None };
        let solution = solve(&problem);
        assert!(!solution.plan.is_empty());

        let mut covered: Vec<usize> = solution.plan.packages().collect();
        covered.sort();
        assert_eq!(covered, vec![1, 2, 3, 4]);

        for pool in &solution.plan.pools {
            let refs: Vec<&Package> = pool
                .iter()
                .map(|id| packages.iter().find(|p| p.id == *id).unwrap())
                .collect();
            let weight: f32 = refs.iter().map(|p| p.weight).sum();
            assert!(weight <= problem.profile.capacity);
            assert!(
                pool_energy(&problem.profile, None, &refs) + problem.profile.reserve_battery
                    <= problem.profile.max_battery
            );
        }
    }

    #[test]
    pub fn low_battery_charges_between_pools() {
        let _ = env_logger::try_init();
        let packages = vec![
            package(1, 5.0, 10.0, 10.0, 10.0),
            package(2, -5.0, 10.0, 10.0, 11.0),
        ];
        let plan: Vec<Pool> = vec![
            std::iter::once(0).collect(),
            std::iter::once(1).collect(),
        ];
        let full = profile();
        let mut small = profile();
        small.max_battery = 7000.0;

        let quick = delivery_times(&full, None, &packages, &plan);
        let delayed = delivery_times(&small, None, &packages, &plan);
        // the first pool fits either battery without charging
        assert_eq!(quick[0].1, delayed[0].1);
        // the second pool has to wait for the charger on the small battery
        assert!(delayed[1].1 > quick[1].1 + 40.0);
    }

    #[test]
    pub fn late_delivery_rejects_plan() {
        let prof = profile();
        let far = package(2, 30.0, 40.0, 0.0, 5.0);
        let fast = Package::new(1, Point { x: 5.0, y: 10.0, z: 0.0 }, 5.0, 1, Priority::Fast);
        let packages = vec![far, fast];

        let far_first: Vec<Pool> = vec![[0, 1].iter().copied().collect()];
        let fast_first: Vec<Pool> = vec![[1, 0].iter().copied().collect()];
        assert!(!deadlines_ok(&prof, None, &packages, &far_first));
        assert!(deadlines_ok(&prof, None, &packages, &fast_first));
    }

    #[test]
    pub fn json_problem_solves() {
        let _ = env_logger::try_init();
        let problem: Problem = serde_json::from_str(
            r#"{
                "profile": {
                    "capacity": 40.0, "speed": 5.0, "max_battery": 15000.0,
                    "bcr": 10.0, "charge_rate": 100.0, "drain_rate": 50.0,
                    "height_rate": 1.5, "altitude": 10.0, "takeoff_rate": 2.0,
                    "reserve_battery": 100.0
                },
                "packages": [
                    {"id": 1, "loc": {"x": 5.0, "y": 10.0, "z": 10.0},
                     "weight": 10.0, "quantity": 1, "priority": "Normal"},
                    {"id": 2, "loc": {"x": -5.0, "y": 10.0, "z": 10.0},
                     "weight": 11.0, "quantity": 1, "priority": "Normal"}
                ],
                "env": null
            }"#,
        )
        .unwrap();
        let solution = solve(&problem);
        assert!(solution.excluded.is_empty());
        assert_eq!(solution.plan.packages().count(), 2);
    }
}
