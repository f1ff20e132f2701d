use droprun_planner::brute::solve;
use droprun_planner::partitions::enumerate_plans;
use droprun_structs::problem::{DroneProfile, Environment, Package, Priority, Problem};
use droprun_structs::Point;

#[cfg(not(feature = "prof"))]
pub fn main() {
    println!("benchmarks not supported -- enable 'prof' crate feature")
}

#[derive(Debug)]
struct Result {
    n: usize,
    candidates: usize,
    cost: f32,
    time: f32,
}

/// Synthetic instance: `n` packages on a ring around the base, staggered
/// altitudes and weights, wind attached.
fn instance(n: usize) -> Problem {
    let profile = DroneProfile {
        capacity: 60.0,
        speed: 5.0,
        max_battery: 40000.0,
        bcr: 10.0,
        charge_rate: 100.0,
        drain_rate: 50.0,
        height_rate: 1.5,
        altitude: 10.0,
        takeoff_rate: 2.0,
        reserve_battery: 100.0,
    };
    let packages = (0..n)
        .map(|i| {
            let angle = i as f32 * std::f32::consts::TAU / n as f32;
            Package::new(
                i,
                Point { x: 20.0 * angle.cos(), y: 20.0 * angle.sin(), z: 5.0 + i as f32 },
                5.0 + i as f32,
                1,
                Priority::Normal,
            )
        })
        .collect();
    Problem { profile, packages, env: Some(Environment::new(25.0, -63.0, 0.1)) }
}

#[cfg(feature = "prof")]
pub fn main() {
    use std::time::Instant;

    env_logger::init();

    println!("---------------------------");
    println!("droprun solver benchmarking");
    println!("---------------------------");
    println!();

    let sizes = [1usize, 2, 3, 4, 5, 6];
    let mut results: Vec<Result> = Vec::new();

    println!("# RUNNING {} INSTANCES", sizes.len());
    for &n in &sizes {
        let _p = hprof::enter("instance");
        let problem = instance(n);
        println!(" * instance with {} packages", n);
        let candidates = enumerate_plans(n).len();

        let t0 = Instant::now();
        let solution = {
            let _p0 = hprof::enter("plan");
            solve(&problem)
        };
        let time = t0.elapsed().as_secs_f32();
        results.push(Result { n, candidates, cost: solution.cost, time });
    }
    println!();
    println!("# PROFILER");
    hprof::profiler().print_timing();
    println!();

    println!("# RESULTS");

    use std::io::Write;
    let table = Vec::new();
    let mut tablewriter = tabwriter::TabWriter::new(table);
    writeln!(&mut tablewriter, "n\tplans\tcost\ttime").unwrap();
    writeln!(&mut tablewriter, "---\t---\t---\t---").unwrap();
    for r in &results {
        writeln!(
            &mut tablewriter,
            "{}\t{}\t{:.0}\t{:.3}",
            r.n, r.candidates, r.cost, r.time
        )
        .unwrap();
    }
    let written = String::from_utf8(tablewriter.into_inner().unwrap()).unwrap();
    println!("{}", written);

    let mut wtr = csv::Writer::from_path("benchmark_results.csv").unwrap();
    wtr.write_record(["n", "plans", "cost", "time"]).unwrap();
    for r in &results {
        wtr.write_record([
            r.n.to_string(),
            r.candidates.to_string(),
            format!("{:.1}", r.cost),
            format!("{:.4}", r.time),
        ])
        .unwrap();
    }
    wtr.flush().unwrap();
    println!("wrote benchmark_results.csv");
}
