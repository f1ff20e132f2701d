use droprun_planner::brute::solve;
use droprun_sim::{execute, scenarios, DroneState};
use droprun_structs::report::DeliveryEvent;

pub fn main() {
    env_logger::init();

    let problem = scenarios::windy();
    std::fs::write(
        "windy_problem.json",
        serde_json::to_string(&problem).unwrap(),
    )
    .unwrap();

    let solution = solve(&problem);
    for e in &solution.excluded {
        println!("package {} skipped: {}", e.package, e.reason);
    }
    if solution.plan.is_empty() {
        println!("nothing to deliver");
        return;
    }

    println!("best plan (battery requirement {:.1}):", solution.cost);
    solution.plan.print();

    let mut drone = DroneState::new(&problem.profile);
    for event in execute(&problem, &solution.plan, &mut drone) {
        match event {
            DeliveryEvent::Delivered { package, elapsed, battery } => {
                println!("t={:8.2}  delivered package {} (battery {:.1})", elapsed, package, battery)
            }
            DeliveryEvent::ReturnedToBase { elapsed, battery } => {
                println!("t={:8.2}  returned to base (battery {:.1})", elapsed, battery)
            }
        }
    }
    println!("final battery: {:.1}", drone.battery);
}
