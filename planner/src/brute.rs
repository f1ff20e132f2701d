use log::{debug, info};
use ordered_float::OrderedFloat;
use rayon::prelude::*;

use droprun_structs::plan::Plan;
use droprun_structs::problem::Problem;

use crate::feasibility::{plan_energy, plan_feasible, prefilter};
use crate::partitions::enumerate_plans;
use crate::Solution;

/// Exhaustive search: pre-filter the packages, enumerate every
/// (partition, drop-off order) candidate, keep the feasible ones and take
/// the minimum total battery requirement. Candidates are evaluated in
/// parallel over immutable inputs; ties resolve to the lowest enumeration
/// index, so results are deterministic.
pub fn solve(problem: &Problem) -> Solution {
    #[cfg(feature = "prof")]
    let _p = hprof::enter("solve");

    let (packages, excluded) = prefilter(problem);
    if packages.is_empty() {
        info!("nothing to deliver");
        return Solution { cost: 0.0, plan: Plan::empty(), excluded };
    }

    let candidates = {
        #[cfg(feature = "prof")]
        let _p = hprof::enter("enumerate");
        enumerate_plans(packages.len())
    };
    debug!(
        "{} candidate plans for {} packages",
        candidates.len(),
        packages.len()
    );

    let profile = &problem.profile;
    let env = problem.env.as_ref();

    let best = {
        #[cfg(feature = "prof")]
        let _p = hprof::enter("evaluate");
        candidates
            .par_iter()
            .enumerate()
            .filter(|&(_, plan)| plan_feasible(profile, env, &packages, plan))
            .map(|(idx, plan)| (OrderedFloat(plan_energy(profile, env, &packages, plan)), idx))
            .min()
    };

    match best {
        Some((cost, idx)) => {
            let pools = candidates[idx]
                .iter()
                .map(|pool| pool.iter().map(|&i| packages[i].id).collect())
                .collect();
            info!("selected plan with battery requirement {:.1}", cost.0);
            Solution { cost: cost.0, plan: Plan { pools }, excluded }
        }
        None => {
            info!("no feasible plan among {} candidates", candidates.len());
            Solution { cost: 0.0, plan: Plan::empty(), excluded }
        }
    }
}
