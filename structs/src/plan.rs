use serde::{Deserialize, Serialize};

/// An ordered sequence of pools. Each pool lists package ids in drop-off
/// order; the drone returns to base between pools. Together the pools cover
/// the filtered package set exactly once. An empty plan is the normal
/// "nothing deliverable" outcome, not an error.
#[derive(Debug, Clone, PartialEq)]
#[derive(Serialize, Deserialize)]
pub struct Plan {
    pub pools: Vec<Vec<usize>>,
}

impl Plan {
    pub fn empty() -> Plan {
        Plan { pools: Vec::new() }
    }

    pub fn is_empty(&self) -> bool {
        self.pools.is_empty()
    }

    /// Package ids in delivery order across all pools.
    pub fn packages(&self) -> impl Iterator<Item = usize> + '_ {
        self.pools.iter().flatten().copied()
    }

    pub fn print(&self) {
        for (i, pool) in self.pools.iter().enumerate() {
            println!("pool {}", i);
            for p in pool {
                println!("  - package {}", p);
            }
        }
    }
}
