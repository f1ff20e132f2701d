use tinyvec::TinyVec;

/// A delivery pool candidate: indices into the filtered package slice, in
/// drop-off order.
pub type Pool = TinyVec<[usize; 8]>;

/// Every way to split `n` packages into pools with a drop-off order inside
/// each pool: all set partitions crossed with all per-block orderings.
/// Pools are emitted in a canonical sequence ordered by the smallest
/// package index they contain, so each (partition, intra-pool order)
/// combination appears exactly once. Counts follow 1, 3, 13, 73, 501, ...
/// for n = 1.. -- factorial growth, intended for small runs only.
pub fn enumerate_plans(n: usize) -> Vec<Vec<Pool>> {
    let mut partitions = Vec::new();
    let mut blocks: Vec<Pool> = Vec::new();
    collect_partitions(n, 0, &mut blocks, &mut partitions);

    let mut plans = Vec::new();
    for partition in &partitions {
        let orderings: Vec<Vec<Pool>> = partition.iter().map(pool_orders).collect();
        let mut expanded: Vec<Vec<Pool>> = vec![Vec::new()];
        for options in &orderings {
            let mut next = Vec::with_capacity(expanded.len() * options.len());
            for prefix in &expanded {
                for option in options {
                    let mut plan = prefix.clone();
                    plan.push(option.clone());
                    next.push(plan);
                }
            }
            expanded = next;
        }
        plans.extend(expanded);
    }
    plans
}

/// Assign each package index to an existing block or open a new one. A new
/// block always starts with the smallest index not yet placed, which keeps
/// the block sequence canonical without any deduplication pass.
fn collect_partitions(n: usize, next: usize, blocks: &mut Vec<Pool>, out: &mut Vec<Vec<Pool>>) {
    if next == n {
        if !blocks.is_empty() {
            out.push(blocks.clone());
        }
        return;
    }
    for i in 0..blocks.len() {
        blocks[i].push(next);
        collect_partitions(n, next + 1, blocks, out);
        blocks[i].pop();
    }
    blocks.push(std::iter::once(next).collect());
    collect_partitions(n, next + 1, blocks, out);
    blocks.pop();
}

/// All drop-off orders for one block of package indices.
fn pool_orders(block: &Pool) -> Vec<Pool> {
    if block.len() <= 1 {
        return vec![block.clone()];
    }
    let mut orders = Vec::new();
    for i in 0..block.len() {
        let mut rest = block.clone();
        let first = rest.remove(i);
        for mut tail in pool_orders(&rest) {
            tail.insert(0, first);
            orders.push(tail);
        }
    }
    orders
}
