use std::ops::Range;

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaChaRng;
use serde::{Deserialize, Serialize};

use crate::utils::config::Generation;


/// A request for `load` contiguous slices between two nodes. `reach` bounds
/// the physical length of the routing path, when present.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Demand {
    pub src: usize,
    pub dst: usize,
    pub load: usize,
    #[serde(default)]
    pub reach: Option<f64>,
}

#[derive(Clone, Debug, Default)]
pub struct DemandList {
    demands: Vec<Demand>,
    inputs: Range<usize>,
}


impl Demand {
    pub fn new(src: usize, dst: usize, load: usize, reach: Option<f64>) -> Self {
        Demand { src, dst, load, reach }
    }
}

impl DemandList {
    pub fn new() -> Self {
        DemandList { ..Default::default() }
    }
    /// Ids of the demands appended by the latest batch.
    pub fn inputs(&self) -> Range<usize> {
        self.inputs.clone()
    }
    pub fn append(&mut self, demands: Vec<Demand>) {
        let len = self.demands.len();
        self.demands.extend(demands);
        self.inputs = len..self.demands.len();
    }
    pub fn demand(&self, id: usize) -> &Demand {
        self.demands.get(id)
            .expect("Failed to obtain demand spec from an invalid id")
    }
    pub fn ends(&self, id: usize) -> (usize, usize) {
        let demand = self.demand(id);
        (demand.src, demand.dst)
    }
    pub fn load(&self, id: usize) -> usize {
        self.demand(id).load
    }
    pub fn reach(&self, id: usize) -> Option<f64> {
        self.demand(id).reach
    }
    pub fn len(&self) -> usize {
        self.demands.len()
    }
    pub fn is_empty(&self) -> bool {
        self.demands.is_empty()
    }
}

/// Synthesizes a demand batch from the configured distributions. Source and
/// target are drawn uniformly with src != dst, loads uniformly from the
/// configured list. Deterministic for a fixed seed.
pub fn generate_demands(generation: &Generation, node_count: usize, seed: u64) -> Vec<Demand> {
    debug_assert!(node_count >= 2);
    debug_assert!(!generation.loads.is_empty());
    let mut rng = ChaChaRng::seed_from_u64(seed);
    let reach = match generation.reach {
        bound if bound > 0.0 => Some(bound),
        _ => None,
    };
    let mut demands = Vec::with_capacity(generation.count);
    for _ in 0..generation.count {
        let src = rng.gen_range(0..node_count);
        let offset = rng.gen_range(1..node_count);
        let dst = (src + offset) % node_count;
        let load = generation.loads[rng.gen_range(0..generation.loads.len())];
        demands.push(Demand::new(src, dst, load, reach));
    }
    demands
}
