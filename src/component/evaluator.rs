use crate::component::{DemandList, Solution};
use crate::network::{LinkIndex, Network};


/// The closed set of optimization targets, keyed by the same numeric codes
/// the exact-solver side uses, so runs stay comparable across methods.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Objective {
    Feasibility,      // 0: any feasible assignment
    DemandTopSlice,   // 1: sum of per-demand top slice positions
    LinkWatermark,    // 11: sum of per-link max used slice positions
    HopCount,         // 2: sum of hops over routed demands
    OccupiedSlices,   // 3: total number of occupied slices
    PathLength,       // 4: sum of physical path lengths
    OverallWatermark, // 8: highest used slice position network-wide
}

/// Projects the active objective into additive, non-negative per-arc costs
/// for the expanded graph, and scores finished solutions with the same
/// metric. The optional per-link jitter supports perturbed re-runs.
#[derive(Clone, Debug, Default)]
pub struct Evaluator {
    objective: Objective,
    hop_penalty: f64,
    jitter: Vec<f64>,
}


impl Default for Objective {
    fn default() -> Self {
        Objective::PathLength
    }
}

impl Objective {
    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            0  => Some(Objective::Feasibility),
            1  => Some(Objective::DemandTopSlice),
            11 => Some(Objective::LinkWatermark),
            2  => Some(Objective::HopCount),
            3  => Some(Objective::OccupiedSlices),
            4  => Some(Objective::PathLength),
            8  => Some(Objective::OverallWatermark),
            _  => None,
        }
    }
    pub fn code(self) -> u32 {
        match self {
            Objective::Feasibility      => 0,
            Objective::DemandTopSlice   => 1,
            Objective::LinkWatermark    => 11,
            Objective::HopCount         => 2,
            Objective::OccupiedSlices   => 3,
            Objective::PathLength       => 4,
            Objective::OverallWatermark => 8,
        }
    }
}

impl Evaluator {
    pub fn new(objective: Objective, hop_penalty: f64) -> Self {
        Evaluator { objective, hop_penalty, jitter: vec![] }
    }
    pub fn objective(&self) -> Objective {
        self.objective
    }
    /// Per-link multipliers applied on top of the objective coefficients.
    /// Used by perturbed passes; must stay positive to keep costs valid.
    pub fn set_jitter(&mut self, jitter: Vec<f64>) {
        debug_assert!(jitter.iter().all(|&j| j > 0.0));
        self.jitter = jitter;
    }
    /// Arc length charged against a demand's reach: physical length plus the
    /// configured penalty per traversed hop.
    pub fn arc_length(&self, network: &Network, link: LinkIndex) -> f64 {
        network.link(link).length() + self.hop_penalty
    }
    /// Search cost of crossing `link` with a block starting at `slice`.
    /// `from_source` marks arcs leaving the demand's source node; objective 8
    /// charges the watermark there once, since the offset is uniform along
    /// any path.
    pub fn arc_cost(&self, network: &Network, link: LinkIndex, slice: usize,
                    load: usize, from_source: bool) -> f64 {
        let top = slice + load - 1;
        let coeff = match self.objective {
            Objective::Feasibility => 0.0,
            Objective::DemandTopSlice => {
                network.link_count() as f64 * (top + 1) as f64
            }
            Objective::LinkWatermark => {
                let watermark = network.link(link).grid().max_used();
                watermark.map_or(top, |used| used.max(top)) as f64
            }
            Objective::HopCount => 1.0,
            Objective::OccupiedSlices => load as f64,
            Objective::PathLength => network.link(link).length(),
            Objective::OverallWatermark => {
                let watermark = network.max_used_slice();
                match from_source {
                    true  => (watermark.map_or(top, |used| used.max(top)) + 1) as f64,
                    false => 1.0,
                }
            }
        };
        coeff * self.jitter.get(link.index()).copied().unwrap_or(1.0)
    }
    /// Value of a finished solution under the active objective, computed from
    /// committed state rather than arc costs, so it is comparable with the
    /// value an exact solver reports.
    pub fn evaluate(&self, network: &Network, demands: &DemandList, solution: &Solution) -> f64 {
        let routed = (0..demands.len())
            .filter_map(|id| solution.assignment(id).map(|a| (id, a)));
        match self.objective {
            Objective::Feasibility => 0.0,
            Objective::DemandTopSlice => routed
                .map(|(id, a)| (a.slice + demands.load(id)) as f64)
                .sum(),
            Objective::LinkWatermark => network.links.iter()
                .filter_map(|link| link.grid().max_used())
                .map(|used| (used + 1) as f64)
                .sum(),
            Objective::HopCount => routed
                .map(|(_, a)| a.path.len() as f64)
                .sum(),
            Objective::OccupiedSlices => solution.occupied() as f64,
            Objective::PathLength => routed
                .map(|(_, a)| network.length_along(&a.path))
                .sum(),
            Objective::OverallWatermark => network.max_used_slice()
                .map_or(0.0, |used| (used + 1) as f64),
        }
    }
}
