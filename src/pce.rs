use std::fmt::Write;
use std::time::{Duration, Instant};

use itertools::Itertools;

use crate::algorithm::{Algorithm, AlgorithmEnum, FirstFit, Relax};
use crate::component::evaluator::Objective;
use crate::component::{generate_demands, AdmissionOrder, Assignment, Demand,
                       Evaluator, Instance, Resolution};
use crate::network::Network;
use crate::utils::config::Config;
use crate::utils::error::Error;


// deadlines far enough away to mean "unbounded" without overflowing Instant
const TIMEOUT_CAP: u64 = 86_400_000_000;

/// Run status comparable with what an exact solver reports. The heuristic
/// side never proves optimality; `Optimal` exists for cross-validation
/// against the MILP path.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SolveStatus {
    Optimal,
    Feasible,
    Infeasible,
    TimeLimit,
}

/// End-of-run figures for external formatting and cross-method comparison.
#[derive(Clone, Debug)]
pub struct Report {
    pub status: SolveStatus,
    pub demands: usize,
    pub routed: usize,
    pub blocked: usize,
    pub occupied_slices: usize,
    pub max_used_slice: Option<usize>,
    pub objective: f64,
    pub assignments: Vec<Option<Assignment>>,
}

/// The path computation element: owns the run state and drives sequential
/// admission, batch by batch, under the configured algorithm and budgets.
pub struct PCE {
    pub algorithm: AlgorithmEnum,
    pub evaluator: Evaluator,
    pub instance: Instance,
    pub config: Config,
    admission: AdmissionOrder,
    timed_out: bool,
}


impl PCE {
    pub fn new(network: Network, config: Config) -> Self {
        let algorithm: AlgorithmEnum = match config.algorithm.as_str() {
            "firstfit" => FirstFit::new().into(),
            "relax"    => Relax::new(config.seed, config.max_iterations,
                                     config.patience).into(),
            _          => panic!("Failed to specify an unknown placement algorithm"),
        };
        let objective = Objective::from_code(config.objective)
            .expect("Failed to specify an unknown objective code");
        let evaluator = Evaluator::new(objective, config.hop_penalty);
        let admission = AdmissionOrder::from_name(&config.admission)
            .expect("Failed to specify an unknown admission order");
        let instance = Instance::new(network);
        Self { algorithm, evaluator, instance, config, admission, timed_out: false }
    }
    pub fn add_demands(&mut self, demands: Vec<Demand>) {
        self.instance.add_demands(demands, self.admission);
    }
    /// Appends the synthetic pool configured under `generation`, if any.
    pub fn generate_demands(&mut self) {
        if self.config.generation.count == 0 {
            return;
        }
        let node_count = self.instance.network.node_count();
        let demands = generate_demands(&self.config.generation, node_count,
                                       self.config.seed);
        self.add_demands(demands);
    }
    /// Admits every pending demand, `batch_size` at a time, until the pool
    /// or the time budget runs out. Expiry is polled between batches; left
    /// over demands are then blocked by policy. Returns the elapsed time in
    /// microseconds.
    pub fn admit(&mut self) -> Result<u128, Error> {
        let start = Instant::now();
        let timeout = self.config.timeout.min(TIMEOUT_CAP);
        let deadline = start + Duration::from_micros(timeout);

        loop {
            let batch = self.instance.next_batch(self.config.batch_size);
            if batch.is_empty() {
                break;
            }
            self.algorithm.place(&mut self.instance, &batch,
                                 &self.evaluator, deadline)?;
            if Instant::now() >= deadline {
                self.timed_out = true;
                break;
            }
        }
        for id in self.instance.pending() {
            self.instance.block(id)?;
        }
        let elapsed = start.elapsed().as_micros();

        self.show_results();
        Ok(elapsed)
    }
    pub fn report(&self) -> Report {
        let instance = &self.instance;
        let status = match (self.timed_out, instance.routed()) {
            (true, _)                         => SolveStatus::TimeLimit,
            (false, 0) if instance.blocked() > 0 => SolveStatus::Infeasible,
            (false, _)                        => SolveStatus::Feasible,
        };
        let assignments = (0..instance.demands.len())
            .map(|id| instance.solution.assignment(id).cloned())
            .collect();
        Report {
            status,
            demands: instance.demands.len(),
            routed: instance.routed(),
            blocked: instance.blocked(),
            occupied_slices: instance.network.occupied_slices(),
            max_used_slice: instance.max_used_slice(),
            objective: self.evaluator.evaluate(&instance.network,
                                               &instance.demands,
                                               &instance.solution),
            assignments,
        }
    }
    fn show_results(&self) {
        let instance = &self.instance;
        let mut msg = String::new();

        writeln!(msg, "demands").unwrap();
        for id in 0..instance.demands.len() {
            let (src, dst) = instance.demands.ends(id);
            match instance.solution.resolution(id) {
                Resolution::Routed(assignment) => {
                    let load = instance.demands.load(id);
                    let route = instance.network
                        .node_sequence(src.into(), &assignment.path)
                        .iter()
                        .map(|n| n.index())
                        .join("-");
                    writeln!(msg, "- demand #{:02} ({}, {}) ok, slices [{}, {}) via {}",
                             id, src, dst, assignment.slice,
                             assignment.slice + load, route).unwrap();
                }
                Resolution::Blocked => {
                    writeln!(msg, "- demand #{:02} ({}, {}) blocked",
                             id, src, dst).unwrap();
                }
                Resolution::Pending => {
                    writeln!(msg, "- demand #{:02} ({}, {}) pending",
                             id, src, dst).unwrap();
                }
            }
        }
        let report = self.report();
        writeln!(msg, "the run routed {}/{} demands with objective {:.2}, max used slice {}",
                 report.routed, report.demands, report.objective,
                 report.max_used_slice.map_or("none".into(), |s| s.to_string()))
            .unwrap();
        print!("{}", msg);
    }
}
