use serde::Deserialize;
use argh::FromArgs;

/// An online routing and spectrum assignment engine for elastic optical networks
#[derive(FromArgs)]
pub struct Arguments {
    /// path to the network topology file
    #[argh(positional)]
    pub network: String,
    /// demand files, consumed as successive arrival batches
    #[argh(positional)]
    pub demands: Vec<String>,
    /// path to configuration file
    #[argh(option, short='c')]
    pub config: Option<String>,
    /// override algorithm used to place demands
    #[argh(option, short='a')]
    pub algorithm: Option<String>,
    /// override numeric code of the optimized objective
    #[argh(option, short='o')]
    pub objective: Option<u32>,
    /// override reach penalty added per traversed hop
    #[argh(option, short='p')]
    pub hop_penalty: Option<f64>,
    /// override random seed for generation and perturbed passes
    #[argh(option, short='s')]
    pub seed: Option<u64>,
}

#[derive(Deserialize, Clone, Debug)]
pub struct Config {
    pub name: String,
    pub algorithm: String,
    pub objective: u32,
    pub hop_penalty: f64,
    pub admission: String,
    pub batch_size: usize,
    pub max_iterations: usize,
    pub patience: usize,
    pub timeout: u64,
    pub seed: u64,
    pub generation: Generation,
}

/// Parameters of the synthetic demand pool. A count of zero disables it;
/// a reach of zero leaves generated demands unbounded.
#[derive(Deserialize, Clone, Debug)]
pub struct Generation {
    pub count: usize,
    pub loads: Vec<usize>,
    pub reach: f64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            name: "default".into(),
            algorithm: "firstfit".into(),
            objective: 4,
            hop_penalty: 0.0,
            admission: "input".into(),
            batch_size: 1,
            max_iterations: 50,
            patience: 10,
            timeout: 10_000_000,
            seed: 42,
            generation: Generation::default(),
        }
    }
}

impl Default for Generation {
    fn default() -> Self {
        Generation { count: 0, loads: vec![1, 2, 3], reach: 0.0 }
    }
}

impl Config {
    pub fn override_from_args(&mut self, args: &Arguments) {
        if let Some(algorithm) = &args.algorithm {
            self.algorithm = algorithm.clone();
        }
        if let Some(objective) = args.objective {
            self.objective = objective;
        }
        if let Some(penalty) = args.hop_penalty {
            self.hop_penalty = num::clamp(penalty, 0.0, 9999999.9);
        }
        if let Some(seed) = args.seed {
            self.seed = seed;
        }
    }
}
