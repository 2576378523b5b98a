use std::time::Instant;

use ordered_float::OrderedFloat;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaChaRng;

use super::firstfit::FirstFit;
use super::Algorithm;
use crate::component::{Evaluator, Instance};
use crate::utils::error::Error;


/// Iterated re-admission: repeated independent first-fit passes over a fresh
/// copy of the pre-batch state, each with the objective coefficients
/// perturbed per link, keeping the best outcome seen. A pass never unroutes
/// what it committed earlier in the same pass; escape from poor admission
/// orders comes only from restarting whole passes.
pub struct Relax {
    seed: u64,
    max_iterations: usize,
    patience: usize,
}


impl Relax {
    pub fn new(seed: u64, max_iterations: usize, patience: usize) -> Self {
        Relax { seed, max_iterations, patience }
    }
}

impl Algorithm for Relax {
    fn place(&mut self, instance: &mut Instance, batch: &[usize],
             evaluator: &Evaluator, deadline: Instant) -> Result<(), Error> {
        // unperturbed baseline pass
        let mut best = instance.clone();
        FirstFit::new().place(&mut best, batch, evaluator, deadline)?;
        let mut best_score = score(&best, evaluator);

        let mut rng = ChaChaRng::seed_from_u64(self.seed);
        let mut stale = 0;
        for _ in 1..self.max_iterations {
            if Instant::now() >= deadline || stale >= self.patience {
                break;
            }
            let mut trial = instance.clone();
            let mut perturbed = evaluator.clone();
            let jitter = (0..instance.network.link_count())
                .map(|_| rng.gen_range(1.0..2.0))
                .collect();
            perturbed.set_jitter(jitter);
            FirstFit::new().place(&mut trial, batch, &perturbed, deadline)?;

            // trials always score under the unperturbed objective
            let trial_score = score(&trial, evaluator);
            match trial_score < best_score {
                true  => { best = trial; best_score = trial_score; stale = 0; },
                false => { stale += 1; },
            }
        }
        *instance = best;
        Ok(())
    }
}

fn score(instance: &Instance, evaluator: &Evaluator) -> (usize, OrderedFloat<f64>) {
    let objective = evaluator.evaluate(
        &instance.network, &instance.demands, &instance.solution);
    (instance.blocked(), OrderedFloat(objective))
}


#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use crate::component::evaluator::Objective;
    use crate::component::{AdmissionOrder, Demand};
    use crate::network::Network;

    fn far_deadline() -> Instant {
        Instant::now() + Duration::from_secs(3600)
    }

    #[test]
    fn it_keeps_every_resolution_terminal() {
        let mut network = Network::default();
        network.add_nodes(4);
        network.add_links(vec![
            (0, 1, 10.0, 4), (1, 2, 10.0, 4), (2, 3, 10.0, 4), (3, 0, 10.0, 4),
        ]);
        let mut instance = Instance::new(network);
        instance.add_demands(vec![
            Demand::new(0, 2, 2, None),
            Demand::new(1, 3, 2, None),
            Demand::new(0, 2, 2, None),
        ], AdmissionOrder::Input);
        let batch = instance.next_batch(3);
        let evaluator = Evaluator::new(Objective::PathLength, 0.0);

        let mut relax = Relax::new(42, 8, 3);
        relax.place(&mut instance, &batch, &evaluator, far_deadline()).unwrap();
        for id in 0..3 {
            assert!(!instance.solution.resolution(id).is_pending());
        }
        assert_eq!(instance.routed() + instance.blocked(), 3);
    }
    #[test]
    fn it_never_worsens_the_baseline() {
        let mut network = Network::default();
        network.add_nodes(3);
        network.add_links(vec![(0, 1, 10.0, 8), (1, 2, 10.0, 8)]);
        let mut instance = Instance::new(network);
        instance.add_demands(vec![
            Demand::new(0, 2, 2, None),
            Demand::new(0, 2, 2, None),
        ], AdmissionOrder::Input);
        let batch = instance.next_batch(2);
        let evaluator = Evaluator::new(Objective::PathLength, 0.0);

        let mut baseline = instance.clone();
        FirstFit::new().place(&mut baseline, &batch, &evaluator, far_deadline()).unwrap();
        let mut relax = Relax::new(7, 6, 2);
        relax.place(&mut instance, &batch, &evaluator, far_deadline()).unwrap();
        assert!(score(&instance, &evaluator) <= score(&baseline, &evaluator));
    }
}
