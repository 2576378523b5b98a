use std::time::Instant;

use super::base::search::spectrum_route;
use super::Algorithm;
use crate::component::{Assignment, Evaluator, ExpandedGraph, Instance};
use crate::utils::error::Error;


/// Greedy sequential admission: each demand gets one constrained search over
/// a graph expanded from the occupancy its predecessors left behind, and the
/// outcome is committed irrevocably.
#[derive(Default)]
pub struct FirstFit;


impl FirstFit {
    pub fn new() -> Self {
        FirstFit
    }
}

impl Algorithm for FirstFit {
    fn place(&mut self, instance: &mut Instance, batch: &[usize],
             evaluator: &Evaluator, deadline: Instant) -> Result<(), Error> {
        for &id in batch {
            match Instant::now() < deadline {
                true  => { admit(instance, evaluator, id)?; },
                false => { instance.block(id)?; },
            }
        }
        Ok(())
    }
}

/// Routes one demand or blocks it. Returns whether it was routed.
pub fn admit(instance: &mut Instance, evaluator: &Evaluator, id: usize)
    -> Result<bool, Error> {
    let demand = instance.demands.demand(id).clone();
    let graph = ExpandedGraph::build(&instance.network, &demand, evaluator);
    match spectrum_route(&graph, demand.reach) {
        Some((arcs, slice)) => {
            let path = arcs.iter()
                .map(|&a| graph.arc(a).label())
                .collect();
            instance.commit(id, Assignment::new(path, slice))?;
            Ok(true)
        }
        None => {
            instance.block(id)?;
            Ok(false)
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::evaluator::Objective;
    use crate::component::{AdmissionOrder, Demand};
    use crate::network::Network;

    #[test]
    fn it_admits_until_the_spectrum_runs_out() {
        let mut network = Network::default();
        network.add_nodes(2);
        network.add_links(vec![(0, 1, 10.0, 4)]);
        let mut instance = Instance::new(network);
        instance.add_demands(vec![
            Demand::new(0, 1, 3, None),
            Demand::new(0, 1, 3, None),
        ], AdmissionOrder::Input);
        let evaluator = Evaluator::new(Objective::PathLength, 0.0);

        assert_eq!(admit(&mut instance, &evaluator, 0), Ok(true));
        assert_eq!(admit(&mut instance, &evaluator, 1), Ok(false));
        let assignment = instance.solution.assignment(0).unwrap();
        assert_eq!((assignment.slice, assignment.path.len()), (0, 1));
        assert!(instance.solution.resolution(1).is_blocked());
    }
}
