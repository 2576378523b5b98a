use std::cmp::Reverse;

use crate::component::{Assignment, Demand, DemandList, Solution};
use crate::network::Network;
use crate::utils::error::Error;


/// Sequence in which pending demands are admitted. Within one batch the
/// order is fixed before the first admission and never revisited.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AdmissionOrder {
    Input,
    WidestFirst,
}

/// The whole-run container: topology with live occupancy, the demand pool,
/// per-demand resolutions and the admission cursor. All occupancy mutations
/// funnel through `commit`, which either applies a full assignment or
/// nothing.
#[derive(Clone, Debug, Default)]
pub struct Instance {
    pub network: Network,
    pub demands: DemandList,
    pub solution: Solution,
    order: Vec<usize>,
    cursor: usize,
}


impl AdmissionOrder {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "input"        => Some(AdmissionOrder::Input),
            "widest-first" => Some(AdmissionOrder::WidestFirst),
            _              => None,
        }
    }
}

impl Instance {
    pub fn new(network: Network) -> Self {
        Instance { network, ..Default::default() }
    }
    pub fn add_demands(&mut self, demands: Vec<Demand>, order: AdmissionOrder) {
        self.demands.append(demands);
        self.solution.resize(self.demands.len());
        let mut fresh: Vec<usize> = self.demands.inputs().collect();
        if order == AdmissionOrder::WidestFirst {
            // stable, so equal loads keep their arrival order
            fresh.sort_by_key(|&id| Reverse(self.demands.load(id)));
        }
        self.order.extend(fresh);
    }
    /// Next up-to-`size` unresolved demands in admission order. Advances the
    /// cursor; admitted or blocked demands are never revisited.
    pub fn next_batch(&mut self, size: usize) -> Vec<usize> {
        debug_assert!(size > 0);
        let mut batch = Vec::with_capacity(size);
        while batch.len() < size && self.cursor < self.order.len() {
            let id = self.order[self.cursor];
            self.cursor += 1;
            if self.solution.resolution(id).is_pending() {
                batch.push(id);
            }
        }
        batch
    }
    /// Demands not yet admitted nor blocked, in admission order.
    pub fn pending(&self) -> Vec<usize> {
        self.order.iter().cloned()
            .filter(|&id| self.solution.resolution(id).is_pending())
            .collect()
    }
    pub fn commit(&mut self, id: usize, assignment: Assignment) -> Result<(), Error> {
        let load = self.demands.load(id);
        self.network.commit(&assignment.path, assignment.slice, load, id)?;
        self.solution.flag_routed(id, assignment, load)
    }
    pub fn block(&mut self, id: usize) -> Result<(), Error> {
        self.solution.flag_blocked(id)
    }
    pub fn routed(&self) -> usize {
        self.solution.routed()
    }
    pub fn blocked(&self) -> usize {
        self.solution.blocked()
    }
    pub fn max_used_slice(&self) -> Option<usize> {
        self.network.max_used_slice()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn line() -> Network {
        let mut network = Network::default();
        network.add_nodes(3);
        network.add_links(vec![(0, 1, 10.0, 8), (1, 2, 10.0, 8)]);
        network
    }

    #[test]
    fn it_batches_in_input_order() {
        let mut instance = Instance::new(line());
        instance.add_demands(vec![
            Demand::new(0, 2, 1, None),
            Demand::new(0, 2, 3, None),
            Demand::new(0, 2, 2, None),
        ], AdmissionOrder::Input);
        assert_eq!(instance.next_batch(2), vec![0, 1]);
        assert_eq!(instance.next_batch(2), vec![2]);
        assert_eq!(instance.next_batch(2), Vec::<usize>::new());
    }
    #[test]
    fn it_batches_widest_first() {
        let mut instance = Instance::new(line());
        instance.add_demands(vec![
            Demand::new(0, 2, 1, None),
            Demand::new(0, 2, 3, None),
            Demand::new(0, 2, 3, None),
            Demand::new(0, 2, 2, None),
        ], AdmissionOrder::WidestFirst);
        assert_eq!(instance.next_batch(4), vec![1, 2, 3, 0]);
    }
    #[test]
    fn it_commits_and_blocks() {
        let mut instance = Instance::new(line());
        instance.add_demands(vec![
            Demand::new(0, 2, 2, None),
            Demand::new(0, 2, 2, None),
        ], AdmissionOrder::Input);
        let path = vec![0.into(), 1.into()];
        instance.commit(0, Assignment::new(path, 0)).unwrap();
        instance.block(1).unwrap();
        assert_eq!(instance.routed(), 1);
        assert_eq!(instance.blocked(), 1);
        assert_eq!(instance.max_used_slice(), Some(1));
        assert_eq!(instance.pending(), Vec::<usize>::new());
    }
    #[test]
    fn it_rejects_overlapping_commits() {
        let mut instance = Instance::new(line());
        instance.add_demands(vec![
            Demand::new(0, 2, 2, None),
            Demand::new(0, 1, 2, None),
        ], AdmissionOrder::Input);
        instance.commit(0, Assignment::new(vec![0.into(), 1.into()], 0)).unwrap();
        let err = instance.commit(1, Assignment::new(vec![0.into()], 1)).unwrap_err();
        assert_eq!(err, Error::SliceConflict(0.into(), 1, 1..3, 0));
    }
}
