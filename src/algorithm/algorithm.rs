use std::time::Instant;

use enum_dispatch::enum_dispatch;

use super::firstfit::FirstFit;
use super::relax::Relax;
use crate::component::{Evaluator, Instance};
use crate::utils::error::Error;


#[enum_dispatch]
pub enum AlgorithmEnum {
    FirstFit,
    Relax,
}

#[enum_dispatch(AlgorithmEnum)]
pub trait Algorithm {
    /// Resolves every demand of `batch` to routed or blocked, in order,
    /// against the instance's live occupancy. Past the deadline remaining
    /// demands are blocked without a search.
    fn place(&mut self, instance: &mut Instance, batch: &[usize],
             evaluator: &Evaluator, deadline: Instant) -> Result<(), Error>;
}
