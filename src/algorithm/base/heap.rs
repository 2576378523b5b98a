use std::cmp::Reverse;
use ordered_float::OrderedFloat;
use priority_queue::PriorityQueue;


pub type MyMinHeap<I> = PriorityQueue<I, Priority>;


/// Orders by cost, then slice offset, then vertex number. The trailing keys
/// make pop order a strict total order, which keeps equal-cost searches
/// deterministic and settles ties toward the lowest slice.
#[derive(PartialEq, Eq, PartialOrd, Ord)]
pub struct Priority (Reverse<(OrderedFloat<f64>, usize, usize)>);

impl Priority {
    pub fn new(cost: f64, slice: usize, vertex: usize) -> Self {
        Self (Reverse((OrderedFloat(cost), slice, vertex)))
    }
    pub fn cost(&self) -> f64 {
        ((self.0).0).0.into_inner()
    }
}
