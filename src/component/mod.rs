mod demand;
mod expanded;
mod instance;
mod solution;

pub mod evaluator;

pub use demand::{generate_demands, Demand, DemandList};
pub use evaluator::{Evaluator, Objective};
pub use expanded::{Arc, ArcIndex, ExpandedGraph, Vertex, VertexIndex};
pub use instance::{AdmissionOrder, Instance};
pub use solution::{Assignment, Resolution, Solution};
