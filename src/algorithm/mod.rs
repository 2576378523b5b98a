mod base;
mod algorithm;
mod firstfit;
mod relax;

pub use algorithm::Algorithm;
pub use algorithm::AlgorithmEnum;
pub use firstfit::FirstFit;
pub use relax::Relax;
