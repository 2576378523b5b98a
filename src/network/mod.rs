mod spectrum;
mod topology;

pub use spectrum::SpectrumGrid;
pub use topology::{Link, LinkIndex, Network, Node, NodeIndex};

pub type Path = Vec<LinkIndex>;
