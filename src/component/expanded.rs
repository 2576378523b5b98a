use hashbrown::HashMap;

use crate::component::{Demand, Evaluator};
use crate::network::{LinkIndex, Network, NodeIndex};

#[derive(Copy, Clone, Debug, Default, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub struct VertexIndex(usize);

impl VertexIndex {
    fn new(ix: usize) -> Self {
        VertexIndex(ix)
    }
    pub fn index(self) -> usize {
        self.0
    }
}

impl From<usize> for VertexIndex {
    fn from(ix: usize) -> Self {
        VertexIndex::new(ix)
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub struct ArcIndex(usize);

impl ArcIndex {
    fn new(ix: usize) -> Self {
        ArcIndex(ix)
    }
    pub fn index(self) -> usize {
        self.0
    }
}

impl From<usize> for ArcIndex {
    fn from(ix: usize) -> Self {
        ArcIndex::new(ix)
    }
}

/// A search state (physical node, first slice of the candidate block).
#[derive(Clone, Debug)]
pub struct Vertex {
    label: NodeIndex,
    slice: usize,
    outgoings: Vec<ArcIndex>,
}

/// Crossing one physical link with the block pinned at `slice`. `length` is
/// what the reach bound consumes; `cost` is what the search minimizes.
#[derive(Clone, Debug)]
pub struct Arc {
    ends: (VertexIndex, VertexIndex),
    label: LinkIndex,
    slice: usize,
    length: f64,
    cost: f64,
}

/// Search graph expanded from the live occupancy for one demand. A vertex
/// exists for every (node, slice) reachable over some feasible block; arcs
/// keep the slice fixed, so spectrum continuity and contiguity hold on any
/// path by construction. Vertex and arc numbering follows one fixed
/// iteration scheme (links by index, slices ascending, forward arc first),
/// so identical occupancy reproduces identical graphs.
#[derive(Clone, Debug, Default)]
pub struct ExpandedGraph {
    vertices: Vec<Vertex>,
    arcs: Vec<Arc>,
    lookup: HashMap<(usize, usize), VertexIndex>,
    sources: Vec<VertexIndex>,
    targets: Vec<VertexIndex>,
    load: usize,
}


impl Vertex {
    pub fn label(&self) -> NodeIndex {
        self.label
    }
    pub fn slice(&self) -> usize {
        self.slice
    }
}

impl Arc {
    pub fn ends(&self) -> (VertexIndex, VertexIndex) {
        self.ends
    }
    pub fn label(&self) -> LinkIndex {
        self.label
    }
    pub fn slice(&self) -> usize {
        self.slice
    }
    pub fn length(&self) -> f64 {
        self.length
    }
    pub fn cost(&self) -> f64 {
        self.cost
    }
}

impl ExpandedGraph {
    pub fn build(network: &Network, demand: &Demand, evaluator: &Evaluator) -> Self {
        debug_assert!(demand.load > 0);
        let mut graph = ExpandedGraph { load: demand.load, ..Default::default() };
        let (src, dst) = (demand.src.into(), demand.dst.into());
        for index in 0..network.link_count() {
            let link = LinkIndex::from(index);
            let ends = *network.endpoints(link);
            let slices = network.link(link).grid().len();
            for slice in 0..slices.saturating_sub(demand.load - 1) {
                if !network.is_free(link, slice, demand.load) {
                    continue;
                }
                graph.add_arc(network, evaluator, ends.0, ends.1, link, slice, src, dst);
                graph.add_arc(network, evaluator, ends.1, ends.0, link, slice, src, dst);
            }
        }
        graph
    }
    /// The edge-expanded view over the same occupancy: every (link, first
    /// slice) pair a block of this width may occupy. Agrees with the arcs by
    /// construction, since both ask `Network::is_free`.
    pub fn edge_slices(network: &Network, load: usize) -> Vec<(LinkIndex, usize)> {
        (0..network.link_count())
            .map(LinkIndex::from)
            .flat_map(|link| {
                let slices = network.link(link).grid().len();
                (0..slices.saturating_sub(load - 1))
                    .filter(move |&slice| network.is_free(link, slice, load))
                    .map(move |slice| (link, slice))
            })
            .collect()
    }
    fn add_arc(&mut self, network: &Network, evaluator: &Evaluator,
               tail: NodeIndex, head: NodeIndex, link: LinkIndex, slice: usize,
               src: NodeIndex, dst: NodeIndex) {
        // arcs into the source or out of the target can never lie on a path
        if tail == dst || head == src {
            return;
        }
        let tail_vertex = self.vertex_or_insert(tail, slice, src, dst);
        let head_vertex = self.vertex_or_insert(head, slice, src, dst);
        let arc = ArcIndex::new(self.arcs.len());
        self.arcs.push(Arc {
            ends: (tail_vertex, head_vertex),
            label: link,
            slice,
            length: evaluator.arc_length(network, link),
            cost: evaluator.arc_cost(network, link, slice, self.load, tail == src),
        });
        self.vertices[tail_vertex.index()].outgoings.push(arc);
    }
    fn vertex_or_insert(&mut self, label: NodeIndex, slice: usize,
                        src: NodeIndex, dst: NodeIndex) -> VertexIndex {
        let key = (label.index(), slice);
        if let Some(&found) = self.lookup.get(&key) {
            return found;
        }
        let vertex = VertexIndex::new(self.vertices.len());
        self.vertices.push(Vertex { label, slice, outgoings: vec![] });
        self.lookup.insert(key, vertex);
        if label == src {
            self.sources.push(vertex);
        }
        if label == dst {
            self.targets.push(vertex);
        }
        vertex
    }
    pub fn vertex(&self, ix: VertexIndex) -> &Vertex {
        debug_assert!(ix.index() < self.vertices.len());
        &self.vertices[ix.index()]
    }
    pub fn arc(&self, ix: ArcIndex) -> &Arc {
        debug_assert!(ix.index() < self.arcs.len());
        &self.arcs[ix.index()]
    }
    pub fn find_vertex(&self, label: NodeIndex, slice: usize) -> Option<VertexIndex> {
        self.lookup.get(&(label.index(), slice)).copied()
    }
    pub fn outgoings(&self, vertex: VertexIndex)
        -> impl Iterator<Item=ArcIndex> + '_ {
        self.vertices[vertex.index()].outgoings.iter().cloned()
    }
    pub fn sources(&self) -> &[VertexIndex] {
        &self.sources
    }
    pub fn targets(&self) -> &[VertexIndex] {
        &self.targets
    }
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }
    pub fn arc_count(&self) -> usize {
        self.arcs.len()
    }
    pub fn load(&self) -> usize {
        self.load
    }
}
