use std::iter;

use super::SpectrumGrid;
use crate::utils::error::Error;

#[derive(Copy, Clone, Debug, Default, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub struct NodeIndex(usize);

impl NodeIndex {
    fn new(ix: usize) -> Self {
        NodeIndex(ix)
    }
    pub fn index(self) -> usize {
        self.0
    }
}

impl From<usize> for NodeIndex {
    fn from(ix: usize) -> Self {
        NodeIndex::new(ix)
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub struct LinkIndex(usize);

impl LinkIndex {
    fn new(ix: usize) -> Self {
        LinkIndex(ix)
    }
    pub fn index(self) -> usize {
        self.0
    }
}

impl From<usize> for LinkIndex {
    fn from(ix: usize) -> Self {
        LinkIndex::new(ix)
    }
}

#[derive(Clone, Debug)]
pub struct Node {
    label: String,
    links: Vec<LinkIndex>,
}

/// An undirected fiber. Both traversal directions share one spectrum grid.
#[derive(Clone, Debug)]
pub struct Link {
    ends: (NodeIndex, NodeIndex),
    length: f64,
    grid: SpectrumGrid,
}

impl Node {
    pub fn new(label: String) -> Self {
        Self { label, links: vec![] }
    }
    pub fn label(&self) -> &str {
        &self.label
    }
}
impl Link {
    pub fn new(ends: (NodeIndex, NodeIndex), length: f64, slices: usize) -> Self {
        Link { ends, length, grid: SpectrumGrid::new(slices) }
    }
    pub fn length(&self) -> f64 {
        self.length
    }
    pub fn grid(&self) -> &SpectrumGrid {
        &self.grid
    }
}

#[derive(Clone, Debug, Default)]
pub struct Network {
    pub nodes: Vec<Node>,
    pub links: Vec<Link>,
}

impl Network {
    pub fn new() -> Self {
        Self { ..Default::default() }
    }
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
    pub fn link_count(&self) -> usize {
        self.links.len()
    }
    pub fn link(&self, link: LinkIndex) -> &Link {
        debug_assert!(link.index() < self.links.len());
        &self.links[link.index()]
    }
    pub fn endpoints(&self, link: LinkIndex) -> &(NodeIndex, NodeIndex) {
        debug_assert!(link.index() < self.links.len());
        &self.links[link.index()].ends
    }
    pub fn incidents(&self, node: NodeIndex)
        -> impl Iterator<Item=LinkIndex> + '_ {
        debug_assert!(node.index() < self.nodes.len());
        self.nodes[node.index()].links.iter().cloned()
    }
    pub fn neighbors(&self, node: NodeIndex)
        -> impl Iterator<Item=NodeIndex> + '_ {
        self.incidents(node)
            .map(move |l| self.far_end(l, node))
    }
    /// The endpoint of `link` other than `near`.
    pub fn far_end(&self, link: LinkIndex, near: NodeIndex) -> NodeIndex {
        let ends = self.endpoints(link);
        if ends.0 == near { ends.1 } else { ends.0 }
    }
    pub fn link_between(&self, one: NodeIndex, other: NodeIndex) -> Option<LinkIndex> {
        debug_assert!(one != other);
        self.incidents(one)
            .find(|&l| self.far_end(l, one) == other)
    }
    pub fn add_nodes(&mut self, count: usize) {
        let offset = self.nodes.len();
        let nodes = (0..count)
            .map(|ix| Node::new(format!("v{}", offset + ix)));
        self.nodes.extend(nodes);
    }
    pub fn add_links(&mut self, links: Vec<(usize, usize, f64, usize)>) {
        for (end0, end1, length, slices) in links {
            debug_assert!(end0 != end1);
            let ends = (end0.into(), end1.into());
            let index = LinkIndex::new(self.links.len());
            self.nodes[end0].links.push(index);
            self.nodes[end1].links.push(index);
            self.links.push(Link::new(ends, length, slices));
        }
    }
    pub fn length_along(&self, path: &[LinkIndex]) -> f64 {
        path.iter()
            .map(|&l| self.link(l).length)
            .sum()
    }
    /// Node labels visited by a path starting at `head`.
    pub fn node_sequence(&self, head: NodeIndex, path: &[LinkIndex]) -> Vec<NodeIndex> {
        let mut current = head;
        let tail = path.iter().map(move |&l| {
            current = self.far_end(l, current);
            current
        });
        iter::once(head).chain(tail).collect()
    }

    pub fn occupancy(&self, link: LinkIndex) -> &[Option<usize>] {
        self.link(link).grid.slots()
    }
    pub fn is_free(&self, link: LinkIndex, start: usize, width: usize) -> bool {
        self.link(link).grid.is_free(start, width)
    }
    pub fn reserve(&mut self, link: LinkIndex, start: usize, width: usize, demand: usize)
        -> Result<(), Error> {
        self.links[link.index()].grid.assign(link, start..start + width, demand)
    }
    pub fn release(&mut self, link: LinkIndex, start: usize, width: usize, demand: usize)
        -> Result<(), Error> {
        self.links[link.index()].grid.clear(link, start..start + width, demand)
    }
    /// Reserves `[start, start+width)` on every link of `path`, or nothing.
    pub fn commit(&mut self, path: &[LinkIndex], start: usize, width: usize, demand: usize)
        -> Result<(), Error> {
        for &link in path {
            if !self.is_free(link, start, width) {
                let owner = (start..start + width)
                    .find_map(|s| self.link(link).grid.owner(s))
                    .unwrap_or(demand);
                return Err(Error::SliceConflict(link, demand, start..start + width, owner));
            }
        }
        for &link in path {
            self.reserve(link, start, width, demand)?;
        }
        Ok(())
    }
    pub fn release_path(&mut self, path: &[LinkIndex], start: usize, width: usize, demand: usize)
        -> Result<(), Error> {
        for &link in path {
            self.release(link, start, width, demand)?;
        }
        Ok(())
    }
    /// Network-wide max used slice index, the spectrum-efficiency metric.
    pub fn max_used_slice(&self) -> Option<usize> {
        self.links.iter()
            .filter_map(|link| link.grid.max_used())
            .max()
    }
    pub fn occupied_slices(&self) -> usize {
        self.links.iter()
            .map(|link| link.grid.occupied())
            .sum()
    }
}
