use std::collections::{HashMap, HashSet};
use std::f64::INFINITY as INF;

use ordered_float::OrderedFloat;

use super::heap::{MyMinHeap, Priority};
use crate::component::{ArcIndex, ExpandedGraph, VertexIndex};


/// Multi-source shortest path over an expanded graph. Every source vertex
/// starts at distance zero, so one run covers all candidate slice offsets.
/// Alongside the minimized cost it carries the accumulated base length of
/// the chosen predecessor chain, which the reach bound is checked against.
#[derive(Default)]
pub struct Dijkstra {
    dist: HashMap<VertexIndex, f64>,
    lens: HashMap<VertexIndex, f64>,
    pred: HashMap<VertexIndex, ArcIndex>,
    suppressed: HashSet<ArcIndex>,
}


impl Dijkstra {
    pub fn compute(&mut self, graph: &ExpandedGraph) {
        self.dist.clear();
        self.lens.clear();
        self.pred.clear();
        let mut heap = MyMinHeap::new();
        let mut seen = HashMap::new();

        for &source in graph.sources() {
            seen.insert(source, 0.0);
            self.lens.insert(source, 0.0);
            let slice = graph.vertex(source).slice();
            heap.push(source, Priority::new(0.0, slice, source.index()));
        }

        while let Some((v, priority)) = heap.pop() {
            let v_dist = priority.cost();
            match self.dist.contains_key(&v) {
                true  => { continue; },
                false => { self.dist.insert(v, v_dist); },
            }
            for arc_ix in graph.outgoings(v) {
                if self.suppressed.contains(&arc_ix) { continue; }

                let arc = graph.arc(arc_ix);
                let u = arc.ends().1;
                let u_dist = v_dist + arc.cost();

                if self.dist.contains_key(&u)
                    || u_dist >= *seen.get(&u).unwrap_or(&INF) { continue; }

                self.pred.insert(u, arc_ix);
                self.lens.insert(u, self.lens[&v] + arc.length());
                seen.insert(u, u_dist);
                let priority = Priority::new(u_dist, graph.vertex(u).slice(), u.index());
                match heap.get(&u) {
                    Some(_) => { heap.change_priority(&u, priority); },
                    None    => { heap.push(u, priority); },
                }
            }
        }
    }
    /// The reached target of minimum cost, lowest slice offset on ties.
    pub fn cheapest_target(&self, graph: &ExpandedGraph) -> Option<VertexIndex> {
        graph.targets().iter().cloned()
            .filter_map(|t| self.dist.get(&t).map(|&cost| (t, cost)))
            .min_by_key(|&(t, cost)| (OrderedFloat(cost), graph.vertex(t).slice()))
            .map(|(t, _)| t)
    }
    /// Arcs from a source vertex to `target`, in traversal order.
    pub fn backtrace(&self, graph: &ExpandedGraph, target: VertexIndex) -> Vec<ArcIndex> {
        let mut arcs = vec![];
        let mut current = target;
        while let Some(&arc) = self.pred.get(&current) {
            arcs.push(arc);
            current = graph.arc(arc).ends().0;
        }
        arcs.reverse();
        arcs
    }
    pub fn length_to(&self, target: VertexIndex) -> Option<f64> {
        self.lens.get(&target).copied()
    }
    /// Excludes an arc from every later `compute` run.
    pub fn suppress(&mut self, arc: ArcIndex) {
        self.suppressed.insert(arc);
    }
}
