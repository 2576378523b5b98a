use ordered_float::OrderedFloat;

use super::dijkstra::Dijkstra;
use crate::component::{ArcIndex, ExpandedGraph};


/// Cheapest feasible route over the expanded graph, honoring the reach
/// bound. When the cheapest path overruns the bound, its longest arc is
/// suppressed and the search repeats; each round discards one arc, so the
/// loop is finite. Returns the traversed arcs and the block's first slice,
/// or None when the demand is unroutable.
pub fn spectrum_route(graph: &ExpandedGraph, reach: Option<f64>)
    -> Option<(Vec<ArcIndex>, usize)> {
    let mut dijkstra = Dijkstra::default();
    loop {
        dijkstra.compute(graph);
        let target = dijkstra.cheapest_target(graph)?;
        let arcs = dijkstra.backtrace(graph, target);
        let length: f64 = arcs.iter()
            .map(|&a| graph.arc(a).length())
            .sum();
        match reach {
            Some(bound) if length > bound => {
                let &longest = arcs.iter()
                    .max_by_key(|&&a| OrderedFloat(graph.arc(a).length()))
                    .expect("Failed to pick an arc from an empty overrun path");
                dijkstra.suppress(longest);
            }
            _ => {
                let slice = graph.vertex(target).slice();
                return Some((arcs, slice));
            }
        }
    }
}
