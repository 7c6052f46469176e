// src/dag/cycles.rs

use petgraph::algo::tarjan_scc;
use petgraph::graphmap::DiGraphMap;

/// Look for a dependency cycle among `nodes`.
///
/// Edges are `(task, prerequisite)` pairs; endpoints missing from `nodes`
/// are added implicitly. Returns the sorted names of the first strongly
/// connected component that forms a cycle (a self-loop counts), or `None`
/// if the graph is acyclic.
pub fn find_cycle<'a>(
    nodes: impl IntoIterator<Item = &'a str>,
    edges: impl IntoIterator<Item = (&'a str, &'a str)>,
) -> Option<Vec<String>> {
    let mut graph: DiGraphMap<&str, ()> = DiGraphMap::new();

    for name in nodes {
        graph.add_node(name);
    }
    for (task, dep) in edges {
        graph.add_edge(task, dep, ());
    }

    tarjan_scc(&graph)
        .into_iter()
        .find(|scc| scc.len() > 1 || graph.contains_edge(scc[0], scc[0]))
        .map(|scc| {
            let mut members: Vec<String> = scc.into_iter().map(str::to_string).collect();
            members.sort();
            members
        })
}
