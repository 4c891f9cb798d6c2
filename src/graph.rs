//! Traversals over a directed graph given as an adjacency list.
//!
//! Vertex `i`'s successors are `adj[i]`. Edges pointing past the end of the list are ignored.

use std::collections::BTreeMap;

fn neighbours(adj: &[Vec<usize>], node: usize) -> impl Iterator<Item = usize> + '_ {
    adj.get(node).into_iter().flatten().copied()
}

/// Depth-first finishing order over all vertices, starting from vertex 0 upwards.
pub fn dfs(adj: &[Vec<usize>]) -> Vec<usize> {
    let mut visited = vec![false; adj.len()];
    let mut order = Vec::with_capacity(adj.len());
    for node in 0..adj.len() {
        dfs_visit(adj, node, &mut visited, &mut order);
    }
    order
}

fn dfs_visit(adj: &[Vec<usize>], node: usize, visited: &mut [bool], order: &mut Vec<usize>) {
    if node >= visited.len() || visited[node] {
        return;
    }
    visited[node] = true;
    for next in neighbours(adj, node) {
        dfs_visit(adj, next, visited, order);
    }
    order.push(node);
}

/// Stack-based depth-first walk; each tree's visit order is reported reversed.
pub fn dfs_iter(adj: &[Vec<usize>]) -> Vec<usize> {
    let mut visited = vec![false; adj.len()];
    let mut order = Vec::with_capacity(adj.len());
    for start in 0..adj.len() {
        if visited[start] {
            continue;
        }
        let mut stack = vec![start];
        let mut tree = Vec::new();
        while let Some(node) = stack.pop() {
            if visited[node] {
                continue;
            }
            visited[node] = true;
            tree.push(node);
            stack.extend(neighbours(adj, node).filter(|&n| n < visited.len() && !visited[n]));
        }
        order.extend(tree.into_iter().rev());
    }
    order
}

/// Breadth-first search result: hop distance and BFS-tree parent of every reached vertex.
/// The source's parent is `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BfsResult {
    pub level: BTreeMap<usize, usize>,
    pub parent: BTreeMap<usize, Option<usize>>,
}

pub fn bfs(adj: &[Vec<usize>], source: usize) -> BfsResult {
    let mut level = BTreeMap::from([(source, 0)]);
    let mut parent = BTreeMap::from([(source, None)]);

    let mut frontier = vec![source];
    let mut depth = 1;
    while !frontier.is_empty() {
        let mut next = Vec::new();
        for &u in &frontier {
            for v in neighbours(adj, u).filter(|&v| v < adj.len()) {
                if !level.contains_key(&v) {
                    level.insert(v, depth);
                    parent.insert(v, Some(u));
                    next.push(v);
                }
            }
        }
        frontier = next;
        depth += 1;
    }

    BfsResult { level, parent }
}

/// Shortest path from `source` to `target` read off a BFS parent map. Empty if either vertex
/// was not reached.
pub fn recover_path(
    parent: &BTreeMap<usize, Option<usize>>,
    source: usize,
    target: usize,
) -> Vec<usize> {
    if !parent.contains_key(&source) || !parent.contains_key(&target) {
        return Vec::new();
    }

    let mut path = vec![target];
    let mut current = target;
    while current != source {
        match parent.get(&current).copied().flatten() {
            Some(up) => {
                path.push(up);
                current = up;
            }
            None => return Vec::new(),
        }
    }
    path.reverse();
    path
}
