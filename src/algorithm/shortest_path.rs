//! 最短路径算法
//!
//! 单源 Dijkstra，使用二叉堆 + 惰性删除：距离被更新后旧的队列项留在堆中，
//! 出堆时若其距离大于当前最优值则直接丢弃。
//!
//! 要求所有边的距离非负，这一点由 [`Graph`] 在插入时保证，这里不再校验。

use crate::graph::{Distance, Edge, Graph, VertexKey};
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};
use tracing::trace;

/// 路径结果
#[derive(Debug, Clone, PartialEq)]
pub struct PathResult<V, D> {
    /// 路径上的边序列（from -> to 方向）
    pub edges: Vec<Edge<V, D>>,
    /// 路径总距离
    pub total_distance: D,
}

impl<V: VertexKey, D: Distance> PathResult<V, D> {
    fn from_edges(edges: Vec<Edge<V, D>>) -> Self {
        let total_distance = edges
            .iter()
            .fold(D::zero(), |acc, edge| acc.saturating_add(edge.distance()));
        Self {
            edges,
            total_distance,
        }
    }

    /// 路径长度（边数）
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// 路径经过的顶点序列（含起点和终点）
    pub fn vertices(&self) -> Vec<&V> {
        let mut vertices: Vec<&V> = self.edges.iter().map(|edge| edge.from()).collect();
        if let Some(last) = self.edges.last() {
            vertices.push(last.to());
        }
        vertices
    }
}

/// 优先队列项，按距离升序出堆
struct QueueEntry<'g, V, D> {
    distance: D,
    vertex: &'g V,
}

impl<V: Ord, D: PartialOrd> Ord for QueueEntry<'_, V, D> {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap 是大顶堆，反转比较得到小顶堆
        other
            .distance
            .partial_cmp(&self.distance)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.vertex.cmp(self.vertex))
    }
}

impl<V: Ord, D: PartialOrd> PartialOrd for QueueEntry<'_, V, D> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<V: Ord, D: PartialOrd> PartialEq for QueueEntry<'_, V, D> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<V: Ord, D: PartialOrd> Eq for QueueEntry<'_, V, D> {}

/// 路径查找器
pub struct PathFinder<'g, V, D> {
    graph: &'g Graph<V, D>,
}

impl<'g, V: VertexKey, D: Distance> PathFinder<'g, V, D> {
    /// 创建路径查找器
    pub fn new(graph: &'g Graph<V, D>) -> Self {
        Self { graph }
    }

    /// Dijkstra 最短路径
    ///
    /// 返回 from -> to 方向的边序列；不可达、任一端点未注册或起终点相同时返回空序列。
    pub fn shortest_path(&self, from: &V, to: &V) -> Vec<Edge<V, D>> {
        let graph = self.graph;
        let (Some(from), Some(to)) = (graph.get_vertex(from), graph.get_vertex(to)) else {
            return Vec::new();
        };
        if from == to {
            return Vec::new();
        }

        let (best, predecessors) = self.search(from);

        let reached = best
            .get(to)
            .is_some_and(|distance| *distance != D::infinity());
        if !reached {
            trace!(?from, ?to, "终点不可达");
            return Vec::new();
        }

        self.reconstruct_path(from, to, &predecessors)
    }

    /// 最短路径及其总距离；不可达时返回 None，起终点相同时返回空路径
    pub fn shortest_path_result(&self, from: &V, to: &V) -> Option<PathResult<V, D>> {
        if !self.graph.has_vertex(from) || !self.graph.has_vertex(to) {
            return None;
        }
        if from == to {
            return Some(PathResult::from_edges(Vec::new()));
        }

        let edges = self.shortest_path(from, to);
        if edges.is_empty() {
            None
        } else {
            Some(PathResult::from_edges(edges))
        }
    }

    /// 两点间最短距离，不可达时返回 None
    pub fn distance_between(&self, from: &V, to: &V) -> Option<D> {
        self.shortest_path_result(from, to)
            .map(|path| path.total_distance)
    }

    /// 从起点计算到所有顶点的最优距离和前驱边
    fn search(&self, from: &'g V) -> (HashMap<&'g V, D>, HashMap<&'g V, &'g Edge<V, D>>) {
        let graph = self.graph;
        let mut best: HashMap<&'g V, D> = graph
            .iter_vertices()
            .map(|vertex| (vertex, D::infinity()))
            .collect();
        let mut predecessors: HashMap<&'g V, &'g Edge<V, D>> = HashMap::new();
        let mut queue = BinaryHeap::new();

        best.insert(from, D::zero());
        queue.push(QueueEntry {
            distance: D::zero(),
            vertex: from,
        });

        while let Some(QueueEntry { distance, vertex }) = queue.pop() {
            let current_best = best.get(vertex).copied().unwrap_or_else(D::infinity);
            if distance > current_best {
                trace!(?vertex, ?distance, "丢弃过期的队列项");
                continue;
            }

            for edge in graph.edges(vertex) {
                let candidate = distance.saturating_add(edge.distance());
                let known = best.get(edge.to()).copied().unwrap_or_else(D::infinity);
                if candidate < known {
                    trace!(from = ?vertex, to = ?edge.to(), ?candidate, "松弛");
                    best.insert(edge.to(), candidate);
                    predecessors.insert(edge.to(), edge);
                    queue.push(QueueEntry {
                        distance: candidate,
                        vertex: edge.to(),
                    });
                }
            }
        }

        (best, predecessors)
    }

    /// 沿前驱边从终点回溯到起点
    fn reconstruct_path(
        &self,
        from: &V,
        to: &V,
        predecessors: &HashMap<&'g V, &'g Edge<V, D>>,
    ) -> Vec<Edge<V, D>> {
        let mut path = Vec::new();
        let mut current = to;

        while current != from {
            match predecessors.get(current) {
                Some(edge) => {
                    path.push((*edge).clone());
                    current = edge.from();
                }
                None => return Vec::new(),
            }
        }

        path.reverse();
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn create_test_graph() -> Graph<&'static str> {
        // A -1- B -2- C，另有一条较长的直连 A -5- C，D 孤立
        let mut graph = Graph::new();
        for v in ["A", "B", "C", "D"] {
            graph.add_vertex(v);
        }
        graph.add_undirected_edge("A", "B", 1.0).unwrap();
        graph.add_undirected_edge("B", "C", 2.0).unwrap();
        graph.add_undirected_edge("A", "C", 5.0).unwrap();
        graph
    }

    #[test]
    fn test_shortest_path() {
        let graph = create_test_graph();

        let path = graph.shortest_path(&"A", &"C");
        assert_eq!(
            path,
            vec![Edge::new("A", "B", 1.0), Edge::new("B", "C", 2.0)]
        );

        let back = graph.shortest_path(&"C", &"A");
        assert_eq!(
            back,
            vec![Edge::new("C", "B", 2.0), Edge::new("B", "A", 1.0)]
        );
    }

    #[test]
    fn test_shortest_path_chain() {
        let mut graph: Graph<&str> = Graph::new();
        for v in ["A", "B", "C"] {
            graph.add_vertex(v);
        }
        graph.add_undirected_edge("A", "B", 1.0).unwrap();
        graph.add_undirected_edge("B", "C", 2.0).unwrap();

        assert_eq!(
            graph.shortest_path(&"A", &"C"),
            vec![Edge::new("A", "B", 1.0), Edge::new("B", "C", 2.0)]
        );
        assert_eq!(PathFinder::new(&graph).distance_between(&"A", &"C"), Some(3.0));
    }

    #[test]
    fn test_shortest_path_same_vertex() {
        let graph = create_test_graph();
        assert!(graph.shortest_path(&"A", &"A").is_empty());

        let finder = PathFinder::new(&graph);
        let result = finder.shortest_path_result(&"A", &"A").unwrap();
        assert!(result.is_empty());
        assert_eq!(result.total_distance, 0.0);
    }

    #[test]
    fn test_shortest_path_unreachable() {
        let graph = create_test_graph();
        let finder = PathFinder::new(&graph);

        assert!(graph.shortest_path(&"A", &"D").is_empty());
        assert!(graph.shortest_path(&"D", &"A").is_empty());
        assert!(graph.shortest_path(&"A", &"Z").is_empty());
        assert_eq!(finder.shortest_path_result(&"A", &"D"), None);
        assert_eq!(finder.distance_between(&"A", &"D"), None);
    }

    #[test]
    fn test_shortest_path_respects_direction() {
        let mut graph: Graph<&str, u32> = Graph::new();
        for v in ["A", "B", "C"] {
            graph.add_vertex(v);
        }
        graph.add_edge("A", "B", 1).unwrap();
        graph.add_edge("B", "C", 1).unwrap();

        assert_eq!(graph.shortest_path(&"A", &"C").len(), 2);
        assert!(graph.shortest_path(&"C", &"A").is_empty());
    }

    #[test]
    fn test_shortest_path_stale_entries() {
        // S 先以较大距离发现 T，随后经 M 得到更短距离，旧队列项必须被丢弃
        let mut graph: Graph<&str, u32> = Graph::new();
        for v in ["S", "M", "T", "X"] {
            graph.add_vertex(v);
        }
        graph.add_edge("S", "T", 10).unwrap();
        graph.add_edge("S", "M", 1).unwrap();
        graph.add_edge("M", "T", 1).unwrap();
        graph.add_edge("T", "X", 1).unwrap();

        let finder = PathFinder::new(&graph);
        let result = finder.shortest_path_result(&"S", &"X").unwrap();
        assert_eq!(result.total_distance, 3);
        assert_eq!(result.vertices(), vec![&"S", &"M", &"T", &"X"]);
    }

    #[test]
    fn test_shortest_path_zero_weight_and_saturation() {
        let mut graph: Graph<u8, u8> = Graph::new();
        for v in 0..3 {
            graph.add_vertex(v);
        }
        graph.add_edge(0, 1, 0).unwrap();
        graph.add_edge(1, 2, u8::MAX).unwrap();

        let finder = PathFinder::new(&graph);
        assert_eq!(finder.distance_between(&0, &1), Some(0));
        // 距离饱和到哨兵值，视为不可达
        assert_eq!(finder.distance_between(&0, &2), None);
    }

    /// Bellman-Ford 式的反复松弛，作为对照
    fn brute_force_distances(graph: &Graph<u32, u32>, from: u32) -> HashMap<u32, u32> {
        let mut dist = HashMap::new();
        dist.insert(from, 0u32);
        for _ in 0..graph.order() {
            for edge in graph.all_edges() {
                if let Some(&d) = dist.get(edge.from()) {
                    let candidate = d + edge.distance();
                    let entry = dist.entry(*edge.to()).or_insert(u32::MAX);
                    if candidate < *entry {
                        *entry = candidate;
                    }
                }
            }
        }
        dist
    }

    #[test]
    fn test_shortest_path_matches_brute_force() {
        let mut rng = StdRng::seed_from_u64(2024);

        for _ in 0..30 {
            let mut graph: Graph<u32, u32> = Graph::new();
            for v in 0..12 {
                graph.add_vertex(v);
            }
            for _ in 0..30 {
                let (a, b) = (rng.gen_range(0..12), rng.gen_range(0..12));
                graph.add_edge(a, b, rng.gen_range(0..50)).unwrap();
            }

            let finder = PathFinder::new(&graph);
            let expected = brute_force_distances(&graph, 0);
            for target in 1..12 {
                let path = graph.shortest_path(&0, &target);
                match expected.get(&target) {
                    Some(&d) => {
                        assert_eq!(finder.distance_between(&0, &target), Some(d));
                        assert_eq!(path.first().map(|e| *e.from()), Some(0));
                        assert_eq!(path.last().map(|e| *e.to()), Some(target));
                        for pair in path.windows(2) {
                            assert_eq!(pair[0].to(), pair[1].from());
                        }
                    }
                    None => assert!(path.is_empty()),
                }
            }
        }
    }
}
