//! 图指标模块
//!
//! 顶点的平均边长、"最偏远顶点" 查询，以及汇总快照

use crate::algorithm::is_connected;
use crate::error::{Error, Result};
use crate::graph::{Distance, Graph, VertexKey};

/// 与顶点相关的全部边的平均距离
///
/// 同时统计以 `vertex` 为源的边（直接查找）和以其为目标的边（扫描全部边，
/// 入边没有单独索引）。在 `f64` 中累加，整数距离之和不会在类型最大值处截断。
/// 无相关边时返回 0。
pub fn average_edge_length<V: VertexKey, D: Distance>(graph: &Graph<V, D>, vertex: &V) -> f64 {
    let outgoing = graph.edges(vertex).iter();
    let incoming = graph.incoming_edges(vertex);

    let (sum, count) = outgoing
        .chain(incoming)
        .fold((0.0f64, 0usize), |(sum, count), edge| {
            (sum + edge.distance().to_f64(), count + 1)
        });

    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

/// 平均边长最大的顶点
///
/// 多个顶点并列时取注册顺序最靠前的一个；图为空时返回 [`Error::EmptyGraph`]。
pub fn find_most_remote_vertex<V: VertexKey, D: Distance>(graph: &Graph<V, D>) -> Result<V> {
    most_remote(graph)
        .map(|(vertex, _)| vertex.clone())
        .ok_or(Error::EmptyGraph)
}

fn most_remote<V: VertexKey, D: Distance>(graph: &Graph<V, D>) -> Option<(&V, f64)> {
    let mut vertices = graph.iter_vertices();
    let first = vertices.next()?;
    let mut result = (first, average_edge_length(graph, first));

    for vertex in vertices {
        let average = average_edge_length(graph, vertex);
        if average > result.1 {
            result = (vertex, average);
        }
    }

    Some(result)
}

/// 图的汇总快照
#[derive(Debug, Clone, PartialEq)]
pub struct GraphSummary<V> {
    /// 顶点数
    pub order: usize,
    /// 有向边数
    pub edge_count: usize,
    /// 是否强连通
    pub connected: bool,
    /// 每个顶点的平均边长（注册顺序）
    pub averages: Vec<(V, f64)>,
    /// 最偏远的顶点及其平均边长
    pub most_remote: Option<(V, f64)>,
}

impl<V: VertexKey> GraphSummary<V> {
    /// 采集快照
    pub fn collect<D: Distance>(graph: &Graph<V, D>) -> Self {
        let averages = graph
            .iter_vertices()
            .map(|vertex| (vertex.clone(), average_edge_length(graph, vertex)))
            .collect();

        Self {
            order: graph.order(),
            edge_count: graph.edge_count(),
            connected: is_connected(graph),
            averages,
            most_remote: most_remote(graph).map(|(vertex, average)| (vertex.clone(), average)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_graph() -> Graph<&'static str> {
        let mut graph = Graph::new();
        for v in ["A", "B", "C"] {
            graph.add_vertex(v);
        }
        graph.add_undirected_edge("A", "B", 1.0).unwrap();
        graph.add_undirected_edge("B", "C", 2.0).unwrap();
        graph
    }

    #[test]
    fn test_average_edge_length() {
        let graph = create_test_graph();

        // B: 出边 1, 2，入边 1, 2
        assert_eq!(graph.average_edge_length(&"B"), 1.5);
        assert_eq!(graph.average_edge_length(&"A"), 1.0);
        assert_eq!(graph.average_edge_length(&"C"), 2.0);
    }

    #[test]
    fn test_average_edge_length_counts_incoming() {
        let mut graph: Graph<&str, u32> = Graph::new();
        for v in ["A", "B", "C"] {
            graph.add_vertex(v);
        }
        graph.add_edge("A", "B", 4).unwrap();
        graph.add_edge("C", "B", 1).unwrap();
        graph.add_edge("B", "A", 1).unwrap();

        assert_eq!(average_edge_length(&graph, &"B"), 2.0);
        assert_eq!(average_edge_length(&graph, &"A"), 2.5);
    }

    #[test]
    fn test_average_edge_length_large_integers() {
        let mut small: Graph<&str, u8> = Graph::new();
        for v in ["A", "B", "C"] {
            small.add_vertex(v);
        }
        small.add_edge("A", "B", 200).unwrap();
        small.add_edge("A", "C", 200).unwrap();
        assert_eq!(average_edge_length(&small, &"A"), 200.0);

        let mut large: Graph<&str, i32> = Graph::new();
        for v in ["A", "B", "C", "D"] {
            large.add_vertex(v);
        }
        large.add_edge("A", "B", 2_000_000_000).unwrap();
        large.add_edge("A", "C", 2_000_000_000).unwrap();
        large.add_edge("D", "C", 1_500_000_000).unwrap();

        assert_eq!(average_edge_length(&large, &"A"), 2e9);
        assert_eq!(average_edge_length(&large, &"C"), 1.75e9);
        assert_eq!(average_edge_length(&large, &"D"), 1.5e9);
        // A 与 B 并列最大，取注册顺序靠前的 A
        assert_eq!(find_most_remote_vertex(&large), Ok("A"));
    }

    #[test]
    fn test_average_edge_length_isolated() {
        let mut graph = create_test_graph();
        graph.add_vertex("D");
        assert_eq!(graph.average_edge_length(&"D"), 0.0);
        assert_eq!(graph.average_edge_length(&"Z"), 0.0);
    }

    #[test]
    fn test_find_most_remote_vertex() {
        let graph = create_test_graph();
        assert_eq!(find_most_remote_vertex(&graph), Ok("C"));
    }

    #[test]
    fn test_find_most_remote_vertex_tie_break() {
        let mut graph: Graph<&str> = Graph::new();
        for v in ["A", "B", "C"] {
            graph.add_vertex(v);
        }
        graph.add_undirected_edge("A", "B", 3.0).unwrap();

        // A 和 B 并列，取注册顺序靠前的 A
        assert_eq!(find_most_remote_vertex(&graph), Ok("A"));

        let mut isolated: Graph<&str> = Graph::new();
        isolated.add_vertex("X");
        isolated.add_vertex("Y");
        assert_eq!(find_most_remote_vertex(&isolated), Ok("X"));
    }

    #[test]
    fn test_find_most_remote_vertex_empty() {
        let graph: Graph<&str> = Graph::new();
        assert_eq!(find_most_remote_vertex(&graph), Err(Error::EmptyGraph));
    }

    #[test]
    fn test_graph_summary() {
        let graph = create_test_graph();
        let summary = GraphSummary::collect(&graph);

        assert_eq!(summary.order, 3);
        assert_eq!(summary.edge_count, 4);
        assert!(summary.connected);
        assert_eq!(
            summary.averages,
            vec![("A", 1.0), ("B", 1.5), ("C", 2.0)]
        );
        assert_eq!(summary.most_remote, Some(("C", 2.0)));

        let empty_graph: Graph<&str> = Graph::new();
        let empty = GraphSummary::collect(&empty_graph);
        assert!(empty.connected);
        assert_eq!(empty.most_remote, None);
    }
}
