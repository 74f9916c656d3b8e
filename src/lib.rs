//! distgraph - 带权图的连通性与最短路径分析
//!
//! 泛型带权图，支持：
//! - 顶点与边（有向/无向）的动态增删
//! - 深度优先遍历与强连通性检查
//! - 基于 Dijkstra 的单源最短路径
//! - 顶点平均边长与 "最偏远顶点" 指标

pub mod algorithm;
pub mod cli;
pub mod error;
pub mod graph;
pub mod metrics;

// 重导出常用类型
pub use algorithm::{PathFinder, PathResult, Walk};
pub use error::{Error, Result};
pub use graph::{Distance, Edge, Graph, VertexKey};
pub use metrics::{average_edge_length, find_most_remote_vertex, GraphSummary};

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
