//! 图算法模块
//!
//! 包含深度优先遍历、强连通性检查和 Dijkstra 最短路径

mod connectivity;
mod shortest_path;
mod traversal;

pub use connectivity::{is_connected, reachable_from};
pub use shortest_path::{PathFinder, PathResult};
pub use traversal::Walk;
