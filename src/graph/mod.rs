//! 图核心模块
//!
//! 定义顶点、边和图的核心数据结构

mod edge;
mod graph;
mod index;
mod vertex;

pub use edge::{Distance, Edge};
pub use graph::Graph;
pub use index::{EdgeIndex, EdgeList, VertexIndex};
pub use vertex::VertexKey;
