//! 连通性检查
//!
//! 两次深度优先遍历：一次在原图上，一次在转置图上，起点都是第一个注册的顶点。
//! 两次都覆盖全部顶点时图是强连通的；只由无向边构成的图退化为普通连通性。

use super::traversal::Walk;
use crate::graph::{Distance, Graph, VertexKey};
use std::collections::HashSet;
use tracing::debug;

/// 图是否强连通，空图视为连通
pub fn is_connected<V: VertexKey, D: Distance>(graph: &Graph<V, D>) -> bool {
    let Some(start) = graph.iter_vertices().next() else {
        return true;
    };
    let order = graph.order();

    let forward = Walk::new(graph, start).count();
    if forward < order {
        debug!(?start, reached = forward, order, "正向遍历未覆盖全部顶点");
        return false;
    }

    let transposed = graph.transpose();
    let backward = Walk::new(&transposed, start).count();
    if backward < order {
        debug!(?start, reached = backward, order, "转置图遍历未覆盖全部顶点");
        return false;
    }

    true
}

/// 从起点可达的顶点集合（含起点），起点未注册时为空
pub fn reachable_from<'g, V: VertexKey, D: Distance>(
    graph: &'g Graph<V, D>,
    start: &V,
) -> HashSet<&'g V> {
    Walk::new(graph, start).collect()
}
