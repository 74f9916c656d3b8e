//! 深度优先遍历
//!
//! 显式栈 + 已访问集合的迭代式 DFS。顶点在入栈时标记为已访问，
//! 因此每个顶点最多入栈一次；出栈时产出。

use crate::graph::{Distance, Graph, VertexKey};
use std::collections::HashSet;
use tracing::trace;

/// 从起点出发的深度优先遍历迭代器
///
/// 按发现顺序产出顶点。同一顶点的兄弟节点按边索引中的存储顺序入栈，
/// 所以最后插入的出边最先被展开。
pub struct Walk<'g, V, D> {
    graph: &'g Graph<V, D>,
    stack: Vec<&'g V>,
    visited: HashSet<&'g V>,
}

impl<'g, V: VertexKey, D: Distance> Walk<'g, V, D> {
    /// 创建遍历；起点未注册时得到空遍历
    pub fn new(graph: &'g Graph<V, D>, start: &V) -> Self {
        let mut walk = Self {
            graph,
            stack: Vec::new(),
            visited: HashSet::new(),
        };

        // 用图内部持有的顶点引用，避免克隆
        if let Some(start) = graph.get_vertex(start) {
            walk.visited.insert(start);
            walk.stack.push(start);
        }

        walk
    }

    /// 目前已访问（已入栈）的顶点数
    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }
}

impl<'g, V: VertexKey, D: Distance> Iterator for Walk<'g, V, D> {
    type Item = &'g V;

    fn next(&mut self) -> Option<Self::Item> {
        let graph = self.graph;
        let current = self.stack.pop()?;

        for neighbor in graph.neighbors(current) {
            if self.visited.insert(neighbor) {
                trace!(?current, ?neighbor, "发现顶点");
                self.stack.push(neighbor);
            }
        }

        Some(current)
    }
}
