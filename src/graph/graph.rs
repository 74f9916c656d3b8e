//! 图数据结构
//!
//! 组合顶点注册表与边索引，提供变更操作和只读查询。
//!
//! 图是单一的可变值，内部没有任何同步。查询（遍历、连通性、最短路径、指标）
//! 执行期间不得修改同一张图，这由调用方保证。

use super::edge::{Distance, Edge};
use super::index::{EdgeIndex, VertexIndex};
use super::vertex::VertexKey;
use crate::algorithm::{self, PathFinder, Walk};
use crate::error::{Error, Result};
use crate::metrics;
use tracing::{debug, warn};

/// 带权图
///
/// `V` 为顶点标识类型，`D` 为距离类型（默认 `f64`）。
#[derive(Debug, Clone)]
pub struct Graph<V, D = f64> {
    /// 顶点索引
    vertex_index: VertexIndex<V>,
    /// 边索引
    edge_index: EdgeIndex<V, D>,
}

impl<V: VertexKey, D: Distance> Graph<V, D> {
    /// 创建空图
    pub fn new() -> Self {
        Self {
            vertex_index: VertexIndex::new(),
            edge_index: EdgeIndex::new(),
        }
    }

    // ==================== 顶点操作 ====================

    /// 添加顶点，已存在时返回 false 且不做任何修改
    pub fn add_vertex(&mut self, vertex: V) -> bool {
        let inserted = self.vertex_index.insert(vertex.clone());
        if inserted {
            debug!(?vertex, "添加顶点");
        }
        inserted
    }

    /// 删除顶点及其全部出边和入边
    pub fn remove_vertex(&mut self, vertex: &V) -> bool {
        if !self.vertex_index.remove(vertex) {
            return false;
        }
        let removed_edges = self.edge_index.remove_incident(vertex);
        debug!(?vertex, removed_edges, "删除顶点");
        true
    }

    /// 顶点是否存在
    pub fn has_vertex(&self, vertex: &V) -> bool {
        self.vertex_index.contains(vertex)
    }

    /// 获取图内持有的顶点
    pub fn get_vertex(&self, vertex: &V) -> Option<&V> {
        self.vertex_index.get(vertex)
    }

    /// 按插入顺序返回全部顶点
    pub fn vertices(&self) -> Vec<V> {
        self.vertex_index.iter().cloned().collect()
    }

    /// 按插入顺序遍历顶点
    pub fn iter_vertices(&self) -> impl Iterator<Item = &V> {
        self.vertex_index.iter()
    }

    /// 获取顶点数量
    pub fn order(&self) -> usize {
        self.vertex_index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertex_index.is_empty()
    }

    // ==================== 边操作 ====================

    /// 添加有向边
    ///
    /// 距离为负或任一端点未注册时返回 [`Error::InvalidInput`]，图保持不变。
    pub fn add_edge(&mut self, from: V, to: V, distance: D) -> Result<()> {
        self.check_edge(&from, &to, distance)?;
        debug!(?from, ?to, ?distance, "添加边");
        self.edge_index.insert(Edge::new(from, to, distance));
        Ok(())
    }

    /// 添加无向边（两条方向相反的有向边）
    ///
    /// 前置条件与 [`add_edge`](Self::add_edge) 相同；校验失败时一条边都不插入。
    pub fn add_undirected_edge(&mut self, v1: V, v2: V, distance: D) -> Result<()> {
        self.check_edge(&v1, &v2, distance)?;
        debug!(?v1, ?v2, ?distance, "添加无向边");
        let forward = Edge::new(v1, v2, distance);
        let backward = forward.reversed();
        self.edge_index.insert(forward);
        self.edge_index.insert(backward);
        Ok(())
    }

    fn check_edge(&self, from: &V, to: &V, distance: D) -> Result<()> {
        if !distance.is_valid() {
            warn!(?from, ?to, ?distance, "拒绝负距离的边");
            return Err(Error::negative_distance());
        }
        for vertex in [from, to] {
            if !self.has_vertex(vertex) {
                warn!(?vertex, "拒绝连接未注册顶点的边");
                return Err(Error::missing_vertex(vertex));
            }
        }
        Ok(())
    }

    /// 删除给定点对之间的全部有向边，至少删除一条时返回 true
    pub fn remove_edge(&mut self, from: &V, to: &V) -> bool {
        let removed = self.edge_index.remove_pair(from, to);
        if removed > 0 {
            debug!(?from, ?to, removed, "删除边");
        }
        removed > 0
    }

    /// 删除第一条与 `edge` 值完全相等的边
    pub fn remove_exact_edge(&mut self, edge: &Edge<V, D>) -> bool {
        let removed = self.edge_index.remove_exact(edge);
        if removed {
            debug!(?edge, "删除边");
        }
        removed
    }

    /// 是否存在 from -> to 的边
    pub fn has_edge(&self, from: &V, to: &V) -> bool {
        self.edge_index.contains_pair(from, to)
    }

    /// 是否存在与 `edge` 值完全相等的边
    pub fn has_exact_edge(&self, edge: &Edge<V, D>) -> bool {
        self.edge_index.contains_exact(edge)
    }

    /// 获取顶点的出边（按插入顺序）
    pub fn edges(&self, vertex: &V) -> &[Edge<V, D>] {
        self.edge_index.outgoing(vertex)
    }

    /// 遍历图中全部边
    pub fn all_edges(&self) -> impl Iterator<Item = &Edge<V, D>> {
        self.edge_index.iter()
    }

    /// 获取边数量（无向边计为两条）
    pub fn edge_count(&self) -> usize {
        self.edge_index.len()
    }

    /// 获取顶点的出度
    pub fn degree(&self, vertex: &V) -> usize {
        self.edge_index.out_degree(vertex)
    }

    /// 获取顶点的入度（全量扫描）
    pub fn in_degree(&self, vertex: &V) -> usize {
        self.edge_index.incoming(vertex).count()
    }

    // ==================== 邻居查询 ====================

    /// 获取顶点的邻居（出边指向的顶点，可能重复）
    pub fn neighbors<'a>(&'a self, vertex: &V) -> impl Iterator<Item = &'a V> + 'a {
        self.edges(vertex).iter().map(|edge| edge.to())
    }

    /// 获取顶点的入边（全量扫描）
    pub fn incoming_edges<'a>(
        &'a self,
        vertex: &'a V,
    ) -> impl Iterator<Item = &'a Edge<V, D>> + 'a {
        self.edge_index.incoming(vertex)
    }

    /// 构造转置图：顶点集合相同，每条边方向反转
    pub fn transpose(&self) -> Self {
        let mut transposed = Self::new();
        for vertex in self.vertex_index.iter() {
            transposed.vertex_index.insert(vertex.clone());
        }
        for edge in self.edge_index.iter() {
            transposed.edge_index.insert(edge.reversed());
        }
        transposed
    }

    // ==================== 图算法 ====================

    /// 从 `start` 开始的深度优先遍历，未注册的起点得到空序列
    pub fn walk(&self, start: &V) -> Vec<V> {
        self.walk_iter(start).cloned().collect()
    }

    /// 深度优先遍历的惰性形式，可重复调用
    pub fn walk_iter<'a>(&'a self, start: &V) -> Walk<'a, V, D> {
        Walk::new(self, start)
    }

    /// 是否强连通（空图视为连通）
    pub fn is_connected(&self) -> bool {
        algorithm::is_connected(self)
    }

    /// 最短路径的边序列，不可达或起终点相同时为空
    pub fn shortest_path(&self, from: &V, to: &V) -> Vec<Edge<V, D>> {
        PathFinder::new(self).shortest_path(from, to)
    }

    /// 与顶点相关的全部边（出边与入边）的平均距离，无相关边时为 0
    pub fn average_edge_length(&self, vertex: &V) -> f64 {
        metrics::average_edge_length(self, vertex)
    }
}

impl<V: VertexKey, D: Distance> Default for Graph<V, D> {
    fn default() -> Self {
        Self::new()
    }
}
