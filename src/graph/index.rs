//! 图索引
//!
//! 顶点注册表与按源顶点组织的边索引

use crate::graph::edge::{Distance, Edge};
use crate::graph::vertex::VertexKey;
use indexmap::{IndexMap, IndexSet};
use smallvec::SmallVec;

/// 单个源顶点的出边列表（大多数顶点出度很小）
pub type EdgeList<V, D> = SmallVec<[Edge<V, D>; 4]>;

/// 顶点索引（顶点注册表）
///
/// 顶点唯一，保留插入顺序。
#[derive(Debug, Clone)]
pub struct VertexIndex<V> {
    vertices: IndexSet<V>,
}

impl<V: VertexKey> VertexIndex<V> {
    /// 创建新索引
    pub fn new() -> Self {
        Self {
            vertices: IndexSet::new(),
        }
    }

    /// 注册顶点，已存在时返回 false
    pub fn insert(&mut self, vertex: V) -> bool {
        self.vertices.insert(vertex)
    }

    /// 移除顶点，保持其余顶点的相对顺序
    pub fn remove(&mut self, vertex: &V) -> bool {
        self.vertices.shift_remove(vertex)
    }

    /// 顶点是否已注册
    pub fn contains(&self, vertex: &V) -> bool {
        self.vertices.contains(vertex)
    }

    /// 获取索引内持有的顶点
    pub fn get(&self, vertex: &V) -> Option<&V> {
        self.vertices.get(vertex)
    }

    /// 第一个注册的顶点
    pub fn first(&self) -> Option<&V> {
        self.vertices.first()
    }

    /// 按插入顺序遍历
    pub fn iter(&self) -> impl Iterator<Item = &V> {
        self.vertices.iter()
    }

    /// 获取顶点数量
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

impl<V: VertexKey> Default for VertexIndex<V> {
    fn default() -> Self {
        Self::new()
    }
}

/// 边索引
///
/// 源顶点到出边列表的映射；同一源顶点下的边保留插入顺序。
/// 入边没有单独的索引，按目标顶点查找需要扫描全部边。
#[derive(Debug, Clone)]
pub struct EdgeIndex<V, D> {
    outgoing: IndexMap<V, EdgeList<V, D>>,
}

impl<V: VertexKey, D: Distance> EdgeIndex<V, D> {
    /// 创建新索引
    pub fn new() -> Self {
        Self {
            outgoing: IndexMap::new(),
        }
    }

    /// 添加边
    pub fn insert(&mut self, edge: Edge<V, D>) {
        self.outgoing
            .entry(edge.from().clone())
            .or_default()
            .push(edge);
    }

    /// 获取顶点的出边
    pub fn outgoing(&self, vertex: &V) -> &[Edge<V, D>] {
        self.outgoing
            .get(vertex)
            .map(|edges| edges.as_slice())
            .unwrap_or(&[])
    }

    /// 获取顶点的入边（全量扫描）
    pub fn incoming<'a>(&'a self, vertex: &'a V) -> impl Iterator<Item = &'a Edge<V, D>> + 'a {
        self.iter().filter(move |edge| edge.to() == vertex)
    }

    /// 遍历全部边
    pub fn iter(&self) -> impl Iterator<Item = &Edge<V, D>> {
        self.outgoing.values().flat_map(|edges| edges.iter())
    }

    /// 是否存在给定点对的边
    pub fn contains_pair(&self, from: &V, to: &V) -> bool {
        self.outgoing(from).iter().any(|edge| edge.to() == to)
    }

    /// 是否存在值完全相等的边
    pub fn contains_exact(&self, edge: &Edge<V, D>) -> bool {
        self.outgoing(edge.from()).iter().any(|e| e == edge)
    }

    /// 移除给定点对的全部边，返回移除数量
    pub fn remove_pair(&mut self, from: &V, to: &V) -> usize {
        match self.outgoing.get_mut(from) {
            Some(edges) => {
                let before = edges.len();
                edges.retain(|edge| edge.to() != to);
                before - edges.len()
            }
            None => 0,
        }
    }

    /// 移除第一条值完全相等的边
    pub fn remove_exact(&mut self, edge: &Edge<V, D>) -> bool {
        let Some(edges) = self.outgoing.get_mut(edge.from()) else {
            return false;
        };
        match edges.iter().position(|e| e == edge) {
            Some(pos) => {
                edges.remove(pos);
                true
            }
            None => false,
        }
    }

    /// 移除与顶点相关的全部边（出边与入边），返回移除数量
    pub fn remove_incident(&mut self, vertex: &V) -> usize {
        let mut removed = self
            .outgoing
            .shift_remove(vertex)
            .map(|edges| edges.len())
            .unwrap_or(0);

        for edges in self.outgoing.values_mut() {
            let before = edges.len();
            edges.retain(|edge| edge.to() != vertex);
            removed += before - edges.len();
        }

        removed
    }

    /// 获取顶点的出度
    pub fn out_degree(&self, vertex: &V) -> usize {
        self.outgoing(vertex).len()
    }

    /// 获取边数量
    pub fn len(&self) -> usize {
        self.outgoing.values().map(|edges| edges.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<V: VertexKey, D: Distance> Default for EdgeIndex<V, D> {
    fn default() -> Self {
        Self::new()
    }
}
