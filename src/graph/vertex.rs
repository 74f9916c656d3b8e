//! 顶点定义
//!
//! 顶点是调用方自选类型的不透明标识（如字符串标签）

use std::fmt::Debug;
use std::hash::Hash;

/// 可作为顶点标识的类型
///
/// 需要可比较相等、可排序、可哈希；对所有满足条件的类型自动实现。
pub trait VertexKey: Clone + Eq + Hash + Ord + Debug {}

impl<T> VertexKey for T where T: Clone + Eq + Hash + Ord + Debug {}
