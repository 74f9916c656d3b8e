//! 边定义
//!
//! 有向带权边：(from, to, distance)。无向边由两条方向相反、距离相同的有向边表示。

use crate::graph::vertex::VertexKey;
use std::fmt::Debug;
use std::ops::Add;

/// 边的距离类型
///
/// 要求全序（浮点数的 NaN 被视为无效距离）、有零值、可相加。
pub trait Distance: Copy + PartialOrd + Add<Output = Self> + Debug {
    /// 零值
    fn zero() -> Self;

    /// "无穷远" 哨兵，取该类型可表示的最大值
    fn infinity() -> Self;

    /// 转换为 f64（用于求平均值）
    fn to_f64(self) -> f64;

    /// 累加距离；整数类型在上限处饱和，不会溢出
    fn saturating_add(self, rhs: Self) -> Self;

    /// 距离是否可用于建边（非负且可比较）
    fn is_valid(self) -> bool {
        self >= Self::zero()
    }
}

macro_rules! impl_distance {
    (int: $($t:ty),*) => {
        $(
            impl Distance for $t {
                #[inline]
                fn zero() -> Self {
                    0
                }

                #[inline]
                fn infinity() -> Self {
                    <$t>::MAX
                }

                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }

                #[inline]
                fn saturating_add(self, rhs: Self) -> Self {
                    <$t>::saturating_add(self, rhs)
                }
            }
        )*
    };
    (float: $($t:ty),*) => {
        $(
            impl Distance for $t {
                #[inline]
                fn zero() -> Self {
                    0.0
                }

                #[inline]
                fn infinity() -> Self {
                    <$t>::MAX
                }

                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }

                #[inline]
                fn saturating_add(self, rhs: Self) -> Self {
                    self + rhs
                }
            }
        )*
    };
}

impl_distance!(int: u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
impl_distance!(float: f32, f64);

/// 边
#[derive(Debug, Clone, PartialEq)]
pub struct Edge<V, D = f64> {
    /// 源顶点
    from: V,
    /// 目标顶点
    to: V,
    /// 距离（权重）
    distance: D,
}

impl<V: VertexKey, D: Distance> Edge<V, D> {
    /// 创建新边
    ///
    /// 边本身不做校验，距离与端点的合法性由 [`Graph`](crate::graph::Graph) 在插入时检查。
    pub fn new(from: V, to: V, distance: D) -> Self {
        Self { from, to, distance }
    }

    /// 获取源顶点
    pub fn from(&self) -> &V {
        &self.from
    }

    /// 获取目标顶点
    pub fn to(&self) -> &V {
        &self.to
    }

    /// 获取距离
    pub fn distance(&self) -> D {
        self.distance
    }

    /// 方向反转后的边
    pub fn reversed(&self) -> Self {
        Self::new(self.to.clone(), self.from.clone(), self.distance)
    }

    /// 是否连接给定的有向点对
    pub fn connects(&self, from: &V, to: &V) -> bool {
        &self.from == from && &self.to == to
    }

    /// 是否以给定顶点为端点（任一方向）
    pub fn touches(&self, vertex: &V) -> bool {
        &self.from == vertex || &self.to == vertex
    }
}
