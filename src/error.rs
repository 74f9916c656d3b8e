//! 错误类型定义

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// 边的距离为负数或顶点未注册
    #[error("无效输入: {0}")]
    InvalidInput(String),

    /// 图中没有任何顶点
    #[error("图为空")]
    EmptyGraph,
}

impl Error {
    pub(crate) fn negative_distance() -> Self {
        Error::InvalidInput("边的距离不能为负数".to_string())
    }

    pub(crate) fn missing_vertex<V: std::fmt::Debug>(vertex: &V) -> Self {
        Error::InvalidInput(format!("顶点 {:?} 不存在", vertex))
    }
}
