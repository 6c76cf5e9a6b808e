//! 错误类型定义

use crate::graph::VertexId;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("顶点不存在: {0}")]
    VertexNotFound(VertexId),

    #[error("边已存在: {from} -> {to}")]
    DuplicateEdge { from: VertexId, to: VertexId },

    #[error("边不存在: {from} -> {to}")]
    EdgeNotFound { from: VertexId, to: VertexId },

    #[error("无效参数: {0}")]
    InvalidArgument(String),

    #[error("解析错误: {0}")]
    ParseError(String),

    #[error("输入已关闭")]
    InputClosed,

    #[error("输入错误: {0}")]
    InputError(String),

    #[error("序列化错误: {0}")]
    SerializationError(String),

    #[error("IO 错误: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::SerializationError(e.to_string())
    }
}
