//! Digraph - 邻接表有向图
//!
//! 以整数 ID 为键的有向图，支持：
//! - 顶点与边的增删
//! - 度数、出边、入边查询
//! - 随机图生成与深拷贝
//! - 交互式菜单 shell

pub mod cli;
pub mod error;
pub mod graph;
pub mod sample;

// 重导出常用类型
pub use error::{Error, Result};
pub use graph::{DegreeKind, Graph, GraphSnapshot, RemovalPolicy, SharedGraph, VertexId};

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
