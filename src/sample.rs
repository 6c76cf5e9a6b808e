//! 内置示例图
//!
//! 交互式 shell 启动时默认加载的小图

use crate::error::Result;
use crate::graph::{Graph, VertexId};

/// 示例图的顶点
pub const SAMPLE_VERTICES: [i64; 4] = [0, 1, 2, 3];

/// 示例图的边（按插入顺序）
pub const SAMPLE_EDGES: [(i64, i64); 6] = [(0, 1), (2, 3), (2, 1), (3, 0), (3, 2), (1, 0)];

/// 构建示例图
pub fn sample_graph() -> Result<Graph> {
    let mut graph = Graph::new();
    for id in SAMPLE_VERTICES {
        graph.add_vertex(VertexId::new(id));
    }
    for (from, to) in SAMPLE_EDGES {
        graph.add_edge(VertexId::new(from), VertexId::new(to))?;
    }
    Ok(graph)
}
