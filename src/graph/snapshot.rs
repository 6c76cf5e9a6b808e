//! 图快照
//!
//! 可序列化的图表示，用于 JSON 输出

use super::graph::Graph;
use super::vertex::VertexId;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// 图快照：有序顶点列表 + 有序边列表
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphSnapshot {
    pub vertices: Vec<VertexId>,
    pub edges: Vec<(VertexId, VertexId)>,
}

impl GraphSnapshot {
    /// 序列化为 JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// 从 JSON 反序列化
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Graph {
    /// 生成快照
    pub fn snapshot(&self) -> GraphSnapshot {
        GraphSnapshot {
            vertices: self.vertices().collect(),
            edges: self.edges().collect(),
        }
    }
}

impl TryFrom<GraphSnapshot> for Graph {
    type Error = Error;

    /// 校验端点存在且无重复边
    fn try_from(snapshot: GraphSnapshot) -> Result<Self> {
        let mut graph = Graph::new();
        for vertex in snapshot.vertices {
            graph.add_vertex(vertex);
        }
        for (from, to) in snapshot.edges {
            graph.add_edge(from, to)?;
        }
        Ok(graph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(id: i64) -> VertexId {
        VertexId::new(id)
    }

    #[test]
    fn test_snapshot_json() {
        let mut graph = Graph::new();
        graph.add_vertex(v(3));
        graph.add_vertex(v(1));
        graph.add_edge(v(3), v(1)).unwrap();

        let json = graph.snapshot().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["vertices"], serde_json::json!([3, 1]));
        assert_eq!(value["edges"], serde_json::json!([[3, 1]]));

        let restored = Graph::try_from(GraphSnapshot::from_json(&json).unwrap()).unwrap();
        assert_eq!(restored.vertices().collect::<Vec<_>>(), vec![v(3), v(1)]);
        assert!(restored.is_edge(v(3), v(1)).unwrap());
    }

    #[test]
    fn test_snapshot_rejects_dangling_edge() {
        let snapshot = GraphSnapshot {
            vertices: vec![v(0)],
            edges: vec![(v(0), v(1))],
        };
        assert!(matches!(
            Graph::try_from(snapshot),
            Err(Error::VertexNotFound(id)) if id == v(1)
        ));
    }

    #[test]
    fn test_snapshot_rejects_duplicate_edge() {
        let snapshot = GraphSnapshot {
            vertices: vec![v(0), v(1)],
            edges: vec![(v(0), v(1)), (v(0), v(1))],
        };
        assert!(matches!(
            Graph::try_from(snapshot),
            Err(Error::DuplicateEdge { .. })
        ));
    }

    #[test]
    fn test_snapshot_bad_json() {
        assert!(matches!(
            GraphSnapshot::from_json("{\"vertices\": [1], \"edges\": 3}"),
            Err(Error::SerializationError(_))
        ));
    }
}
