//! 顶点定义
//!
//! 顶点没有独立的实体，只由整数 ID 命名

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 顶点 ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VertexId(pub i64);

impl VertexId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl From<i64> for VertexId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for VertexId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<i64>().map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_id_parse() {
        assert_eq!(" 42 ".parse::<VertexId>().unwrap(), VertexId::new(42));
        assert_eq!("-3".parse::<VertexId>().unwrap().as_i64(), -3);
        assert!("x1".parse::<VertexId>().is_err());
    }

    #[test]
    fn test_vertex_id_serialization() {
        let json = serde_json::to_string(&VertexId::new(7)).unwrap();
        assert_eq!(json, "7");

        let restored: VertexId = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, VertexId::new(7));
    }
}
