//! 图核心模块
//!
//! 定义顶点、度数和邻接表有向图

mod degree;
mod graph;
mod shared;
mod snapshot;
mod vertex;

pub use degree::DegreeKind;
pub use graph::{Graph, RemovalPolicy};
pub use shared::SharedGraph;
pub use snapshot::GraphSnapshot;
pub use vertex::VertexId;
