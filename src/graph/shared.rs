//! 线程共享的图
//!
//! 单个读写锁保护整张图：读操作可以并发，写操作与一切操作互斥

use super::degree::DegreeKind;
use super::graph::{Graph, RemovalPolicy};
use super::vertex::VertexId;
use crate::error::Result;
use parking_lot::RwLock;
use rand::Rng;
use std::sync::Arc;

/// 可跨线程共享的图句柄
#[derive(Debug, Clone, Default)]
pub struct SharedGraph {
    inner: Arc<RwLock<Graph>>,
}

impl SharedGraph {
    pub fn new(graph: Graph) -> Self {
        Self {
            inner: Arc::new(RwLock::new(graph)),
        }
    }

    /// 在读锁下执行
    pub fn read<T>(&self, f: impl FnOnce(&Graph) -> T) -> T {
        let guard = self.inner.read();
        f(&*guard)
    }

    /// 在写锁下执行
    pub fn write<T>(&self, f: impl FnOnce(&mut Graph) -> T) -> T {
        let mut guard = self.inner.write();
        f(&mut *guard)
    }

    /// 时间点一致的深拷贝
    pub fn snapshot(&self) -> Graph {
        self.read(Graph::copy_graph)
    }

    pub fn add_vertex(&self, vertex: VertexId) -> bool {
        self.write(|g| g.add_vertex(vertex))
    }

    pub fn add_edge(&self, from: VertexId, to: VertexId) -> Result<()> {
        self.write(|g| g.add_edge(from, to))
    }

    pub fn remove_edge(&self, from: VertexId, to: VertexId) -> Result<()> {
        self.write(|g| g.remove_edge(from, to))
    }

    pub fn remove_vertex(&self, vertex: VertexId, policy: RemovalPolicy) -> Result<()> {
        self.write(|g| g.remove_vertex_with(vertex, policy))
    }

    pub fn create_random<R: Rng + ?Sized>(&self, n: usize, m: usize, rng: &mut R) -> Result<()> {
        self.write(|g| g.create_random(n, m, rng))
    }

    pub fn is_edge(&self, from: VertexId, to: VertexId) -> Result<bool> {
        self.read(|g| g.is_edge(from, to))
    }

    /// 出边邻居的拷贝
    pub fn outbound_edges(&self, vertex: VertexId) -> Result<Vec<VertexId>> {
        self.read(|g| g.outbound_edges(vertex).map(<[VertexId]>::to_vec))
    }

    pub fn inbound_edges(&self, vertex: VertexId) -> Result<Vec<VertexId>> {
        self.read(|g| g.inbound_edges(vertex))
    }

    pub fn degree(&self, vertex: VertexId, kind: DegreeKind) -> Result<usize> {
        self.read(|g| g.degree(vertex, kind))
    }

    pub fn vertex_count(&self) -> usize {
        self.read(Graph::vertex_count)
    }

    pub fn edge_count(&self) -> usize {
        self.read(Graph::edge_count)
    }
}

impl From<Graph> for SharedGraph {
    fn from(graph: Graph) -> Self {
        Self::new(graph)
    }
}
