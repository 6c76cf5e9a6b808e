//! 图数据结构
//!
//! 基于邻接表的有向图：顶点 ID -> 出边邻居序列（按插入顺序）

use super::degree::DegreeKind;
use super::vertex::VertexId;
use crate::error::{Error, Result};
use indexmap::IndexMap;
use rand::seq::index;
use rand::Rng;
use std::collections::HashSet;
use std::fmt;
use tracing::{debug, info};

/// 删除顶点时的 ID 处理策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RemovalPolicy {
    /// 保持其余顶点 ID 不变
    #[default]
    Stable,
    /// 将大于被删顶点的 ID 全部减一（键和边端点一起改写）
    Renumber,
}

/// 有向图
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    /// 顶点 -> 出边邻居
    vertices: IndexMap<VertexId, Vec<VertexId>>,
}

impl Graph {
    /// 创建空图
    pub fn new() -> Self {
        Self::default()
    }

    fn neighbors(&self, vertex: VertexId) -> Result<&Vec<VertexId>> {
        self.vertices
            .get(&vertex)
            .ok_or(Error::VertexNotFound(vertex))
    }

    fn require_pair(&self, from: VertexId, to: VertexId) -> Result<()> {
        self.neighbors(from)?;
        self.neighbors(to)?;
        Ok(())
    }

    // ==================== 顶点操作 ====================

    /// 添加顶点，已存在时不做任何事
    ///
    /// 返回是否真正插入了新顶点
    pub fn add_vertex(&mut self, vertex: VertexId) -> bool {
        if self.vertices.contains_key(&vertex) {
            return false;
        }
        self.vertices.insert(vertex, Vec::new());
        debug!(%vertex, "vertex added");
        true
    }

    /// 删除顶点及所有指向它的边，其余 ID 保持不变
    pub fn remove_vertex(&mut self, vertex: VertexId) -> Result<()> {
        self.remove_vertex_with(vertex, RemovalPolicy::Stable)
    }

    /// 按指定策略删除顶点
    pub fn remove_vertex_with(&mut self, vertex: VertexId, policy: RemovalPolicy) -> Result<()> {
        if self.vertices.shift_remove(&vertex).is_none() {
            return Err(Error::VertexNotFound(vertex));
        }

        for neighbors in self.vertices.values_mut() {
            neighbors.retain(|&n| n != vertex);
        }

        if policy == RemovalPolicy::Renumber {
            // 大于被删 ID 的键整体下移一位，不会与现存键冲突
            let shift = |id: VertexId| {
                if id > vertex {
                    VertexId(id.0 - 1)
                } else {
                    id
                }
            };
            self.vertices = std::mem::take(&mut self.vertices)
                .into_iter()
                .map(|(key, neighbors)| {
                    (shift(key), neighbors.into_iter().map(shift).collect())
                })
                .collect();
        }

        debug!(%vertex, ?policy, "vertex removed");
        Ok(())
    }

    /// 是否包含顶点
    pub fn contains_vertex(&self, vertex: VertexId) -> bool {
        self.vertices.contains_key(&vertex)
    }

    /// 按插入顺序遍历顶点
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.vertices.keys().copied()
    }

    /// 获取顶点数量
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// 清空图
    pub fn clear(&mut self) {
        self.vertices.clear();
    }

    // ==================== 边操作 ====================

    /// 添加边 from -> to
    ///
    /// 两个端点都必须存在；允许自环。
    pub fn add_edge(&mut self, from: VertexId, to: VertexId) -> Result<()> {
        self.require_pair(from, to)?;
        let neighbors = self
            .vertices
            .get_mut(&from)
            .ok_or(Error::VertexNotFound(from))?;
        if neighbors.contains(&to) {
            return Err(Error::DuplicateEdge { from, to });
        }
        neighbors.push(to);
        debug!(%from, %to, "edge added");
        Ok(())
    }

    /// 删除边 from -> to
    pub fn remove_edge(&mut self, from: VertexId, to: VertexId) -> Result<()> {
        self.require_pair(from, to)?;
        let neighbors = self
            .vertices
            .get_mut(&from)
            .ok_or(Error::VertexNotFound(from))?;
        let pos = neighbors
            .iter()
            .position(|&n| n == to)
            .ok_or(Error::EdgeNotFound { from, to })?;
        neighbors.remove(pos);
        debug!(%from, %to, "edge removed");
        Ok(())
    }

    /// 边 from -> to 是否存在
    pub fn is_edge(&self, from: VertexId, to: VertexId) -> Result<bool> {
        self.require_pair(from, to)?;
        Ok(self.neighbors(from)?.contains(&to))
    }

    /// 按顶点顺序、再按邻居顺序遍历所有边
    pub fn edges(&self) -> impl Iterator<Item = (VertexId, VertexId)> + '_ {
        self.vertices
            .iter()
            .flat_map(|(&from, neighbors)| neighbors.iter().map(move |&to| (from, to)))
    }

    /// 获取边数量
    pub fn edge_count(&self) -> usize {
        self.vertices.values().map(Vec::len).sum()
    }

    // ==================== 邻居查询 ====================

    /// 出边邻居（只读视图）
    pub fn outbound_edges(&self, vertex: VertexId) -> Result<&[VertexId]> {
        self.neighbors(vertex).map(Vec::as_slice)
    }

    /// 入边来源，按顶点扫描顺序
    pub fn inbound_edges(&self, vertex: VertexId) -> Result<Vec<VertexId>> {
        self.neighbors(vertex)?;
        Ok(self
            .vertices
            .iter()
            .filter(|(_, neighbors)| neighbors.contains(&vertex))
            .map(|(&from, _)| from)
            .collect())
    }

    fn in_degree(&self, vertex: VertexId) -> usize {
        self.vertices
            .values()
            .map(|neighbors| neighbors.iter().filter(|&&n| n == vertex).count())
            .sum()
    }

    /// 获取顶点度数
    pub fn degree(&self, vertex: VertexId, kind: DegreeKind) -> Result<usize> {
        let out = self.neighbors(vertex)?.len();
        Ok(match kind {
            DegreeKind::Total => self.in_degree(vertex) + out,
            DegreeKind::In => self.in_degree(vertex),
            DegreeKind::Out => out,
        })
    }

    // ==================== 生成与复制 ====================

    /// 重置为顶点 0..n-1 并随机生成恰好 m 条不同的边（无自环）
    ///
    /// 参数非法时图保持不变。
    pub fn create_random<R: Rng + ?Sized>(&mut self, n: usize, m: usize, rng: &mut R) -> Result<()> {
        let max_edges = n
            .checked_mul(n.saturating_sub(1))
            .ok_or_else(|| Error::InvalidArgument(format!("顶点数过大: {}", n)))?;
        if m > max_edges {
            return Err(Error::InvalidArgument(format!(
                "边数 {} 超过 {} 个顶点的最大可能边数 {}",
                m, n, max_edges
            )));
        }

        // n * (n - 1) 不溢出 usize，因此 n 也能放进 i64
        self.vertices = (0..n).map(|i| (VertexId(i as i64), Vec::new())).collect();

        if m > max_edges / 2 {
            // 稠密请求：直接从全部有序对中无放回抽样
            let per_row = n - 1;
            for idx in index::sample(rng, max_edges, m).iter() {
                let from = idx / per_row;
                let col = idx % per_row;
                let to = if col >= from { col + 1 } else { col };
                self.vertices[from].push(VertexId(to as i64));
            }
        } else {
            let mut chosen = HashSet::with_capacity(m);
            while chosen.len() < m {
                let from = rng.gen_range(0..n);
                let to = rng.gen_range(0..n);
                if from != to && chosen.insert((from, to)) {
                    self.vertices[from].push(VertexId(to as i64));
                }
            }
        }

        info!(n, m, "random graph created");
        Ok(())
    }

    /// 深拷贝
    pub fn copy_graph(&self) -> Graph {
        self.clone()
    }

    // ==================== 输出 ====================

    /// 邻接表输出，每行 `v : [a, b]`
    pub fn adjacency_listing(&self) -> String {
        self.vertices
            .iter()
            .map(|(vertex, neighbors)| format!("{} : [{}]\n", vertex, join(neighbors)))
            .collect()
    }
}

fn join(ids: &[VertexId]) -> String {
    ids.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let keys: Vec<VertexId> = self.vertices().collect();
        writeln!(f, "Vertices: [{}]", join(&keys))?;
        writeln!(f, "Edges:")?;
        for (from, to) in self.edges() {
            writeln!(f, "{} -> {}", from, to)?;
        }
        Ok(())
    }
}
