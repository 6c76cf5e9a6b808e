//! Shell 配置

use crate::error::Result;
use crate::graph::{Graph, RemovalPolicy};
use crate::sample::sample_graph;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Shell 配置
#[derive(Debug, Clone)]
pub struct ShellConfig {
    /// 随机数种子，未设置时使用系统熵
    pub seed: Option<u64>,
    /// 启动时加载示例图
    pub load_sample: bool,
    /// 删除顶点时的 ID 策略
    pub removal_policy: RemovalPolicy,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            seed: None,
            load_sample: true,
            removal_policy: RemovalPolicy::Stable,
        }
    }
}

impl ShellConfig {
    /// 构建初始图
    pub fn initial_graph(&self) -> Result<Graph> {
        if self.load_sample {
            sample_graph()
        } else {
            Ok(Graph::new())
        }
    }

    /// 构建随机数生成器
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}
