//! Digraph CLI 工具
//!
//! 交互式菜单界面

use anyhow::Context;
use clap::Parser;
use digraph::cli::{ReadlineSource, Shell, ShellConfig};
use digraph::RemovalPolicy;
use std::io;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "digraph-cli")]
#[command(about = "Digraph 交互式有向图工具", version)]
struct Args {
    /// 随机图生成使用的种子
    #[arg(short, long)]
    seed: Option<u64>,

    /// 以空图启动（默认加载示例图）
    #[arg(long)]
    empty: bool,

    /// 删除顶点后将更大的 ID 依次减一
    #[arg(long)]
    renumber: bool,

    /// 输出调试日志
    #[arg(short, long)]
    verbose: bool,
}

impl From<&Args> for ShellConfig {
    fn from(args: &Args) -> Self {
        Self {
            seed: args.seed,
            load_sample: !args.empty,
            removal_policy: if args.renumber {
                RemovalPolicy::Renumber
            } else {
                RemovalPolicy::Stable
            },
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = ShellConfig::from(&args);
    let graph = config.initial_graph().context("构建初始图失败")?;

    println!("Digraph CLI v{}", digraph::VERSION);
    println!("==================");
    println!("  顶点数: {}", graph.vertex_count());
    println!("  边数: {}", graph.edge_count());
    println!();

    let mut input = ReadlineSource::new().context("初始化行编辑器失败")?;
    let mut shell = Shell::new(graph, config.rng(), config);
    shell.run(&mut input, &mut io::stdout())?;

    Ok(())
}
