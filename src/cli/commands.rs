//! 菜单命令处理
//!
//! 每个选项调用一次图操作；失败会被捕获并打印，然后重新提示

use std::fmt::Display;
use std::io::Write;
use std::str::FromStr;

use colored::Colorize;
use rand::Rng;
use tracing::{info, warn};

use super::config::ShellConfig;
use super::input::LineSource;
use super::menu::{parse_option, MenuOption};
use super::printer::{format_ids, Printer};
use crate::error::{Error, Result};
use crate::graph::{DegreeKind, Graph, VertexId};

/// 命令执行结果
#[derive(Debug, PartialEq, Eq)]
pub enum CommandResult {
    /// 继续运行
    Continue,
    /// 退出程序
    Exit,
    /// 显示消息
    Message(String),
}

/// 交互式 shell 会话
pub struct Shell<R> {
    graph: Graph,
    /// 选项 12 生成的最近一次拷贝
    last_copy: Option<Graph>,
    rng: R,
    config: ShellConfig,
    printer: Printer,
}

impl<R: Rng> Shell<R> {
    pub fn new(graph: Graph, rng: R, config: ShellConfig) -> Self {
        Self {
            graph,
            last_copy: None,
            rng,
            config,
            printer: Printer::new(),
        }
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn last_copy(&self) -> Option<&Graph> {
        self.last_copy.as_ref()
    }

    /// 主循环，直到选择退出或输入结束
    pub fn run(&mut self, input: &mut dyn LineSource, out: &mut dyn Write) -> Result<()> {
        info!(
            vertices = self.graph.vertex_count(),
            edges = self.graph.edge_count(),
            "shell started"
        );
        write!(out, "{}", Printer::menu_text())?;

        loop {
            let line = match input.read_line("Option: ") {
                Ok(line) => line,
                Err(Error::InputClosed) => break,
                Err(e) => return Err(e),
            };
            if line.trim().is_empty() {
                continue;
            }

            let result = parse_option(&line).and_then(|opt| self.execute(opt, input, out));
            match result {
                Ok(CommandResult::Exit) | Err(Error::InputClosed) => break,
                Ok(CommandResult::Continue) => {}
                Ok(CommandResult::Message(msg)) => {
                    write!(out, "{}", msg)?;
                    if !msg.ends_with('\n') {
                        writeln!(out)?;
                    }
                }
                Err(Error::IoError(e)) => return Err(Error::IoError(e)),
                Err(e) => {
                    warn!(error = %e, "command failed");
                    writeln!(out, "{}", format!("错误: {}", e).red())?;
                }
            }
        }

        writeln!(out, "Bye!")?;
        Ok(())
    }

    /// 执行单个菜单选项
    pub fn execute(
        &mut self,
        option: MenuOption,
        input: &mut dyn LineSource,
        out: &mut dyn Write,
    ) -> Result<CommandResult> {
        let result = match option {
            MenuOption::Exit => CommandResult::Exit,

            MenuOption::Help => CommandResult::Message(Printer::menu_text()),

            MenuOption::DisplayAdjacency => {
                CommandResult::Message(self.graph.adjacency_listing())
            }

            MenuOption::AddVertex => {
                let vertex: VertexId = read_value(input, "Vertex to be added: ")?;
                if self.graph.add_vertex(vertex) {
                    CommandResult::Message(format!("Vertex {} added", vertex))
                } else {
                    CommandResult::Message(format!("Vertex {} already exists", vertex))
                }
            }

            MenuOption::AddEdge => {
                let from: VertexId = read_value(input, "Start index of the new edge: ")?;
                let to: VertexId = read_value(input, "End index of the new edge: ")?;
                self.graph.add_edge(from, to)?;
                CommandResult::Message(format!("Edge {} -> {} added", from, to))
            }

            MenuOption::RemoveVertex => {
                let vertex: VertexId = read_value(input, "Vertex to be removed: ")?;
                self.graph
                    .remove_vertex_with(vertex, self.config.removal_policy)?;
                CommandResult::Message(format!("Vertex {} removed", vertex))
            }

            MenuOption::RemoveEdge => {
                let from: VertexId = read_value(input, "Start of the edge to be removed: ")?;
                let to: VertexId = read_value(input, "End of the edge to be removed: ")?;
                self.graph.remove_edge(from, to)?;
                CommandResult::Message(format!("Edge {} -> {} removed", from, to))
            }

            MenuOption::CreateRandom => {
                let n: usize = read_value(input, "N: ")?;
                let m: usize = read_value(input, "M: ")?;
                self.graph.create_random(n, m, &mut self.rng)?;
                CommandResult::Message(self.graph.adjacency_listing())
            }

            MenuOption::VertexCount => {
                CommandResult::Message(self.graph.vertex_count().to_string())
            }

            MenuOption::EdgeCount => CommandResult::Message(self.graph.edge_count().to_string()),

            MenuOption::Degree => {
                let vertex: VertexId = read_value(input, "Vertex to get degree for: ")?;
                write!(out, "{}", Printer::degree_menu_text())?;
                let kind: DegreeKind = read_value(input, "Type of degree: ")?;
                CommandResult::Message(self.graph.degree(vertex, kind)?.to_string())
            }

            MenuOption::IsEdge => {
                let from: VertexId = read_value(input, "Start of the edge you wanna check: ")?;
                let to: VertexId = read_value(input, "End of the edge: ")?;
                if self.graph.is_edge(from, to)? {
                    CommandResult::Message("The edge exists".to_string())
                } else {
                    CommandResult::Message("The edge doesn't exist".to_string())
                }
            }

            MenuOption::OutboundEdges => {
                let vertex: VertexId = read_value(input, "Vertex to get outbound edges for: ")?;
                CommandResult::Message(format_ids(self.graph.outbound_edges(vertex)?))
            }

            MenuOption::InboundEdges => {
                let vertex: VertexId = read_value(input, "Vertex to get inbound edges for: ")?;
                CommandResult::Message(format_ids(&self.graph.inbound_edges(vertex)?))
            }

            MenuOption::CopyGraph => {
                let copy = self.graph.copy_graph();
                let msg = format!(
                    "Graph copied: {} vertices, {} edges",
                    copy.vertex_count(),
                    copy.edge_count()
                );
                self.last_copy = Some(copy);
                CommandResult::Message(msg)
            }

            MenuOption::PrintGraph => CommandResult::Message(self.graph.to_string()),

            MenuOption::PrintJson => CommandResult::Message(self.graph.snapshot().to_json()?),

            MenuOption::Stats => CommandResult::Message(format!(
                "{}{}",
                self.printer
                    .print_stats(self.graph.vertex_count(), self.graph.edge_count()),
                self.printer.print_degrees(&self.graph)
            )),
        };

        Ok(result)
    }
}

/// 提示并解析一个值
fn read_value<T>(input: &mut dyn LineSource, prompt: &str) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    let line = input.read_line(prompt)?;
    line.trim()
        .parse::<T>()
        .map_err(|e| Error::ParseError(format!("无效的输入 '{}': {}", line.trim(), e)))
}
