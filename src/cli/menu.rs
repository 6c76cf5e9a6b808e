//! 菜单选项

use crate::error::{Error, Result};

/// 菜单选项
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuOption {
    DisplayAdjacency,
    Exit,
    AddVertex,
    AddEdge,
    RemoveVertex,
    RemoveEdge,
    CreateRandom,
    VertexCount,
    EdgeCount,
    Degree,
    IsEdge,
    OutboundEdges,
    InboundEdges,
    CopyGraph,
    PrintGraph,
    PrintJson,
    Stats,
    Help,
}

impl MenuOption {
    /// 菜单编号；Help 没有编号
    pub fn code(&self) -> Option<i64> {
        let code = match self {
            MenuOption::DisplayAdjacency => -1,
            MenuOption::Exit => 0,
            MenuOption::AddVertex => 1,
            MenuOption::AddEdge => 2,
            MenuOption::RemoveVertex => 3,
            MenuOption::RemoveEdge => 4,
            MenuOption::CreateRandom => 5,
            MenuOption::VertexCount => 6,
            MenuOption::EdgeCount => 7,
            MenuOption::Degree => 8,
            MenuOption::IsEdge => 9,
            MenuOption::OutboundEdges => 10,
            MenuOption::InboundEdges => 11,
            MenuOption::CopyGraph => 12,
            MenuOption::PrintGraph => 13,
            MenuOption::PrintJson => 14,
            MenuOption::Stats => 15,
            MenuOption::Help => return None,
        };
        Some(code)
    }

    pub fn from_code(code: i64) -> Option<Self> {
        Self::all().into_iter().find(|opt| opt.code() == Some(code))
    }

    /// 菜单描述
    pub fn description(&self) -> &'static str {
        match self {
            MenuOption::DisplayAdjacency => "Display graph as list of neighbours",
            MenuOption::Exit => "Exit",
            MenuOption::AddVertex => "Add a vertex",
            MenuOption::AddEdge => "Add an edge",
            MenuOption::RemoveVertex => "Remove a vertex",
            MenuOption::RemoveEdge => "Remove an edge",
            MenuOption::CreateRandom => "Create a random graph",
            MenuOption::VertexCount => "Get nr of vertices",
            MenuOption::EdgeCount => "Get nr of edges",
            MenuOption::Degree => "Get degree of vertex",
            MenuOption::IsEdge => "Check if is edge",
            MenuOption::OutboundEdges => "Get outbound edges of vertex",
            MenuOption::InboundEdges => "Get inbound edges",
            MenuOption::CopyGraph => "Create copy of graph",
            MenuOption::PrintGraph => "Print the graph",
            MenuOption::PrintJson => "Print the graph as JSON",
            MenuOption::Stats => "Show graph statistics",
            MenuOption::Help => "Show this menu",
        }
    }

    /// 所有带编号的选项，按菜单顺序
    pub fn all() -> Vec<Self> {
        vec![
            MenuOption::DisplayAdjacency,
            MenuOption::Exit,
            MenuOption::AddVertex,
            MenuOption::AddEdge,
            MenuOption::RemoveVertex,
            MenuOption::RemoveEdge,
            MenuOption::CreateRandom,
            MenuOption::VertexCount,
            MenuOption::EdgeCount,
            MenuOption::Degree,
            MenuOption::IsEdge,
            MenuOption::OutboundEdges,
            MenuOption::InboundEdges,
            MenuOption::CopyGraph,
            MenuOption::PrintGraph,
            MenuOption::PrintJson,
            MenuOption::Stats,
        ]
    }
}

/// 解析用户输入的选项
pub fn parse_option(input: &str) -> Result<MenuOption> {
    let input = input.trim();
    match input.to_lowercase().as_str() {
        "help" | "h" | "?" => return Ok(MenuOption::Help),
        "quit" | "exit" | "q" => return Ok(MenuOption::Exit),
        _ => {}
    }

    let code = input
        .parse::<i64>()
        .map_err(|_| Error::ParseError(format!("无效的选项: {}", input)))?;
    MenuOption::from_code(code).ok_or_else(|| Error::ParseError(format!("未知的选项: {}", code)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_codes() {
        for opt in MenuOption::all() {
            let code = opt.code().unwrap();
            assert_eq!(MenuOption::from_code(code), Some(opt));
        }
        assert_eq!(MenuOption::Help.code(), None);
        assert_eq!(MenuOption::from_code(99), None);
    }

    #[test]
    fn test_parse_option() {
        assert_eq!(parse_option("-1").unwrap(), MenuOption::DisplayAdjacency);
        assert_eq!(parse_option(" 13 ").unwrap(), MenuOption::PrintGraph);
        assert_eq!(parse_option("?").unwrap(), MenuOption::Help);
        assert_eq!(parse_option("quit").unwrap(), MenuOption::Exit);
        assert!(matches!(parse_option("abc"), Err(Error::ParseError(_))));
        assert!(matches!(parse_option("42"), Err(Error::ParseError(_))));
    }
}
