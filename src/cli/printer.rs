//! 结果打印器
//!
//! 菜单文本和表格输出

use super::menu::MenuOption;
use crate::graph::{DegreeKind, Graph, VertexId};
use prettytable::{format, row, Cell, Row, Table};

/// `[a, b, c]` 形式的顶点列表
pub fn format_ids(ids: &[VertexId]) -> String {
    let items: Vec<String> = ids.iter().map(ToString::to_string).collect();
    format!("[{}]", items.join(", "))
}

/// 结果打印器
#[derive(Debug, Default, Clone, Copy)]
pub struct Printer;

impl Printer {
    pub fn new() -> Self {
        Self
    }

    /// 打印统计信息
    pub fn print_stats(&self, vertex_count: usize, edge_count: usize) -> String {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);
        table.set_titles(row!["Property", "Value"]);
        table.add_row(row!["Vertex Count", vertex_count.to_string()]);
        table.add_row(row!["Edge Count", edge_count.to_string()]);
        table.to_string()
    }

    /// 每个顶点的入度、出度、总度数
    pub fn print_degrees(&self, graph: &Graph) -> String {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);

        let mut header = vec![Cell::new("Vertex")];
        header.extend(DegreeKind::all().iter().map(|kind| Cell::new(kind.name())));
        table.set_titles(Row::new(header));

        for vertex in graph.vertices() {
            let mut cells = vec![Cell::new(&vertex.to_string())];
            for kind in DegreeKind::all() {
                let value = graph
                    .degree(vertex, kind)
                    .map(|d| d.to_string())
                    .unwrap_or_default();
                cells.push(Cell::new(&value));
            }
            table.add_row(Row::new(cells));
        }

        table.to_string()
    }

    /// 菜单文本
    pub fn menu_text() -> String {
        let mut text = String::from("Choose one of the following options: \n");
        for opt in MenuOption::all() {
            if let Some(code) = opt.code() {
                text.push_str(&format!("{}.{}\n", code, opt.description()));
            }
        }
        text.push_str("help.Show this menu\n");
        text
    }

    /// 度数类型子菜单
    pub fn degree_menu_text() -> String {
        let mut text = String::from("Choose the type of degree you want:\n");
        for kind in DegreeKind::all() {
            let label = match kind {
                DegreeKind::Total => "Total degree",
                DegreeKind::In => "In degree",
                DegreeKind::Out => "Out degree",
            };
            text.push_str(&format!("{}.{}\n", kind.code(), label));
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::sample_graph;

    #[test]
    fn test_format_ids() {
        assert_eq!(format_ids(&[]), "[]");
        assert_eq!(
            format_ids(&[VertexId::new(3), VertexId::new(1)]),
            "[3, 1]"
        );
    }

    #[test]
    fn test_menu_text() {
        let text = Printer::menu_text();
        assert!(text.starts_with("Choose one of the following options"));
        assert!(text.contains("-1.Display graph as list of neighbours\n"));
        assert!(text.contains("0.Exit\n"));
        assert!(text.contains("13.Print the graph\n"));

        let degrees = Printer::degree_menu_text();
        assert!(degrees.contains("1.Total degree\n2.In degree\n3.Out degree\n"));
    }

    #[test]
    fn test_tables() {
        let printer = Printer::new();
        let stats = printer.print_stats(4, 6);
        assert!(stats.contains("Vertex Count"));
        assert!(stats.contains('6'));

        let graph = sample_graph().unwrap();
        let degrees = printer.print_degrees(&graph);
        assert!(degrees.contains("total"));
        assert!(degrees.lines().filter(|l| l.contains('│')).count() >= 5);
    }
}
