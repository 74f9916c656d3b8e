//! 结果打印器
//!
//! 提供表格和垂直格式的报告输出

use crate::graph::{Distance, Edge, VertexKey};
use crate::metrics::GraphSummary;
use prettytable::{format, row, Cell, Row, Table};
use std::fmt::Display;

/// 打印模式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrintMode {
    /// 表格模式
    Table,
    /// 垂直模式
    Vertical,
}

/// 结果打印器
pub struct Printer {
    mode: PrintMode,
}

impl Default for Printer {
    fn default() -> Self {
        Self::new(PrintMode::Table)
    }
}

impl Printer {
    pub fn new(mode: PrintMode) -> Self {
        Self { mode }
    }

    /// 设置打印模式
    pub fn set_mode(&mut self, mode: PrintMode) {
        self.mode = mode;
    }

    /// 打印行数据
    pub fn print_rows(&self, columns: &[String], rows: &[Vec<String>]) -> String {
        if columns.is_empty() || rows.is_empty() {
            return "Empty set\n".to_string();
        }

        let output = match self.mode {
            PrintMode::Table => self.format_table(columns, rows),
            PrintMode::Vertical => self.format_vertical(columns, rows),
        };

        format!("{}\n{} row(s) in set\n", output, rows.len())
    }

    /// 表格格式
    fn format_table(&self, columns: &[String], rows: &[Vec<String>]) -> String {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);

        let header: Vec<Cell> = columns.iter().map(|c| Cell::new(c)).collect();
        table.set_titles(Row::new(header));

        for row_data in rows {
            let cells: Vec<Cell> = row_data.iter().map(|v| Cell::new(v)).collect();
            table.add_row(Row::new(cells));
        }

        table.to_string()
    }

    /// 垂直格式
    fn format_vertical(&self, columns: &[String], rows: &[Vec<String>]) -> String {
        let max_col_width = columns.iter().map(|c| c.chars().count()).max().unwrap_or(0);
        let mut output = String::new();

        for (i, row_data) in rows.iter().enumerate() {
            output.push_str(&format!(
                "*************************** {}. row ***************************\n",
                i + 1
            ));

            for (j, col) in columns.iter().enumerate() {
                let value = row_data.get(j).map(|s| s.as_str()).unwrap_or("");
                output.push_str(&format!("{:>width$}: {}\n", col, value, width = max_col_width));
            }
        }

        output
    }

    /// 打印图统计信息
    pub fn print_stats<V>(&self, summary: &GraphSummary<V>) -> String {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);
        table.set_titles(row!["Property", "Value"]);
        table.add_row(row!["Vertex Count", summary.order.to_string()]);
        table.add_row(row!["Edge Count", summary.edge_count.to_string()]);
        table.add_row(row!["Connected", summary.connected.to_string()]);
        table.to_string()
    }

    /// 打印每个顶点的平均距离
    pub fn print_averages<V: Display>(&self, summary: &GraphSummary<V>, unit: &str) -> String {
        let columns = vec!["Vertex".to_string(), format!("Average ({})", unit)];
        let rows: Vec<Vec<String>> = summary
            .averages
            .iter()
            .map(|(vertex, average)| vec![vertex.to_string(), format_distance(*average)])
            .collect();
        self.print_rows(&columns, &rows)
    }

    /// 打印路径
    pub fn print_path<V, D>(&self, edges: &[Edge<V, D>]) -> String
    where
        V: VertexKey + Display,
        D: Distance,
    {
        let columns = vec!["From".to_string(), "To".to_string(), "Distance".to_string()];
        let rows: Vec<Vec<String>> = edges
            .iter()
            .map(|edge| {
                vec![
                    edge.from().to_string(),
                    edge.to().to_string(),
                    format_distance(edge.distance().to_f64()),
                ]
            })
            .collect();
        self.print_rows(&columns, &rows)
    }
}

/// 距离保留两位小数
pub fn format_distance(value: f64) -> String {
    format!("{:.2}", value)
}
