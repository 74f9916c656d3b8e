//! 命令行支持模块
//!
//! 报告生成与结果打印

mod printer;
mod report;

pub use printer::{format_distance, PrintMode, Printer};
pub use report::{build_graph, render_report, sample_network, EdgeSpec, Report, ReportConfig};
