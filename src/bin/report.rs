//! distgraph 距离报告工具
//!
//! 构造带权图，输出最偏远顶点和各顶点的平均距离

use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use distgraph::cli::{build_graph, render_report, EdgeSpec, PrintMode, Report, ReportConfig};
use distgraph::Error;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "distgraph-report")]
#[command(about = "带权图距离分析报告")]
struct Args {
    /// 边，格式 FROM,TO,DIST（可重复；缺省时使用内置样例网络）
    #[arg(short, long = "edge", value_name = "FROM,TO,DIST")]
    edges: Vec<String>,

    /// 按有向边插入
    #[arg(short, long)]
    directed: bool,

    /// 额外查询最短路径
    #[arg(short, long, num_args = 2, value_names = ["FROM", "TO"])]
    path: Option<Vec<String>>,

    /// 距离单位
    #[arg(short, long, default_value = "km")]
    unit: String,

    /// 垂直显示结果
    #[arg(long)]
    vertical: bool,

    /// 输出调试日志
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn into_config(self) -> anyhow::Result<ReportConfig> {
        let mut config = ReportConfig {
            directed: self.directed,
            unit: self.unit,
            mode: if self.vertical {
                PrintMode::Vertical
            } else {
                PrintMode::Table
            },
            ..ReportConfig::default()
        };

        if !self.edges.is_empty() {
            config.edges = self
                .edges
                .iter()
                .map(|spec| EdgeSpec::parse(spec))
                .collect::<Result<_, _>>()
                .context("解析 --edge 参数失败")?;
        }

        if let Some(mut path) = self.path {
            let to = path.pop().context("缺少终点")?;
            let from = path.pop().context("缺少起点")?;
            config.path = Some((from, to));
        }

        Ok(config)
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: Args) -> anyhow::Result<bool> {
    let config = args.into_config()?;
    let graph = build_graph(&config)?;

    match render_report(&graph, &config)? {
        Report::Ready(text) => {
            print!("{}", text);
            Ok(true)
        }
        Report::Disconnected => {
            eprintln!(
                "{}",
                "错误: 图不连通，部分顶点不可达".red().bold()
            );
            Ok(false)
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    match run(args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            let label = match e.downcast_ref::<Error>() {
                Some(Error::InvalidInput(_)) => "数据错误",
                Some(Error::EmptyGraph) => "执行错误",
                None => "错误",
            };
            eprintln!("{}: {:#}", label.red().bold(), e);
            ExitCode::FAILURE
        }
    }
}
