//! 距离报告
//!
//! 由边列表构造无向（或有向）图，检查连通性后输出最偏远顶点和各顶点的平均距离。
//! 库只负责生成文本，输出和退出码由调用方决定。

use super::printer::{format_distance, PrintMode, Printer};
use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::metrics::GraphSummary;
use tracing::info;

/// 边描述：起点、终点、距离
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeSpec {
    pub from: String,
    pub to: String,
    pub distance: f64,
}

impl EdgeSpec {
    pub fn new(from: impl Into<String>, to: impl Into<String>, distance: f64) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            distance,
        }
    }

    /// 解析 `FROM,TO,DIST` 格式
    pub fn parse(spec: &str) -> Result<Self> {
        let parts: Vec<&str> = spec.split(',').map(str::trim).collect();
        let [from, to, distance] = parts.as_slice() else {
            return Err(Error::InvalidInput(format!(
                "边格式应为 FROM,TO,DIST: {}",
                spec
            )));
        };
        if from.is_empty() || to.is_empty() {
            return Err(Error::InvalidInput(format!("顶点名不能为空: {}", spec)));
        }
        let distance = distance
            .parse::<f64>()
            .map_err(|_| Error::InvalidInput(format!("无效的距离: {}", distance)))?;
        Ok(Self::new(*from, *to, distance))
    }
}

/// 内置样例：五个创伤急救点之间的道路距离（公里）
pub fn sample_network() -> Vec<EdgeSpec> {
    const GB2: &str = "第二医院创伤科 — 和平街 125 号";
    const GB5: &str = "第五医院创伤科 — 周年街 31 号";
    const PC3: &str = "第三门诊创伤科 — 水兵街 17 号";
    const XXI: &str = "二十一世纪医疗中心 — 革命街 10 号";
    const EXP: &str = "专家诊所 — 胜利四十周年街 48 号";

    vec![
        EdgeSpec::new(GB2, GB5, 4.2),
        EdgeSpec::new(GB2, PC3, 3.8),
        EdgeSpec::new(GB5, EXP, 2.5),
        EdgeSpec::new(PC3, XXI, 1.7),
        EdgeSpec::new(XXI, EXP, 3.1),
    ]
}

/// 报告配置
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// 边列表
    pub edges: Vec<EdgeSpec>,
    /// 是否按有向边插入
    pub directed: bool,
    /// 额外查询的最短路径（起点，终点）
    pub path: Option<(String, String)>,
    /// 打印模式
    pub mode: PrintMode,
    /// 距离单位
    pub unit: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            edges: sample_network(),
            directed: false,
            path: None,
            mode: PrintMode::Table,
            unit: "km".to_string(),
        }
    }
}

/// 报告结果
#[derive(Debug, Clone, PartialEq)]
pub enum Report {
    /// 图不连通，不生成报告
    Disconnected,
    /// 报告文本
    Ready(String),
}

/// 按配置构造图，顶点按首次出现的顺序注册
pub fn build_graph(config: &ReportConfig) -> Result<Graph<String>> {
    let mut graph = Graph::new();

    for spec in &config.edges {
        graph.add_vertex(spec.from.clone());
        graph.add_vertex(spec.to.clone());
    }

    for spec in &config.edges {
        if config.directed {
            graph.add_edge(spec.from.clone(), spec.to.clone(), spec.distance)?;
        } else {
            graph.add_undirected_edge(spec.from.clone(), spec.to.clone(), spec.distance)?;
        }
    }

    info!(
        vertices = graph.order(),
        edges = graph.edge_count(),
        directed = config.directed,
        "图构造完成"
    );
    Ok(graph)
}

/// 生成报告文本
pub fn render_report(graph: &Graph<String>, config: &ReportConfig) -> Result<Report> {
    let summary = GraphSummary::collect(graph);
    if !summary.connected {
        return Ok(Report::Disconnected);
    }

    let (remote, remote_average) = summary.most_remote.clone().ok_or(Error::EmptyGraph)?;
    let printer = Printer::new(config.mode);

    let mut output = String::new();
    output.push_str("距离分析报告\n");
    output.push_str(&format!("最偏远的顶点: {}\n", remote));
    output.push_str(&format!(
        "到邻居的平均距离: {} {}\n\n",
        format_distance(remote_average),
        config.unit
    ));
    output.push_str("各顶点的平均距离:\n");
    output.push_str(&printer.print_averages(&summary, &config.unit));

    if let Some((from, to)) = &config.path {
        let path = graph.shortest_path(from, to);
        output.push_str(&format!("\n最短路径 {} -> {}:\n", from, to));
        if path.is_empty() && from != to {
            output.push_str("不可达\n");
        } else {
            output.push_str(&printer.print_path(&path));
        }
    }

    output.push('\n');
    output.push_str(&printer.print_stats(&summary));

    Ok(Report::Ready(output))
}
