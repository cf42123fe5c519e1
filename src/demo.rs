//! Demonstration driver: solves the fixed A..J graph and reports every
//! reachable destination sorted by distance, with the time spent solving.

use log::info;
use ordered_float::OrderedFloat;
use serde::{Serialize, Serializer};
use std::borrow::Borrow;
use std::fmt::{self, Display};
use std::str::FromStr;
use std::time::{Duration, Instant};

use crate::algorithm::dijkstra::solve;
use crate::graph::{AdjacencyGraph, Node, Weight};
use crate::{Error, Result};

/// Environment variable selecting the start node
pub const START_VAR: &str = "DIJKSTRA_DEMO_START";

/// Environment variable selecting the output format (`text` or `json`)
pub const FORMAT_VAR: &str = "DIJKSTRA_DEMO_FORMAT";

/// The 10-node demonstration graph. Every edge is listed in both directions.
pub fn demo_graph() -> Result<AdjacencyGraph<&'static str, OrderedFloat<f64>>> {
    let w = OrderedFloat;

    AdjacencyGraph::from_adjacency(vec![
        ("A", vec![("B", w(4.0)), ("C", w(2.0))]),
        ("B", vec![("A", w(4.0)), ("C", w(1.0)), ("D", w(5.0)), ("E", w(3.0))]),
        ("C", vec![("A", w(2.0)), ("B", w(1.0)), ("F", w(4.0))]),
        ("D", vec![("B", w(5.0)), ("E", w(2.0)), ("G", w(6.0))]),
        ("E", vec![("B", w(3.0)), ("D", w(2.0)), ("F", w(3.0)), ("H", w(5.0))]),
        ("F", vec![("C", w(4.0)), ("E", w(3.0)), ("I", w(4.0))]),
        ("G", vec![("D", w(6.0)), ("H", w(2.0)), ("J", w(5.0))]),
        ("H", vec![("E", w(5.0)), ("G", w(2.0)), ("I", w(3.0))]),
        ("I", vec![("F", w(4.0)), ("H", w(3.0)), ("J", w(2.0))]),
        ("J", vec![("G", w(5.0)), ("I", w(2.0))]),
    ])
}

/// How the report is printed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(Error::InvalidConfig(format!("unknown output format '{}'", other))),
        }
    }
}

/// Configuration for a demo run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    pub start: String,
    pub format: OutputFormat,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            start: "A".to_string(),
            format: OutputFormat::Text,
        }
    }
}

impl DemoConfig {
    /// Reads the configuration from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a configuration from a variable lookup, falling back to defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(start) = lookup(START_VAR).filter(|s| !s.trim().is_empty()) {
            config.start = start.trim().to_string();
        }
        if let Some(format) = lookup(FORMAT_VAR) {
            config.format = format.parse()?;
        }

        Ok(config)
    }
}

/// Shortest path to one destination
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathReport<N, W> {
    pub start: N,
    pub destination: N,
    pub distance: W,
    pub path: Vec<N>,
}

/// Outcome of a demo run
#[derive(Debug, Clone, Serialize)]
pub struct DemoReport<N, W> {
    pub start: N,
    pub entries: Vec<PathReport<N, W>>,
    #[serde(rename = "elapsed_secs", serialize_with = "serialize_secs")]
    pub elapsed: Duration,
}

fn serialize_secs<S: Serializer>(elapsed: &Duration, serializer: S) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_f64(elapsed.as_secs_f64())
}

impl<N, W> DemoReport<N, W>
where
    N: Node + Display + Serialize,
    W: Weight + Display + Serialize,
{
    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Text => Ok(self.to_string()),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(self)?),
        }
    }
}

impl<N, W> Display for DemoReport<N, W>
where
    N: Node + Display,
    W: Weight + Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.entries {
            write!(
                f,
                "{} to {}\nDistance: {}\nPath: [",
                entry.start, entry.destination, entry.distance
            )?;
            for (i, node) in entry.path.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "'{}'", node)?;
            }
            f.write_str("]\n\n")?;
        }
        write!(f, "Execution time: {:.6}s", self.elapsed.as_secs_f64())
    }
}

/// Solves `graph` from `config.start` and collects a report entry for every
/// other reachable node, nearest first. Equal distances keep graph order.
///
/// Only the solve itself is timed.
pub fn run_demo<N, W>(graph: &AdjacencyGraph<N, W>, config: &DemoConfig) -> Result<DemoReport<N, W>>
where
    N: Node + Borrow<str>,
    W: Weight,
{
    let timer = Instant::now();
    let paths = solve(graph, config.start.as_str())?;
    let elapsed = timer.elapsed();

    info!(
        "Solved {} nodes from {} in {:?} ({} reachable)",
        graph.labels().len(),
        config.start,
        elapsed,
        paths.result().reachable_count()
    );

    let start = paths.start();
    let mut entries = Vec::new();

    for (node, distance) in paths.by_distance() {
        let Some(distance) = distance else {
            continue;
        };
        if node == start {
            continue;
        }

        entries.push(PathReport {
            start: start.clone(),
            destination: node.clone(),
            distance,
            path: paths.path::<N>(node)?,
        });
    }

    Ok(DemoReport {
        start: start.clone(),
        entries,
        elapsed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = DemoConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, DemoConfig::default());
        assert_eq!(config.start, "A");
    }

    #[test]
    fn test_config_from_vars() {
        let config = DemoConfig::from_lookup(lookup(&[(START_VAR, "E"), (FORMAT_VAR, "JSON")])).unwrap();
        assert_eq!(config.start, "E");
        assert_eq!(config.format, OutputFormat::Json);
    }

    #[test]
    fn test_config_rejects_unknown_format() {
        let err = DemoConfig::from_lookup(lookup(&[(FORMAT_VAR, "yaml")])).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn test_report_order() {
        let graph = demo_graph().unwrap();
        let report = run_demo(&graph, &DemoConfig::default()).unwrap();

        let order: Vec<_> = report.entries.iter().map(|e| e.destination).collect();
        assert_eq!(order, vec!["C", "B", "E", "F", "D", "I", "H", "J", "G"]);
    }

    #[test]
    fn test_text_rendering() {
        let graph = demo_graph().unwrap();
        let report = run_demo(&graph, &DemoConfig::default()).unwrap();
        let text = report.render(OutputFormat::Text).unwrap();

        assert!(text.starts_with("A to C\nDistance: 2\nPath: ['A', 'C']\n\nA to B\nDistance: 3\n"));
        assert!(text.contains("A to D\nDistance: 8\nPath: ['A', 'C', 'B', 'D']\n\n"));
        assert!(text.lines().last().unwrap().starts_with("Execution time: "));
        assert!(text.ends_with('s'));
    }

    #[test]
    fn test_json_rendering() {
        let graph = demo_graph().unwrap();
        let report = run_demo(&graph, &DemoConfig::default()).unwrap();
        let json: serde_json::Value = serde_json::from_str(&report.render(OutputFormat::Json).unwrap()).unwrap();

        assert_eq!(json["start"], "A");
        assert_eq!(json["entries"][1]["destination"], "B");
        assert_eq!(json["entries"][1]["distance"], 3.0);
        assert_eq!(json["entries"][1]["path"], serde_json::json!(["A", "C", "B"]));
        assert!(json["elapsed_secs"].is_number());
    }

    #[test]
    fn test_owned_labels_and_integer_weights() {
        let graph: AdjacencyGraph<String, u32> = AdjacencyGraph::from_adjacency(vec![
            ("home".to_string(), vec![("shop".to_string(), 3), ("park".to_string(), 1)]),
            ("park".to_string(), vec![("shop".to_string(), 1)]),
            ("shop".to_string(), vec![]),
            ("island".to_string(), vec![]),
        ])
        .unwrap();
        let config = DemoConfig {
            start: "home".to_string(),
            ..DemoConfig::default()
        };

        let report = run_demo(&graph, &config).unwrap();

        assert_eq!(report.start, "home");
        assert_eq!(report.entries.len(), 2);
        assert_eq!(report.entries[1].destination, "shop");
        assert_eq!(report.entries[1].distance, 2);
        assert_eq!(report.entries[1].path, vec!["home", "park", "shop"]);
        assert!(report
            .to_string()
            .starts_with("home to park\nDistance: 1\nPath: ['home', 'park']\n\n"));
    }

    #[test]
    fn test_unknown_start() {
        let graph = demo_graph().unwrap();
        let config = DemoConfig {
            start: "Z".to_string(),
            ..DemoConfig::default()
        };

        assert!(matches!(run_demo(&graph, &config), Err(Error::InvalidStart(_))));
    }
}
