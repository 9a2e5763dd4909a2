use std::str::FromStr;
use anyhow::{ensure, Context};
use yaml_rust2::{Yaml, YamlLoader};
use dvroute::graph::Graph;
use crate::GraphSystem;

/// A topology file, with the optional run settings it carries
pub struct GraphFile {
    pub graph: Graph<GraphSystem>,
    pub node: Option<u32>,
    pub validate: Option<bool>,
    pub max_round_factor: Option<usize>,
}

/// Parses a single `a b cost` link
pub fn parse_edge(line: &str) -> anyhow::Result<(u32, u32, i64)> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    ensure!(parts.len() == 3, "Expected three elements in link `{line}`");
    Ok((
        u32::from_str(parts[0]).with_context(|| format!("Invalid node `{}`", parts[0]))?,
        u32::from_str(parts[1]).with_context(|| format!("Invalid node `{}`", parts[1]))?,
        i64::from_str(parts[2]).with_context(|| format!("Invalid cost `{}`", parts[2]))?,
    ))
}

/// One link per line, blank lines and `#` comments are skipped
pub fn parse_edge_list(input: &str) -> anyhow::Result<GraphFile> {
    let mut edges = Vec::new();
    for (idx, line) in input.lines().enumerate() {
        let line = line.split('#').next().unwrap_or("").trim();
        if line.is_empty() {
            continue;
        }
        edges.push(parse_edge(line).with_context(|| format!("Line {}", idx + 1))?);
    }
    Ok(GraphFile {
        graph: Graph::from_edges(edges),
        node: None,
        validate: None,
        max_round_factor: None,
    })
}

/// ```yaml
/// self: 3
/// validate: true
/// max_round_factor: 4
/// edges:
///   - 2 3 2
///   - 2 5 5
/// ```
pub fn parse_yaml(input: &str) -> anyhow::Result<GraphFile> {
    let docs = YamlLoader::load_from_str(input).context("Invalid YAML")?;
    let root = docs.first().context("Expected a YAML document")?;
    root.as_hash().context("Expected map at the document root")?;

    let mut edges = Vec::new();
    for edge in root["edges"].as_vec().context("Expected list of edges")? {
        let line = match edge {
            Yaml::String(s) => s.clone(),
            _ => anyhow::bail!("Expected edge string, found {edge:?}"),
        };
        edges.push(parse_edge(&line)?);
    }

    let node = match &root["self"] {
        Yaml::BadValue => None,
        value => Some(
            u32::try_from(value.as_i64().context("Expected integer self node")?)
                .context("Self node out of range")?,
        ),
    };
    let validate = match &root["validate"] {
        Yaml::BadValue => None,
        value => Some(value.as_bool().context("Expected boolean for validate")?),
    };
    let max_round_factor = match &root["max_round_factor"] {
        Yaml::BadValue => None,
        value => Some(
            usize::try_from(value.as_i64().context("Expected integer max_round_factor")?)
                .context("max_round_factor must be positive")?,
        ),
    };

    Ok(GraphFile {
        graph: Graph::from_edges(edges),
        node,
        validate,
        max_round_factor,
    })
}
