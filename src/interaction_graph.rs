use petgraph::graph::NodeIndex;
use petgraph::Directed;
use petgraph::Graph;
use serde::Deserialize;
use std::collections::HashMap;
use std::fmt::Display;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// One row's contribution to a drug pair: the reaction reported for the
/// combination, its case count, and its signal score.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Relation {
    pub reaction: String,
    pub count: i64,
    pub score: f64,
}

/// Drug names on the nodes, accumulated [`Relation`] records on the edges.
///
/// Node indices double as drug identifiers: petgraph hands them out densely
/// in insertion order, so index `i` is the `i`-th distinct drug seen in the
/// input. The graph is directed so a pair and its reverse stay separate
/// edges.
pub type InteractionGraph = Graph<String, Vec<Relation>, Directed>;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to open {path}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error("malformed row at line {line}: {reason}")]
    Row { line: u64, reason: String },
}

/// Read a `$`-delimited file of drug-drug-reaction rows into an
/// [`InteractionGraph`].
///
/// Row layout: fields 0 and 1 are the two drug names, field 2 the reaction,
/// field 3 a case count, field 7 a score; fields 4 through 6 are ignored.
/// Rows where either drug name contains `/` are dropped silently. Any other
/// row must satisfy the full layout or the whole load fails.
pub fn read_data(path: &Path) -> Result<InteractionGraph, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'$')
        .has_headers(false)
        .flexible(true)
        .from_reader(BufReader::new(file));

    let mut graph = InteractionGraph::new();
    let mut drug_ids: HashMap<String, NodeIndex> = HashMap::new();

    for result in reader.records() {
        let record = result?;
        let line = record.position().map_or(0, |p| p.line());

        let d1 = field(&record, 0, line)?;
        let d2 = field(&record, 1, line)?;
        // Names with a '/' are compound identifiers from the upstream join;
        // their rows carry no usable pair.
        if d1.contains('/') || d2.contains('/') {
            continue;
        }
        let (d1, d2) = (d1.to_string(), d2.to_string());

        let relation = Relation {
            reaction: field(&record, 2, line)?.to_string(),
            count: parse_field(&record, 3, line)?,
            score: parse_field(&record, 7, line)?,
        };

        let source = intern(&mut graph, &mut drug_ids, d1);
        let target = intern(&mut graph, &mut drug_ids, d2);

        match graph.find_edge(source, target) {
            Some(edge) => graph[edge].push(relation),
            None => {
                graph.add_edge(source, target, vec![relation]);
            }
        }
    }

    Ok(graph)
}

fn intern(
    graph: &mut InteractionGraph,
    drug_ids: &mut HashMap<String, NodeIndex>,
    name: String,
) -> NodeIndex {
    *drug_ids
        .entry(name)
        .or_insert_with_key(|name| graph.add_node(name.clone()))
}

fn field<'r>(record: &'r csv::StringRecord, index: usize, line: u64) -> Result<&'r str, LoadError> {
    record.get(index).ok_or_else(|| LoadError::Row {
        line,
        reason: format!("missing field {index}"),
    })
}

fn parse_field<T>(record: &csv::StringRecord, index: usize, line: u64) -> Result<T, LoadError>
where
    T: FromStr,
    T::Err: Display,
{
    let raw = field(record, index, line)?;
    raw.parse().map_err(|err| LoadError::Row {
        line,
        reason: format!("field {index} ({raw:?}): {err}"),
    })
}
