use petgraph::visit::EdgeRef;
use std::io::{self, Write};

use crate::interaction_graph::InteractionGraph;

const HEADER: &str = r#"<?xml version="1.0" encoding="UTF8"?>
<gexf xmlns="http://www.gexf.net/1.2draft"
 xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance"
 xsi:schemaLocation="http://www.gexf.net/1.2draft http://www.gexf.net/1.2draft/gexf.xsd"
 version="1.2">
  <meta lastmodifieddate="20111012">
    <creator>Cloudera</creator>
    <description>A network of drug-drug relationships</description>
  </meta>
  <graph defaultedgetype="undirected">
    <attributes class="edge">
      <attribute id="0" title="reactions" type="string"/>
    </attributes>
    <nodes>
"#;

/// Render the interaction graph as a GEXF 1.2 document.
///
/// Nodes are written in identifier order, edges in first-occurrence order
/// of each ordered pair with a fresh sequential id. An edge's `weight` is
/// the maximum score across its records and its `reactions` attribute is
/// the `$`-joined reaction list in arrival order.
///
/// Known limitation: labels and reaction strings are written verbatim, so
/// a name containing `<`, `&` or `"` yields a document that strict XML
/// parsers reject.
pub fn write_gexf<W: Write>(graph: &InteractionGraph, out: &mut W) -> io::Result<()> {
    out.write_all(HEADER.as_bytes())?;
    for id in graph.node_indices() {
        writeln!(
            out,
            "      <node id=\"{}\" label=\"{}\"/>",
            id.index(),
            graph[id]
        )?;
    }
    writeln!(out, "    </nodes>")?;

    writeln!(out, "    <edges>")?;
    for (edge_id, edge) in graph.edge_references().enumerate() {
        let records = edge.weight();
        let weight = records
            .iter()
            .map(|r| r.score)
            .fold(f64::NEG_INFINITY, f64::max);
        let reactions = records
            .iter()
            .map(|r| r.reaction.as_str())
            .collect::<Vec<_>>()
            .join("$");

        writeln!(
            out,
            "      <edge id=\"{}\" source=\"{}\" target=\"{}\" weight=\"{:.2}\">",
            edge_id,
            edge.source().index(),
            edge.target().index(),
            weight
        )?;
        writeln!(
            out,
            "        <attvalues><attvalue for=\"0\" value=\"{reactions}\"/></attvalues>"
        )?;
        writeln!(out, "      </edge>")?;
    }
    writeln!(out, "    </edges>")?;
    writeln!(out, "  </graph>")?;
    writeln!(out, "</gexf>")
}
