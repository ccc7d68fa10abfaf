use super::RenderInput;
use std::collections::BTreeSet;

const LOCAL_FILL: &str = "lightgrey";
const EXTERNAL_FILL: &str = "tomato";
const INDENT: &str = "    ";

/// Quote an identifier for use as a DOT node ID
pub fn quote(id: &str) -> String {
    let mut quoted = String::with_capacity(id.len() + 2);
    quoted.push('"');
    for c in id.chars() {
        match c {
            '"' | '\\' => {
                quoted.push('\\');
                quoted.push(c);
            }
            '\n' => quoted.push_str("\\n"),
            _ => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}

fn node_line(input: &RenderInput<'_>, id: &str, indent: &str) -> String {
    if input.universe.is_external(id) {
        format!(
            "{}{} [fillcolor={}, fontcolor=white];\n",
            indent,
            quote(id),
            EXTERNAL_FILL
        )
    } else {
        format!("{}{};\n", indent, quote(id))
    }
}

/// Graphviz source for the layered graph
///
/// Layers become `rank=same` subgraphs laid out left to right. Nodes not
/// covered by any layer are still emitted so every edge endpoint is styled.
pub fn to_dot(input: &RenderInput<'_>) -> String {
    let mut out = String::new();
    out.push_str(&format!("digraph {} {{\n", quote(input.module_prefix.as_str())));
    out.push_str(&format!("{INDENT}rankdir=LR;\n"));
    out.push_str(&format!("{INDENT}splines=ortho;\n"));
    out.push_str(&format!(
        "{INDENT}node [shape=box, style=\"rounded,filled\", fillcolor={}, fontname=\"Helvetica\"];\n",
        LOCAL_FILL
    ));

    let mut placed: BTreeSet<&str> = BTreeSet::new();
    for (index, layer) in input.layers.iter().enumerate() {
        out.push('\n');
        out.push_str(&format!("{INDENT}subgraph layer_{index} {{\n"));
        out.push_str(&format!("{INDENT}{INDENT}rank=same;\n"));
        for id in layer {
            out.push_str(&node_line(input, id, &INDENT.repeat(2)));
            placed.insert(id.as_str());
        }
        out.push_str(&format!("{INDENT}}}\n"));
    }

    let unplaced: Vec<&str> = input
        .graph
        .nodes()
        .filter(|id| !placed.contains(id))
        .collect();
    if !unplaced.is_empty() {
        out.push('\n');
        for id in unplaced {
            out.push_str(&node_line(input, id, INDENT));
        }
    }

    if input.graph.edge_count() > 0 {
        out.push('\n');
        for (dependency, dependent) in input.graph.edges() {
            out.push_str(&format!(
                "{INDENT}{} -> {};\n",
                quote(dependency),
                quote(dependent)
            ));
        }
    }

    out.push_str("}\n");
    out
}

#[cfg(test)]
mod tests {
    include!("dot.test.rs");
}
