use crate::parsing::types::Node;

/// Collapses runs of sibling Text nodes into one, at every level of the tree.
///
/// The first node of each run keeps its position; all other nodes keep
/// their order. Running this twice gives the same result as running it once.
pub fn merge_adjacent_text(nodes: Vec<Node>) -> Vec<Node> {
    let mut out: Vec<Node> = Vec::with_capacity(nodes.len());

    for mut node in nodes {
        if node.is_text() {
            if let Some(prev) = out.last_mut().filter(|prev| prev.is_text()) {
                let text = node.text_content.take().unwrap_or_default();
                prev.text_content.get_or_insert_with(String::new).push_str(&text);
                continue;
            }
        } else if !node.children.is_empty() {
            node.children = merge_adjacent_text(std::mem::take(&mut node.children));
        }
        out.push(node);
    }

    out
}
