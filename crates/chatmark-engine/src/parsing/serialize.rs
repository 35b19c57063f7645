use serde_json::{Map, Value};

use crate::parsing::types::Node;

impl Node {
    /// Converts the node into a generic map for renderers.
    ///
    /// `node_type` holds the kind's tag; every other attribute is present only
    /// when set, and `children` only when non-empty. Keys keep insertion
    /// order: `node_type`, `text_content`, `id`, `name`, `url`, `children`.
    pub fn to_generic_map(&self) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert("node_type".into(), Value::from(self.kind.name()));
        if let Some(text) = &self.text_content {
            map.insert("text_content".into(), Value::from(text.as_str()));
        }
        if let Some(id) = self.id {
            map.insert("id".into(), Value::from(id));
        }
        if let Some(name) = &self.name {
            map.insert("name".into(), Value::from(name.as_str()));
        }
        if let Some(url) = &self.url {
            map.insert("url".into(), Value::from(url.as_str()));
        }
        if !self.children.is_empty() {
            let children = self
                .children
                .iter()
                .map(|child| Value::Object(child.to_generic_map()))
                .collect();
            map.insert("children".into(), Value::Array(children));
        }
        map
    }
}
