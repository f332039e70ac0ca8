use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A unit of tracked work, as written into `items.json` by whatever
/// automation owns the workspace.
///
/// Every field is defaulted: a sparse or drifted record still loads, and
/// the renderer degrades instead of the whole payload failing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Item {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub pipeline: String,
    #[serde(default)]
    pub stage: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub created: String,
    #[serde(default)]
    pub updated: String,
    #[serde(default)]
    pub metadata: BTreeMap<String, MetadataValue>,
}

/// Open-ended metadata value attached to an item.
///
/// Scalars pass through untouched; nested structures are kept as raw JSON
/// and coerced to text only at display time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetadataValue {
    Null,
    Bool(bool),
    Number(serde_json::Number),
    String(String),
    Nested(serde_json::Value),
}

impl fmt::Display for MetadataValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(b) => write!(f, "{}", b),
            Self::Number(n) => write!(f, "{}", n),
            Self::String(s) => f.write_str(s),
            Self::Nested(v) => {
                f.write_str(&serde_json::to_string(v).unwrap_or_default())
            }
        }
    }
}

/// One step of a pipeline. `required_fields` names metadata keys expected
/// at this stage; it is informational and never enforced on the read path.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Stage {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub required_fields: Vec<String>,
}

/// A named workflow definition. Stage order is column order on the board.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Pipeline {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub stages: Vec<Stage>,
}

/// On-disk shape of `.data/items.json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemsFile {
    #[serde(default)]
    pub items: Vec<Item>,
}

/// On-disk shape of `config/pipelines.yaml`.
///
/// Keys are held sorted so the pipeline selector does not reshuffle
/// between polls.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PipelinesFile {
    #[serde(default)]
    pub pipelines: BTreeMap<String, Pipeline>,
}

/// Composed payload returned by `GET /api/data`. The pipelines member is
/// the whole configuration document, so the wire shape nests a second
/// `pipelines` key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPayload {
    pub items: Vec<Item>,
    pub pipelines: PipelinesFile,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sparse_item_loads_with_defaults() {
        let item: Item = serde_json::from_str(r#"{"id": "only-an-id"}"#).unwrap();
        assert_eq!(item.id, "only-an-id");
        assert_eq!(item.stage, "");
        assert!(item.metadata.is_empty());
    }

    #[test]
    fn test_metadata_scalars_round_trip() {
        let item: Item = serde_json::from_str(
            r#"{"id": "x", "metadata": {"words": 1200, "draft": false, "owner": "maya", "due": null}}"#,
        )
        .unwrap();
        let json = serde_json::to_value(&item.metadata).unwrap();
        assert_eq!(json["words"], 1200);
        assert_eq!(json["draft"], false);
        assert_eq!(json["owner"], "maya");
        assert!(json["due"].is_null());
    }

    #[test]
    fn test_metadata_display_coercion() {
        assert_eq!(MetadataValue::String("maya".into()).to_string(), "maya");
        assert_eq!(MetadataValue::Bool(true).to_string(), "true");
        assert_eq!(MetadataValue::Null.to_string(), "null");
        let nested: MetadataValue =
            serde_json::from_str(r#"{"channels": ["blog", "email"]}"#).unwrap();
        assert_eq!(nested.to_string(), r#"{"channels":["blog","email"]}"#);
    }
}
