//! Fact document loading.
//!
//! A fact document is the JSON rendition of an XBRL instance that has already
//! been reduced to a simple tagged tree. The loader only checks the top-level
//! shape; anything below `xbrl_content` is accepted as-is and malformed nodes
//! are left for the flattener to skip.
//!
//! # Example
//!
//! ```
//! use hobart_data::FactDocument;
//!
//! let doc = FactDocument::parse_json(
//!     r#"{"xbrl_content": {"children": [
//!         {"tag": "us-gaap:Assets", "text": "1,000", "attributes": {"contextRef": "FY23"}}
//!     ]}}"#,
//! )?;
//! assert_eq!(doc.children().len(), 1);
//! assert!(doc.sector_averages.is_empty());
//! # Ok::<(), hobart_data::DataError>(())
//! ```

use crate::error::{DataError, Result};
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

/// Top-level key holding the fact tree.
pub const XBRL_CONTENT_KEY: &str = "xbrl_content";

/// Top-level key holding the optional sector benchmark table.
pub const SECTOR_AVERAGES_KEY: &str = "sector_averages";

/// A node of the tagged fact tree.
///
/// Every node is owned by its parent's `children`; the tree has no shared or
/// cyclic references. Deserialization never fails on a node: fields of the
/// wrong JSON type are treated as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Value")]
pub struct RawNode {
    /// Concept identifier (e.g., "us-gaap:AssetsCurrent")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,

    /// Raw textual value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Attribute mapping (contextRef, unitRef, decimals, ...)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<BTreeMap<String, String>>,

    /// Child nodes in document order
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<RawNode>,
}

impl RawNode {
    /// Creates a tagged node with a text value and an empty attribute mapping.
    pub fn fact(tag: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            tag: Some(tag.into()),
            text: Some(text.into()),
            attributes: Some(BTreeMap::new()),
            children: Vec::new(),
        }
    }

    /// Adds an attribute, creating the attribute mapping if needed.
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes
            .get_or_insert_with(BTreeMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Appends a child node.
    pub fn with_child(mut self, child: Self) -> Self {
        self.children.push(child);
        self
    }

    /// Looks up an attribute value.
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.as_ref()?.get(key).map(String::as_str)
    }

    /// Builds a node from an arbitrary JSON value.
    fn from_json(value: &Value) -> Self {
        let Value::Object(obj) = value else {
            return Self::default();
        };

        let tag = obj.get("tag").and_then(Value::as_str).map(str::to_string);
        let text = obj.get("text").and_then(scalar_text);
        let attributes = obj.get("attributes").and_then(Value::as_object).map(|attrs| {
            attrs
                .iter()
                .filter_map(|(k, v)| scalar_text(v).map(|s| (k.clone(), s)))
                .collect()
        });
        let children = obj
            .get("children")
            .and_then(Value::as_array)
            .map(|nodes| nodes.iter().map(Self::from_json).collect())
            .unwrap_or_default();

        Self {
            tag,
            text,
            attributes,
            children,
        }
    }
}

impl From<Value> for RawNode {
    fn from(value: Value) -> Self {
        Self::from_json(&value)
    }
}

/// Textual form of a scalar JSON value; `null`, arrays and objects have none.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Sector benchmark values keyed by metric label.
///
/// Lookups for labels without a benchmark return `None`; callers decide what
/// to substitute.
///
/// Entries keep the order they were first inserted in; re-inserting a label
/// replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct SectorAverages(Vec<(String, f64)>);

impl SectorAverages {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Benchmark for a metric label.
    pub fn get(&self, label: &str) -> Option<f64> {
        self.0.iter().find(|(l, _)| l == label).map(|(_, v)| *v)
    }

    /// Sets the benchmark for a metric label.
    pub fn insert(&mut self, label: impl Into<String>, value: f64) {
        let label = label.into();
        match self.0.iter_mut().find(|(l, _)| *l == label) {
            Some(entry) => entry.1 = value,
            None => self.0.push((label, value)),
        }
    }

    /// Number of benchmarks.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if there are no benchmarks.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over `(label, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    fn from_json(obj: &Map<String, Value>) -> Self {
        let mut averages = Self::new();
        for (label, value) in obj {
            match value.as_f64() {
                Some(v) => averages.insert(label.clone(), v),
                None => log::warn!("Ignoring non-numeric sector average for {label}: {value}"),
            }
        }
        averages
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for SectorAverages {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        let mut averages = Self::new();
        for (label, value) in iter {
            averages.insert(label, value);
        }
        averages
    }
}

/// Strict conversion used when a table is deserialized on its own; every
/// value must be a number.
impl TryFrom<Map<String, Value>> for SectorAverages {
    type Error = String;

    fn try_from(obj: Map<String, Value>) -> std::result::Result<Self, Self::Error> {
        obj.into_iter()
            .map(|(label, value)| match value.as_f64() {
                Some(v) => Ok((label, v)),
                None => Err(format!("sector average for {label} is not a number: {value}")),
            })
            .collect()
    }
}

impl Serialize for SectorAverages {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (label, value) in &self.0 {
            map.serialize_entry(label, value)?;
        }
        map.end()
    }
}

/// A validated fact document.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FactDocument {
    /// Root of the fact tree
    pub xbrl_content: RawNode,

    /// Benchmarks supplied with the document (empty when absent)
    #[serde(skip_serializing_if = "SectorAverages::is_empty")]
    pub sector_averages: SectorAverages,
}

impl FactDocument {
    /// Creates a document from an already-built tree.
    pub fn new(xbrl_content: RawNode) -> Self {
        Self {
            xbrl_content,
            sector_averages: SectorAverages::default(),
        }
    }

    /// Replaces the sector benchmark table.
    pub fn with_sector_averages(mut self, sector_averages: SectorAverages) -> Self {
        self.sector_averages = sector_averages;
        self
    }

    /// Top-level nodes of the fact tree, in document order.
    pub fn children(&self) -> &[RawNode] {
        &self.xbrl_content.children
    }

    /// Parses a document from JSON text.
    pub fn parse_json(json: &str) -> Result<Self> {
        Self::parse_slice(json.as_bytes())
    }

    /// Parses a document from raw bytes; invalid UTF-8 is a parse error.
    pub fn parse_slice(bytes: &[u8]) -> Result<Self> {
        let value: Value = serde_json::from_slice(bytes)?;
        Self::from_value(value)
    }

    /// Validates an already-parsed JSON value.
    pub fn from_value(value: Value) -> Result<Self> {
        let Value::Object(obj) = value else {
            return Err(DataError::Schema(format!(
                "expected a JSON object with an `{XBRL_CONTENT_KEY}` key"
            )));
        };

        let content = obj.get(XBRL_CONTENT_KEY).ok_or_else(|| {
            DataError::Schema(format!("missing top-level `{XBRL_CONTENT_KEY}` key"))
        })?;
        if !content.is_object() {
            log::warn!("`{XBRL_CONTENT_KEY}` is not an object; document has no facts");
        }

        let sector_averages = match obj.get(SECTOR_AVERAGES_KEY) {
            None | Some(Value::Null) => SectorAverages::default(),
            Some(Value::Object(avgs)) => SectorAverages::from_json(avgs),
            Some(other) => {
                log::warn!("Ignoring `{SECTOR_AVERAGES_KEY}` that is not an object: {other}");
                SectorAverages::default()
            }
        };

        let doc = Self {
            xbrl_content: RawNode::from_json(content),
            sector_averages,
        };
        log::debug!(
            "Validated fact document: {} top-level nodes, {} sector averages",
            doc.children().len(),
            doc.sector_averages.len()
        );
        Ok(doc)
    }

    /// Reads and parses a document from any reader.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        Self::parse_slice(&bytes)
    }

    /// Loads a document from a file.
    ///
    /// A missing file is reported as [`DataError::NotFound`]; every other IO
    /// failure as [`DataError::Io`].
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => DataError::NotFound(path.to_path_buf()),
            _ => DataError::Io(e),
        })?;
        let doc = Self::parse_slice(&bytes)?;
        log::info!(
            "Loaded fact document {} ({} top-level nodes)",
            path.display(),
            doc.children().len()
        );
        Ok(doc)
    }
}
