use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{Error, LicenseId, Result};

static TREE_TABLE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^uploadtree(_[a-z0-9]+)?$").expect("tree table pattern is valid")
});

/// Name of the upload-tree table a location lives in.
///
/// Uploads may be sharded into per-upload tree tables (`uploadtree_a`,
/// `uploadtree_42`). The name ends up inside query text, so only names of
/// that shape are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TreeTable(String);

impl TreeTable {
    pub const DEFAULT_NAME: &'static str = "uploadtree";

    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if TREE_TABLE_RE.is_match(&name) {
            Ok(Self(name))
        } else {
            Err(Error::InvalidTreeTable(name))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for TreeTable {
    fn default() -> Self {
        Self(Self::DEFAULT_NAME.to_string())
    }
}

impl fmt::Display for TreeTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for TreeTable {
    type Error = Error;

    fn try_from(name: String) -> Result<Self> {
        Self::new(name)
    }
}

impl From<TreeTable> for String {
    fn from(table: TreeTable) -> Self {
        table.0
    }
}

/// Producing agent identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct AgentId(i64);

impl AgentId {
    pub fn new(id: i64) -> Option<Self> {
        (id != 0).then_some(Self(id))
    }

    pub fn get(&self) -> i64 {
        self.0
    }
}

impl TryFrom<i64> for AgentId {
    type Error = Error;

    fn try_from(id: i64) -> Result<Self> {
        Self::new(id).ok_or(Error::ZeroId("agent"))
    }
}

impl From<AgentId> for i64 {
    fn from(id: AgentId) -> Self {
        id.0
    }
}

/// Specific highlight record: a license-file match for diff spans, a
/// clearing event for bulk spans
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct HighlightId(i64);

impl HighlightId {
    pub fn new(id: i64) -> Option<Self> {
        (id != 0).then_some(Self(id))
    }

    pub fn get(&self) -> i64 {
        self.0
    }
}

impl TryFrom<i64> for HighlightId {
    type Error = Error;

    fn try_from(id: i64) -> Result<Self> {
        Self::new(id).ok_or(Error::ZeroId("highlight"))
    }
}

impl From<HighlightId> for i64 {
    fn from(id: HighlightId) -> Self {
        id.0
    }
}

/// One item (file) inside an upload tree
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemLocation {
    pub item_id: i64,
    pub tree: TreeTable,
}

impl ItemLocation {
    pub fn new(item_id: i64, tree: TreeTable) -> Self {
        Self { item_id, tree }
    }
}

impl fmt::Display for ItemLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.tree, self.item_id)
    }
}

/// Optional, conjunctive narrowing of a highlight request.
///
/// An absent field imposes no restriction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HighlightFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license: Option<LicenseId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent: Option<AgentId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlight: Option<HighlightId>,
}

impl HighlightFilter {
    /// Build from raw ids where zero means "not set"
    pub fn from_raw(license: Option<i64>, agent: Option<i64>, highlight: Option<i64>) -> Self {
        Self {
            license: license.and_then(LicenseId::new),
            agent: agent.and_then(AgentId::new),
            highlight: highlight.and_then(HighlightId::new),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.license.is_none() && self.agent.is_none() && self.highlight.is_none()
    }
}

/// Request-scoped selection of which highlights to fetch
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HighlightContext {
    pub location: ItemLocation,
    #[serde(default)]
    pub filter: HighlightFilter,
}

impl HighlightContext {
    pub fn new(location: ItemLocation) -> Self {
        Self {
            location,
            filter: HighlightFilter::default(),
        }
    }

    pub fn with_filter(mut self, filter: HighlightFilter) -> Self {
        self.filter = filter;
        self
    }
}
