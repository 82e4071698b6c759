use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{Error, HighlightKind, Range, Result};

/// License record identifier. Zero is the storage encoding for "no license".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct LicenseId(i64);

impl LicenseId {
    /// Returns `None` for the zero id
    pub fn new(id: i64) -> Option<Self> {
        (id != 0).then_some(Self(id))
    }

    pub fn get(&self) -> i64 {
        self.0
    }
}

impl TryFrom<i64> for LicenseId {
    type Error = Error;

    fn try_from(id: i64) -> Result<Self> {
        Self::new(id).ok_or(Error::ZeroId("license"))
    }
}

impl From<LicenseId> for i64 {
    fn from(id: LicenseId) -> Self {
        id.0
    }
}

impl fmt::Display for LicenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// License attribution carried by a highlight.
///
/// Database-backed spans know the license record id. Free-text scanner
/// output only names the license; resolving the name to an id is up to
/// the caller.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LicenseRef {
    Id(LicenseId),
    Name(String),
}

impl fmt::Display for LicenseRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LicenseRef::Id(id) => write!(f, "#{}", id),
            LicenseRef::Name(name) => write!(f, "{}", name),
        }
    }
}

/// One typed highlight span over a file.
///
/// Owns only scalar data; nothing points back at the row or text it came
/// from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Highlight {
    #[serde(flatten)]
    range: Range,
    kind: HighlightKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    license: Option<LicenseRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    reference: Option<Range>,
}

impl Highlight {
    pub fn new(range: Range, kind: HighlightKind) -> Self {
        Self {
            range,
            kind,
            license: None,
            reference: None,
        }
    }

    /// Span compared against a reference text (diff family or signature)
    pub fn with_reference(range: Range, kind: HighlightKind, reference: Range) -> Self {
        Self {
            range,
            kind,
            license: None,
            reference: Some(reference),
        }
    }

    pub fn keyword(range: Range) -> Self {
        Self::new(range, HighlightKind::Keyword)
    }

    pub fn bulk(range: Range, license: Option<LicenseId>) -> Self {
        Self::new(range, HighlightKind::Bulk).licensed(license.map(LicenseRef::Id))
    }

    /// Signature span named by a scanner rather than a license record
    pub fn named_signature(range: Range, name: impl Into<String>) -> Self {
        Self::new(range, HighlightKind::Signature).licensed(Some(LicenseRef::Name(name.into())))
    }

    /// Attach a license attribution while building the value
    pub fn licensed(mut self, license: Option<LicenseRef>) -> Self {
        self.license = license;
        self
    }

    pub fn range(&self) -> Range {
        self.range
    }

    pub fn start(&self) -> u64 {
        self.range.start()
    }

    pub fn end(&self) -> u64 {
        self.range.end()
    }

    pub fn kind(&self) -> HighlightKind {
        self.kind
    }

    pub fn license(&self) -> Option<&LicenseRef> {
        self.license.as_ref()
    }

    pub fn license_id(&self) -> Option<LicenseId> {
        match &self.license {
            Some(LicenseRef::Id(id)) => Some(*id),
            _ => None,
        }
    }

    pub fn license_name(&self) -> Option<&str> {
        match &self.license {
            Some(LicenseRef::Name(name)) => Some(name),
            _ => None,
        }
    }

    pub fn reference(&self) -> Option<Range> {
        self.reference
    }

    /// Reference range, or `[0, 0)` for spans without one
    pub fn reference_or_empty(&self) -> Range {
        self.reference.unwrap_or(Range::EMPTY)
    }
}
