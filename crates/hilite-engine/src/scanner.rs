// Free-text scanner output
//
// One line per analysed file:
//
//   File <name> contains license(s) <summary> Highlighting Info at <tokens>
//
// where <tokens> repeats `Keyword at <pos>, length <len>,` and
// `License #<name># at <pos>, length <len>,`. Only the offsets the scanner
// reports are used; the scanned file itself is never read here.

use hilite_types::{Highlight, Range};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde::Serialize;

use crate::{Error, Result};

const LICENSE_MARKER: &str = "contains license(s)";
const HIGHLIGHT_MARKER: &str = "Highlighting Info at";

static KEYWORD_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"Keyword at (?P<position>\d+), length (?P<length>\d+),")
        .expect("keyword token pattern is valid")
});

static LICENSE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"License #(?P<name>[^#]*)# at (?P<position>\d+), length (?P<length>\d+),")
        .expect("license token pattern is valid")
});

/// Parsed scanner output for one file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanReport {
    /// File name as printed by the scanner, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    /// License list, or the raw block when it could not be parsed
    pub summary: String,
    /// Keyword spans in text order, then signature spans in text order
    pub highlights: Vec<Highlight>,
}

impl ScanReport {
    fn fallback(block: &str) -> Self {
        Self {
            file: None,
            summary: block.trim().to_string(),
            highlights: Vec::new(),
        }
    }
}

/// Parse the output of a scanner run over one or more files.
pub fn parse_output(text: &str) -> Vec<ScanReport> {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .map(parse_block)
        .collect()
}

/// Parse one file block, degrading to an empty highlight list when the
/// block is malformed so the raw text can be shown instead.
pub fn parse_block(block: &str) -> ScanReport {
    match try_parse_block(block) {
        Ok(report) => report,
        Err(err) => {
            log::warn!("{}; falling back to raw scanner text", err);
            ScanReport::fallback(block)
        }
    }
}

/// Strict variant of [`parse_block`].
pub fn try_parse_block(block: &str) -> Result<ScanReport> {
    // Header and license list come before the last license marker's text
    let (head, rest) = match block.rfind(LICENSE_MARKER) {
        Some(pos) => (&block[..pos], &block[pos + LICENSE_MARKER.len()..]),
        None => ("", block),
    };

    let (summary, section) = rest.split_once(HIGHLIGHT_MARKER).ok_or_else(|| {
        Error::MalformedScannerOutput(format!("missing {:?} section", HIGHLIGHT_MARKER))
    })?;

    let mut highlights = keyword_tokens(section)?;
    highlights.extend(license_tokens(section)?);

    let file = head
        .trim()
        .strip_prefix("File ")
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty());

    Ok(ScanReport {
        file,
        summary: summary.trim().to_string(),
        highlights,
    })
}

fn keyword_tokens(section: &str) -> Result<Vec<Highlight>> {
    KEYWORD_RE
        .captures_iter(section)
        .map(|caps| -> Result<Highlight> { Ok(Highlight::keyword(token_range(&caps)?)) })
        .collect()
}

fn license_tokens(section: &str) -> Result<Vec<Highlight>> {
    LICENSE_RE
        .captures_iter(section)
        .map(|caps| -> Result<Highlight> {
            let range = token_range(&caps)?;
            Ok(Highlight::named_signature(range, &caps["name"]))
        })
        .collect()
}

fn token_range(caps: &Captures<'_>) -> Result<Range> {
    let position = number(caps, "position")?;
    let length = number(caps, "length")?;
    Ok(Range::from_len(position, length)?)
}

fn number(caps: &Captures<'_>, group: &str) -> Result<u64> {
    let digits = &caps[group];
    digits.parse().map_err(|_| {
        Error::MalformedScannerOutput(format!("{} {:?} out of range", group, digits))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use hilite_types::HighlightKind;

    #[test]
    fn test_keyword_then_license_in_text_order() {
        let text = "...contains license(s)...Highlighting Info at...Keyword at 10, length 4, ... License #MIT# at 20, length 3,...";
        let report = try_parse_block(text).unwrap();

        assert_eq!(report.highlights.len(), 2);
        let keyword = &report.highlights[0];
        assert_eq!(keyword.kind(), HighlightKind::Keyword);
        assert_eq!((keyword.start(), keyword.end()), (10, 14));
        assert_eq!(keyword.license(), None);

        let license = &report.highlights[1];
        assert_eq!(license.kind(), HighlightKind::Signature);
        assert_eq!((license.start(), license.end()), (20, 23));
        assert_eq!(license.license_name(), Some("MIT"));
    }

    #[test]
    fn test_keywords_grouped_before_licenses() {
        let text = "File a.c contains license(s) GPL-2.0,MIT Highlighting Info at \
                    License #GPL-2.0# at 0, length 9, Keyword at 40, length 7, \
                    License #MIT# at 60, length 0, Keyword at 5, length 2,";
        let report = try_parse_block(text).unwrap();

        assert_eq!(report.file.as_deref(), Some("a.c"));
        assert_eq!(report.summary, "GPL-2.0,MIT");
        let spans: Vec<_> = report
            .highlights
            .iter()
            .map(|h| (h.kind(), h.start(), h.end()))
            .collect();
        assert_eq!(
            spans,
            vec![
                (HighlightKind::Keyword, 40, 47),
                (HighlightKind::Keyword, 5, 7),
                (HighlightKind::Signature, 0, 9),
                (HighlightKind::Signature, 60, 60),
            ]
        );
    }

    #[test]
    fn test_missing_section_is_malformed() {
        let text = "File a.c contains license(s) No_license_found";
        assert!(matches!(
            try_parse_block(text),
            Err(Error::MalformedScannerOutput(_))
        ));

        let report = parse_block(text);
        assert!(report.highlights.is_empty());
        assert_eq!(report.summary, text);
        assert_eq!(
            serde_json::to_value(&report).unwrap(),
            serde_json::json!({ "summary": text, "highlights": [] })
        );
    }

    #[test]
    fn test_overflowing_offset_degrades_to_empty() {
        let text = "contains license(s) X Highlighting Info at Keyword at 99999999999999999999, length 1,";
        assert!(try_parse_block(text).is_err());
        assert!(parse_block(text).highlights.is_empty());
    }

    #[test]
    fn test_empty_output() {
        assert!(parse_output("").is_empty());
        assert!(parse_output("\n  \n").is_empty());
    }
}
