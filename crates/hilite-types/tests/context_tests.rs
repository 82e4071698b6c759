use hilite_types::*;

#[test]
fn test_tree_table_validation() {
    assert!(TreeTable::new("uploadtree").is_ok());
    assert!(TreeTable::new("uploadtree_a").is_ok());
    assert!(TreeTable::new("uploadtree_42").is_ok());

    for bad in ["", "uploadtree_", "UploadTree", "license_file", "uploadtree; DROP TABLE x"] {
        assert_eq!(
            TreeTable::new(bad),
            Err(Error::InvalidTreeTable(bad.to_string())),
            "{:?}",
            bad
        );
    }

    assert_eq!(TreeTable::default().as_str(), "uploadtree");
}

#[test]
fn test_filter_from_raw_drops_zero_ids() {
    let filter = HighlightFilter::from_raw(Some(0), Some(0), None);
    assert!(filter.is_empty());

    let filter = HighlightFilter::from_raw(Some(3), None, Some(11));
    assert_eq!(filter.license.map(|id| id.get()), Some(3));
    assert_eq!(filter.agent, None);
    assert_eq!(filter.highlight.map(|id| id.get()), Some(11));
}

#[test]
fn test_context_deserialize_rejects_bad_tree() {
    let json = r#"{"location": {"item_id": 1, "tree": "files"}}"#;
    assert!(serde_json::from_str::<HighlightContext>(json).is_err());

    let json = r#"{"location": {"item_id": 1, "tree": "uploadtree_a"}}"#;
    let ctx: HighlightContext = serde_json::from_str(json).unwrap();
    assert_eq!(ctx.location.to_string(), "uploadtree_a#1");
    assert!(ctx.filter.is_empty());
}

#[test]
fn test_zero_ids_are_rejected_when_deserializing() {
    assert!(serde_json::from_str::<LicenseId>("0").is_err());
    assert!(serde_json::from_str::<AgentId>("0").is_err());
    assert!(serde_json::from_str::<HighlightId>("0").is_err());

    let id: LicenseId = serde_json::from_str("7").unwrap();
    assert_eq!(id.get(), 7);
    assert_eq!(serde_json::to_string(&id).unwrap(), "7");

    let json = r#"{"location": {"item_id": 1, "tree": "uploadtree"}, "filter": {"agent": 0}}"#;
    assert!(serde_json::from_str::<HighlightContext>(json).is_err());

    let json = r#"{"location": {"item_id": 1, "tree": "uploadtree"}, "filter": {"agent": 3, "highlight": 9}}"#;
    let ctx: HighlightContext = serde_json::from_str(json).unwrap();
    assert_eq!(ctx.filter, HighlightFilter::from_raw(None, Some(3), Some(9)));
}

#[test]
fn test_zero_license_on_a_highlight_is_rejected() {
    let json = r#"{"start": 0, "end": 4, "kind": "bulk", "license": 0}"#;
    assert!(serde_json::from_str::<Highlight>(json).is_err());

    let json = r#"{"start": 0, "end": 4, "kind": "bulk", "license": 5}"#;
    let hl: Highlight = serde_json::from_str(json).unwrap();
    assert_eq!(hl.license_id(), LicenseId::new(5));
}

#[test]
fn test_zero_id_conversion_error() {
    assert_eq!(LicenseId::try_from(0), Err(Error::ZeroId("license")));
    assert_eq!(AgentId::try_from(4).map(|id| id.get()), Ok(4));
    assert_eq!(i64::from(HighlightId::new(12).unwrap()), 12);
}
