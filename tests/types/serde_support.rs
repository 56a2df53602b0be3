use two_track::Track;

#[test]
fn serializes_as_externally_tagged_variant() {
    let ok: Track<i32, String> = Track::Success(42);
    assert_eq!(serde_json::to_string(&ok).unwrap(), r#"{"Success":42}"#);

    let err: Track<i32, String> = Track::Failure("boom".to_string());
    assert_eq!(serde_json::to_string(&err).unwrap(), r#"{"Failure":"boom"}"#);
}

#[test]
fn round_trips_through_json() {
    let original: Track<i32, String> = Track::Failure("boom".to_string());
    let json = serde_json::to_string(&original).unwrap();
    let restored: Track<i32, String> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, original);
}
