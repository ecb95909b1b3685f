//! JSON listing through the optional `serde` feature.

#![cfg(feature = "serde")]

use oxilha_archive::{HeaderLevel, LhaFileInput, WriterOptions, create_with_options, extract_all};

#[test]
fn test_entry_serializes_without_payload() -> Result<(), Box<dyn std::error::Error>> {
    let stamp = oxilha_archive::time::dos_epoch();
    let archive = create_with_options(
        &[LhaFileInput::new("a.txt", b"alpha".as_slice()).with_timestamp(stamp)],
        WriterOptions::new().with_level(HeaderLevel::Level1),
    )?;
    let entries = extract_all(&archive);

    let json = serde_json::to_value(&entries[0])?;
    assert_eq!(json["filename"], "a.txt");
    assert_eq!(json["original_size"], 5);
    assert_eq!(json["method"], "Lh0");
    assert_eq!(json["level"], "Level1");
    assert_eq!(json["os"], b'U');
    assert_eq!(json["timestamp"], "1980-01-01T00:00:00");
    assert_eq!(json["header_checksum_ok"], true);
    assert!(json.get("data").is_none());
    Ok(())
}
