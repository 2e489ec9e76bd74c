//! Integration tests for the bundled country code table.

use phone_input::{CountryCodeTable, CountryTableError, DialCode};

/// Popular countries resolve to the expected flags.
#[test]
fn test_builtin_has_popular_countries() {
    let expected = [
        ("1", "🇺🇸"),
        ("7", "🇷🇺"),
        ("33", "🇫🇷"),
        ("34", "🇪🇸"),
        ("39", "🇮🇹"),
        ("44", "🇬🇧"),
        ("48", "🇵🇱"),
        ("49", "🇩🇪"),
        ("52", "🇲🇽"),
        ("55", "🇧🇷"),
        ("61", "🇦🇺"),
        ("81", "🇯🇵"),
        ("82", "🇰🇷"),
        ("86", "🇨🇳"),
        ("90", "🇹🇷"),
        ("91", "🇮🇳"),
        ("380", "🇺🇦"),
        ("971", "🇦🇪"),
    ];

    let table = CountryCodeTable::builtin();
    for (code, flag) in expected {
        assert_eq!(table.flag(code), Some(flag), "flag for +{}", code);
    }
}

/// Every bundled entry has a valid code, a two-letter region and a flag
/// made of the matching regional indicator symbols.
#[test]
fn test_builtin_entries_are_consistent() {
    for entry in CountryCodeTable::builtin() {
        let alpha2 = entry.alpha2().expect("bundled entries carry a region");
        assert_eq!(alpha2.len(), 2, "region for +{}", entry.dial_code());

        let from_flag: String = entry
            .flag()
            .chars()
            .map(|c| char::from(b'A' + (c as u32 - 0x1F1E6) as u8))
            .collect();
        assert_eq!(from_flag, alpha2, "flag for +{}", entry.dial_code());
        assert!(entry.name().is_some());
    }
}

/// Bundled codes are unique and none shadows another.
#[test]
fn test_builtin_codes_are_reachable() {
    let table = CountryCodeTable::builtin();
    assert!(table.shadowed_codes().is_empty());

    let mut codes: Vec<&DialCode> = table.iter().map(|e| e.dial_code()).collect();
    let total = codes.len();
    codes.sort();
    codes.dedup();
    assert_eq!(codes.len(), total);
}

/// Custom tables report bad input instead of panicking.
#[test]
fn test_custom_table_errors() {
    let err = CountryCodeTable::from_json(r#"[{"flag": "X", "dial_code": "+12a"}]"#).unwrap_err();
    assert!(matches!(err, CountryTableError::InvalidDialCode { .. }));
    assert_eq!(
        err.to_string(),
        "invalid dial code '+12a': dial code must contain only digits"
    );

    let err = CountryCodeTable::from_json(r#"[{"dial_code": "1"}]"#).unwrap_err();
    assert!(matches!(err, CountryTableError::Json(_)));
}
