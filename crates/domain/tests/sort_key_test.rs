use planeboard_domain::{DomainError, SortKey};

fn key(created_at: i64, account: &str, id: i64) -> SortKey {
    SortKey::new(created_at, account, id).unwrap()
}

#[test]
fn test_roundtrip() {
    let original = key(1_700_000_000, "acme", 42);
    let decoded = SortKey::decode(&original.encode()).unwrap();
    assert_eq!(decoded, original);
}

#[test]
fn test_roundtrip_boundary_values() {
    let longest_label = "a".repeat(63);
    for created_at in [0, 1, -1, i64::MIN, i64::MAX] {
        for id in [0, i64::MIN, i64::MAX] {
            let original = key(created_at, &longest_label, id);
            assert_eq!(SortKey::decode(&original.encode()).unwrap(), original);
        }
    }
}

#[test]
fn test_account_is_case_folded() {
    let k = key(10, "AcMe", 1);
    assert_eq!(k.account, "acme");
}

#[test]
fn test_order_follows_created_at_across_digit_widths() {
    let pairs = [
        (9, 10),
        (99, 100),
        (999_999_999, 1_000_000_000),
        (9_999_999_999, 10_000_000_000),
        (-10, -9),
        (-1, 0),
    ];
    for (earlier, later) in pairs {
        let a = key(earlier, "zzz", i64::MAX).encode();
        let b = key(later, "aaa", 0).encode();
        assert!(a < b, "{} should sort before {}", earlier, later);
    }
}

#[test]
fn test_order_matches_struct_order() {
    let mut keys = vec![
        key(200, "bbc", 2),
        key(100, "cnn", 1),
        key(200, "bbc", 1),
        key(200, "bb", 9),
        key(200, "bb-news", 0),
        key(100, "acme", 5),
    ];
    let mut encoded: Vec<Vec<u8>> = keys.iter().map(SortKey::encode).collect();

    keys.sort();
    encoded.sort();

    let decoded: Vec<SortKey> = encoded
        .iter()
        .map(|bytes| SortKey::decode(bytes).unwrap())
        .collect();
    assert_eq!(decoded, keys);
}

#[test]
fn test_shorter_account_sorts_before_its_extension() {
    let short = key(5, "ab", 0).encode();
    let long = key(5, "ab-", 0).encode();
    assert!(short < long);
}

#[test]
fn test_rejects_empty_account() {
    assert!(matches!(
        SortKey::new(1, "", 1),
        Err(DomainError::InvalidAccount(_))
    ));
}

#[test]
fn test_rejects_separator_in_account() {
    assert!(matches!(
        SortKey::new(1, "bad\0name", 1),
        Err(DomainError::InvalidAccount(_))
    ));
}

#[test]
fn test_decode_too_short() {
    assert!(matches!(
        SortKey::decode(b"short"),
        Err(DomainError::MalformedKey(_))
    ));
}

#[test]
fn test_decode_legacy_text_key() {
    assert!(matches!(
        SortKey::decode(b"1700000000:acme:123456789"),
        Err(DomainError::MalformedKey(_))
    ));
}

#[test]
fn test_decode_missing_separator() {
    let mut bytes = key(1, "acme", 1).encode();
    bytes[8] = b'x';
    assert!(matches!(
        SortKey::decode(&bytes),
        Err(DomainError::MalformedKey(_))
    ));
}

#[test]
fn test_decode_invalid_utf8_account() {
    let mut bytes = key(1, "acme", 1).encode();
    bytes[9] = 0xFF;
    assert!(matches!(
        SortKey::decode(&bytes),
        Err(DomainError::MalformedKey(_))
    ));
}
