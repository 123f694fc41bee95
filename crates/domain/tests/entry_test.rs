use planeboard_domain::{DomainError, Entry, EntryPayload, IncomingMessage};

fn incoming(created_at: &str) -> IncomingMessage {
    IncomingMessage {
        id: 7,
        account: "NASA".to_string(),
        created_at_raw: created_at.to_string(),
        text: "Liftoff!".to_string(),
    }
}

#[test]
fn test_parse_platform_timestamp() {
    let msg = incoming("Mon Jan 02 15:04:05 -0700 2006");
    assert_eq!(msg.created_at().unwrap(), 1_136_239_445);
}

#[test]
fn test_parse_utc_timestamp() {
    let msg = incoming("Tue Nov 14 22:13:20 +0000 2023");
    assert_eq!(msg.created_at().unwrap(), 1_700_000_000);
}

#[test]
fn test_invalid_timestamp() {
    let msg = incoming("2023-11-14T22:13:20Z");
    assert!(matches!(
        msg.created_at(),
        Err(DomainError::InvalidTimestamp(_))
    ));
}

#[test]
fn test_into_entry_folds_account_and_keeps_author() {
    let entry = incoming("Tue Nov 14 22:13:20 +0000 2023")
        .into_entry()
        .unwrap();

    assert_eq!(entry.id, 7);
    assert_eq!(entry.account, "nasa");
    assert_eq!(entry.created_at, 1_700_000_000);
    assert_eq!(entry.payload.author, "NASA");
    assert_eq!(entry.answer_text(), "Liftoff! - @NASA");
}

#[test]
fn test_incoming_message_from_json() {
    let msg: IncomingMessage = serde_json::from_str(
        r#"{"id": 1, "account": "acme", "created_at": "Mon Jan 02 15:04:05 -0700 2006", "text": "hi"}"#,
    )
    .unwrap();
    assert_eq!(msg.created_at_raw, "Mon Jan 02 15:04:05 -0700 2006");
}

#[test]
fn test_payload_bytes_roundtrip() {
    let payload = EntryPayload {
        text: "hello \"world\"".to_string(),
        author: "Acme".to_string(),
    };
    let bytes = payload.to_bytes().unwrap();
    assert_eq!(EntryPayload::from_bytes(&bytes).unwrap(), payload);
}

#[test]
fn test_payload_from_garbage() {
    assert!(matches!(
        EntryPayload::from_bytes(b"not json"),
        Err(DomainError::InvalidPayload(_))
    ));
}

#[test]
fn test_entry_sort_key() {
    let entry = Entry::new(3, "Acme", 100, "text").unwrap();
    let key = entry.sort_key().unwrap();
    assert_eq!((key.created_at, key.account.as_str(), key.id), (100, "acme", 3));
}

#[test]
fn test_entry_rejects_empty_account() {
    assert!(Entry::new(3, "", 100, "text").is_err());
}
