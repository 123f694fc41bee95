use planeboard_domain::{Answer, AnswerData, FALLBACK_TEXT, PLACEHOLDER_ADDRESS};
use std::net::Ipv4Addr;

#[test]
fn test_placeholder_address() {
    assert_eq!(PLACEHOLDER_ADDRESS, Ipv4Addr::new(3, 1, 33, 7));
}

#[test]
fn test_answers_are_never_cached() {
    assert_eq!(Answer::address("a.example.com.", PLACEHOLDER_ADDRESS).ttl, 0);
    assert_eq!(Answer::text("a.example.com.", "hi").ttl, 0);
    assert_eq!(Answer::fallback("a.example.com.").ttl, 0);
}

#[test]
fn test_fallback_text() {
    let answer = Answer::fallback("acme.example.com.");
    assert_eq!(answer.name, "acme.example.com.");
    assert_eq!(answer.data, AnswerData::Text(FALLBACK_TEXT.to_string()));
}
