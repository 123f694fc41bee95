use std::net::Ipv4Addr;

/// Address served for every A query, used as a reachability probe.
pub const PLACEHOLDER_ADDRESS: Ipv4Addr = Ipv4Addr::new(3, 1, 33, 7);

/// Text served when a query matches nothing.
pub const FALLBACK_TEXT: &str = "Sorry, no tweets found";

/// Answers are never cacheable.
pub const ANSWER_TTL: u32 = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionType {
    Address,
    Text,
    Other(u16),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub name: String,
    pub qtype: QuestionType,
}

impl Question {
    pub fn new(name: impl Into<String>, qtype: QuestionType) -> Self {
        Self {
            name: name.into(),
            qtype,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerData {
    Address(Ipv4Addr),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    pub name: String,
    pub ttl: u32,
    pub data: AnswerData,
}

impl Answer {
    pub fn address(name: impl Into<String>, addr: Ipv4Addr) -> Self {
        Self {
            name: name.into(),
            ttl: ANSWER_TTL,
            data: AnswerData::Address(addr),
        }
    }

    pub fn text(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ttl: ANSWER_TTL,
            data: AnswerData::Text(text.into()),
        }
    }

    pub fn fallback(name: impl Into<String>) -> Self {
        Self::text(name, FALLBACK_TEXT)
    }
}
