//! Mapping between hickory record types and the question types the feed answers.

use hickory_proto::rr::RecordType as HickoryRecordType;
use planeboard_domain::QuestionType;

pub struct QuestionTypeMapper;

impl QuestionTypeMapper {
    /// Convert an incoming hickory query type into a domain question type
    pub fn from_hickory(record_type: HickoryRecordType) -> QuestionType {
        match record_type {
            HickoryRecordType::A => QuestionType::Address,
            HickoryRecordType::TXT => QuestionType::Text,
            other => QuestionType::Other(u16::from(other)),
        }
    }

    pub fn to_hickory(question_type: QuestionType) -> HickoryRecordType {
        match question_type {
            QuestionType::Address => HickoryRecordType::A,
            QuestionType::Text => HickoryRecordType::TXT,
            QuestionType::Other(code) => HickoryRecordType::from(code),
        }
    }
}
