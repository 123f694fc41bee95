pub mod question_type_map;
pub mod server;

pub use question_type_map::QuestionTypeMapper;
pub use server::DnsServerHandler;
