use crate::dns::question_type_map::QuestionTypeMapper;
use hickory_proto::op::{Header, ResponseCode};
use hickory_proto::rr::rdata::{A, TXT};
use hickory_proto::rr::{Name, RData, Record};
use hickory_server::authority::MessageResponseBuilder;
use hickory_server::server::{Request, RequestHandler, ResponseHandler, ResponseInfo};
use planeboard_application::use_cases::AnswerQuestionUseCase;
use planeboard_domain::{Answer, AnswerData, Question};
use std::sync::Arc;
use tracing::{debug, error, info};

/// A single TXT character-string holds at most 255 bytes.
const TXT_CHUNK_LEN: usize = 255;

#[derive(Clone)]
pub struct DnsServerHandler {
    use_case: Arc<AnswerQuestionUseCase>,
}

impl DnsServerHandler {
    pub fn new(use_case: Arc<AnswerQuestionUseCase>) -> Self {
        Self { use_case }
    }
}

#[async_trait::async_trait]
impl RequestHandler for DnsServerHandler {
    async fn handle_request<R: ResponseHandler>(
        &self,
        request: &Request,
        mut response_handle: R,
    ) -> ResponseInfo {
        // Only the first question is answered; any others are ignored.
        let Some(query) = request.queries().first() else {
            debug!(client = %request.src().ip(), "Request carries no question");
            return send_response(request, &mut response_handle, ResponseCode::FormErr, None).await;
        };
        let name = query.original().name().clone();
        let qtype = QuestionTypeMapper::from_hickory(query.query_type());

        info!(name = %name, qtype = ?qtype, client = %request.src().ip(), "Incoming request");

        let question = Question::new(name.to_utf8(), qtype);
        let record = self
            .use_case
            .execute(&question)
            .await
            .map(|answer| to_record(name, &answer));

        send_response(request, &mut response_handle, ResponseCode::NoError, record).await
    }
}

fn to_record(name: Name, answer: &Answer) -> Record {
    let rdata = match &answer.data {
        AnswerData::Address(addr) => RData::A(A(*addr)),
        AnswerData::Text(text) => RData::TXT(TXT::new(split_txt(text))),
    };
    Record::from_rdata(name, answer.ttl, rdata)
}

/// Split text into character-strings of at most 255 bytes, on char boundaries.
fn split_txt(text: &str) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current = String::new();
    for ch in text.chars() {
        if current.len() + ch.len_utf8() > TXT_CHUNK_LEN {
            chunks.push(std::mem::take(&mut current));
        }
        current.push(ch);
    }
    if !current.is_empty() || chunks.is_empty() {
        chunks.push(current);
    }
    chunks
}

async fn send_response<R: ResponseHandler>(
    request: &Request,
    response_handle: &mut R,
    code: ResponseCode,
    answer: Option<Record>,
) -> ResponseInfo {
    let builder = MessageResponseBuilder::from_message_request(request);
    let mut header = Header::response_from_request(request.header());
    header.set_authoritative(true);
    header.set_response_code(code);

    let answers: Vec<Record> = answer.into_iter().collect();
    debug!(code = ?code, answers = answers.len(), "Sending response");
    let response = builder.build(header, answers.iter(), &[], &[], &[]);

    match response_handle.send_response(response).await {
        Ok(info) => info,
        Err(e) => {
            error!(error = %e, "Failed to send response");
            ResponseInfo::from(*request.header())
        }
    }
}
