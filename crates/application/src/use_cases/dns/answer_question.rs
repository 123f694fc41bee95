use crate::ports::EntryRepository;
use planeboard_domain::{
    Answer, DomainError, Entry, GroupTable, Question, QuestionType, RecordQuery,
    PLACEHOLDER_ADDRESS,
};
use std::sync::Arc;
use tracing::{debug, warn};

/// Builds the single answer record for one DNS question.
pub struct AnswerQuestionUseCase {
    entry_repo: Arc<dyn EntryRepository>,
    groups: Arc<GroupTable>,
    host: Arc<str>,
}

impl AnswerQuestionUseCase {
    pub fn new(
        entry_repo: Arc<dyn EntryRepository>,
        groups: Arc<GroupTable>,
        host: impl Into<Arc<str>>,
    ) -> Self {
        Self {
            entry_repo,
            groups,
            host: host.into(),
        }
    }

    pub async fn execute(&self, question: &Question) -> Option<Answer> {
        self.execute_at(question, chrono::Utc::now().timestamp())
            .await
    }

    /// Same as [`execute`](Self::execute) with `now` as the default cutoff.
    pub async fn execute_at(&self, question: &Question, now: i64) -> Option<Answer> {
        match question.qtype {
            QuestionType::Address => Some(Answer::address(&question.name, PLACEHOLDER_ADDRESS)),
            QuestionType::Text => {
                let text = match self.lookup(&question.name, now).await {
                    Ok(Some(entry)) => entry.answer_text(),
                    Ok(None) => return Some(Answer::fallback(&question.name)),
                    Err(e) => {
                        match e {
                            DomainError::HostMismatch | DomainError::TooManyLabels(_) => {
                                debug!(name = %question.name, error = %e, "Rejected query name");
                            }
                            _ => warn!(name = %question.name, error = %e, "Entry lookup failed"),
                        }
                        return Some(Answer::fallback(&question.name));
                    }
                };
                Some(Answer::text(&question.name, text))
            }
            QuestionType::Other(code) => {
                debug!(name = %question.name, qtype = code, "Unhandled qtype");
                None
            }
        }
    }

    async fn lookup(&self, name: &str, now: i64) -> Result<Option<Entry>, DomainError> {
        let query = RecordQuery::parse(name, &self.host, now)?;
        let accounts = query.names(&self.groups);
        if accounts.is_empty() {
            debug!(scope = ?query.scope(), "Scope has no accounts");
            return Ok(None);
        }

        debug!(
            scope = ?query.scope(),
            before = query.before,
            page = query.page,
            "Looking up entry"
        );
        self.entry_repo
            .find_before(&accounts, query.before, query.page)
            .await
    }
}
