use super::Repositories;
use planeboard_application::use_cases::{
    AnswerQuestionUseCase, IngestEntryUseCase, PruneEntriesUseCase,
};
use planeboard_domain::GroupTable;
use std::sync::Arc;

pub struct UseCases {
    pub answer_question: Arc<AnswerQuestionUseCase>,
    pub ingest_entry: Arc<IngestEntryUseCase>,
    pub prune_entries: Arc<PruneEntriesUseCase>,
}

impl UseCases {
    pub fn new(repos: &Repositories, groups: Arc<GroupTable>, host: &str) -> Self {
        Self {
            answer_question: Arc::new(AnswerQuestionUseCase::new(
                repos.entry.clone(),
                groups,
                host,
            )),
            ingest_entry: Arc::new(IngestEntryUseCase::new(repos.entry.clone())),
            prune_entries: Arc::new(PruneEntriesUseCase::new(repos.entry.clone())),
        }
    }
}
