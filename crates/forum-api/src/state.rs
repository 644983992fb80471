use std::sync::Arc;

use forum_db::QuestionStore;

use crate::service::QuestionService;

pub type AppState = Arc<AppStateInner>;

pub struct AppStateInner {
    pub questions: QuestionService,
}

impl AppStateInner {
    pub fn new(store: Arc<dyn QuestionStore>) -> AppState {
        Arc::new(Self {
            questions: QuestionService::new(store),
        })
    }
}
