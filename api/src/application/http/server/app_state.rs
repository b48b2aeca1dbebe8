use std::sync::Arc;

use libris_core::application::LibrisService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: LibrisService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: LibrisService) -> Self {
        Self { args, service }
    }
}
