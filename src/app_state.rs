use std::sync::Arc;

use crate::{
    config::Config,
    errors::AppResult,
    services::{
        quiz_api::{HttpQuizApi, QuizApi},
        solver_service::SolverService,
    },
};

/// Shared across workers. Holds no credential: tokens travel with each request.
#[derive(Clone)]
pub struct AppState {
    pub solver_service: Arc<SolverService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> AppResult<Self> {
        let api = Arc::new(HttpQuizApi::new(&config)?);
        Ok(Self::with_api(config, api))
    }

    pub fn with_api(config: Config, api: Arc<dyn QuizApi>) -> Self {
        Self {
            solver_service: Arc::new(SolverService::new(api)),
            config: Arc::new(config),
        }
    }
}
