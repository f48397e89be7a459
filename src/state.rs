// Shared state handed to every request handler
use crate::models::Predictor;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub predictor: Arc<dyn Predictor>,
}

impl AppState {
    pub fn new(predictor: impl Predictor + 'static) -> Self {
        Self {
            predictor: Arc::new(predictor),
        }
    }
}
