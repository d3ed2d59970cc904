use std::sync::Arc;

use crate::application::ports::{GradingClient, ReferenceCatalog, TranscriptionEngine};
use crate::application::services::EvaluationService;

pub struct AppState<T, G>
where
    T: TranscriptionEngine + ?Sized,
    G: GradingClient + ?Sized,
{
    pub evaluation_service: Arc<EvaluationService<T, G>>,
    pub catalog: Arc<dyn ReferenceCatalog>,
}

impl<T, G> Clone for AppState<T, G>
where
    T: TranscriptionEngine + ?Sized,
    G: GradingClient + ?Sized,
{
    fn clone(&self) -> Self {
        Self {
            evaluation_service: Arc::clone(&self.evaluation_service),
            catalog: Arc::clone(&self.catalog),
        }
    }
}
