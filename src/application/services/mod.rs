mod evaluation_service;

pub use evaluation_service::{EvaluationError, EvaluationService};
