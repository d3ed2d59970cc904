mod evaluate;
mod health;
mod lesson;

pub use evaluate::evaluate_handler;
pub use health::health_handler;
pub use lesson::lesson_handler;
