pub mod asr;
pub mod catalog;
pub mod llm;
pub mod observability;
