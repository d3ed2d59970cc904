mod grading_prompt;
mod openai_grader;

pub use grading_prompt::{GRADING_SYSTEM_PROMPT, build_grading_message};
pub use openai_grader::OpenAiGrader;
