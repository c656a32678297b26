// Job posting parsing: request model, prompt, and the
// fetch → extract → prompt → LLM pipeline behind POST /parse-job.

pub mod handlers;
pub mod models;
pub mod parser;
pub mod prompts;
