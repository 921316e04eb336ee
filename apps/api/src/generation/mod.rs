// LLM-backed companions to the analyzer: career-coach chat and tailored resume generation.
// All LLM calls go through llm_client; no direct API calls here.

pub mod chat;
pub mod handlers;
pub mod prompts;
pub mod resume;
