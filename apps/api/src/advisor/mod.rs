// Project advisor: prompt building, generation, and markup formatting.
// All LLM calls go through llm_client; all GitHub calls go through github.

pub mod generator;
pub mod handlers;
pub mod markup;
pub mod prompts;
