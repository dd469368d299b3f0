// EV recommendation: static catalog lookup plus optional narration.
// All language-model calls go through llm_client.

pub mod catalog;
pub mod handlers;
pub mod lookup;
pub mod narration;
pub mod profile;
pub mod prompts;
