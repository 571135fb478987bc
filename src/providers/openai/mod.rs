mod provider;

pub use provider::OpenAIProvider;
