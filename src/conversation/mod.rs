mod runner;

pub use runner::{ConversationError, ConversationOutcome, ConversationRunner, initial_messages};
