//! Conversation state and the relay exchange loop

mod relay;
mod transcript;

pub use relay::exchange;
pub use transcript::Transcript;
