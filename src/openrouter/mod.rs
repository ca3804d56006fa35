mod core;
pub use self::core::{CompletionError, Message, Role, completion};
