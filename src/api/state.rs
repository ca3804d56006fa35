use std::sync::RwLock;

use crate::chat::Transcript;
use crate::core::AppConfig;

pub struct AppState {
    // One conversation shared by every caller. Mutations go through
    // the lock; concurrent requests still interleave their turns.
    pub transcript: RwLock<Transcript>,
    pub config: AppConfig,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            transcript: RwLock::new(Transcript::new()),
            config,
        }
    }
}
