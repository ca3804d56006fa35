use std::env;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub api_url: String,
    pub api_key: Option<String>,
    pub model: String,
    pub temperature: f32,
}

impl Default for AppConfig {
    fn default() -> Self {
        let api_url = env::var("CHATRELAY_API_URL")
            .unwrap_or_else(|_| "https://openrouter.ai/api/v1".to_string());
        let api_key = env::var("OPENROUTER_API_KEY").ok().filter(|k| !k.is_empty());
        let model = env::var("CHATRELAY_MODEL")
            .unwrap_or_else(|_| "tngtech/deepseek-r1t2-chimera:free".to_string());
        let temperature = env::var("CHATRELAY_TEMPERATURE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(0.5);

        Self {
            api_url,
            api_key,
            model,
            temperature,
        }
    }
}
