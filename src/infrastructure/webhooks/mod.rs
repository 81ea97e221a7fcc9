pub mod http;

use std::time::Duration;

use anyhow::Result;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::WebhookBox;

pub struct WebhookManager {}

impl WebhookManager {
    pub fn get() -> Result<WebhookBox> {
        let url = Config::require(ConfigKey::WebhookURL)?;
        let timeout = Duration::from_millis(Config::get_u64(ConfigKey::WebhookTimeout)?);

        return Ok(Box::new(http::HttpWebhook::new(&url, timeout)?));
    }
}
