use anyhow::{Error, Result};
use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::{config::Config, models::template::RenderedMessage};

#[async_trait]
pub trait NotificationTransport: Send + Sync {
    async fn send(&self, recipient: &str, message: &RenderedMessage) -> Result<String, Error>;
}

pub struct LoggingTransport {
    sender_address: String,
}

impl LoggingTransport {
    pub fn from_config(config: &Config) -> Self {
        Self {
            sender_address: config.sender_address.clone(),
        }
    }
}

#[async_trait]
impl NotificationTransport for LoggingTransport {
    async fn send(&self, recipient: &str, message: &RenderedMessage) -> Result<String, Error> {
        let message_id = Uuid::new_v4().to_string();

        info!(
            from = %self.sender_address,
            to = %recipient,
            subject = %message.subject,
            body_bytes = message.body_html.len(),
            message_id = %message_id,
            "Email handed off for delivery"
        );

        Ok(message_id)
    }
}
