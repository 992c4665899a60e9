use serde::{Deserialize, Serialize};

use crate::messageflow::schemas::OutboundMessage;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmsRequest {
    pub sender: Option<String>,
    pub message: Option<String>,
    #[serde(rename = "phoneNumbers")]
    pub phone_numbers: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validity: Option<i32>,
    #[serde(rename = "scheduleTime", skip_serializing_if = "Option::is_none")]
    pub schedule_time: Option<i64>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub message_type: Option<i32>,
    #[serde(rename = "shortLink", skip_serializing_if = "Option::is_none")]
    pub short_link: Option<bool>,
    #[serde(rename = "webhookUrl", skip_serializing_if = "Option::is_none")]
    pub webhook_url: Option<String>,
    #[serde(rename = "externalId", skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
}

impl OutboundMessage for SmsRequest {
    const ENDPOINT: &'static str = "sms";
    const SENT_MESSAGE: &'static str = "SMS sent successfully";

    fn validate(&self) -> Result<(), &'static str> {
        if self.sender.as_deref().unwrap_or("").is_empty() {
            return Err("sender");
        }
        if self.message.as_deref().unwrap_or("").is_empty() {
            return Err("message");
        }
        if self
            .phone_numbers
            .as_ref()
            .is_none_or(|numbers| numbers.is_empty())
        {
            return Err("phoneNumbers (must be a non-empty array)");
        }
        Ok(())
    }
}
