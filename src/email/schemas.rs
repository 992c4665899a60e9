use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::messageflow::schemas::OutboundMessage;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailRecipient {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "messageId", skip_serializing_if = "Option::is_none")]
    pub message_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vars: Option<Map<String, Value>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(rename = "templateId", skip_serializing_if = "Option::is_none")]
    pub template_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailRequest {
    pub subject: Option<String>,
    #[serde(rename = "smtpAccount")]
    pub smtp_account: Option<String>,
    pub from: Option<EmailRecipient>,
    pub to: Option<Vec<EmailRecipient>>,
    pub content: Option<EmailContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cc: Option<Vec<EmailRecipient>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bcc: Option<Vec<EmailRecipient>>,
    #[serde(rename = "replyTo", skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<EmailRecipient>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<BTreeMap<String, String>>,
    #[serde(rename = "globalVars", skip_serializing_if = "Option::is_none")]
    pub global_vars: Option<Map<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachments: Option<Vec<Map<String, Value>>>,
}

impl OutboundMessage for EmailRequest {
    const ENDPOINT: &'static str = "email";
    const SENT_MESSAGE: &'static str = "Email sent successfully";

    fn validate(&self) -> Result<(), &'static str> {
        if self.subject.as_deref().unwrap_or("").is_empty() {
            return Err("subject");
        }
        if self.smtp_account.as_deref().unwrap_or("").is_empty() {
            return Err("smtpAccount");
        }
        let from_email = self
            .from
            .as_ref()
            .and_then(|from| from.email.as_deref())
            .unwrap_or("");
        if from_email.is_empty() {
            return Err("from (with email)");
        }
        if self.to.as_ref().is_none_or(|to| to.is_empty()) {
            return Err("to (must be a non-empty array)");
        }
        if self.content.is_none() {
            return Err("content");
        }
        Ok(())
    }
}
