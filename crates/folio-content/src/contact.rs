//! Contact form `mailto:` composition.
//!
//! The site has no submission endpoint; the form builds a `mailto:` URL and
//! hands it to the visitor's mail client.

use folio_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// A filled-in contact form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub subject: String,
    pub message: String,
}

impl ContactMessage {
    /// Check the required fields are present.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::invalid_data("name is required"));
        }
        if self.email.trim().is_empty() {
            return Err(Error::invalid_data("email is required"));
        }
        if !self.email.contains('@') {
            return Err(Error::invalid_data(format!(
                "'{}' is not an email address",
                self.email.trim()
            )));
        }
        if self.message.trim().is_empty() {
            return Err(Error::invalid_data("message is required"));
        }
        Ok(())
    }

    /// Subject line, falling back to one naming the sender.
    pub fn subject_line(&self) -> String {
        let subject = self.subject.trim();
        if subject.is_empty() {
            format!("Portfolio contact from {}", self.name.trim())
        } else {
            subject.to_string()
        }
    }

    /// Message body with the sender signature appended.
    pub fn body(&self) -> String {
        format!(
            "{}\n\nFrom: {} <{}>",
            self.message.trim_end(),
            self.name.trim(),
            self.email.trim()
        )
    }

    /// Build the `mailto:` URL addressed to `recipient`.
    pub fn mailto_url(&self, recipient: &str) -> Result<String> {
        self.validate()?;
        let recipient = recipient.trim();
        if recipient.is_empty() {
            return Err(Error::config("contact recipient is not configured"));
        }
        Ok(format!(
            "mailto:{}?subject={}&body={}",
            recipient,
            urlencoding::encode(&self.subject_line()),
            urlencoding::encode(&self.body())
        ))
    }
}
