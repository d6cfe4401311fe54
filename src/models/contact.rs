use serde::{Deserialize, Serialize};

/// Mensaje del formulario de contacto
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactMessage {
    pub fn new(name: &str, email: &str, message: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            message: message.trim().to_string(),
        }
    }

    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.email.is_empty() && !self.message.is_empty()
    }
}

/// Estado del último intento de envío
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Sending,
    Sent,
    /// Mensaje de error ya localizado
    Failed(String),
}

impl SubmissionStatus {
    pub fn is_sending(&self) -> bool {
        matches!(self, SubmissionStatus::Sending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_fields_are_trimmed() {
        let msg = ContactMessage::new("  Ada ", "ada@example.com ", "\nHello\n");
        assert_eq!(msg.name, "Ada");
        assert_eq!(msg.email, "ada@example.com");
        assert_eq!(msg.message, "Hello");
        assert!(msg.is_complete());
    }

    #[test]
    fn whitespace_only_field_is_incomplete() {
        assert!(!ContactMessage::new("Ada", "   ", "Hello").is_complete());
    }
}
