// ============================================================================
// MAIL SERVICE - SOLO comunicación HTTP con el relay de correo (EmailJS)
// ============================================================================
// NO tiene lógica de negocio (cooldown, estados): eso vive en ContactViewModel
// ============================================================================

use async_trait::async_trait;
use gloo_net::http::Request;
use serde::Serialize;
use thiserror::Error;
use crate::config::MailConfig;
use crate::models::ContactMessage;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MailError {
    #[error("network error: {0}")]
    Network(String),
    #[error("relay rejected the message (HTTP {status}): {body}")]
    Rejected { status: u16, body: String },
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Contrato con el relay de correo saliente
#[async_trait(?Send)]
pub trait MailRelay {
    async fn send(&self, message: &ContactMessage) -> Result<(), MailError>;
}

#[derive(Debug, Serialize)]
struct TemplateParams<'a> {
    user_name: &'a str,
    user_email: &'a str,
    message: &'a str,
}

#[derive(Debug, Serialize)]
struct EmailJsPayload<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: TemplateParams<'a>,
}

/// Cliente EmailJS (stateless)
#[derive(Clone)]
pub struct EmailJsRelay {
    config: MailConfig,
}

impl EmailJsRelay {
    pub fn new(config: MailConfig) -> Self {
        Self { config }
    }

    fn payload<'a>(&'a self, message: &'a ContactMessage) -> EmailJsPayload<'a> {
        EmailJsPayload {
            service_id: &self.config.service_id,
            template_id: &self.config.template_id,
            user_id: &self.config.public_key,
            template_params: TemplateParams {
                user_name: &message.name,
                user_email: &message.email,
                message: &message.message,
            },
        }
    }
}

#[async_trait(?Send)]
impl MailRelay for EmailJsRelay {
    async fn send(&self, message: &ContactMessage) -> Result<(), MailError> {
        log::info!("📧 [MAIL] Enviando mensaje de {}", message.email);

        let response = Request::post(&self.config.endpoint)
            .json(&self.payload(message))
            .map_err(|e| MailError::Serialization(e.to_string()))?
            .send()
            .await
            .map_err(|e| MailError::Network(e.to_string()))?;

        if response.ok() {
            log::info!("✅ [MAIL] Mensaje enviado");
            Ok(())
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            log::error!("❌ [MAIL] HTTP {}: {}", status, body);
            Err(MailError::Rejected { status, body })
        }
    }
}
