use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub mail: MailConfig,
    pub contact: ContactConfig,
    pub loading: LoadingConfig,
    pub projects: ProjectsConfig,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            mail: MailConfig::default(),
            contact: ContactConfig::default(),
            loading: LoadingConfig::default(),
            projects: ProjectsConfig::default(),
            log_level: "info".to_string(),
        }
    }
}

/// Credenciales públicas del relay de correo (EmailJS)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MailConfig {
    pub endpoint: String,
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://api.emailjs.com/api/v1.0/email/send".to_string(),
            service_id: "service_6rhvv8f".to_string(),
            template_id: "template_yoa1t3n".to_string(),
            public_key: "v8YTg1GPw9xxJdszT".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactConfig {
    pub cooldown_minutes: u32,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self { cooldown_minutes: 10 }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadingConfig {
    pub tick_ms: u32,
    pub max_increment: f64,
    pub dismiss_delay_ms: u32,
}

impl Default for LoadingConfig {
    fn default() -> Self {
        Self {
            tick_ms: 100,
            max_increment: 20.0,
            dismiss_delay_ms: 200,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectsConfig {
    pub page_size: i64,
}

impl Default for ProjectsConfig {
    fn default() -> Self {
        Self {
            page_size: crate::utils::constants::DEFAULT_PROJECT_PAGE_SIZE,
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            mail: MailConfig {
                endpoint: option_env!("EMAILJS_ENDPOINT")
                    .map(str::to_string)
                    .unwrap_or(defaults.mail.endpoint),
                service_id: option_env!("EMAILJS_SERVICE_ID")
                    .map(str::to_string)
                    .unwrap_or(defaults.mail.service_id),
                template_id: option_env!("EMAILJS_TEMPLATE_ID")
                    .map(str::to_string)
                    .unwrap_or(defaults.mail.template_id),
                public_key: option_env!("EMAILJS_PUBLIC_KEY")
                    .map(str::to_string)
                    .unwrap_or(defaults.mail.public_key),
            },
            contact: ContactConfig {
                cooldown_minutes: option_env!("COOLDOWN_MINUTES")
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.contact.cooldown_minutes),
            },
            loading: LoadingConfig {
                tick_ms: option_env!("LOADING_TICK_MS")
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.loading.tick_ms),
                max_increment: option_env!("LOADING_MAX_INCREMENT")
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.loading.max_increment),
                dismiss_delay_ms: option_env!("LOADING_DISMISS_DELAY_MS")
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.loading.dismiss_delay_ms),
            },
            projects: ProjectsConfig {
                page_size: option_env!("PROJECTS_PAGE_SIZE")
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.projects.page_size),
            },
            log_level: option_env!("LOG_LEVEL")
                .unwrap_or("info")
                .to_string(),
        }
    }

    /// Nivel de log para wasm_logger
    pub fn log_level(&self) -> log::Level {
        match self.log_level.to_lowercase().as_str() {
            "trace" => log::Level::Trace,
            "debug" => log::Level::Debug,
            "warn" => log::Level::Warn,
            "error" => log::Level::Error,
            _ => log::Level::Info,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_cooldown_is_ten_minutes() {
        let config = AppConfig::default();
        assert_eq!(config.contact.cooldown_minutes, 10);
    }

    #[test]
    fn unknown_log_level_falls_back_to_info() {
        let config = AppConfig {
            log_level: "verbose".to_string(),
            ..AppConfig::default()
        };
        assert_eq!(config.log_level(), log::Level::Info);
    }

    #[test]
    fn log_level_is_case_insensitive() {
        let config = AppConfig {
            log_level: "DEBUG".to_string(),
            ..AppConfig::default()
        };
        assert_eq!(config.log_level(), log::Level::Debug);
    }
}
