use crate::config::OutreachConfig;
use crate::error::{AppError, Result};
use crate::outreach::OutreachMailer;
use async_trait::async_trait;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};
use tracing::{error, info};

/// SMTP outreach mailer
#[derive(Clone)]
pub struct SmtpMailer {
    smtp_server: String,
    smtp_port: u16,
    smtp_username: Option<String>,
    smtp_password: Option<String>,
    from_email: String,
    from_name: Option<String>,
}

impl SmtpMailer {
    /// Build a mailer from outreach configuration. Credentials are read from
    /// the environment variables the config names, never stored in config
    /// files directly.
    pub fn from_config(config: &OutreachConfig) -> Result<Self> {
        let smtp_server = config
            .smtp_server
            .clone()
            .ok_or_else(|| AppError::Configuration("SMTP server not configured".to_string()))?;
        let from_email = config
            .email_from
            .clone()
            .ok_or_else(|| AppError::Configuration("From email not configured".to_string()))?;

        let smtp_username = config
            .smtp_username_env
            .as_deref()
            .and_then(|var| std::env::var(var).ok());
        let smtp_password = config
            .smtp_password_env
            .as_deref()
            .and_then(|var| std::env::var(var).ok());

        Ok(Self {
            smtp_server,
            smtp_port: config.smtp_port,
            smtp_username,
            smtp_password,
            from_email,
            from_name: config.email_from_name.clone(),
        })
    }

    fn from_mailbox(&self) -> String {
        match &self.from_name {
            Some(name) => format!("{} <{}>", name, self.from_email),
            None => self.from_email.clone(),
        }
    }
}

#[async_trait]
impl OutreachMailer for SmtpMailer {
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<()> {
        let message = Message::builder()
            .from(
                self.from_mailbox()
                    .parse()
                    .map_err(|e| AppError::Configuration(format!("Invalid from address: {}", e)))?,
            )
            .to(to
                .parse()
                .map_err(|e| AppError::Validation(format!("Invalid recipient: {}", e)))?)
            .subject(subject)
            .body(body.to_string())
            .map_err(|e| AppError::Internal(format!("Failed to build email: {}", e)))?;

        let result = tokio::task::spawn_blocking({
            let smtp_server = self.smtp_server.clone();
            let smtp_port = self.smtp_port;
            let username = self.smtp_username.clone();
            let password = self.smtp_password.clone();

            move || {
                let mut transport_builder = SmtpTransport::starttls_relay(&smtp_server)
                    .map_err(|e| AppError::Configuration(format!("Invalid SMTP server: {}", e)))?
                    .port(smtp_port);

                if let (Some(user), Some(pass)) = (username, password) {
                    transport_builder = transport_builder.credentials(Credentials::new(user, pass));
                }

                let mailer = transport_builder.build();

                mailer
                    .send(&message)
                    .map_err(|e| AppError::Internal(format!("Failed to send email: {}", e)))?;

                Ok::<(), AppError>(())
            }
        })
        .await
        .map_err(|e| AppError::Internal(format!("Task join error: {}", e)))?;

        match result {
            Ok(()) => {
                info!(to = %to, "Email delivered to relay");
                Ok(())
            }
            Err(e) => {
                error!(to = %to, error = %e, "Failed to send email");
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_config_requires_server_and_from() {
        let empty = OutreachConfig::default();
        assert!(matches!(
            SmtpMailer::from_config(&empty),
            Err(AppError::Configuration(_))
        ));

        let config = OutreachConfig {
            email_enabled: true,
            smtp_server: Some("smtp.example.com".to_string()),
            smtp_port: 587,
            email_from: Some("outreach@example.com".to_string()),
            ..Default::default()
        };
        let mailer = SmtpMailer::from_config(&config).unwrap();
        assert_eq!(mailer.from_mailbox(), "outreach@example.com");
    }

    #[test]
    fn test_from_mailbox_includes_name() {
        let config = OutreachConfig {
            smtp_server: Some("smtp.example.com".to_string()),
            email_from: Some("outreach@example.com".to_string()),
            email_from_name: Some("Jobscout".to_string()),
            ..Default::default()
        };
        let mailer = SmtpMailer::from_config(&config).unwrap();
        assert_eq!(mailer.from_mailbox(), "Jobscout <outreach@example.com>");
    }
}
