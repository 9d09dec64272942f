use anyhow::Context;

/// SMTP relay settings, injected from the environment at startup.
///
/// The contact form always delivers to `contact_inbox`; the submitter's
/// address only appears inside the message body, never as a sender.
#[derive(Debug, Clone)]
pub struct MailConfig {
    pub smtp_host: String,
    pub smtp_port: u16,
    pub smtp_username: String,
    pub smtp_password: String,
    pub from_address: String,
    pub contact_inbox: String,
}

impl MailConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            smtp_host: require("SMTP_HOST")?,
            smtp_port: require("SMTP_PORT")?
                .parse()
                .context("SMTP_PORT must be a port number")?,
            smtp_username: require("SMTP_USERNAME")?,
            smtp_password: require("SMTP_PASSWORD")?,
            from_address: require("MAIL_FROM")?,
            contact_inbox: require("CONTACT_INBOX")?,
        })
    }
}

fn require(name: &str) -> anyhow::Result<String> {
    std::env::var(name).with_context(|| format!("{} must be set", name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_variable_names_the_culprit() {
        std::env::remove_var("SMTP_HOST");
        let err = MailConfig::from_env().unwrap_err();
        assert!(err.to_string().contains("SMTP_HOST"));
    }
}
