use serde::Deserialize;

/// Mail submission settings, loaded from `GEOTRIAGE_*` environment variables
/// (a `.env` file works too). Nothing here is hard-coded into the pipeline;
/// the mailer receives this struct explicitly.
#[derive(Debug, Clone, Deserialize)]
pub struct MailConfig {
    #[serde(default = "default_smtp_server")]
    pub smtp_server: String,

    // Submission port; the session is upgraded with STARTTLS
    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,

    // Sender address, also used as the SMTP username. Must be provided via
    // environment
    pub sender: String,

    // App password for the sender account. Must be provided via environment
    pub password: String,
}

impl MailConfig {
    pub fn from_env() -> Result<Self, envy::Error> {
        envy::prefixed("GEOTRIAGE_").from_env::<MailConfig>()
    }
}

fn default_smtp_server() -> String {
    "smtp.gmail.com".to_string()
}

fn default_smtp_port() -> u16 {
    587
}
