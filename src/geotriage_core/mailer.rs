use crate::geotriage_core::config::MailConfig;
use crate::geotriage_core::error::Result;
use crate::geotriage_core::report::REPORT_FILE_NAME;
use lettre::message::header::ContentType;
use lettre::message::{Attachment, Mailbox, MultiPart, SinglePart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};
use std::fs;
use std::path::Path;

/// Subject line for every report email.
const REPORT_SUBJECT: &str = "Automated Geolocation Data";

/// Plain-text body accompanying the attachment.
const REPORT_BODY: &str =
    "Hi, \n\nAttached is the CSV file containing image geolocation data.\n\nThank you!";

/// Outcome of a distribution pass.
#[derive(Debug, Default)]
pub struct SendSummary {
    pub sent: usize,
    pub failed: usize,
}

impl std::fmt::Display for SendSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} sent, {} failed", self.sent, self.failed)
    }
}

/// Email the report to each recipient in turn.
///
/// Every recipient gets its own message over its own submission session; a
/// failure for one recipient is logged and counted but never stops delivery
/// to the rest. Only an unparseable sender address or an unreadable report
/// file is fatal, since then nothing can be sent at all.
pub fn send_report(
    config: &MailConfig,
    recipients: &[String],
    report_path: &Path,
) -> Result<SendSummary> {
    let sender: Mailbox = config.sender.parse()?;

    // Read the attachment once up front; the handle is released before any
    // session opens
    let payload = fs::read(report_path)?;

    let mut summary = SendSummary::default();

    for recipient in recipients {
        match send_to_recipient(config, &sender, recipient, &payload) {
            Ok(()) => {
                println!("Successfully sent an email to {}.", recipient);
                summary.sent += 1;
            }
            Err(e) => {
                log::error!("Failed to send report to {}: {}", recipient, e);
                summary.failed += 1;
            }
        }
    }

    Ok(summary)
}

fn send_to_recipient(
    config: &MailConfig,
    sender: &Mailbox,
    recipient: &str,
    payload: &[u8],
) -> Result<()> {
    let to: Mailbox = recipient.parse()?;
    let message = build_message(sender.clone(), to, payload)?;

    // One submission session per recipient, dropped as soon as the send
    // returns
    let mailer = SmtpTransport::starttls_relay(&config.smtp_server)?
        .port(config.smtp_port)
        .credentials(Credentials::new(
            config.sender.clone(),
            config.password.clone(),
        ))
        .build();

    mailer.send(&message)?;

    Ok(())
}

/// Construct one report message: fixed subject, plain-text body, and the CSV
/// as a binary attachment named after the report file.
fn build_message(from: Mailbox, to: Mailbox, payload: &[u8]) -> Result<Message> {
    let attachment = Attachment::new(REPORT_FILE_NAME.to_string()).body(
        payload.to_vec(),
        ContentType::parse("application/octet-stream").unwrap(),
    );

    let message = Message::builder()
        .from(from)
        .to(to)
        .subject(REPORT_SUBJECT)
        .multipart(
            MultiPart::mixed()
                .singlepart(SinglePart::plain(REPORT_BODY.to_string()))
                .singlepart(attachment),
        )?;

    Ok(message)
}
