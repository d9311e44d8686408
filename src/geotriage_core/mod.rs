pub mod cli;
pub mod config;
pub mod error;
pub mod exif;
pub mod mailer;
pub mod photo;
pub mod report;
pub mod scan;

pub use cli::Cli;
pub use config::MailConfig;
pub use error::GeotriageError;
pub use mailer::SendSummary;
pub use photo::{GpsCoordinates, PhotoResult};
pub use report::REPORT_FILE_NAME;
