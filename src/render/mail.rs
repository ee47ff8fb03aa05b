//! Mail sender boundary

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::{RouteError, RouteResult};

/// An outbound instructions email.
#[derive(Debug, Clone)]
pub struct EmailMessage {
    pub to: String,
    pub subject: String,
    pub html_body: String,
}

/// Boundary for handing a rendered email to a transport.
pub trait MailSender {
    fn send(&self, message: &EmailMessage) -> RouteResult<()>;
}

/// Mail "transport" that drops RFC-822-style files into a local directory.
pub struct OutboxMailer {
    dir: PathBuf,
}

impl OutboxMailer {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    /// Write the message to the outbox, returning the file written.
    pub fn deliver(&self, message: &EmailMessage) -> RouteResult<PathBuf> {
        if message.to.is_empty() {
            return Err(RouteError::Mail("recipient address is empty".to_string()));
        }

        fs::create_dir_all(&self.dir)?;

        let stamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|e| RouteError::Mail(e.to_string()))?
            .as_nanos();
        let path = self.dir.join(format!("{}-{}.eml", stamp, sanitize(&message.to)));

        let contents = format!(
            "To: {}\r\nSubject: {}\r\nMIME-Version: 1.0\r\nContent-Type: text/html; charset=utf-8\r\n\r\n{}",
            message.to, message.subject, message.html_body
        );
        fs::write(&path, contents)?;
        Ok(path)
    }
}

impl MailSender for OutboxMailer {
    fn send(&self, message: &EmailMessage) -> RouteResult<()> {
        self.deliver(message).map(|_| ())
    }
}

fn sanitize(recipient: &str) -> String {
    recipient
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '.' || c == '-' { c } else { '_' })
        .collect()
}
