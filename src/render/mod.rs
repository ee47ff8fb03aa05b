//! HTML instructions rendering and the mail boundary

pub mod instructions;
pub mod mail;

pub use instructions::{escape_html, render_instructions, render_page};
pub use mail::{EmailMessage, MailSender, OutboxMailer};
