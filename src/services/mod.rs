pub mod cooldown;
pub mod mail_service;

pub use cooldown::{browser_clock, format_remaining, Clock, Cooldown, CooldownActive};
pub use mail_service::{EmailJsRelay, MailError, MailRelay};
