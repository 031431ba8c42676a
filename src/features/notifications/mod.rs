pub mod models;
pub mod services;
pub mod store;
pub mod transport;

pub use services::NotificationService;
pub use store::{NotificationStore, PgNotificationStore};
pub use transport::{MailTransport, SmtpMailer};
