// Module declarations
pub(crate) mod email_dispatcher;
pub(crate) mod notifications_errors;
pub(crate) mod notifications_model;
pub(crate) mod notifications_service;
pub(crate) mod notifications_traits;

// Re-export the public interface
pub use email_dispatcher::{EmailSummaryDispatcher, LogMailTransport};
pub use notifications_errors::NotificationError;
pub use notifications_model::{NotificationPassReport, SummaryEmail};
pub use notifications_service::NotificationService;
pub use notifications_traits::{
    MailTransportTrait, NotificationServiceTrait, SummaryDispatcherTrait,
};
