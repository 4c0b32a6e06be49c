pub use errors::{
    SubscriptionError,
    SubscriptionResult,
};
pub use mailing_list_provider::MailingListProvider;
pub use subscription_request::SubscriptionRequest;
pub use subscription_target::SubscriptionTarget;

mod errors;
mod mailing_list_provider;
mod subscription_request;
mod subscription_target;
