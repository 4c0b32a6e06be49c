use std::future::Future;

use crate::domain::SubscriptionResult;

/// `MailingListProvider` is the narrow view the gateway has of the external
/// mailing list service.
///
/// Implementations are built once at startup and shared by every request
/// handler, hence the `Send + Sync + 'static` bound. They must not keep
/// per-call mutable state.
pub trait MailingListProvider: Send + Sync + 'static {
    /// Add `email` to the list at `list_address` as a subscribed member.
    ///
    /// Subscribing an address that is already a member updates the existing
    /// membership instead of failing.
    fn subscribe(
        &self,
        list_address: &str,
        email: &str,
    ) -> impl Future<Output = SubscriptionResult> + Send;
}
