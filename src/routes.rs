pub use health_check::health_check;
pub use subscriptions::subscribe;

mod health_check;
mod subscriptions;
