mod health_check;
mod subscriptions;
