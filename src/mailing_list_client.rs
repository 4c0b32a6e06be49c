pub use client::MailgunClient;

mod client;
mod request;
