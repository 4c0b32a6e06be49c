//! A small HTTP gateway subscribing email addresses to a Mailgun mailing list.

pub mod app;
pub mod cli;
pub mod domain;
pub mod mailing_list_client;
pub mod routes;
