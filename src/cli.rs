use clap::Parser;

const SUPPORT: &str = "\
Configuration is read from the environment:
  MAILGUN_DOMAIN          Mailgun account domain
  MAILGUN_API_KEY         Mailgun API key
  MAILGUN_MAILING_LIST    address of the mailing list to subscribe to
  SUBSCRIBE_HTTP_PORT     port to listen on
  SUBSCRIBE_REDIRECT_URL  where callers are sent after subscribing
  MAILGUN_API_BASE_URL    optional, defaults to https://api.mailgun.net/v3/
  MAILGUN_TIMEOUT_SECS    optional, defaults to 10
  RUST_LOG                optional log filter, defaults to info

Endpoints:
  GET|POST /subscribe     subscribes the `email` form field, then redirects
  /health-check           answers 200 Running";

/// Subscribe email addresses to a Mailgun mailing list over HTTP.
///
/// Runs the server when invoked without arguments.
#[derive(Debug, Parser)]
#[command(
    name = "mailing-list-gateway",
    after_help = SUPPORT,
    disable_help_flag = true
)]
pub struct Cli {
    /// Print help
    #[arg(long = "help", action = clap::ArgAction::Help)]
    help: Option<bool>,
}
