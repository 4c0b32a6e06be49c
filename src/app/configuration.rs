use config::builder::DefaultState;
use config::{
    Config,
    ConfigBuilder,
    ConfigError,
    Environment,
    Map,
};
use custom_error::custom_error;
use derivative::Derivative;
use url::Url;

pub const MAILGUN_DOMAIN: &str = "MAILGUN_DOMAIN";
pub const MAILGUN_API_KEY: &str = "MAILGUN_API_KEY";
pub const MAILGUN_MAILING_LIST: &str = "MAILGUN_MAILING_LIST";
pub const MAILGUN_API_BASE_URL: &str = "MAILGUN_API_BASE_URL";
pub const MAILGUN_TIMEOUT_SECS: &str = "MAILGUN_TIMEOUT_SECS";
pub const SUBSCRIBE_HTTP_PORT: &str = "SUBSCRIBE_HTTP_PORT";
pub const SUBSCRIBE_REDIRECT_URL: &str = "SUBSCRIBE_REDIRECT_URL";

const DEFAULT_MAILGUN_API_BASE_URL: &str = "https://api.mailgun.net/v3/";
const DEFAULT_MAILGUN_TIMEOUT_SECS: u64 = 10;
const LISTEN_HOST: &str = "0.0.0.0";

const UNMASKED_API_KEY_CHARS: usize = 10;
const API_KEY_MASK: char = '*';

#[derive(Clone, Debug)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub mailgun: MailgunSettings,
}

#[derive(Clone, Debug)]
pub struct ApplicationSettings {
    pub http_port: u16,
    pub redirect_url_after_subscribe: String,
}

#[derive(Clone, Derivative)]
#[derivative(Debug)]
pub struct MailgunSettings {
    pub domain: String,
    #[derivative(Debug = "ignore")]
    pub api_key: String,
    pub mailing_list_address: String,
    pub base_url: Url,
    pub timeout_secs: u64,
}

impl ApplicationSettings {
    pub fn binding_address(&self) -> String {
        format!("{}:{}", LISTEN_HOST, self.http_port)
    }
}

impl Settings {
    /// Log the resolved configuration, one line per setting.
    ///
    /// The output may end up in a shared log store, so the API key is only
    /// ever written in its redacted form.
    pub fn log_resolved(&self) {
        tracing::info!("Running with configuration:");
        tracing::info!(
            "Mailgun domain (from {}): {}",
            MAILGUN_DOMAIN,
            self.mailgun.domain
        );
        tracing::info!(
            "Mailgun API key (from {}): {}",
            MAILGUN_API_KEY,
            redact_api_key(&self.mailgun.api_key)
        );
        tracing::info!(
            "Mailgun mailing list (from {}): {}",
            MAILGUN_MAILING_LIST,
            self.mailgun.mailing_list_address
        );
        tracing::info!("Mailgun API base url: {}", self.mailgun.base_url);
        tracing::info!("HTTP port: {}", self.application.http_port);
        tracing::info!(
            "Redirect after subscribe: {}",
            self.application.redirect_url_after_subscribe
        );
    }
}

/// Keep the first 10 characters of `api_key` and mask the rest.
///
/// Characters are counted as unicode scalar values. Keys shorter than 10
/// characters are masked entirely.
pub fn redact_api_key(api_key: &str) -> String {
    let length = api_key.chars().count();
    let unmasked = if length < UNMASKED_API_KEY_CHARS {
        0
    } else {
        UNMASKED_API_KEY_CHARS
    };
    api_key
        .chars()
        .take(unmasked)
        .chain(std::iter::repeat(API_KEY_MASK).take(length - unmasked))
        .collect()
}

custom_error! {
///! Missing or malformed setting, fatal at startup.
pub ConfigurationError
    MissingVariable{name: String} = "System environment not set: {name}",
    InvalidPort{value: String} = "HTTP port must be a positive integer, given: {value}",
    InvalidBaseUrl{value: String} = "{value} is not a valid Mailgun API base url",
    InvalidTimeout{value: String} = "Mailgun timeout must be a number of seconds, given: {value}",
    InvalidConfig{source: ConfigError} = "{source}",
}

/// Load the configuration from the process environment.
///
/// It fails if:
/// - any of `MAILGUN_DOMAIN`, `MAILGUN_API_KEY`, `MAILGUN_MAILING_LIST`,
///   `SUBSCRIBE_HTTP_PORT`, `SUBSCRIBE_REDIRECT_URL` is unset or empty
/// - `SUBSCRIBE_HTTP_PORT` is not an integer between 1 and 65535
/// - `MAILGUN_API_BASE_URL` or `MAILGUN_TIMEOUT_SECS` are set but malformed
///
/// # Examples
///
/// ```rust,no_run
/// use mailing_list_gateway::app::load_configuration;
///
/// let settings = load_configuration().expect("invalid configuration");
/// settings.log_resolved();
/// ```
pub fn load_configuration() -> Result<Settings, ConfigurationError> {
    load_configuration_from(
        Config::builder().add_source(Environment::default().source(Some(process_environment()))),
    )
}

// Variables that are not valid unicode cannot be any of ours and are skipped.
fn process_environment() -> Map<String, String> {
    std::env::vars_os()
        .filter_map(|(name, value)| Some((name.into_string().ok()?, value.into_string().ok()?)))
        .collect()
}

/// Load the configuration from an arbitrary key-value source.
///
/// Keys are the lowercase names of the environment variables.
pub fn load_configuration_from(
    builder: ConfigBuilder<DefaultState>,
) -> Result<Settings, ConfigurationError> {
    let config = builder.build()?;

    let domain = required(&config, MAILGUN_DOMAIN)?;
    let api_key = required(&config, MAILGUN_API_KEY)?;
    let mailing_list_address = required(&config, MAILGUN_MAILING_LIST)?;
    let http_port = parse_port(required(&config, SUBSCRIBE_HTTP_PORT)?)?;
    let redirect_url_after_subscribe = required(&config, SUBSCRIBE_REDIRECT_URL)?;

    let base_url = match optional(&config, MAILGUN_API_BASE_URL)? {
        Some(value) => {
            Url::parse(&value).map_err(|_| ConfigurationError::InvalidBaseUrl { value })?
        }
        None => Url::parse(DEFAULT_MAILGUN_API_BASE_URL).map_err(|_| {
            ConfigurationError::InvalidBaseUrl {
                value: DEFAULT_MAILGUN_API_BASE_URL.to_string(),
            }
        })?,
    };
    let timeout_secs = match optional(&config, MAILGUN_TIMEOUT_SECS)? {
        Some(value) => value
            .parse()
            .map_err(|_| ConfigurationError::InvalidTimeout { value })?,
        None => DEFAULT_MAILGUN_TIMEOUT_SECS,
    };

    Ok(Settings {
        application: ApplicationSettings {
            http_port,
            redirect_url_after_subscribe,
        },
        mailgun: MailgunSettings {
            domain,
            api_key,
            mailing_list_address,
            base_url,
            timeout_secs,
        },
    })
}

fn required(config: &Config, variable: &str) -> Result<String, ConfigurationError> {
    optional(config, variable)?.ok_or_else(|| ConfigurationError::MissingVariable {
        name: variable.to_string(),
    })
}

// An empty variable counts as unset.
fn optional(config: &Config, variable: &str) -> Result<Option<String>, ConfigurationError> {
    match config.get_string(&variable.to_lowercase()) {
        Ok(value) if value.is_empty() => Ok(None),
        Ok(value) => Ok(Some(value)),
        Err(ConfigError::NotFound(_)) => Ok(None),
        Err(source) => Err(source.into()),
    }
}

fn parse_port(value: String) -> Result<u16, ConfigurationError> {
    match value.parse::<u16>() {
        Ok(port) if port > 0 => Ok(port),
        _ => Err(ConfigurationError::InvalidPort { value }),
    }
}
