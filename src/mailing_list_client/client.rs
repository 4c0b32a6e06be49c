use std::time::Duration;

use anyhow::Context;
use derivative::Derivative;
use reqwest::{
    Client,
    Url,
};

use crate::app::{
    redact_api_key,
    MailgunSettings,
};
use crate::domain::{
    MailingListProvider,
    SubscriptionError,
    SubscriptionResult,
};
use crate::mailing_list_client::request::MemberRequest;

#[derive(Derivative)]
#[derivative(Debug)]
pub struct MailgunClient {
    #[derivative(Debug = "ignore")]
    http_client: Client,
    base_url: Url,
    domain: String,
    #[derivative(Debug = "ignore")]
    api_key: String,
}

impl MailgunClient {
    const API_USER: &'static str = "api";

    pub fn new(
        base_url: Url,
        domain: String,
        api_key: String,
        timeout_secs: u64,
    ) -> Result<Self, anyhow::Error> {
        Ok(Self {
            http_client: Client::builder()
                .timeout(Duration::from_secs(timeout_secs))
                .build()
                .context(format!(
                    "Error creating mailing list client with:\nbase_url: {}\ndomain: {}\napi_key: \
                     {}\ntimeout_secs: {}",
                    base_url,
                    domain,
                    redact_api_key(&api_key),
                    timeout_secs
                ))?,
            base_url,
            domain,
            api_key,
        })
    }

    pub fn from_settings(settings: &MailgunSettings) -> Result<Self, anyhow::Error> {
        Self::new(
            settings.base_url.clone(),
            settings.domain.clone(),
            settings.api_key.clone(),
            settings.timeout_secs,
        )
    }

    fn members_url(&self, list_address: &str) -> Result<Url, SubscriptionError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| SubscriptionError::MalformedInput {
                message: format!("{} cannot be used as Mailgun API base url", self.base_url),
            })?
            .pop_if_empty()
            .extend(&["lists", list_address, "members"]);
        Ok(url)
    }
}

impl MailingListProvider for MailgunClient {
    #[tracing::instrument(
        name = "creating mailing list member",
        skip(self),
        fields(domain = %self.domain)
    )]
    async fn subscribe(&self, list_address: &str, email: &str) -> SubscriptionResult {
        let response = self
            .http_client
            .post(self.members_url(list_address)?)
            .basic_auth(Self::API_USER, Some(&self.api_key))
            .form(&MemberRequest::subscribe(email))
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let message = response.text().await.unwrap_or_default();
        Err(SubscriptionError::Rejected {
            status: status.as_u16(),
            message,
        })
    }
}
