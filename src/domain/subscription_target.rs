use crate::app::Settings;

/// Where subscriptions go and where the caller is sent afterwards.
#[derive(Clone, Debug)]
pub struct SubscriptionTarget {
    mailing_list_address: String,
    redirect_url: String,
}

impl SubscriptionTarget {
    pub fn new(mailing_list_address: String, redirect_url: String) -> Self {
        Self {
            mailing_list_address,
            redirect_url,
        }
    }

    pub fn mailing_list_address(&self) -> &str {
        &self.mailing_list_address
    }

    pub fn redirect_url(&self) -> &str {
        &self.redirect_url
    }
}

impl From<&Settings> for SubscriptionTarget {
    fn from(settings: &Settings) -> Self {
        Self::new(
            settings.mailgun.mailing_list_address.clone(),
            settings.application.redirect_url_after_subscribe.clone(),
        )
    }
}
