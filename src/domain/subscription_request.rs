/// The email address submitted to `/subscribe`.
///
/// The address is passed on as is: the provider is the one validating it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubscriptionRequest {
    email: String,
}

impl SubscriptionRequest {
    /// Build the request from the `email` field of the form body and of the
    /// query string. The body wins when both carry it; a missing field
    /// yields an empty address.
    pub fn from_form_values(body: Option<String>, query: Option<String>) -> Self {
        Self {
            email: body.or(query).unwrap_or_default(),
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}
