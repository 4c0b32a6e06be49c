use actix_web::http::header;
use actix_web::{
    web,
    HttpResponse,
};
use serde::Deserialize;

use crate::domain::{
    MailingListProvider,
    SubscriptionRequest,
    SubscriptionTarget,
};

#[derive(Deserialize)]
pub struct FormData {
    email: Option<String>,
}

/// Subscribe the submitted `email` to the configured mailing list and
/// redirect the caller.
///
/// # Responses
///
/// - 307 Temporary Redirect to the configured url, whether the provider
///   accepted the subscription or not. Failures are only logged.
#[tracing::instrument(
    name = "subscribing to the mailing list",
    skip(query, form, provider, target),
    fields(email = tracing::field::Empty)
)]
pub async fn subscribe<P: MailingListProvider>(
    query: Option<web::Query<FormData>>,
    form: Option<web::Form<FormData>>,
    provider: web::Data<P>,
    target: web::Data<SubscriptionTarget>,
) -> HttpResponse {
    let request = SubscriptionRequest::from_form_values(
        form.and_then(|f| f.into_inner().email),
        query.and_then(|q| q.into_inner().email),
    );
    tracing::Span::current().record("email", &tracing::field::display(request.email()));

    if let Err(e) = provider
        .subscribe(target.mailing_list_address(), request.email())
        .await
    {
        tracing::error!("Failed to subscribe {}: {}", request.email(), e);
    }
    tracing::info!("{} has been subscribed to the mailing list", request.email());

    HttpResponse::TemporaryRedirect()
        .insert_header((header::LOCATION, target.redirect_url()))
        .finish()
}
