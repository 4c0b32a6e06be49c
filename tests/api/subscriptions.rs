use wiremock::matchers::{
    basic_auth,
    body_string_contains,
    method,
    path,
};
use wiremock::{
    Mock,
    ResponseTemplate,
};

use crate::api::helpers::*;

fn members_path() -> String {
    format!("/lists/{}/members", LIST_ADDRESS)
}

#[actix_rt::test]
async fn subscribe_returns_a_307_to_the_redirect_url() {
    let test_app = spawn_app().await;

    Mock::given(method("POST"))
        .and(path(members_path()))
        .and(basic_auth("api", API_KEY))
        .and(body_string_contains("address=ursula_le_guin%40gmail.com"))
        .and(body_string_contains("subscribed=yes"))
        .and(body_string_contains("upsert=yes"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&test_app.mailgun_server)
        .await;

    let subscribe_end_point = format!("{}/subscribe", test_app.address);
    let body = String::from("email=ursula_le_guin%40gmail.com");
    let response = send_post_request(&subscribe_end_point, body).await;

    assert_eq!(307, response.status().as_u16());
    assert_eq!(
        location(&response),
        test_app.settings.application.redirect_url_after_subscribe
    );
    assert_eq!(location(&response), REDIRECT_URL);
}

#[actix_rt::test]
async fn subscribe_redirects_when_mailgun_fails() {
    let test_app = spawn_app().await;

    for status in [400u16, 401, 500] {
        Mock::given(method("POST"))
            .and(path(members_path()))
            .respond_with(ResponseTemplate::new(status))
            .up_to_n_times(1)
            .expect(1)
            .mount(&test_app.mailgun_server)
            .await;

        let subscribe_end_point = format!("{}/subscribe", test_app.address);
        let body = String::from("email=ursula_le_guin%40gmail.com");
        let response = send_post_request(&subscribe_end_point, body).await;

        assert_eq!(
            307,
            response.status().as_u16(),
            "mailgun answering {} changed the response",
            status
        );
        assert_eq!(location(&response), REDIRECT_URL);
    }
}

#[actix_rt::test]
async fn subscribe_redirects_when_mailgun_is_too_slow() {
    let test_app = spawn_app().await;

    Mock::given(method("POST"))
        .and(path(members_path()))
        .respond_with(ResponseTemplate::new(200).set_delay(std::time::Duration::from_secs(4)))
        .expect(1)
        .mount(&test_app.mailgun_server)
        .await;

    let subscribe_end_point = format!("{}/subscribe", test_app.address);
    let body = String::from("email=ursula_le_guin%40gmail.com");
    let response = send_post_request(&subscribe_end_point, body).await;

    assert_eq!(307, response.status().as_u16());
}

#[actix_rt::test]
async fn subscribe_with_missing_email_subscribes_an_empty_address() {
    let test_app = spawn_app().await;

    Mock::given(method("POST"))
        .and(path(members_path()))
        .and(body_string_contains("address=&"))
        .respond_with(ResponseTemplate::new(400))
        .expect(1)
        .mount(&test_app.mailgun_server)
        .await;

    let subscribe_end_point = format!("{}/subscribe", test_app.address);
    let response = send_post_request(&subscribe_end_point, String::new()).await;

    assert_eq!(307, response.status().as_u16());
    assert_eq!(location(&response), REDIRECT_URL);
}

#[actix_rt::test]
async fn subscribe_accepts_the_email_in_the_query_string() {
    let test_app = spawn_app().await;

    Mock::given(method("POST"))
        .and(path(members_path()))
        .and(body_string_contains("address=ursula_le_guin%40gmail.com"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&test_app.mailgun_server)
        .await;

    let subscribe_end_point = format!(
        "{}/subscribe?email=ursula_le_guin%40gmail.com",
        test_app.address
    );
    let response = send_get_request(&subscribe_end_point).await;

    assert_eq!(307, response.status().as_u16());
    assert_eq!(location(&response), REDIRECT_URL);
}
