use crate::api::helpers::*;

#[actix_rt::test]
async fn health_check_works() {
    let health_check_endpoint = format!("{}/health-check", spawn_app().await.address);
    let response = send_get_request(&health_check_endpoint).await;

    assert_eq!(200, response.status().as_u16());
    assert_eq!("Running", response.text().await.unwrap());
}

#[actix_rt::test]
async fn health_check_accepts_post() {
    let health_check_endpoint = format!("{}/health-check", spawn_app().await.address);
    let response = send_post_request(&health_check_endpoint, String::new()).await;

    assert_eq!(200, response.status().as_u16());
    assert_eq!("Running", response.text().await.unwrap());
}

#[actix_rt::test]
async fn health_check_does_not_call_mailgun() {
    let test_app = spawn_app().await;
    send_get_request(&format!("{}/health-check", test_app.address)).await;

    let received = test_app.mailgun_server.received_requests().await.unwrap();
    assert!(received.is_empty());
}

#[actix_rt::test]
async fn unknown_path_returns_a_404() {
    let test_app = spawn_app().await;

    for path in ["/", "/subscriptions", "/health_check"] {
        let response = send_get_request(&format!("{}{}", test_app.address, path)).await;
        assert_eq!(404, response.status().as_u16(), "{}", path);
    }
}
