use crate::helpers::{register_member, TestApp};
use test_context::test_context;

#[test_context(TestApp)]
#[tokio::test]
async fn should_redirect_to_payment_page_on_submit(app: &mut TestApp) {
    let response = app
        .post_submit(&[
            ("name", "Ana"),
            ("email", "a@x.com"),
            ("phone", "555-1111"),
        ])
        .await;

    assert_eq!(response.status().as_u16(), 303);

    let location = response
        .headers()
        .get("location")
        .expect("No location header in redirect")
        .to_str()
        .unwrap();
    let member_id = location
        .strip_prefix("/payment/")
        .unwrap_or_else(|| panic!("Unexpected redirect target: {location}"));
    assert!(
        member_id.parse::<i64>().is_ok(),
        "Redirect should carry a numeric member id: {member_id}"
    );
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_assign_fresh_ids_to_successive_registrations(
    app: &mut TestApp,
) {
    let first = register_member(app, "Ana", "a@x.com", "555-1111").await;
    let second = register_member(app, "Ben", "b@x.com", "555-2222").await;

    assert_ne!(first, second, "Two creates must never collide");
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_accept_duplicate_contact_details(app: &mut TestApp) {
    let first = register_member(app, "Ana", "a@x.com", "555-1111").await;
    let second = register_member(app, "Ana", "a@x.com", "555-1111").await;

    assert_ne!(first, second);
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_accept_empty_fields(app: &mut TestApp) {
    let response = app
        .post_submit(&[("name", ""), ("email", ""), ("phone", "")])
        .await;

    assert_eq!(
        response.status().as_u16(),
        303,
        "Empty fields should be accepted silently"
    );
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_accept_missing_fields(app: &mut TestApp) {
    let response = app.post_submit(&[("name", "Ana")]).await;

    assert_eq!(
        response.status().as_u16(),
        303,
        "Missing fields should be accepted as empty"
    );
}
