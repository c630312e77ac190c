use crate::helpers::{confirm_payment, register_member, TestApp};
use test_context::test_context;

const REJECTION: &str = "Payment not completed or member not found";

#[test_context(TestApp)]
#[tokio::test]
async fn should_reject_unpaid_member(app: &mut TestApp) {
    let member_id = register_member(app, "Ana", "a@x.com", "555-1111").await;

    let response = app.get_download(&member_id).await;
    assert_eq!(response.status().as_u16(), 403);
    assert_eq!(
        response.text().await.expect("Failed to read response body"),
        REJECTION
    );
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_reject_unknown_member(app: &mut TestApp) {
    let response = app.get_download("9999").await;
    assert_eq!(response.status().as_u16(), 403);
    assert_eq!(
        response.text().await.expect("Failed to read response body"),
        REJECTION
    );
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_card_after_payment(app: &mut TestApp) {
    let member_id = register_member(app, "Ana", "a@x.com", "555-1111").await;
    confirm_payment(app, &member_id).await;

    let response = app.get_download(&member_id).await;
    assert_eq!(response.status().as_u16(), 200);

    assert_eq!(
        response
            .headers()
            .get("content-type")
            .expect("No content-type header")
            .to_str()
            .unwrap(),
        "application/pdf"
    );
    assert_eq!(
        response
            .headers()
            .get("content-disposition")
            .expect("No content-disposition header")
            .to_str()
            .unwrap(),
        format!(
            "attachment; filename=\"membership_card_{member_id}.pdf\""
        )
    );

    let body = response.bytes().await.expect("Failed to read card bytes");
    assert!(
        body.starts_with(b"%PDF"),
        "Download should be a PDF document"
    );
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_allow_repeat_downloads(app: &mut TestApp) {
    let member_id = register_member(app, "Ana", "a@x.com", "555-1111").await;
    confirm_payment(app, &member_id).await;

    for _ in 0..2 {
        let response = app.get_download(&member_id).await;
        assert_eq!(response.status().as_u16(), 200);
    }
}
