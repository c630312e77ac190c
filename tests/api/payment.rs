use crate::helpers::{confirm_payment, register_member, TestApp};
use membership_manager::domain::{MemberId, MemberStore};
use test_context::test_context;

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_payment_prompt_for_member(app: &mut TestApp) {
    let member_id = register_member(app, "Ana", "a@x.com", "555-1111").await;

    let response = app.get_payment(&member_id).await;
    assert_eq!(response.status().as_u16(), 200);

    let body = response.text().await.expect("Failed to read response body");
    assert!(
        body.contains(&format!("/success/{member_id}")),
        "Payment prompt should link to the confirmation endpoint"
    );
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_mark_member_paid_on_success(app: &mut TestApp) {
    let member_id = register_member(app, "Ana", "a@x.com", "555-1111").await;
    let id = MemberId::new(member_id.parse().unwrap());

    assert!(
        app.member_store
            .read()
            .await
            .get_paid_member(&id)
            .await
            .is_err(),
        "Member should start unpaid"
    );

    confirm_payment(app, &member_id).await;

    let member = app
        .member_store
        .read()
        .await
        .get_paid_member(&id)
        .await
        .expect("Member should be paid after confirmation");
    assert!(member.paid);
    assert_eq!(member.name, "Ana");
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_be_idempotent_on_repeat_confirmation(app: &mut TestApp) {
    let member_id = register_member(app, "Ana", "a@x.com", "555-1111").await;

    confirm_payment(app, &member_id).await;
    confirm_payment(app, &member_id).await;

    let id = MemberId::new(member_id.parse().unwrap());
    assert!(
        app.member_store
            .read()
            .await
            .get_paid_member(&id)
            .await
            .is_ok(),
        "Member should stay paid after a repeat confirmation"
    );
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_render_success_view_for_unknown_id(app: &mut TestApp) {
    // No payment verification exists; the store treats unknown ids as a
    // no-op and the view still renders.
    let response = app.get_success("9999").await;
    assert_eq!(response.status().as_u16(), 200);
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_reject_non_numeric_ids(app: &mut TestApp) {
    let response = app.get_success("not-a-number").await;
    assert_eq!(
        response.status().as_u16(),
        400,
        "Malformed ids should be rejected before reaching the store"
    );
}
