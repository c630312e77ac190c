use askama::Template;
use axum::{extract::Path, response::Html};
use color_eyre::eyre::eyre;

use crate::domain::MembershipAPIError;

#[derive(Template)]
#[template(path = "payment.html")]
struct PaymentTemplate {
    member_id: i64,
}

#[tracing::instrument(name = "Payment prompt route handler", skip_all)]
pub async fn payment(
    Path(member_id): Path<i64>,
) -> Result<Html<String>, MembershipAPIError> {
    let body = PaymentTemplate { member_id }
        .render()
        .map_err(|e| MembershipAPIError::UnexpectedError(eyre!(e)))?;

    Ok(Html(body))
}
