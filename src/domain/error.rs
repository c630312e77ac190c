use color_eyre::eyre::Report;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MembershipAPIError {
    #[error("Payment not completed or member not found")]
    PaymentRequired,
    #[error("Unexpected error")]
    UnexpectedError(#[source] Report),
}
