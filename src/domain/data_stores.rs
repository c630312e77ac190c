use color_eyre::eyre::Report;
use thiserror::Error;

use super::{Member, MemberId, Registration};

#[async_trait::async_trait]
pub trait MemberStore {
    async fn add_member(
        &mut self,
        registration: Registration,
    ) -> Result<MemberId, MemberStoreError>;
    /// Marks the member paid. Unknown ids are a no-op, and re-confirming an
    /// already-paid member has no further effect.
    async fn mark_paid(
        &mut self,
        id: &MemberId,
    ) -> Result<(), MemberStoreError>;
    /// Returns the member only when the record exists and is paid.
    async fn get_paid_member(
        &self,
        id: &MemberId,
    ) -> Result<Member, MemberStoreError>;
}

#[derive(Debug, Error)]
pub enum MemberStoreError {
    #[error("Member not found")]
    MemberNotFound,
    #[error("Unexpected error")]
    UnexpectedError(#[source] Report),
}

impl PartialEq for MemberStoreError {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::MemberNotFound, Self::MemberNotFound)
                | (Self::UnexpectedError(_), Self::UnexpectedError(_))
        )
    }
}
