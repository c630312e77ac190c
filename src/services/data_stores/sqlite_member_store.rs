use color_eyre::eyre::eyre;
use sqlx::SqlitePool;

use crate::domain::{
    Member, MemberId, MemberStore, MemberStoreError, Registration,
};

pub struct SqliteMemberStore {
    pool: SqlitePool,
}

impl SqliteMemberStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl MemberStore for SqliteMemberStore {
    #[tracing::instrument(name = "Adding member to SQLite", skip_all)]
    async fn add_member(
        &mut self,
        registration: Registration,
    ) -> Result<MemberId, MemberStoreError> {
        let result = sqlx::query(
            r#"
            INSERT INTO members (name, email, phone, paid) VALUES (?1, ?2, ?3, ?4)
            "#,
        )
        .bind(&registration.name)
        .bind(&registration.email)
        .bind(&registration.phone)
        .bind(false)
        .execute(&self.pool)
        .await
        .map_err(|e| MemberStoreError::UnexpectedError(eyre!(e)))?;

        Ok(MemberId::new(result.last_insert_rowid()))
    }

    #[tracing::instrument(name = "Marking member paid in SQLite", skip_all)]
    async fn mark_paid(
        &mut self,
        id: &MemberId,
    ) -> Result<(), MemberStoreError> {
        // Unknown ids update zero rows, which is the intended no-op.
        sqlx::query(
            r#"
            UPDATE members SET paid = TRUE WHERE id = ?1
            "#,
        )
        .bind(*id.as_ref())
        .execute(&self.pool)
        .await
        .map_err(|e| MemberStoreError::UnexpectedError(eyre!(e)))?;

        Ok(())
    }

    #[tracing::instrument(
        name = "Retrieving paid member from SQLite",
        skip_all
    )]
    async fn get_paid_member(
        &self,
        id: &MemberId,
    ) -> Result<Member, MemberStoreError> {
        sqlx::query_as::<_, Member>(
            r#"
            SELECT id, name, email, phone, paid
            FROM members
            WHERE id = ?1 AND paid = TRUE
            "#,
        )
        .bind(*id.as_ref())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::RowNotFound => MemberStoreError::MemberNotFound,
            err => MemberStoreError::UnexpectedError(eyre!(err)),
        })
    }
}
