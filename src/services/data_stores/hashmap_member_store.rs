use std::collections::HashMap;

use crate::domain::{
    Member, MemberId, MemberStore, MemberStoreError, Registration,
};

#[derive(Default)]
pub struct HashmapMemberStore {
    members: HashMap<MemberId, Member>,
    next_id: i64,
}

#[async_trait::async_trait]
impl MemberStore for HashmapMemberStore {
    async fn add_member(
        &mut self,
        registration: Registration,
    ) -> Result<MemberId, MemberStoreError> {
        // Ids count up from 1 and are never reused, matching the database
        // store's autoincrement column.
        self.next_id += 1;
        let id = MemberId::new(self.next_id);

        self.members.insert(id, Member::new(id, registration));
        Ok(id)
    }

    async fn mark_paid(
        &mut self,
        id: &MemberId,
    ) -> Result<(), MemberStoreError> {
        if let Some(member) = self.members.get_mut(id) {
            member.paid = true;
        }
        Ok(())
    }

    async fn get_paid_member(
        &self,
        id: &MemberId,
    ) -> Result<Member, MemberStoreError> {
        match self.members.get(id) {
            Some(member) if member.paid => Ok(member.clone()),
            _ => Err(MemberStoreError::MemberNotFound),
        }
    }
}
