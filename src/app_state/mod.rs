use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::{CardRenderer, MemberStore};

pub type MemberStoreType = Arc<RwLock<dyn MemberStore + Send + Sync>>;
pub type CardRendererType = Arc<dyn CardRenderer + Send + Sync>;

#[derive(Clone)]
pub struct AppState {
    pub member_store: MemberStoreType,
    pub card_renderer: CardRendererType,
}

impl AppState {
    pub fn new(
        member_store: MemberStoreType,
        card_renderer: CardRendererType,
    ) -> Self {
        Self {
            member_store,
            card_renderer,
        }
    }
}
