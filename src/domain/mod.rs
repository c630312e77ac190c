mod card_renderer;
mod data_stores;
mod error;
mod member;
mod member_id;

pub use card_renderer::*;
pub use data_stores::*;
pub use error::*;
pub use member::*;
pub use member_id::*;
