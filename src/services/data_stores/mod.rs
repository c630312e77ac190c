mod hashmap_member_store;
mod sqlite_member_store;

pub use hashmap_member_store::*;
pub use sqlite_member_store::*;
