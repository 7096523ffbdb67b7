//! In-memory user storage.

mod in_memory;
mod user;

pub use in_memory::UserStore;
pub use user::{User, UserPatch};
