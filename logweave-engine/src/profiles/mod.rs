//! Logging convention profiles: model, built-ins, persistence, and store.

pub mod builtin;
pub mod identity;
pub mod model;
pub mod persistence;
pub mod store;

pub use model::{Profile, ProfileOwner, SettingValue};
pub use store::ProfileCollection;
