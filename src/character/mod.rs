//! Character attributes and owned character/inventory state.

pub mod attributes;
pub mod inventory;
pub mod user;

pub use attributes::*;
pub use inventory::*;
pub use user::*;
