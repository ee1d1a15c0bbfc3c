//! Domain layer - Core business entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.

pub mod user;

pub use user::{NewUser, User, UserChanges};
