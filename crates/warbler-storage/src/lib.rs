//! Storage layer for Warbler user accounts and the follow graph.
//!
//! [`store::UserStore`] owns the SeaORM connection and runs migrations on
//! startup. Every read and write goes through a [`store::Session`], which
//! wraps one database transaction: signups and follow edges staged in a
//! session become visible to others only after [`store::Session::commit`].

pub mod auth;
pub mod config;
pub mod entities;
pub mod error;
pub mod store;
pub mod validate;


pub use config::StoreConfig;
pub use error::{Result, StorageError};
pub use store::{Session, UserStore};
