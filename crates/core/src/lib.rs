//! Core types for the todoapi service.
//!
//! This crate holds everything that does not depend on a transport or a
//! concrete database: the [`todo::Todo`] entity, the serde helpers used when
//! binding request bodies, and the [`storage::TodoRepository`] contract that
//! storage backends implement.

pub mod serde;
pub mod storage;
pub mod todo;
