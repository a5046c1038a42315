//! # qa-core
//!
//! Core types for the Q&A forum data layer.
//!
//! This crate provides the plain data shared across the workspace:
//! - Entity structs mirroring one row of each forum table
//! - The `EntityType` enum used for table lookup and error reporting
//!
//! Nothing here touches the database; persistence lives in `qa-db`.

pub mod entities;
pub mod enums;
