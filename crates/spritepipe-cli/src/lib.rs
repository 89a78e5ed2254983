//! spritepipe CLI library.
//!
//! This crate provides the functionality behind the `spritepipe` binary:
//! fetching creature sprite archives from the sprite server, the on-disk
//! archive cache, frame loading for the local sheet builder, and the command
//! implementations themselves.

pub mod archive;
pub mod cache;
pub mod commands;
pub mod frames;
pub mod names;
pub mod remote;
