//! Jobstorm Core
//!
//! Core types shared by the jobstorm client library and CLI.
//!
//! This crate contains:
//! - Protocol constants: the `JOB:` framing, default endpoint, reply size cap
//! - Script catalog: the fixed job strings stress clients choose from
//! - Domain types: job frames, server replies, per-client probe outcomes

pub mod catalog;
pub mod domain;
pub mod protocol;
