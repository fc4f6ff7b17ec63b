//! Wire protocol constants
//!
//! The job server speaks a single-frame text protocol: the client writes
//! `JOB:<script>` once, with no length prefix and no terminator, then reads
//! one reply.

/// Prefix of every job frame sent to the server
pub const JOB_PREFIX: &str = "JOB:";

/// Prefix of the server's acknowledgement (`JOB_ACCEPTED:<id>`)
pub const ACCEPTED_PREFIX: &str = "JOB_ACCEPTED:";

/// Default server host
pub const DEFAULT_HOST: &str = "localhost";

/// Default server port
pub const DEFAULT_PORT: u16 = 8080;

/// Upper bound of a single reply read; anything past it is dropped
pub const MAX_REPLY_BYTES: usize = 1024;
