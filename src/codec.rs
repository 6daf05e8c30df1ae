// Copyright 2022 houseme
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Bit layout of a raw Snowflake ID.
//!
//! ```text
//! 63                      22 21    17 16    12 11          0
//! +-------------------------+--------+--------+-------------+
//! |  time (ms since epoch)  | worker | process|  sequence   |
//! +-------------------------+--------+--------+-------------+
//! ```

use crate::error::Error;
use chrono::{DateTime, Utc};
#[cfg(feature = "tracing")]
use tracing::instrument;

/// bit length of time
pub const BIT_LEN_TIME: u64 = 42;
/// bit length of worker id
pub const BIT_LEN_WORKER_ID: u64 = 5;
/// bit length of process id
pub const BIT_LEN_PROCESS_ID: u64 = 5;
/// bit length of sequence number
pub const BIT_LEN_SEQUENCE: u64 = 12;

const SHIFT_PROCESS_ID: u64 = BIT_LEN_SEQUENCE;
const SHIFT_WORKER_ID: u64 = SHIFT_PROCESS_ID + BIT_LEN_PROCESS_ID;
const SHIFT_TIME: u64 = SHIFT_WORKER_ID + BIT_LEN_WORKER_ID;

/// mask for time
pub const MASK_TIME: u64 = (1 << BIT_LEN_TIME) - 1;
/// mask for worker id
pub const MASK_WORKER_ID: u64 = (1 << BIT_LEN_WORKER_ID) - 1;
/// mask for process id
pub const MASK_PROCESS_ID: u64 = (1 << BIT_LEN_PROCESS_ID) - 1;
/// mask for sequence number
pub const MASK_SEQUENCE: u64 = (1 << BIT_LEN_SEQUENCE) - 1;

const MILLIS_PER_SECOND: u64 = 1_000;

/// DecomposedSnowflake is the parts of a Snowflake ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DecomposedSnowflake {
    pub id: u64,
    /// Milliseconds since the epoch the ID was built with.
    pub time: u64,
    pub worker_id: u64,
    pub process_id: u64,
    pub sequence: u64,
}

/// Break a Snowflake ID up into its parts.
pub fn decompose(id: u64) -> DecomposedSnowflake {
    DecomposedSnowflake {
        id,
        time: (id >> SHIFT_TIME) & MASK_TIME,
        worker_id: (id >> SHIFT_WORKER_ID) & MASK_WORKER_ID,
        process_id: (id >> SHIFT_PROCESS_ID) & MASK_PROCESS_ID,
        sequence: id & MASK_SEQUENCE,
    }
}

/// Pack the four fields into a Snowflake ID.
///
/// Every field is truncated to its bit width, so `worker_id = 32` encodes
/// the same as `worker_id = 0`.
pub fn compose(time: u64, worker_id: u64, process_id: u64, sequence: u64) -> u64 {
    (time & MASK_TIME) << SHIFT_TIME
        | (worker_id & MASK_WORKER_ID) << SHIFT_WORKER_ID
        | (process_id & MASK_PROCESS_ID) << SHIFT_PROCESS_ID
        | (sequence & MASK_SEQUENCE)
}

/// Convert a `DateTime<Utc>` to a Snowflake time.
/// The time is the number of milliseconds since `epoch`, truncated to 42 bits.
/// Times before the epoch wrap around instead of failing.
pub fn to_snowflake_time(time: DateTime<Utc>, epoch: u64) -> u64 {
    (time.timestamp_millis() as u64).wrapping_sub(epoch) & MASK_TIME
}

/// Convert a Snowflake time back to a `DateTime<Utc>`.
///
/// The result has whole-second resolution: the milliseconds are dropped and
/// re-encoding will not bring them back.
pub fn from_snowflake_time(time: u64, epoch: u64) -> Result<DateTime<Utc>, Error> {
    time.checked_add(epoch)
        .map(|millis| millis / MILLIS_PER_SECOND)
        .and_then(|secs| i64::try_from(secs).ok())
        .and_then(|secs| DateTime::from_timestamp(secs, 0))
        .ok_or(Error::TimestampOutOfRange { time, epoch })
}

/// Encode the fields of a Snowflake relative to `epoch`.
pub fn encode(
    epoch: u64,
    timestamp: DateTime<Utc>,
    worker_id: u64,
    process_id: u64,
    sequence: u64,
) -> u64 {
    compose(
        to_snowflake_time(timestamp, epoch),
        worker_id,
        process_id,
        sequence,
    )
}

/// The fields of a Snowflake ID with its time resolved against an epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Decoded {
    pub timestamp: DateTime<Utc>,
    pub worker_id: u64,
    pub process_id: u64,
    pub sequence: u64,
}

/// Decode a Snowflake ID, adding `epoch` back onto its time field.
#[cfg_attr(feature = "tracing", instrument(level = "trace", err))]
pub fn decode(id: u64, epoch: u64) -> Result<Decoded, Error> {
    let parts = decompose(id);
    Ok(Decoded {
        timestamp: from_snowflake_time(parts.time, epoch)?,
        worker_id: parts.worker_id,
        process_id: parts.process_id,
        sequence: parts.sequence,
    })
}
