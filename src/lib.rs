//! Encode and decode 64-bit IDs in the style of [Twitter's Snowflake], with a
//! configurable custom epoch such as the one [Discord] uses.
//!
//! A raw ID packs four fields, most significant bit first:
//!
//! | bits  | width | field                           |
//! |-------|-------|---------------------------------|
//! | 63–22 | 42    | milliseconds since the epoch    |
//! | 21–17 | 5     | worker ID                       |
//! | 16–12 | 5     | process ID                      |
//! | 11–0  | 12    | sequence                        |
//!
//! Encoding never fails: fields wider than their bit length are truncated.
//! Decoding keeps whole seconds only.
//!
//! ## Quickstart
//!
//! Build a Snowflake and read back its raw ID:
//!
//! ```
//! use snowflake_codec::Snowflake;
//!
//! let sf = Snowflake::builder().worker_id(3).process_id(1).sequence(42).finalize();
//! let id: u64 = sf.as_u64();
//! println!("{}", sf);
//! assert_eq!(id & 0xfff, 42);
//! ```
//!
//! Decode an ID produced elsewhere, as a string or as any integer type:
//!
//! ```
//! use snowflake_codec::Snowflake;
//!
//! let mut sf = Snowflake::builder().epoch(1_420_070_400_000).finalize();
//! sf.unmarshal(175928847299117063u64).unwrap();
//! assert_eq!(sf.worker_id(), 1);
//! assert_eq!(sf.process_id(), 0);
//! assert_eq!(sf.sequence(), 7);
//! assert_eq!(sf.timestamp().to_rfc3339(), "2016-04-30T11:18:25+00:00");
//! ```
//!
//! ## Feature flags
//!
//! - `serde` (default): [`Snowflake`] serializes as a base 10 string and
//!   `RawId` deserializes from a string or an integer.
//! - `tracing`: trace spans around decoding.
//!
//! A Snowflake does no internal synchronization and does not allocate
//! sequence numbers; uniqueness across callers is up to the caller.
//!
//! [Twitter's Snowflake]: https://blog.twitter.com/2010/announcing-snowflake
//! [Discord]: https://discord.com/developers/docs/reference#snowflakes

mod builder;
pub mod codec;
mod error;
mod parse;
#[cfg(feature = "serde")]
mod serialize;
mod snowflake;

pub use crate::snowflake::*;
pub use builder::*;
pub use codec::DecomposedSnowflake;
pub use error::*;
pub use parse::*;
#[cfg(feature = "serde")]
pub use serialize::*;
