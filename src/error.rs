// Copyright 2022 houseme
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::num::IntErrorKind;
use thiserror::Error;

/// Convenience type alias for usage within Snowflake.
#[cfg(test)]
pub(crate) type BoxDynError = Box<dyn std::error::Error + 'static + Send + Sync>;

/// The error type for this crate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("`{input}` is not a valid unsigned 64-bit decimal snowflake: {kind:?}")]
    Parse { input: String, kind: IntErrorKind },
    #[error("the type '{type_name}', of the value provided, '{value}', is not supported by this operation")]
    UnsupportedType {
        type_name: &'static str,
        value: String,
    },
    #[error("timestamp field {time} with epoch {epoch} is outside the representable time range")]
    TimestampOutOfRange { time: u64, epoch: u64 },
}
