use crate::codec;
use crate::error::Error;
use crate::Snowflake;
use std::num::IntErrorKind;
#[cfg(feature = "tracing")]
use tracing::instrument;

/// A value that can be normalized into a raw Snowflake ID.
///
/// Implemented for decimal strings and for every primitive integer type.
/// Integers keep their bit pattern: signed values are sign-extended to 64 bits,
/// so `-1i8` becomes `u64::MAX` rather than an error.
///
/// Floats, `bool` and `char` implement it too and always fail with
/// [`Error::UnsupportedType`].
pub trait IntoRawId {
    fn into_raw_id(self) -> Result<u64, Error>;
}

macro_rules! impl_into_raw_id {
    ($($ty:ty),*) => {$(
        impl IntoRawId for $ty {
            #[inline]
            fn into_raw_id(self) -> Result<u64, Error> {
                Ok(self as u64)
            }
        }
    )*};
}

impl_into_raw_id!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

// Not raw IDs, but callers holding one get a typed error instead of a cast.
macro_rules! impl_unsupported_raw_id {
    ($($ty:ty),*) => {$(
        impl IntoRawId for $ty {
            fn into_raw_id(self) -> Result<u64, Error> {
                Err(Error::UnsupportedType {
                    type_name: stringify!($ty),
                    value: self.to_string(),
                })
            }
        }
    )*};
}

impl_unsupported_raw_id!(f32, f64, bool, char);

/// Parse a base 10 raw ID.
///
/// Only ASCII digits are accepted; a leading `+` or `-` is rejected.
pub fn parse_raw_id(s: &str) -> Result<u64, Error> {
    if !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::Parse {
            input: s.to_owned(),
            kind: IntErrorKind::InvalidDigit,
        });
    }
    s.parse::<u64>().map_err(|e| Error::Parse {
        input: s.to_owned(),
        kind: e.kind().clone(),
    })
}

impl IntoRawId for &str {
    fn into_raw_id(self) -> Result<u64, Error> {
        parse_raw_id(self)
    }
}

impl IntoRawId for &String {
    fn into_raw_id(self) -> Result<u64, Error> {
        parse_raw_id(self)
    }
}

impl IntoRawId for String {
    fn into_raw_id(self) -> Result<u64, Error> {
        parse_raw_id(&self)
    }
}

impl Snowflake {
    /// Decode `value` into this Snowflake using its configured epoch.
    ///
    /// All four fields are replaced on success. On error the Snowflake is left
    /// exactly as it was.
    ///
    /// ```
    /// use snowflake_codec::Snowflake;
    ///
    /// let mut sf = Snowflake::builder().epoch(1_420_070_400_000).finalize();
    /// sf.unmarshal("175928847299117063").unwrap();
    /// assert_eq!(sf.worker_id(), 1);
    /// assert_eq!(sf.sequence(), 7);
    /// ```
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip_all, err))]
    pub fn unmarshal<V: IntoRawId>(&mut self, value: V) -> Result<(), Error> {
        let id = value.into_raw_id()?;
        let decoded = codec::decode(id, self.epoch)?;

        self.timestamp = decoded.timestamp;
        self.worker_id = decoded.worker_id;
        self.process_id = decoded.process_id;
        self.sequence = decoded.sequence;
        Ok(())
    }
}
