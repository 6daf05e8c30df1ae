//! Text interchange support.
//!
//! A raw ID does not survive formats without 64-bit integer fidelity (a JSON
//! number read back as a double loses the low bits), so both [`Snowflake`] and
//! [`RawId`] serialize as base 10 strings. [`RawId`] deserializes from either a
//! string or an integer.

use crate::error::Error;
use crate::parse::{parse_raw_id, IntoRawId};
use crate::Snowflake;
use serde::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::ser::{Serialize, Serializer};
use std::fmt;

/// A raw Snowflake ID read from a self-describing format.
///
/// Feed it to [`Snowflake::unmarshal`] to decode it against an epoch:
///
/// ```
/// use snowflake_codec::{RawId, Snowflake};
///
/// let raw: RawId = serde_json::from_str(r#""175928847299117063""#).unwrap();
/// let mut sf = Snowflake::builder().epoch(1_420_070_400_000).finalize();
/// sf.unmarshal(raw).unwrap();
/// assert_eq!(sf.worker_id(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RawId(pub u64);

impl IntoRawId for RawId {
    fn into_raw_id(self) -> Result<u64, Error> {
        Ok(self.0)
    }
}

impl From<u64> for RawId {
    fn from(id: u64) -> Self {
        RawId(id)
    }
}

impl From<Snowflake> for RawId {
    fn from(sf: Snowflake) -> Self {
        RawId(sf.as_u64())
    }
}

impl fmt::Display for RawId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for RawId {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.collect_str(self)
    }
}

impl Serialize for Snowflake {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.collect_str(self)
    }
}

fn unsupported<E: de::Error>(type_name: &'static str, value: impl fmt::Display) -> E {
    E::custom(Error::UnsupportedType {
        type_name,
        value: value.to_string(),
    })
}

struct RawIdVisitor;

impl<'de> Visitor<'de> for RawIdVisitor {
    type Value = RawId;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a base 10 snowflake string or an integer")
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(RawId(v))
    }

    // Same bit reinterpretation as the native signed integers.
    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(RawId(v as u64))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        parse_raw_id(v).map(RawId).map_err(E::custom)
    }

    fn visit_i128<E: de::Error>(self, v: i128) -> Result<Self::Value, E> {
        Err(unsupported("i128", v))
    }

    fn visit_u128<E: de::Error>(self, v: u128) -> Result<Self::Value, E> {
        Err(unsupported("u128", v))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        Err(unsupported("f64", v))
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
        Err(unsupported("bool", v))
    }

    fn visit_bytes<E: de::Error>(self, v: &[u8]) -> Result<Self::Value, E> {
        Err(unsupported("bytes", format_args!("{v:?}")))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Err(unsupported("unit", "()"))
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Err(unsupported("none", "None"))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, _seq: A) -> Result<Self::Value, A::Error> {
        Err(unsupported("sequence", "[..]"))
    }

    fn visit_map<A: MapAccess<'de>>(self, _map: A) -> Result<Self::Value, A::Error> {
        Err(unsupported("map", "{..}"))
    }
}

impl<'de> Deserialize<'de> for RawId {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        d.deserialize_any(RawIdVisitor)
    }
}
