use crate::builder::Builder;
use crate::codec;
use crate::error::Error;
use chrono::prelude::*;
use std::fmt;
use std::str::FromStr;

/// Snowflake holds the fields of a Snowflake ID.
///
/// It is a plain value: the raw ID is recomputed from the fields every time
/// one of the encoding accessors is called.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Snowflake {
    pub(crate) epoch: u64,
    pub(crate) timestamp: DateTime<Utc>,
    pub(crate) worker_id: u64,
    pub(crate) process_id: u64,
    pub(crate) sequence: u64,
}

impl Snowflake {
    /// Create a new Snowflake with the default configuration:
    /// the Unix epoch, the current time and zero for every ID field.
    /// For custom configuration see [`builder`].
    ///
    /// [`builder`]: struct.Snowflake.html#method.builder
    pub fn new() -> Self {
        Builder::new().finalize()
    }

    /// Create a new [`Builder`] to construct a Snowflake.
    ///
    /// [`Builder`]: struct.Builder.html
    pub fn builder() -> Builder {
        Builder::new()
    }

    /// Decode a raw ID that was built against `epoch`.
    pub fn from_raw(id: u64, epoch: u64) -> Result<Self, Error> {
        let mut sf = Builder::new().epoch(epoch).finalize();
        sf.unmarshal(id)?;
        Ok(sf)
    }

    /// The custom epoch in milliseconds since the Unix epoch.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// The time of the ID. Whole seconds only once decoded.
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// The worker ID as set. Only the low 5 bits (0..=31) are encoded.
    pub fn worker_id(&self) -> u64 {
        self.worker_id
    }

    /// The process ID as set. Only the low 5 bits (0..=31) are encoded.
    pub fn process_id(&self) -> u64 {
        self.process_id
    }

    /// The sequence number as set. Only the low 12 bits (0..=4095) are encoded.
    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    /// Encode the current fields into the raw ID.
    pub fn as_u64(&self) -> u64 {
        codec::encode(
            self.epoch,
            self.timestamp,
            self.worker_id,
            self.process_id,
            self.sequence,
        )
    }

    /// The raw ID reinterpreted as a signed integer.
    pub fn as_i64(&self) -> i64 {
        self.as_u64() as i64
    }

    /// The raw ID as a `usize`. Truncates on targets narrower than 64 bits.
    pub fn as_usize(&self) -> usize {
        self.as_u64() as usize
    }

    /// The raw ID as an `isize`. Truncates on targets narrower than 64 bits.
    pub fn as_isize(&self) -> isize {
        self.as_u64() as isize
    }

    /// Break the encoded ID up into its parts.
    pub fn decompose(&self) -> codec::DecomposedSnowflake {
        codec::decompose(self.as_u64())
    }
}

impl Default for Snowflake {
    fn default() -> Self {
        Snowflake::new()
    }
}

/// Writes the raw ID in base 10.
impl fmt::Display for Snowflake {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u64())
    }
}

/// Parses a base 10 raw ID against the Unix epoch.
impl FromStr for Snowflake {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut sf = Snowflake::new();
        sf.unmarshal(s)?;
        Ok(sf)
    }
}

impl From<Snowflake> for u64 {
    fn from(sf: Snowflake) -> Self {
        sf.as_u64()
    }
}

impl From<&Snowflake> for u64 {
    fn from(sf: &Snowflake) -> Self {
        sf.as_u64()
    }
}

impl From<Snowflake> for i64 {
    fn from(sf: Snowflake) -> Self {
        sf.as_i64()
    }
}

impl From<&Snowflake> for i64 {
    fn from(sf: &Snowflake) -> Self {
        sf.as_i64()
    }
}
