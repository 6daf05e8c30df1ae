use crate::Snowflake;
use chrono::prelude::*;

/// A single field override for [`Snowflake::with_options`].
///
/// Options are applied in order, so a later option for the same field
/// replaces an earlier one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnowflakeOption {
    /// Custom epoch in milliseconds since the Unix epoch, such as Discord's
    /// `1420070400000`.
    Epoch(u64),
    Time(DateTime<Utc>),
    WorkerId(u64),
    ProcessId(u64),
    Sequence(u64),
}

/// A builder for building a ['Snowflake'].
///
/// Fields that are never set fall back to the Unix epoch, the current time
/// and zero. Values wider than their bit length are accepted here and
/// truncated when the ID is encoded.
///
/// [`Snowflake`]: struct.Snowflake.html
#[derive(Debug, Clone, Default)]
pub struct Builder {
    epoch: Option<u64>,
    time: Option<DateTime<Utc>>,
    worker_id: Option<u64>,
    process_id: Option<u64>,
    sequence: Option<u64>,
}

impl Builder {
    /// Construct a new builder for the build of ['Snowflake'].
    ///
    /// [`Snowflake`]: struct.Snowflake.html
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the custom epoch, in milliseconds since the Unix epoch.
    pub fn epoch(mut self, epoch: u64) -> Self {
        self.epoch = Some(epoch);
        self
    }

    /// Set the time. Defaults to the time `finalize` is called.
    pub fn time(mut self, time: DateTime<Utc>) -> Self {
        self.time = Some(time);
        self
    }

    /// Set the worker ID.
    pub fn worker_id(mut self, worker_id: u64) -> Self {
        self.worker_id = Some(worker_id);
        self
    }

    /// Set the process ID.
    pub fn process_id(mut self, process_id: u64) -> Self {
        self.process_id = Some(process_id);
        self
    }

    /// Set the sequence number.
    pub fn sequence(mut self, sequence: u64) -> Self {
        self.sequence = Some(sequence);
        self
    }

    /// Apply one [`SnowflakeOption`].
    pub fn option(self, option: SnowflakeOption) -> Self {
        match option {
            SnowflakeOption::Epoch(epoch) => self.epoch(epoch),
            SnowflakeOption::Time(time) => self.time(time),
            SnowflakeOption::WorkerId(id) => self.worker_id(id),
            SnowflakeOption::ProcessId(id) => self.process_id(id),
            SnowflakeOption::Sequence(seq) => self.sequence(seq),
        }
    }

    /// Finish building and create a Snowflake instance.
    pub fn finalize(self) -> Snowflake {
        Snowflake {
            epoch: self.epoch.unwrap_or(0),
            timestamp: self.time.unwrap_or_else(Utc::now),
            worker_id: self.worker_id.unwrap_or(0),
            process_id: self.process_id.unwrap_or(0),
            sequence: self.sequence.unwrap_or(0),
        }
    }
}

impl Snowflake {
    /// Create a new Snowflake from defaults plus an ordered list of options.
    ///
    /// ```
    /// use snowflake_codec::{Snowflake, SnowflakeOption};
    ///
    /// let sf = Snowflake::with_options([
    ///     SnowflakeOption::WorkerId(1),
    ///     SnowflakeOption::WorkerId(2),
    /// ]);
    /// assert_eq!(sf.worker_id(), 2);
    /// ```
    pub fn with_options<I>(options: I) -> Self
    where
        I: IntoIterator<Item = SnowflakeOption>,
    {
        options
            .into_iter()
            .fold(Builder::new(), Builder::option)
            .finalize()
    }
}
