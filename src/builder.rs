use crate::SynId;
use crate::config::IdConfig;
use crate::encoding::Encoding;
use crate::error::Error;
use crate::provider::{Clock, OsRandom, RandomSource, SystemClock};
use crate::synid::SharedSynId;
use std::sync::Arc;
use tracing::debug;

/// A builder for building the ['SynId'] generator.
///
/// [`SynId`]: struct.SynId.html
pub struct Builder {
    config: IdConfig,
    random_source: Option<Box<dyn RandomSource>>,
    clock: Option<Box<dyn Clock>>,
}

impl Default for Builder {
    fn default() -> Self {
        Builder::new()
    }
}

impl Builder {
    /// Construct a new builder for the build of ['SynId'] with the default
    /// configuration.
    ///
    /// [`SynId`]: struct.SynId.html
    pub fn new() -> Self {
        Self::from_config(IdConfig::default())
    }

    /// Construct a builder starting from an existing configuration.
    pub fn from_config(config: IdConfig) -> Self {
        Self {
            config,
            random_source: None,
            clock: None,
        }
    }

    /// Set the prefix. Surrounding whitespace is trimmed and an empty
    /// prefix is left out of the identifier.
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.config.prefix = prefix.into();
        self
    }

    /// Set the type tag. If it is empty, 'finalize' will fail.
    pub fn id_type(mut self, id_type: impl Into<String>) -> Self {
        self.config.id_type = id_type.into();
        self
    }

    /// Include the current UTC time as a compact timestamp segment.
    pub fn include_timestamp(mut self, include_timestamp: bool) -> Self {
        self.config.include_timestamp = include_timestamp;
        self
    }

    /// Set the shard label.
    pub fn shard(mut self, shard: impl Into<String>) -> Self {
        self.config.shard = shard.into();
        self
    }

    /// Include the shard segment.
    /// If it is included and the shard is empty, 'finalize' will fail.
    pub fn include_shard(mut self, include_shard: bool) -> Self {
        self.config.include_shard = include_shard;
        self
    }

    /// Set the number of characters of the random segment.
    /// If it is zero, 'finalize' will fail.
    pub fn random_length(mut self, random_length: usize) -> Self {
        self.config.random_length = random_length;
        self
    }

    /// Set the alphabet of the random segment.
    pub fn encoding(mut self, encoding: Encoding) -> Self {
        self.config.encoding = encoding;
        self
    }

    /// Replace the operating system generator used for the random segment.
    pub fn random_source(mut self, random_source: impl RandomSource + 'static) -> Self {
        self.random_source = Some(Box::new(random_source));
        self
    }

    /// Replace the system clock used for the timestamp segment.
    pub fn clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Some(Box::new(clock));
        self
    }

    /// Finish building and create a SynId instance.
    /// This method will return an error if the configuration is invalid.
    pub fn finalize(self) -> Result<SynId, Error> {
        let config = self.config.validate()?;

        debug!(
            flag = %config.flag(),
            encoding = %config.encoding,
            random_length = config.random_length,
            "synid generator finalized"
        );

        let shared = Arc::new(SharedSynId {
            config,
            random_source: self.random_source.unwrap_or_else(|| Box::new(OsRandom)),
            clock: self.clock.unwrap_or_else(|| Box::new(SystemClock)),
        });
        Ok(SynId::new_inner(shared))
    }
}
