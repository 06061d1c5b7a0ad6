use crate::builder::Builder;
use crate::config::{IdConfig, SEPARATOR};
use crate::error::*;
use crate::flag::{PresenceFlag, SLOT_COUNT, Slot};
use crate::provider::{Clock, RandomSource};
use crate::timestamp::try_format_compact_timestamp;
use std::sync::Arc;
use tracing::trace;

/// SharedSynId is shared between SynId instances.
/// This struct is not exposed to the public.
pub(crate) struct SharedSynId {
    pub(crate) config: IdConfig,
    pub(crate) random_source: Box<dyn RandomSource>,
    pub(crate) clock: Box<dyn Clock>,
}

/// SynId generates identifiers from one validated configuration.
/// It holds no mutable state and can be cloned to be used in multiple threads.
pub struct SynId(pub(crate) Arc<SharedSynId>);

impl SynId {
    /// Create a new [`Builder`] to construct a SynId.
    ///
    /// [`Builder`]: struct.Builder.html
    pub fn builder() -> Builder {
        Builder::new()
    }

    /// Create a SynId from a plain configuration, using the operating system
    /// random generator and the system clock.
    pub fn from_config(config: IdConfig) -> Result<Self, Error> {
        Builder::from_config(config).finalize()
    }

    pub(crate) fn new_inner(shared: Arc<SharedSynId>) -> Self {
        Self(shared)
    }

    /// The validated configuration, with the prefix trimmed.
    pub fn config(&self) -> &IdConfig {
        &self.0.config
    }

    /// Generate the next identifier.
    pub fn next_id(&self) -> Result<String, Error> {
        let config = &self.0.config;

        let timestamp = if config.include_timestamp {
            Some(try_format_compact_timestamp(self.0.clock.now())?)
        } else {
            None
        };
        let random = self.random_segment()?;

        // indexed by Slot::index
        let segments: [Option<&str>; SLOT_COUNT] = [
            (!config.prefix.is_empty()).then_some(config.prefix.as_str()),
            Some(config.id_type.as_str()),
            timestamp.as_deref(),
            config.include_shard.then_some(config.shard.as_str()),
        ];
        let flag = Slot::ALL
            .into_iter()
            .fold(PresenceFlag::new(), |flag, slot| {
                flag.with(slot, segments[slot.index()].is_some())
            })
            .to_string();

        let id = segments
            .into_iter()
            .flatten()
            .chain([random.as_str(), flag.as_str()])
            .collect::<Vec<_>>()
            .join(SEPARATOR);

        trace!(%id, "generated identifier");
        Ok(id)
    }

    /// Draw fresh bytes and encode them to exactly `random_length` characters.
    fn random_segment(&self) -> Result<String, Error> {
        let encoding = self.0.config.encoding;
        let len = self.0.config.random_length;

        let mut bytes = vec![0u8; encoding.byte_len(len)];
        self.0
            .random_source
            .fill_bytes(&mut bytes)
            .map_err(Error::RandomSource)?;
        Ok(encoding.encode(&bytes, len))
    }
}

/// Returns a new `SynId` referencing the same state as `self`.
/// This is used for concurrent use.
impl Clone for SynId {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

/// Generate a single identifier from `config`.
///
/// Uses the operating system random generator and the system clock. Build a
/// [`SynId`] once instead when generating many identifiers.
pub fn generate_id(config: &IdConfig) -> Result<String, Error> {
    SynId::from_config(config.clone())?.next_id()
}
