use crate::error::FormatError;
use std::fmt;
use std::str::FromStr;

/// Number of optional slots tracked by the presence flag.
pub const SLOT_COUNT: usize = 4;

/// An optional component of an identifier, in flag order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Prefix,
    Type,
    Timestamp,
    Shard,
}

impl Slot {
    /// All slots in the fixed order they appear in both the flag and the body.
    pub const ALL: [Slot; SLOT_COUNT] = [Slot::Prefix, Slot::Type, Slot::Timestamp, Slot::Shard];

    /// Position of this slot's bit in the flag string.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Slot::Prefix => "prefix",
            Slot::Type => "type",
            Slot::Timestamp => "timestamp",
            Slot::Shard => "shard",
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The trailing `0`/`1` segment recording which optional slots are present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PresenceFlag([bool; SLOT_COUNT]);

impl PresenceFlag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `slot` as present or absent.
    pub fn with(mut self, slot: Slot, present: bool) -> Self {
        self.0[slot.index()] = present;
        self
    }

    pub fn is_set(&self, slot: Slot) -> bool {
        self.0[slot.index()]
    }

    /// Number of slots marked present, which is the number of segments
    /// preceding the random part.
    pub fn count(&self) -> usize {
        self.0.iter().filter(|bit| **bit).count()
    }

    /// Present slots in body order.
    pub fn present(&self) -> impl Iterator<Item = Slot> + '_ {
        Slot::ALL.into_iter().filter(|slot| self.is_set(*slot))
    }
}

impl fmt::Display for PresenceFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.0 {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl FromStr for PresenceFlag {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        if bytes.len() != SLOT_COUNT {
            return Err(FormatError::MalformedFlag(s.to_string()));
        }
        let mut bits = [false; SLOT_COUNT];
        for (bit, b) in bits.iter_mut().zip(bytes) {
            *bit = match b {
                b'0' => false,
                b'1' => true,
                _ => return Err(FormatError::MalformedFlag(s.to_string())),
            };
        }
        Ok(Self(bits))
    }
}
