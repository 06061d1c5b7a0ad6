use crate::config::SEPARATOR;
use crate::error::{Error, FormatError};
use crate::flag::{PresenceFlag, SLOT_COUNT, Slot};
use crate::timestamp::{format_compact_timestamp, parse_compact_timestamp};
use chrono::{DateTime, Utc};
use std::fmt;
use tracing::{debug, trace};

/// DecodedId is the parts of an identifier.
///
/// Slots whose flag bit is `0` are `None`; the random part is always set.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DecodedId {
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub prefix: Option<String>,
    #[cfg_attr(
        feature = "serde",
        serde(rename = "type", default, skip_serializing_if = "Option::is_none")
    )]
    pub id_type: Option<String>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub timestamp: Option<DateTime<Utc>>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub shard: Option<String>,
    pub random: String,
}

impl DecodedId {
    /// The presence flag matching the slots set on this record.
    pub fn flag(&self) -> PresenceFlag {
        PresenceFlag::new()
            .with(Slot::Prefix, self.prefix.is_some())
            .with(Slot::Type, self.id_type.is_some())
            .with(Slot::Timestamp, self.timestamp.is_some())
            .with(Slot::Shard, self.shard.is_some())
    }
}

/// Renders the record back into identifier form.
impl fmt::Display for DecodedId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let timestamp = self.timestamp.map(format_compact_timestamp);
        let leading = [
            self.prefix.as_deref(),
            self.id_type.as_deref(),
            timestamp.as_deref(),
            self.shard.as_deref(),
        ];
        for segment in leading.into_iter().flatten() {
            write!(f, "{segment}{SEPARATOR}")?;
        }
        write!(f, "{}{SEPARATOR}{}", self.random, self.flag())
    }
}

type SlotParser = fn(&mut DecodedId, &str) -> Result<(), FormatError>;

/// Slots in flag order, each with the parser for its segment.
const SLOT_PARSERS: [(Slot, SlotParser); SLOT_COUNT] = [
    (Slot::Prefix, parse_prefix),
    (Slot::Type, parse_type),
    (Slot::Timestamp, parse_timestamp),
    (Slot::Shard, parse_shard),
];

fn parse_prefix(decoded: &mut DecodedId, segment: &str) -> Result<(), FormatError> {
    decoded.prefix = Some(segment.to_string());
    Ok(())
}

fn parse_type(decoded: &mut DecodedId, segment: &str) -> Result<(), FormatError> {
    decoded.id_type = Some(segment.to_string());
    Ok(())
}

fn parse_timestamp(decoded: &mut DecodedId, segment: &str) -> Result<(), FormatError> {
    decoded.timestamp = Some(parse_compact_timestamp(segment)?);
    Ok(())
}

fn parse_shard(decoded: &mut DecodedId, segment: &str) -> Result<(), FormatError> {
    decoded.shard = Some(segment.to_string());
    Ok(())
}

/// Break an identifier up into its parts.
///
/// The last segment is the presence flag. The segments it marks present are
/// read from the front in slot order; whatever lies between them and the
/// flag is the random part, which keeps base64url randoms containing `-`
/// intact.
pub fn decode_id(id: &str) -> Result<DecodedId, Error> {
    match decode(id) {
        Ok(decoded) => {
            trace!(id, flag = %decoded.flag(), "decoded identifier");
            Ok(decoded)
        }
        Err(err) => {
            debug!(id, error = %err, "rejected identifier");
            Err(err.into())
        }
    }
}

fn decode(id: &str) -> Result<DecodedId, FormatError> {
    let parts: Vec<&str> = id.split(SEPARATOR).collect();
    let Some((flag_part, body)) = parts.split_last().filter(|(_, body)| !body.is_empty()) else {
        return Err(FormatError::TooFewSegments(parts.len()));
    };

    let flag: PresenceFlag = flag_part.parse()?;
    let leading = flag.count();
    if body.len() <= leading {
        return Err(FormatError::MissingSegments {
            flag: flag.to_string(),
            expected: leading + 1,
            actual: body.len(),
        });
    }

    let (leading_parts, random_parts) = body.split_at(leading);
    let mut decoded = DecodedId {
        random: random_parts.join(SEPARATOR),
        ..DecodedId::default()
    };

    let present = SLOT_PARSERS
        .iter()
        .filter(|(slot, _)| flag.is_set(*slot));
    for ((_, parse), segment) in present.zip(leading_parts) {
        parse(&mut decoded, segment)?;
    }

    Ok(decoded)
}
