//! Compact, self-describing identifiers with optional semantic segments.
//!
//! An identifier is a `-` separated string. Optional prefix, type, timestamp
//! and shard segments come first, followed by a random part and a 4-digit
//! presence flag recording which optional segments were included:
//!
//! ```text
//! api-usr-20240305123045-eu1-3f9a0c1b-1111
//! │   │   │              │   │        └ flag: prefix, type, timestamp, shard
//! │   │   │              │   └ random
//! │   │   │              └ shard
//! │   │   └ timestamp (YYYYMMDDHHMMSS, UTC)
//! │   └ type
//! └ prefix
//! ```
//!
//! ## Quickstart
//!
//! Add the following to your `Cargo.toml`:
//! ```toml
//! [dependencies]
//! synid = "0.1"
//! ```
//!
//! Use the library like this:
//!
//! ```
//! use synid::{Encoding, SynId, decode_id};
//!
//! let generator = SynId::builder()
//!     .prefix("api")
//!     .shard("eu1")
//!     .random_length(15)
//!     .encoding(Encoding::Base62)
//!     .include_timestamp(false)
//!     .finalize()
//!     .unwrap();
//!
//! let id = generator.next_id().unwrap();
//! assert!(id.starts_with("api-usr-eu1-"));
//! assert!(id.ends_with("-1101"));
//!
//! let decoded = decode_id(&id).unwrap();
//! assert_eq!(decoded.shard.as_deref(), Some("eu1"));
//! assert_eq!(decoded.random.len(), 15);
//! assert!(decoded.timestamp.is_none());
//! ```
//!
//! For one-off identifiers there is [`generate_id`], which takes a plain
//! [`IdConfig`]:
//!
//! ```
//! use synid::{IdConfig, generate_id};
//!
//! let config = IdConfig {
//!     shard: "usa".into(),
//!     ..IdConfig::default()
//! };
//! let id = generate_id(&config).unwrap();
//! assert!(id.ends_with("-0111"));
//! ```
//!
//! ## Concurrent use
//!
//! SynId holds no mutable state. `clone` it before moving to another thread:
//! ```
//! use synid::SynId;
//! use std::thread;
//!
//! let generator = SynId::builder().include_shard(false).finalize().unwrap();
//!
//! let mut children = Vec::new();
//! for _ in 0..10 {
//!     let thread_generator = generator.clone();
//!     children.push(thread::spawn(move || {
//!         println!("{}", thread_generator.next_id().unwrap());
//!     }));
//! }
//!
//! for child in children {
//!     child.join().unwrap();
//! }
//! ```
//!
//! ## Features
//!
//! - `serde`: `Serialize`/`Deserialize` for [`IdConfig`], [`Encoding`] and [`DecodedId`].
//! - `cli`: the `synid` command line tool.

mod builder;
mod config;
mod decode;
mod encoding;
mod error;
mod flag;
mod provider;
mod synid;
mod timestamp;

pub use crate::synid::*;
pub use builder::*;
pub use config::*;
pub use decode::*;
pub use encoding::*;
pub use error::*;
pub use flag::*;
pub use provider::*;
pub use timestamp::*;
