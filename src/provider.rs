use crate::error::BoxDynError;
use chrono::prelude::*;
use rand::RngCore;
use rand::rngs::OsRng;

/// A source of random bytes for the random segment.
///
/// Any `Fn(&mut [u8]) -> Result<(), BoxDynError>` closure is a source, which
/// lets tests feed fixed bytes.
pub trait RandomSource: Send + Sync {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), BoxDynError>;
}

/// A source of the current UTC time.
///
/// Any `Fn() -> DateTime<Utc>` closure is a clock.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// The operating system's cryptographically secure generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsRandom;

impl RandomSource for OsRandom {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), BoxDynError> {
        OsRng.try_fill_bytes(dest)?;
        Ok(())
    }
}

/// The system wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

impl<F> RandomSource for F
where
    F: Fn(&mut [u8]) -> Result<(), BoxDynError> + Send + Sync,
{
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), BoxDynError> {
        self(dest)
    }
}

impl<F> Clock for F
where
    F: Fn() -> DateTime<Utc> + Send + Sync,
{
    fn now(&self) -> DateTime<Utc> {
        self()
    }
}
