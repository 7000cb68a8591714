/*
[INPUT]:  Wall-clock time and randomness from the environment
[OUTPUT]: Unix timestamps and fresh nonces for token minting
[POS]:    Auth layer - injectable time and nonce providers
[UPDATE]: When token freshness inputs change
*/

use std::fmt::Debug;

use chrono::Utc;
use uuid::Uuid;

use crate::http::{FundsManagerError, Result};

/// Source of the current Unix time in seconds
pub trait Clock: Debug + Send + Sync {
    fn now_unix(&self) -> Result<u64>;
}

/// Source of per-token nonces
pub trait NonceSource: Debug + Send + Sync {
    fn next_nonce(&self) -> Uuid;
}

/// Reads the host wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_unix(&self) -> Result<u64> {
        let now = Utc::now().timestamp();
        u64::try_from(now).map_err(|_| {
            FundsManagerError::Clock(format!("system time {now} is before the Unix epoch"))
        })
    }
}

/// Always returns the same instant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub u64);

impl Clock for FixedClock {
    fn now_unix(&self) -> Result<u64> {
        Ok(self.0)
    }
}

/// Random UUID v4 nonces
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomNonce;

impl NonceSource for RandomNonce {
    fn next_nonce(&self) -> Uuid {
        Uuid::new_v4()
    }
}

/// Always returns the same nonce
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedNonce(pub Uuid);

impl NonceSource for FixedNonce {
    fn next_nonce(&self) -> Uuid {
        self.0
    }
}
