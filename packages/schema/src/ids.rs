//! # Identifier Generation
//!
//! Panels and blocks get their ids from an [`IdGenerator`] so tests can
//! swap the clock-based default for a deterministic sequence.

use crc32fast::Hasher;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Source of ids for panels and blocks
pub trait IdGenerator {
    fn next_id(&mut self) -> String;
}

static COUNTER: AtomicU64 = AtomicU64::new(0);

/// Time-based prefix, then a process-wide counter and a CRC32 over the
/// clock, the counter and the process id
#[derive(Debug, Clone, Copy, Default)]
pub struct TimestampIds;

impl IdGenerator for TimestampIds {
    fn next_id(&mut self) -> String {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default();
        let count = COUNTER.fetch_add(1, Ordering::Relaxed);

        let mut hasher = Hasher::new();
        hasher.update(&now.as_nanos().to_le_bytes());
        hasher.update(&count.to_le_bytes());
        hasher.update(&std::process::id().to_le_bytes());

        format!(
            "block-{}-{}{:08x}",
            to_base36(now.as_millis() as u64),
            to_base36(count),
            hasher.finalize()
        )
    }
}

/// Fresh id from the process default generator
pub fn generate_block_id() -> String {
    TimestampIds.next_id()
}

/// Deterministic `seed-1`, `seed-2`, ... ids
#[derive(Debug, Clone)]
pub struct SequentialIds {
    seed: String,
    count: u32,
}

impl SequentialIds {
    pub fn new(seed: impl Into<String>) -> Self {
        Self {
            seed: seed.into(),
            count: 0,
        }
    }

    pub fn seed(&self) -> &str {
        &self.seed
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> String {
        self.count += 1;
        format!("{}-{}", self.seed, self.count)
    }
}

fn to_base36(mut value: u64) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

    if value == 0 {
        return "0".to_string();
    }

    let mut out = Vec::new();
    while value > 0 {
        out.push(DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    out.reverse();
    String::from_utf8_lossy(&out).into_owned()
}
