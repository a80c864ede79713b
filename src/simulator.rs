//! Trace replay: route each access to its store, classify it, and update the counters.

use log::trace;

use crate::cache::CacheAccessResult;
use crate::config::CacheConfig;
use crate::context::CacheContext;
use crate::error::{CacheError, ConfigError};
use crate::metrics::Statistics;
use crate::trace::AccessRecord;

/// Simulates one access against `ctx` and records it in `stat`.
///
/// The access is counted before classification. Only a context whose layout does not
/// match its stores can produce an error, which [`crate::context::build_context`] rules out.
pub fn simulate_access(
    ctx: &mut CacheContext,
    stat: &mut Statistics,
    record: AccessRecord,
) -> Result<CacheAccessResult, CacheError> {
    stat.record_access();

    let decoded = ctx.layout().decode(record.address);
    let mapping = ctx.mapping();
    let result = ctx
        .route(record.kind)
        .access(decoded.index, decoded.tag, mapping)?;

    if result.is_hit() {
        stat.record_hit();
    }
    trace!(
        "{} {:#010x} index={} tag={:#x} -> {:?}",
        record.kind,
        record.address,
        decoded.index,
        decoded.tag,
        result
    );
    Ok(result)
}

/// A cache plus its statistics, fed one access at a time in trace order.
pub struct Simulator {
    ctx: CacheContext,
    stats: Statistics,
}

impl Simulator {
    pub fn new(ctx: CacheContext) -> Self {
        Self {
            ctx,
            stats: Statistics::new(),
        }
    }

    pub fn from_config(config: &CacheConfig) -> Result<Self, ConfigError> {
        Ok(Self::new(config.build()?))
    }

    pub fn access(&mut self, record: AccessRecord) -> Result<CacheAccessResult, CacheError> {
        simulate_access(&mut self.ctx, &mut self.stats, record)
    }

    /// Replays `records` in order.
    pub fn run<I>(&mut self, records: I) -> Result<(), CacheError>
    where
        I: IntoIterator<Item = AccessRecord>,
    {
        for record in records {
            self.access(record)?;
        }
        Ok(())
    }

    /// Snapshot of the counters.
    pub fn read(&self) -> Statistics {
        self.stats
    }

    pub fn context(&self) -> &CacheContext {
        &self.ctx
    }
}
