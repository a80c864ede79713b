//! Cache store: a fixed array of lines with direct-mapped or fully-associative (FIFO) lookup.

use crate::config::Mapping;
use crate::error::CacheError;

/// Result of a cache access.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CacheAccessResult {
    Hit,
    Miss,
}

impl CacheAccessResult {
    pub fn is_hit(self) -> bool {
        self == CacheAccessResult::Hit
    }
}

/// One cache slot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CacheLine {
    pub valid: bool,
    pub tag: u32,
}

impl CacheLine {
    fn matches(&self, tag: u32) -> bool {
        self.valid && self.tag == tag
    }

    fn fill(&mut self, tag: u32) {
        self.valid = true;
        self.tag = tag;
    }
}

/// A fixed number of lines plus the FIFO cursor used under fully-associative mapping.
#[derive(Clone, Debug)]
pub struct CacheStore {
    lines: Vec<CacheLine>,
    /// Next line to fill on an associative miss. Always `< lines.len()`.
    fifo_cursor: usize,
}

impl CacheStore {
    pub fn new(line_count: usize) -> Self {
        assert!(line_count > 0, "cache store must have at least one line");
        Self {
            lines: vec![CacheLine::default(); line_count],
            fifo_cursor: 0,
        }
    }

    /// Looks up `tag` and fills a line on a miss.
    ///
    /// Direct-mapped: only `lines[index]` is a candidate and is overwritten on a miss.
    /// Fully associative: `index` is ignored, lines are scanned in ascending order and
    /// the first match hits; a miss replaces the line under the FIFO cursor. Hits never
    /// move the cursor, so this is FIFO rather than LRU.
    pub fn access(
        &mut self,
        index: u32,
        tag: u32,
        mapping: Mapping,
    ) -> Result<CacheAccessResult, CacheError> {
        match mapping {
            Mapping::DirectMapped => {
                let lines = self.lines.len();
                let line = self
                    .lines
                    .get_mut(index as usize)
                    .ok_or(CacheError::IndexOutOfRange { index, lines })?;
                if line.matches(tag) {
                    return Ok(CacheAccessResult::Hit);
                }
                line.fill(tag);
                Ok(CacheAccessResult::Miss)
            }
            Mapping::FullyAssociative => {
                if self.lines.iter().any(|line| line.matches(tag)) {
                    return Ok(CacheAccessResult::Hit);
                }
                self.lines[self.fifo_cursor].fill(tag);
                self.fifo_cursor = (self.fifo_cursor + 1) % self.lines.len();
                Ok(CacheAccessResult::Miss)
            }
        }
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn lines(&self) -> &[CacheLine] {
        &self.lines
    }

    pub fn fifo_cursor(&self) -> usize {
        self.fifo_cursor
    }

    /// Number of lines currently holding a block.
    pub fn occupancy(&self) -> usize {
        self.lines.iter().filter(|l| l.valid).count()
    }
}
