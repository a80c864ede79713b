//! Access and hit counters for one simulation run.

use std::fmt;

/// Running totals. `hits <= accesses` at all times.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct Statistics {
    pub accesses: u64,
    pub hits: u64,
}

impl Statistics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_access(&mut self) {
        self.accesses += 1;
    }

    pub fn record_hit(&mut self) {
        debug_assert!(self.hits < self.accesses, "hit recorded without an access");
        self.hits += 1;
    }

    pub fn misses(&self) -> u64 {
        self.accesses - self.hits
    }

    /// `hits / accesses`, or 0.0 before any access.
    pub fn hit_rate(&self) -> f64 {
        if self.accesses == 0 {
            return 0.0;
        }
        self.hits as f64 / self.accesses as f64
    }
}

/// The final report printed by the simulator binary.
impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Cache Statistics")?;
        writeln!(f, "-----------------")?;
        writeln!(f)?;
        writeln!(f, "Accesses: {}", self.accesses)?;
        writeln!(f, "Hits:     {}", self.hits)?;
        writeln!(f, "Hit Rate: {:.4}", self.hit_rate())
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    #[test]
    fn empty_statistics() {
        let s = Statistics::new();
        assert_eq!(s.accesses, 0);
        assert_eq!(s.misses(), 0);
        assert_eq!(s.hit_rate(), 0.0);
    }

    #[test]
    fn hit_and_miss_counts() {
        let mut s = Statistics::new();
        s.record_access();
        s.record_hit();
        s.record_access();
        s.record_access();
        s.record_hit();
        assert_eq!(s.accesses, 3);
        assert_eq!(s.hits, 2);
        assert_eq!(s.misses(), 1);
        assert!((s.hit_rate() - 2.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn report_format() {
        let s = Statistics { accesses: 3, hits: 1 };
        assert_eq!(
            s.to_string(),
            "Cache Statistics\n-----------------\n\nAccesses: 3\nHits:     1\nHit Rate: 0.3333\n"
        );
    }

    #[test]
    fn report_with_no_accesses() {
        assert!(Statistics::new().to_string().ends_with("Hit Rate: 0.0000\n"));
    }
}
