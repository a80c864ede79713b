use cache_sim::address::ADDRESS_BITS;
use cache_sim::cache::CacheAccessResult::{self, Hit, Miss};
use cache_sim::config::{CacheConfig, Mapping, Organization};
use cache_sim::context::build_context;
use cache_sim::metrics::Statistics;
use cache_sim::simulator::Simulator;
use cache_sim::trace::{AccessRecord, TraceReader};
use test_log::test;

fn replay(config: &CacheConfig, trace: &str) -> (Vec<CacheAccessResult>, Statistics) {
    let mut sim = Simulator::from_config(config).unwrap();
    let results = TraceReader::new(trace.as_bytes())
        .map(|r| sim.access(r.unwrap()).unwrap())
        .collect();
    (results, sim.read())
}

#[test]
fn direct_mapped_unified_128_scenario() {
    let config = CacheConfig::new(128, Mapping::DirectMapped, Organization::Unified);
    let (results, stats) = replay(&config, "D 0x0\nD 0x40\nD 0x0\n");
    assert_eq!(results, vec![Miss, Miss, Hit]);
    assert_eq!(stats, Statistics { accesses: 3, hits: 1 });
}

#[test]
fn fully_associative_fifo_scenario() {
    // Two lines; A, B, A, C, A where each letter is a distinct block.
    let config = CacheConfig::new(128, Mapping::FullyAssociative, Organization::Unified);
    let trace = "D a0000000\nD b0000000\nD a0000000\nD c0000000\nD a0000000\n";
    let (results, stats) = replay(&config, trace);
    assert_eq!(results, vec![Miss, Miss, Hit, Miss, Miss]);
    assert_eq!(stats, Statistics { accesses: 5, hits: 1 });
}

#[test]
fn fully_associative_keeps_most_recent_n_blocks() {
    let n = 8u32;
    let config = CacheConfig::new(n * 64, Mapping::FullyAssociative, Organization::Unified);
    let mut sim = Simulator::from_config(&config).unwrap();
    for block in 0..=n {
        assert_eq!(sim.access(AccessRecord::data(block * 64)), Ok(Miss));
    }
    // Block 0 was the oldest and has been replaced by block n.
    assert_eq!(sim.access(AccessRecord::data(0)), Ok(Miss));
    // Block 0 replaced block 1; blocks 2..=n are the surviving most-recent inserts.
    for block in 2..=n {
        assert_eq!(sim.access(AccessRecord::data(block * 64)), Ok(Hit));
    }
}

#[test]
fn direct_mapped_same_index_different_tag_conflict() {
    let config = CacheConfig::new(256, Mapping::DirectMapped, Organization::Unified);
    let mut sim = Simulator::from_config(&config).unwrap();
    // 4 lines: 0x000 and 0x100 share index 0 with different tags.
    let pattern: Vec<_> = [0x000, 0x100, 0x000, 0x100, 0x100]
        .into_iter()
        .map(|a| sim.access(AccessRecord::data(a)).unwrap())
        .collect();
    assert_eq!(pattern, vec![Miss, Miss, Miss, Miss, Hit]);
}

#[test]
fn unified_shares_between_kinds() {
    for mapping in [Mapping::DirectMapped, Mapping::FullyAssociative] {
        let config = CacheConfig::new(512, mapping, Organization::Unified);
        let (results, _) = replay(&config, "D 1000\nI 1000\nI 2000\nD 2000\n");
        assert_eq!(results, vec![Miss, Hit, Miss, Hit], "{mapping}");
    }
}

#[test]
fn split_isolates_kinds() {
    for mapping in [Mapping::DirectMapped, Mapping::FullyAssociative] {
        let config = CacheConfig::new(512, mapping, Organization::Split);
        let (results, stats) = replay(&config, "D 1000\nI 1000\nI 2000\nD 2000\nD 2000\n");
        assert_eq!(results, vec![Miss, Miss, Miss, Miss, Hit], "{mapping}");
        assert_eq!(stats, Statistics { accesses: 5, hits: 1 });
    }
}

#[test]
fn unified_instruction_miss_can_evict_data() {
    // 128 bytes direct-mapped: 0x000 and 0x080 both map to line 0.
    let config = CacheConfig::new(128, Mapping::DirectMapped, Organization::Unified);
    let (results, _) = replay(&config, "D 0\nI 80\nD 0\n");
    assert_eq!(results, vec![Miss, Miss, Miss]);

    let config = CacheConfig::new(256, Mapping::DirectMapped, Organization::Split);
    let (results, _) = replay(&config, "D 0\nI 80\nD 0\n");
    assert_eq!(results, vec![Miss, Miss, Hit]);
}

#[test]
fn layouts_cover_the_address() {
    for size in [128u32, 256, 512, 1024, 2048, 4096] {
        for mapping in [Mapping::DirectMapped, Mapping::FullyAssociative] {
            for organization in [Organization::Unified, Organization::Split] {
                let ctx = build_context(size, mapping, organization).unwrap();
                let l = ctx.layout();
                assert_eq!(l.offset_bits + l.index_bits + l.tag_bits, ADDRESS_BITS);
                if mapping == Mapping::FullyAssociative {
                    assert_eq!(l.index_bits, 0);
                }
            }
        }
    }
}

#[test]
fn direct_mapped_index_never_out_of_range() {
    for size in [64u32, 128, 1024, 4096] {
        let config = CacheConfig::new(size, Mapping::DirectMapped, Organization::Unified);
        let mut sim = Simulator::from_config(&config).unwrap();
        let mut addr = 0u32;
        for _ in 0..2000 {
            assert!(sim.access(AccessRecord::instruction(addr)).is_ok());
            addr = addr.wrapping_mul(1_103_515_245).wrapping_add(12_345);
        }
        assert!(sim.access(AccessRecord::data(u32::MAX)).is_ok());
    }
}

#[test]
fn independent_simulations_sweep() {
    let trace: String = (0..64u32)
        .chain(0..64)
        .map(|i| format!("D {:x}\n", i * 64))
        .collect();

    let mut hits = Vec::new();
    for size in [1024u32, 2048, 4096] {
        let config = CacheConfig::new(size, Mapping::FullyAssociative, Organization::Unified);
        let (_, stats) = replay(&config, &trace);
        assert_eq!(stats.accesses, 128);
        assert!(stats.hits <= stats.accesses);
        hits.push(stats.hits);
    }
    // 64 distinct blocks only fit in the 4096-byte cache.
    assert_eq!(hits, vec![0, 0, 64]);
}
