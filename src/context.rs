//! Cache context: bit layout plus the store(s) that instruction and data accesses route to.

use log::debug;

use crate::address::{AddressLayout, BLOCK_SIZE};
use crate::cache::CacheStore;
use crate::config::{Mapping, Organization};
use crate::error::ConfigError;
use crate::trace::AccessKind;

/// One store shared by both access kinds, or one store per kind.
#[derive(Clone, Debug)]
enum Stores {
    Unified(CacheStore),
    Split {
        instruction: CacheStore,
        data: CacheStore,
    },
}

/// A configured cache ready to simulate accesses.
///
/// Only the line contents and FIFO cursors inside the stores change after construction.
#[derive(Clone, Debug)]
pub struct CacheContext {
    mapping: Mapping,
    organization: Organization,
    layout: AddressLayout,
    stores: Stores,
}

/// Validates the configuration and builds an empty cache.
///
/// Under [`Organization::Split`] each of the two stores gets half of `capacity_bytes`.
pub fn build_context(
    capacity_bytes: u32,
    mapping: Mapping,
    organization: Organization,
) -> Result<CacheContext, ConfigError> {
    if capacity_bytes == 0 {
        return Err(ConfigError::ZeroCapacity);
    }
    if capacity_bytes % BLOCK_SIZE != 0 {
        return Err(ConfigError::UnalignedCapacity {
            capacity: capacity_bytes,
            block_size: BLOCK_SIZE,
        });
    }
    let store_capacity = match organization {
        Organization::Unified => capacity_bytes,
        Organization::Split => capacity_bytes / 2,
    };
    let layout = AddressLayout::new(store_capacity, BLOCK_SIZE, mapping)?;
    let line_count = (store_capacity / BLOCK_SIZE) as usize;

    let stores = match organization {
        Organization::Unified => Stores::Unified(CacheStore::new(line_count)),
        Organization::Split => Stores::Split {
            instruction: CacheStore::new(line_count),
            data: CacheStore::new(line_count),
        },
    };

    debug!(
        "built {} {} cache: {} bytes/store, {} lines, offset={} index={} tag={}",
        mapping,
        organization,
        store_capacity,
        line_count,
        layout.offset_bits,
        layout.index_bits,
        layout.tag_bits
    );

    Ok(CacheContext {
        mapping,
        organization,
        layout,
        stores,
    })
}

impl CacheContext {
    /// The store that serves accesses of `kind`. Both kinds share one store when unified.
    pub fn route(&mut self, kind: AccessKind) -> &mut CacheStore {
        match &mut self.stores {
            Stores::Unified(store) => store,
            Stores::Split { instruction, data } => match kind {
                AccessKind::Instruction => instruction,
                AccessKind::Data => data,
            },
        }
    }

    /// Read-only view of the store serving `kind`.
    pub fn store(&self, kind: AccessKind) -> &CacheStore {
        match &self.stores {
            Stores::Unified(store) => store,
            Stores::Split { instruction, data } => match kind {
                AccessKind::Instruction => instruction,
                AccessKind::Data => data,
            },
        }
    }

    pub fn mapping(&self) -> Mapping {
        self.mapping
    }

    pub fn organization(&self) -> Organization {
        self.organization
    }

    pub fn layout(&self) -> AddressLayout {
        self.layout
    }

    /// Lines per store.
    pub fn line_count(&self) -> usize {
        self.store(AccessKind::Instruction).line_count()
    }
}
