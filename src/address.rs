//! Address decoding: derive offset/index/tag widths and split a 32-bit address into fields.

use crate::config::Mapping;
use crate::error::ConfigError;

/// Width of a simulated address in bits.
pub const ADDRESS_BITS: u32 = 32;

/// Size of one cache block (line) in bytes.
pub const BLOCK_SIZE: u32 = 64;

/// Returns the `len`-bit field of `value` starting at `start_bit`.
///
/// A zero-length field is `0`; `len >= 32` keeps every bit above `start_bit`.
pub fn extract_bits(value: u32, start_bit: u32, len: u32) -> u32 {
    if len == 0 || start_bit >= ADDRESS_BITS {
        return 0;
    }
    let shifted = value >> start_bit;
    if len >= ADDRESS_BITS {
        shifted
    } else {
        shifted & ((1u32 << len) - 1)
    }
}

/// Bit widths of the three address fields for one cache store.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AddressLayout {
    pub offset_bits: u32,
    pub index_bits: u32,
    pub tag_bits: u32,
}

/// An address split into its fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DecodedAddress {
    /// Byte within the block. Never consulted for hit/miss classification.
    pub offset: u32,
    pub index: u32,
    pub tag: u32,
}

impl AddressLayout {
    /// Derives the layout for a store of `capacity_bytes` built from `block_size` blocks.
    ///
    /// `block_size` must be a power of two. The capacity must be a positive multiple of
    /// it, and under [`Mapping::DirectMapped`] the resulting line count must be a power
    /// of two so the index width is an exact log2.
    pub fn new(capacity_bytes: u32, block_size: u32, mapping: Mapping) -> Result<Self, ConfigError> {
        debug_assert!(block_size.is_power_of_two(), "block size must be a power of two");
        if capacity_bytes == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        if capacity_bytes % block_size != 0 {
            return Err(ConfigError::UnalignedCapacity {
                capacity: capacity_bytes,
                block_size,
            });
        }
        let lines = capacity_bytes / block_size;
        let offset_bits = block_size.trailing_zeros();
        let index_bits = match mapping {
            Mapping::DirectMapped => {
                if !lines.is_power_of_two() {
                    return Err(ConfigError::LineCountNotPowerOfTwo { lines });
                }
                lines.trailing_zeros()
            }
            Mapping::FullyAssociative => 0,
        };
        Ok(Self {
            offset_bits,
            index_bits,
            tag_bits: ADDRESS_BITS - offset_bits - index_bits,
        })
    }

    pub fn decode(&self, address: u32) -> DecodedAddress {
        DecodedAddress {
            offset: extract_bits(address, 0, self.offset_bits),
            index: extract_bits(address, self.offset_bits, self.index_bits),
            tag: extract_bits(address, self.offset_bits + self.index_bits, self.tag_bits),
        }
    }
}
