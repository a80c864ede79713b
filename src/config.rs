//! Top-level cache configuration: capacity, mapping policy, and organization.

use std::fmt;
use std::str::FromStr;

use crate::context::{build_context, CacheContext};
use crate::error::ConfigError;

/// Where a block may be placed in the cache.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mapping {
    /// Each address has exactly one candidate line, selected by the index bits.
    DirectMapped,
    /// Any line may hold any block; replacement is FIFO.
    FullyAssociative,
}

/// Whether instruction and data accesses share one store.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Organization {
    Unified,
    Split,
}

impl FromStr for Mapping {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dm" => Ok(Mapping::DirectMapped),
            "fa" => Ok(Mapping::FullyAssociative),
            other => Err(ConfigError::UnknownMapping(other.to_string())),
        }
    }
}

impl FromStr for Organization {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "uc" => Ok(Organization::Unified),
            "sc" => Ok(Organization::Split),
            other => Err(ConfigError::UnknownOrganization(other.to_string())),
        }
    }
}

impl fmt::Display for Mapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mapping::DirectMapped => write!(f, "dm"),
            Mapping::FullyAssociative => write!(f, "fa"),
        }
    }
}

impl fmt::Display for Organization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Organization::Unified => write!(f, "uc"),
            Organization::Split => write!(f, "sc"),
        }
    }
}

/// The three values that fully describe a simulated cache.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CacheConfig {
    /// Total capacity in bytes. Halved per store under [`Organization::Split`].
    pub capacity_bytes: u32,
    pub mapping: Mapping,
    pub organization: Organization,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity_bytes: 1024,
            mapping: Mapping::DirectMapped,
            organization: Organization::Unified,
        }
    }
}

impl CacheConfig {
    pub fn new(capacity_bytes: u32, mapping: Mapping, organization: Organization) -> Self {
        Self {
            capacity_bytes,
            mapping,
            organization,
        }
    }

    /// Validates the configuration and builds a fresh, empty cache.
    pub fn build(&self) -> Result<CacheContext, ConfigError> {
        build_context(self.capacity_bytes, self.mapping, self.organization)
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    #[test]
    fn mapping_tokens() {
        assert_eq!("dm".parse::<Mapping>(), Ok(Mapping::DirectMapped));
        assert_eq!("fa".parse::<Mapping>(), Ok(Mapping::FullyAssociative));
        assert_eq!(
            "DM".parse::<Mapping>(),
            Err(ConfigError::UnknownMapping("DM".to_string()))
        );
    }

    #[test]
    fn organization_tokens() {
        assert_eq!("uc".parse::<Organization>(), Ok(Organization::Unified));
        assert_eq!("sc".parse::<Organization>(), Ok(Organization::Split));
        assert!(matches!(
            "split".parse::<Organization>(),
            Err(ConfigError::UnknownOrganization(_))
        ));
    }

    #[test]
    fn display_round_trips_tokens() {
        for m in [Mapping::DirectMapped, Mapping::FullyAssociative] {
            assert_eq!(m.to_string().parse::<Mapping>(), Ok(m));
        }
        for o in [Organization::Unified, Organization::Split] {
            assert_eq!(o.to_string().parse::<Organization>(), Ok(o));
        }
    }

    #[test]
    fn config_build_rejects_bad_capacity() {
        let cfg = CacheConfig::new(100, Mapping::FullyAssociative, Organization::Unified);
        assert!(cfg.build().is_err());
        assert!(CacheConfig::default().build().is_ok());
    }
}
