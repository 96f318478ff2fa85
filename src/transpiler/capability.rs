//! Dialect version gating.

use serde::{Deserialize, Serialize};

use crate::error::{PushdownError, PushdownResult};

/// Target dialect version, ordered component-wise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl Version {
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Newest version any gate in this crate asks for.
    pub const LATEST: Version = Version::new(8, 5, 0);

    /// Parse `MAJOR[.MINOR[.PATCH]]`; missing components are zero.
    pub fn parse(input: &str) -> PushdownResult<Self> {
        let invalid = || PushdownError::InvalidVersion(input.to_string());
        let mut parts = input.trim().split('.');
        let mut next = |required: bool| -> PushdownResult<u32> {
            match parts.next() {
                Some(p) => p.parse::<u32>().map_err(|_| invalid()),
                None if required => Err(invalid()),
                None => Ok(0),
            }
        };
        let version = Version::new(next(true)?, next(false)?, next(false)?);
        if parts.next().is_some() {
            return Err(invalid());
        }
        Ok(version)
    }
}

impl Default for Version {
    fn default() -> Self {
        Version::LATEST
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl std::str::FromStr for Version {
    type Err = PushdownError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Version::parse(s)
    }
}

/// Target syntax only available from a given dialect version on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    /// BIT_AND / BIT_OR / BIT_XOR aggregates
    BitwiseAggregates,
    /// APPROX_COUNT_DISTINCT aggregate
    ApproxCountDistinct,
    /// UUID() generator
    Uuid,
    /// TO_CHAR / TO_DATE / TO_TIMESTAMP with specifier formats
    SpecifierFormats,
}

impl Feature {
    pub const ALL: [Feature; 4] = [
        Feature::BitwiseAggregates,
        Feature::ApproxCountDistinct,
        Feature::Uuid,
        Feature::SpecifierFormats,
    ];

    /// First dialect version with this feature.
    pub const fn min_version(&self) -> Version {
        match self {
            Feature::ApproxCountDistinct => Version::new(6, 0, 0),
            Feature::SpecifierFormats => Version::new(6, 5, 0),
            Feature::BitwiseAggregates => Version::new(7, 0, 0),
            Feature::Uuid => Version::new(8, 5, 0),
        }
    }
}

impl std::fmt::Display for Feature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Feature::BitwiseAggregates => write!(f, "bitwise aggregates"),
            Feature::ApproxCountDistinct => write!(f, "approx count distinct"),
            Feature::Uuid => write!(f, "uuid generation"),
            Feature::SpecifierFormats => write!(f, "specifier date formats"),
        }
    }
}

/// Monotonic version predicate over the target dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Capabilities {
    version: Version,
}

impl Capabilities {
    pub fn new(version: Version) -> Self {
        Self { version }
    }

    pub fn version(&self) -> Version {
        self.version
    }

    /// True if the target is at least `min`.
    pub fn supports(&self, min: Version) -> bool {
        self.version >= min
    }

    pub fn has(&self, feature: Feature) -> bool {
        self.supports(feature.min_version())
    }
}
