//! Constants used throughout the VitalScan core crate.

/// Points awarded for each exact (case-insensitive) condition match.
pub const EXACT_MATCH_POINTS: u32 = 10;

/// Points awarded for each substring match in either direction.
pub const PARTIAL_MATCH_POINTS: u32 = 3;

/// Points awarded when the doctor handles the requested urgency.
pub const URGENCY_MATCH_POINTS: u32 = 2;

/// Flat bonus for every doctor who is not a general physician.
pub const SPECIALIST_BIAS_POINTS: u32 = 1;

/// Environment variable naming a roster YAML file. Read by the binaries only.
pub const ROSTER_FILE_ENV: &str = "VITALSCAN_ROSTER_FILE";

/// Environment variable holding the REST bind address. Read by the binaries only.
pub const REST_ADDR_ENV: &str = "VITALSCAN_REST_ADDR";

/// Default REST bind address.
pub const DEFAULT_REST_ADDR: &str = "0.0.0.0:3000";
