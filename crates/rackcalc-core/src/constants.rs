//! Constants for utilization rounding and process exit codes.

/// Utilization is reported with one decimal place.
pub const UTILIZATION_SCALE: f64 = 10.0;

/// Largest rack count the front ends will lay out. The distribution holds
/// one entry per rack, so this bounds its memory.
pub const MAX_RACK_TOTAL: i64 = 1_000_000;

/// Exit codes for the `rackcalc` binary.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error (I/O, terminal).
    pub const ERROR_GENERIC: i32 = 1;
    /// A field could not be parsed in strict mode.
    pub const ERROR_INVALID_INPUT: i32 = 2;
    /// Invalid configuration.
    pub const ERROR_CONFIG: i32 = 4;
}
