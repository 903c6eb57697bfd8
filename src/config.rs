//! Runtime configuration.

use crate::time::TimeDuration;

/// Dwell of each phase and of each blink half period.
pub const DEFAULT_UNIT_MS: u64 = 1000;

/// Quiet time an input line needs before another rising edge counts.
pub const DEFAULT_DEBOUNCE_MS: u64 = 50;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config<D: TimeDuration> {
    pub unit: D,
    pub debounce: D,
}

impl<D: TimeDuration> Config<D> {
    pub fn new(unit: D, debounce: D) -> Self {
        Config { unit, debounce }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.unit == D::ZERO {
            return Err(ConfigError::ZeroUnit);
        }
        Ok(())
    }
}

impl<D: TimeDuration> Default for Config<D> {
    fn default() -> Self {
        Config {
            unit: D::from_millis(DEFAULT_UNIT_MS),
            debounce: D::from_millis(DEFAULT_DEBOUNCE_MS),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// A zero dwell unit would have the phases advance without ever
    /// showing.
    ZeroUnit,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::ZeroUnit => write!(f, "dwell unit must be non-zero"),
        }
    }
}
