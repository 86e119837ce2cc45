//! Configuration system for the RV32I engine.
//!
//! This module defines the configuration structures used to build a [`Hart`](crate::Hart).
//! It provides:
//! 1. **Defaults:** Baseline constants (memory capacity, zero register policy).
//! 2. **Structures:** Hierarchical config for memory and the register file.
//! 3. **Loading:** [`Config::from_json`] with validation.
//!
//! Every field is optional in JSON; omitted fields take their default.

use serde::Deserialize;
use thiserror::Error;

use crate::common::reg::ZeroRegister;

/// Default configuration constants for the engine.
mod defaults {
    /// Default data memory capacity (64 KiB).
    pub const MEMORY_SIZE: usize = 64 * 1024;
}

/// Errors produced while loading a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The input is not valid JSON or does not match the schema.
    #[error("invalid configuration: {0}")]
    Parse(#[from] serde_json::Error),
    /// The configured memory has no capacity.
    #[error("memory size must be non-zero")]
    ZeroSizedMemory,
}

/// Root configuration structure.
///
/// # Examples
///
/// ```
/// use rv32i_engine::config::Config;
/// use rv32i_engine::ZeroRegister;
///
/// let json = r#"{
///     "memory": { "size": 4096 },
///     "registers": { "zero_register": "writable" }
/// }"#;
///
/// let config = Config::from_json(json)?;
/// assert_eq!(config.memory.size, 4096);
/// assert_eq!(config.registers.zero_register, ZeroRegister::Writable);
/// # Ok::<(), rv32i_engine::config::ConfigError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Data memory configuration
    #[serde(default)]
    pub memory: MemoryConfig,
    /// Register file configuration
    #[serde(default)]
    pub registers: RegisterConfig,
}

impl Config {
    /// Parses and validates a JSON configuration.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Parse`] for malformed input and
    /// [`ConfigError::ZeroSizedMemory`] if `memory.size` is zero.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks constraints that the schema cannot express.
    ///
    /// # Errors
    ///
    /// [`ConfigError::ZeroSizedMemory`] if `memory.size` is zero.
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.memory.size == 0 {
            return Err(ConfigError::ZeroSizedMemory);
        }
        Ok(())
    }
}

/// Data memory configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MemoryConfig {
    /// Capacity in bytes
    #[serde(default = "MemoryConfig::default_size")]
    pub size: usize,
}

impl MemoryConfig {
    const fn default_size() -> usize {
        defaults::MEMORY_SIZE
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            size: defaults::MEMORY_SIZE,
        }
    }
}

/// Register file configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RegisterConfig {
    /// Behaviour of register `x0` (`"hardwired"` or `"writable"`)
    #[serde(default)]
    pub zero_register: ZeroRegister,
}
