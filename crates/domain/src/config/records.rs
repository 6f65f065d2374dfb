use crate::dns_record::{DEFAULT_PRIORITY, DEFAULT_TTL};
use serde::{Deserialize, Serialize};

/// Values filled in for zone records that leave TTL or priority unset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct RecordDefaultsConfig {
    #[serde(default = "default_ttl")]
    pub default_ttl: u32,

    #[serde(default = "default_priority")]
    pub default_priority: u16,
}

impl RecordDefaultsConfig {
    pub fn ttl_or_default(&self, ttl: Option<u32>) -> u32 {
        ttl.unwrap_or(self.default_ttl)
    }

    pub fn priority_or_default(&self, priority: Option<u16>) -> u16 {
        priority.unwrap_or(self.default_priority)
    }
}

impl Default for RecordDefaultsConfig {
    fn default() -> Self {
        Self {
            default_ttl: default_ttl(),
            default_priority: default_priority(),
        }
    }
}

fn default_ttl() -> u32 {
    DEFAULT_TTL
}

fn default_priority() -> u16 {
    DEFAULT_PRIORITY
}
