use std::time::Duration;

/// Pool sizing and the time bounds applied to store access
#[derive(Debug, Clone)]
pub struct StoreSettings {
    pub max_connections: u32,
    /// Bound on acquiring a connection (and on the initial connect)
    pub connect_timeout: Duration,
    /// Bound on a single store operation
    pub operation_timeout: Duration,
    pub check_interval: Duration,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            max_connections: 10,
            connect_timeout: Duration::from_secs(5),
            operation_timeout: Duration::from_secs(45),
            check_interval: Duration::from_secs(10),
        }
    }
}
