//! Defaults for the adapter and its subgraph queries.

/// Upper bound on pairs loaded into the symbol catalog.
pub const DEFAULT_PAIRS_LIMIT: u32 = 500;

/// Bars requested when the chart omits `countback`.
pub const DEFAULT_COUNTBACK: u32 = 1000;

/// TTL of cache-first subgraph responses, in seconds.
pub const DEFAULT_CACHE_TTL_SECS: u64 = 60;

/// Exchange advertised to the chart.
pub const DEFAULT_EXCHANGE_VALUE: &str = "U2USWAP";
pub const DEFAULT_EXCHANGE_NAME: &str = "U2USwap";
pub const DEFAULT_EXCHANGE_DESC: &str = "U2USwap DEX";
