//! Protocol Constants
//!
//! All magic numbers and configuration values for the FundMe protocol.

/// Native settlement asset
pub mod native {
    /// Fractional decimal places of the native asset's base unit
    pub const DECIMALS: u8 = 18;
    /// One whole unit of the native asset in base units
    pub const ONE: u128 = 1_000_000_000_000_000_000;
}

/// Reference currency (USD) used for the admission check
pub mod usd {
    /// Fractional decimal places used for reference-currency values
    pub const DECIMALS: u8 = 18;
    /// One whole reference-currency unit
    pub const ONE: u128 = 1_000_000_000_000_000_000;
}

/// Contribution limits
pub mod limits {
    use super::usd::ONE;

    /// Minimum contribution, denominated in the reference currency.
    /// A deposit is admitted only if its converted value meets this.
    pub const MINIMUM_USD: u128 = 50 * ONE;
}

/// Price feed configuration
pub mod feed {
    /// Decimal precision commonly reported by aggregator feeds.
    /// Informational default for the mock feed; conversion always uses the
    /// decimals returned by the feed itself.
    pub const DEFAULT_DECIMALS: u8 = 8;

    /// Initial answer for the substitute feed in local environments
    /// ($2,000.00000000 per native unit)
    pub const INITIAL_ANSWER: i64 = 2_000_00000000;

    /// Answers older than this many blocks are reported as stale
    pub const MAX_ANSWER_AGE_BLOCKS: u64 = 6;

    /// Widest feed precision the conversion math accepts; anything beyond
    /// cannot be rescaled inside u128 and is treated as malformed
    pub const MAX_DECIMALS: u8 = 38;
}
