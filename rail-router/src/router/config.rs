//! Router configuration.

/// Default weight of one transfer when costs are folded into a scalar.
///
/// Must exceed the longest total distance any route can accumulate for the
/// weighted model to rank by transfers first.
pub const DEFAULT_TRANSFER_PENALTY: f64 = 100_000.0;

/// Default weight of one transfer when distance is the primary criterion.
pub const DEFAULT_SECONDARY_PENALTY: f64 = 1.0;

/// How a "fewer transfers first" search compares candidate routes.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum CostModel {
    /// Compare `(transfers, distance)` exactly: any route with fewer
    /// transfers wins regardless of distance.
    #[default]
    Lexicographic,

    /// Compare `transfers * transfer_penalty + distance`.
    ///
    /// Matches lexicographic order only while `transfer_penalty` exceeds
    /// every possible route distance.
    Weighted,
}

/// Configuration parameters for route search.
#[derive(Debug, Clone)]
pub struct RouterConfig {
    /// Rank routes by transfer count before distance.
    pub prefer_fewer_transfers: bool,

    /// Comparison used when `prefer_fewer_transfers` is set.
    pub cost_model: CostModel,

    /// Cost of one transfer under [`CostModel::Weighted`].
    pub transfer_penalty: f64,

    /// Cost of one transfer when `prefer_fewer_transfers` is unset.
    /// Keep this small so it only separates routes of similar length.
    pub secondary_penalty: f64,
}

impl RouterConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(
        prefer_fewer_transfers: bool,
        cost_model: CostModel,
        transfer_penalty: f64,
        secondary_penalty: f64,
    ) -> Self {
        Self {
            prefer_fewer_transfers,
            cost_model,
            transfer_penalty,
            secondary_penalty,
        }
    }

    /// Default configuration with the given transfer preference.
    pub fn with_preference(prefer_fewer_transfers: bool) -> Self {
        Self {
            prefer_fewer_transfers,
            ..Self::default()
        }
    }
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            prefer_fewer_transfers: true,
            cost_model: CostModel::Lexicographic,
            transfer_penalty: DEFAULT_TRANSFER_PENALTY,
            secondary_penalty: DEFAULT_SECONDARY_PENALTY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = RouterConfig::default();

        assert!(config.prefer_fewer_transfers);
        assert_eq!(config.cost_model, CostModel::Lexicographic);
        assert_eq!(config.transfer_penalty, 100_000.0);
        assert_eq!(config.secondary_penalty, 1.0);
    }

    #[test]
    fn with_preference() {
        let config = RouterConfig::with_preference(false);

        assert!(!config.prefer_fewer_transfers);
        assert_eq!(config.cost_model, CostModel::Lexicographic);
        assert_eq!(config.transfer_penalty, DEFAULT_TRANSFER_PENALTY);
    }

    #[test]
    fn custom_config() {
        let config = RouterConfig::new(true, CostModel::Weighted, 5_000.0, 0.5);

        assert!(config.prefer_fewer_transfers);
        assert_eq!(config.cost_model, CostModel::Weighted);
        assert_eq!(config.transfer_penalty, 5_000.0);
        assert_eq!(config.secondary_penalty, 0.5);
    }
}
