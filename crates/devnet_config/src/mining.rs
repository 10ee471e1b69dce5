use core::num::NonZeroU64;

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Interval mining as written in a configuration file.
///
/// Either a fixed interval in milliseconds, where zero disables interval
/// mining, or an inclusive `[min, max]` range from which each interval is
/// drawn.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum IntervalConfig {
    FixedOrDisabled(u64),
    Range([u64; 2]),
}

impl Default for IntervalConfig {
    fn default() -> Self {
        Self::FixedOrDisabled(0)
    }
}

/// Configuration for interval mining.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Interval {
    Fixed(NonZeroU64),
    Range { min: u64, max: u64 },
}

impl Interval {
    /// Generates a (random) interval based on the configuration.
    pub fn generate_interval(&self) -> u64 {
        match self {
            Interval::Fixed(interval) => interval.get(),
            Interval::Range { min, max } => rand::rng().random_range(*min..=*max),
        }
    }
}

/// An error that occurs when trying to convert [`IntervalConfig`] to an
/// `Option<Interval>`.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum IntervalConfigConversionError {
    /// The minimum value in the range is greater than the maximum value.
    #[error("Minimum value in range is greater than maximum value")]
    MinGreaterThanMax,
}

impl TryFrom<&IntervalConfig> for Option<Interval> {
    type Error = IntervalConfigConversionError;

    fn try_from(value: &IntervalConfig) -> Result<Self, Self::Error> {
        match *value {
            // Zero implies disabled
            IntervalConfig::FixedOrDisabled(value) => Ok(NonZeroU64::new(value).map(Interval::Fixed)),
            IntervalConfig::Range([min, max]) => {
                if max >= min {
                    Ok(Some(Interval::Range { min, max }))
                } else {
                    Err(IntervalConfigConversionError::MinGreaterThanMax)
                }
            }
        }
    }
}

/// Order in which pending transactions are mined.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MineOrdering {
    /// Transactions are mined in the order they were received.
    Fifo,
    /// Transactions with the highest priority fee are mined first.
    #[default]
    Priority,
}

/// Mempool section of [`MiningConfig`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct MemPoolConfig {
    #[serde(default)]
    pub order: MineOrdering,
}

fn default_auto() -> bool {
    true
}

/// Mining section of a network profile.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct MiningConfig {
    /// Whether a block is mined for every transaction.
    #[serde(default = "default_auto")]
    pub auto: bool,
    #[serde(default)]
    pub interval: IntervalConfig,
    #[serde(default)]
    pub mempool: MemPoolConfig,
}

impl Default for MiningConfig {
    fn default() -> Self {
        Self {
            auto: default_auto(),
            interval: IntervalConfig::default(),
            mempool: MemPoolConfig::default(),
        }
    }
}

/// Configuration for the provider's mempool.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemPool {
    pub order: MineOrdering,
}

/// Configuration for the provider's miner.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mining {
    pub auto_mine: bool,
    pub interval: Option<Interval>,
    pub mem_pool: MemPool,
}

impl Default for Mining {
    fn default() -> Self {
        Self {
            auto_mine: true,
            interval: None,
            mem_pool: MemPool::default(),
        }
    }
}

impl TryFrom<&MiningConfig> for Mining {
    type Error = IntervalConfigConversionError;

    fn try_from(value: &MiningConfig) -> Result<Self, Self::Error> {
        Ok(Self {
            auto_mine: value.auto,
            interval: Option::<Interval>::try_from(&value.interval)?,
            mem_pool: MemPool {
                order: value.mempool.order,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_interval_disables_interval_mining() -> Result<(), IntervalConfigConversionError> {
        let interval = Option::<Interval>::try_from(&IntervalConfig::FixedOrDisabled(0))?;
        assert_eq!(interval, None);

        let interval = Option::<Interval>::try_from(&IntervalConfig::FixedOrDisabled(1_000))?;
        assert_eq!(interval, NonZeroU64::new(1_000).map(Interval::Fixed));

        Ok(())
    }

    #[test]
    fn range_requires_ordered_bounds() {
        assert_eq!(
            Option::<Interval>::try_from(&IntervalConfig::Range([10, 5])),
            Err(IntervalConfigConversionError::MinGreaterThanMax)
        );
        assert_eq!(
            Option::<Interval>::try_from(&IntervalConfig::Range([5, 5])),
            Ok(Some(Interval::Range { min: 5, max: 5 }))
        );
    }

    #[test]
    fn generated_interval_stays_in_range() {
        let interval = Interval::Range { min: 100, max: 200 };

        for _ in 0..100 {
            let generated = interval.generate_interval();
            assert!((100..=200).contains(&generated));
        }
    }

    #[test]
    fn interval_accepts_number_or_pair() -> Result<(), serde_json::Error> {
        let config: MiningConfig = serde_json::from_str(r#"{ "interval": 3000 }"#)?;
        assert_eq!(config.interval, IntervalConfig::FixedOrDisabled(3000));
        assert!(config.auto);

        let config: MiningConfig =
            serde_json::from_str(r#"{ "auto": false, "interval": [1000, 2000] }"#)?;
        assert_eq!(config.interval, IntervalConfig::Range([1000, 2000]));
        assert!(!config.auto);

        Ok(())
    }

    #[test]
    fn mempool_order_is_lowercase() -> Result<(), serde_json::Error> {
        let config: MiningConfig = serde_json::from_str(r#"{ "mempool": { "order": "fifo" } }"#)?;
        let mining = Mining::try_from(&config).expect("interval is disabled");

        assert_eq!(mining.mem_pool.order, MineOrdering::Fifo);
        assert_eq!(mining.interval, None);

        Ok(())
    }
}
