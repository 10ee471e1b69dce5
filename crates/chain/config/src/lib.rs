//! Hardfork activation schedules of chains.

/// Fork condition for a hardfork.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ForkCondition {
    /// Activation based on block number.
    Block(u64),
    /// Activation based on UNIX timestamp.
    Timestamp(u64),
}

/// A type representing the activation of a hardfork.
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HardforkActivation<HardforkT> {
    /// The condition for the hardfork activation.
    pub condition: ForkCondition,
    /// The hardfork to be activated.
    pub hardfork: HardforkT,
}

/// A struct that stores the hardforks for a chain.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(transparent)]
pub struct HardforkActivations<HardforkT> {
    /// Activations in ascending order
    hardforks: Vec<HardforkActivation<HardforkT>>,
}

impl<HardforkT> HardforkActivations<HardforkT> {
    /// Constructs a new instance with the provided hardforks.
    pub fn new(hardforks: Vec<HardforkActivation<HardforkT>>) -> Self {
        Self { hardforks }
    }

    /// Returns the inner hardforks.
    pub fn into_inner(self) -> Vec<HardforkActivation<HardforkT>> {
        self.hardforks
    }

    /// Creates a new instance for a new chain with the provided hardfork.
    pub fn with_hardfork(hardfork: HardforkT) -> Self {
        Self {
            hardforks: vec![HardforkActivation {
                condition: ForkCondition::Block(0),
                hardfork,
            }],
        }
    }

    /// Whether no hardforks activations are present.
    pub fn is_empty(&self) -> bool {
        self.hardforks.is_empty()
    }

    /// Returns an iterator over the activations, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &HardforkActivation<HardforkT>> {
        self.hardforks.iter()
    }
}

impl<HardforkT: PartialEq> HardforkActivations<HardforkT> {
    /// Whether the provided hardfork is activated at some point of the chain's
    /// history.
    pub fn contains(&self, hardfork: &HardforkT) -> bool {
        self.hardforks
            .iter()
            .any(|activation| activation.hardfork == *hardfork)
    }
}

impl<HardforkT: Clone> HardforkActivations<HardforkT> {
    /// Returns the hardfork corresponding to the provided block number and
    /// timestamp.
    pub fn hardfork_at_block(&self, block_number: u64, timestamp: u64) -> Option<HardforkT> {
        self.hardforks
            .iter()
            .rev()
            .find(|HardforkActivation { condition, .. }| match condition {
                ForkCondition::Block(activation) => block_number >= *activation,
                ForkCondition::Timestamp(activation) => timestamp >= *activation,
            })
            .map(|activation| activation.hardfork.clone())
    }

    /// Returns the hardfork corresponding to the provided block number when
    /// the block's timestamp is unknown.
    ///
    /// Timestamp-based activations are skipped.
    pub fn hardfork_at_block_number(&self, block_number: u64) -> Option<HardforkT> {
        self.hardforks
            .iter()
            .rev()
            .find(|HardforkActivation { condition, .. }| match condition {
                ForkCondition::Block(activation) => block_number >= *activation,
                ForkCondition::Timestamp(_) => false,
            })
            .map(|activation| activation.hardfork.clone())
    }
}

impl<HardforkT: Clone> From<&[HardforkActivation<HardforkT>]> for HardforkActivations<HardforkT> {
    fn from(hardforks: &[HardforkActivation<HardforkT>]) -> Self {
        Self {
            hardforks: hardforks.to_vec(),
        }
    }
}

/// Type that stores the configuration for a chain.
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainConfig<HardforkT> {
    /// Chain name
    pub name: String,
    /// Hardfork activations for the chain
    pub hardfork_activations: HardforkActivations<HardforkT>,
}
