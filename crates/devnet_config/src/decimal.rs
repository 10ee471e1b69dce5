//! Serde helpers for balances written as decimal strings, e.g.
//! `"10000000000000000000000"`.

/// (De)serializes an optional [`U256`](alloy_primitives::U256) as a decimal
/// string. `0x`-prefixed hexadecimal input is accepted as well.
pub(crate) mod opt {
    use alloy_primitives::U256;
    use serde::Deserialize;

    pub(crate) fn serialize<S>(value: &Option<U256>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match value {
            Some(value) => serializer.collect_str(value),
            None => serializer.serialize_none(),
        }
    }

    pub(crate) fn deserialize<'de, D>(deserializer: D) -> Result<Option<U256>, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Option::<String>::deserialize(deserializer)?
            .map(|value| {
                value.parse::<U256>().map_err(|error| {
                    serde::de::Error::custom(format!("invalid balance `{value}`: {error}"))
                })
            })
            .transpose()
    }
}
