use core::{fmt, str::FromStr};

/// Hardfork names.
pub mod name {
    /// Frontier hardfork name.
    pub const CHAINSTART: &str = "chainstart";
    /// Homestead hardfork name.
    pub const HOMESTEAD: &str = "homestead";
    /// DAO hardfork name.
    pub const DAO: &str = "dao";
    /// Tangerine Whistle hardfork name.
    pub const TANGERINE_WHISTLE: &str = "tangerineWhistle";
    /// Spurious Dragon hardfork name.
    pub const SPURIOUS_DRAGON: &str = "spuriousDragon";
    /// Byzantium hardfork name.
    pub const BYZANTIUM: &str = "byzantium";
    /// Constantinople hardfork name.
    pub const CONSTANTINOPLE: &str = "constantinople";
    /// Petersburg hardfork name.
    pub const PETERSBURG: &str = "petersburg";
    /// Istanbul hardfork name.
    pub const ISTANBUL: &str = "istanbul";
    /// Muir Glacier hardfork name.
    pub const MUIR_GLACIER: &str = "muirGlacier";
    /// Berlin hardfork name.
    pub const BERLIN: &str = "berlin";
    /// London hardfork name.
    pub const LONDON: &str = "london";
    /// Arrow Glacier hardfork name.
    pub const ARROW_GLACIER: &str = "arrowGlacier";
    /// Gray Glacier hardfork name.
    pub const GRAY_GLACIER: &str = "grayGlacier";
    /// Merge hardfork name.
    pub const MERGE: &str = "merge";
    /// Shanghai hardfork name.
    pub const SHANGHAI: &str = "shanghai";
    /// Cancun hardfork name.
    pub const CANCUN: &str = "cancun";
    /// Prague hardfork name.
    pub const PRAGUE: &str = "prague";
    /// Osaka hardfork name.
    pub const OSAKA: &str = "osaka";
}

/// L1 hardfork type with ONLY supported hardforks.
///
/// Variants are ordered by activation on mainnet.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Hardfork {
    /// Frontier          0
    Chainstart = 0,
    /// Homestead         1150000
    Homestead = 1,
    /// DAO fork          1920000
    Dao = 2,
    /// Tangerine Whistle 2463000
    TangerineWhistle = 3,
    /// Spurious Dragon   2675000
    SpuriousDragon = 4,
    /// Byzantium         4370000
    Byzantium = 5,
    /// Constantinople    7280000 is overwritten with PETERSBURG
    Constantinople = 6,
    /// Petersburg        7280000
    Petersburg = 7,
    /// Istanbul          9069000
    Istanbul = 8,
    /// Muir Glacier      9200000
    MuirGlacier = 9,
    /// Berlin            12244000
    Berlin = 10,
    /// London            12965000
    London = 11,
    /// Arrow Glacier     13773000
    ArrowGlacier = 12,
    /// Gray Glacier      15050000
    GrayGlacier = 13,
    /// Paris/Merge       15537394 (TTD: 58750000000000000000000)
    Merge = 14,
    /// Shanghai          17034870 (Timestamp: 1681338455)
    Shanghai = 15,
    /// Cancun            19426589 (Timestamp: 1710338135)
    Cancun = 16,
    /// Prague            22431084 (Timestamp: 1746612311)
    Prague = 17,
    /// Osaka             (Timestamp: 1764798551)
    #[default]
    Osaka = 18,
}

impl Hardfork {
    /// All supported hardforks, oldest first.
    pub const ALL: [Hardfork; 19] = [
        Hardfork::Chainstart,
        Hardfork::Homestead,
        Hardfork::Dao,
        Hardfork::TangerineWhistle,
        Hardfork::SpuriousDragon,
        Hardfork::Byzantium,
        Hardfork::Constantinople,
        Hardfork::Petersburg,
        Hardfork::Istanbul,
        Hardfork::MuirGlacier,
        Hardfork::Berlin,
        Hardfork::London,
        Hardfork::ArrowGlacier,
        Hardfork::GrayGlacier,
        Hardfork::Merge,
        Hardfork::Shanghai,
        Hardfork::Cancun,
        Hardfork::Prague,
        Hardfork::Osaka,
    ];

    /// Returns the name used in configuration files.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Hardfork::Chainstart => name::CHAINSTART,
            Hardfork::Homestead => name::HOMESTEAD,
            Hardfork::Dao => name::DAO,
            Hardfork::TangerineWhistle => name::TANGERINE_WHISTLE,
            Hardfork::SpuriousDragon => name::SPURIOUS_DRAGON,
            Hardfork::Byzantium => name::BYZANTIUM,
            Hardfork::Constantinople => name::CONSTANTINOPLE,
            Hardfork::Petersburg => name::PETERSBURG,
            Hardfork::Istanbul => name::ISTANBUL,
            Hardfork::MuirGlacier => name::MUIR_GLACIER,
            Hardfork::Berlin => name::BERLIN,
            Hardfork::London => name::LONDON,
            Hardfork::ArrowGlacier => name::ARROW_GLACIER,
            Hardfork::GrayGlacier => name::GRAY_GLACIER,
            Hardfork::Merge => name::MERGE,
            Hardfork::Shanghai => name::SHANGHAI,
            Hardfork::Cancun => name::CANCUN,
            Hardfork::Prague => name::PRAGUE,
            Hardfork::Osaka => name::OSAKA,
        }
    }

    /// Whether the hardfork has an EIP-1559 fee market.
    pub fn supports_eip1559(&self) -> bool {
        *self >= Hardfork::London
    }
}

/// Error type that occurs when converting a string to a [`Hardfork`].
#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    /// Unknown hardfork name.
    #[error("Unknown hardfork name: {0}")]
    UnknownHardforkName(String),
}

impl TryFrom<&str> for Hardfork {
    type Error = ConversionError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Hardfork::ALL
            .into_iter()
            .find(|hardfork| hardfork.as_str() == value)
            .ok_or_else(|| ConversionError::UnknownHardforkName(value.to_string()))
    }
}

impl FromStr for Hardfork {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Hardfork::try_from(s)
    }
}

impl fmt::Display for Hardfork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl serde::Serialize for Hardfork {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> serde::Deserialize<'de> for Hardfork {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_configuration_names() -> Result<(), ConversionError> {
        assert_eq!("london".parse::<Hardfork>()?, Hardfork::London);
        assert_eq!(
            "tangerineWhistle".parse::<Hardfork>()?,
            Hardfork::TangerineWhistle
        );
        assert_eq!(Hardfork::try_from("chainstart")?, Hardfork::Chainstart);
        assert_eq!(Hardfork::try_from("osaka")?, Hardfork::Osaka);

        Ok(())
    }

    #[test]
    fn rejects_unknown_names() {
        let error = "London".parse::<Hardfork>().unwrap_err();
        assert_eq!(error.to_string(), "Unknown hardfork name: London");

        assert!("latest".parse::<Hardfork>().is_err());
    }

    #[test]
    fn all_is_sorted_and_named_uniquely() {
        assert!(
            Hardfork::ALL
                .windows(2)
                .all(|pair| matches!(pair, [older, newer] if older < newer))
        );

        for hardfork in Hardfork::ALL {
            assert_eq!(hardfork.as_str().parse::<Hardfork>().ok(), Some(hardfork));
        }
    }

    #[test]
    fn newest_hardfork_is_the_default() {
        assert_eq!(Hardfork::default(), Hardfork::Osaka);
        assert_eq!(Hardfork::ALL.last(), Some(&Hardfork::default()));
    }

    #[test]
    fn eip1559_starts_at_london() {
        assert!(!Hardfork::Berlin.supports_eip1559());
        assert!(Hardfork::London.supports_eip1559());
        assert!(Hardfork::Osaka.supports_eip1559());
    }

    #[test]
    fn serde_uses_configuration_names() -> Result<(), serde_json::Error> {
        assert_eq!(
            serde_json::to_string(&Hardfork::ArrowGlacier)?,
            "\"arrowGlacier\""
        );

        let hardfork: Hardfork = serde_json::from_str("\"merge\"")?;
        assert_eq!(hardfork, Hardfork::Merge);

        assert!(serde_json::from_str::<Hardfork>("\"paris\"").is_err());

        Ok(())
    }
}
