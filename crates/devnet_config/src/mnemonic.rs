use core::{fmt, str::FromStr};

use crate::redact::REDACTED;

/// Word counts allowed by BIP-39.
const VALID_WORD_COUNTS: [usize; 5] = [12, 15, 18, 21, 24];

/// An error that occurs when parsing a [`Mnemonic`].
///
/// Errors never contain the phrase's words.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MnemonicError {
    /// The phrase has a word count not allowed by BIP-39.
    #[error("Mnemonic must have 12, 15, 18, 21 or 24 words, found {0}")]
    InvalidWordCount(usize),
    /// A word contains characters other than lowercase ASCII letters.
    #[error("Mnemonic word at position {position} must consist of lowercase ASCII letters")]
    InvalidWord {
        /// One-based position of the word in the phrase.
        position: usize,
    },
}

/// A BIP-39 seed phrase from which test accounts are derived.
///
/// The words are stored separated by single spaces. Only the shape of the
/// phrase is checked; the wordlist and checksum are left to the key-derivation
/// layer.
#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(try_from = "String", into = "String")]
pub struct Mnemonic {
    phrase: String,
}

impl Mnemonic {
    /// Returns the publicly known test phrase
    /// `test test test test test test test test test test test junk`.
    ///
    /// Secret keys of accounts derived from this phrase are published. They
    /// must never hold real funds.
    pub fn public_test_phrase() -> Self {
        Self {
            phrase: devnet_defaults::MNEMONIC.to_owned(),
        }
    }

    /// Whether this is the publicly known test phrase.
    pub fn is_public_test_phrase(&self) -> bool {
        self.phrase == devnet_defaults::MNEMONIC
    }

    /// Returns the phrase.
    ///
    /// Avoid passing the result to loggers or error messages.
    pub fn phrase(&self) -> &str {
        &self.phrase
    }

    /// Returns the number of words in the phrase.
    pub fn word_count(&self) -> usize {
        self.phrase.split(' ').count()
    }
}

impl FromStr for Mnemonic {
    type Err = MnemonicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let words: Vec<&str> = s.split_whitespace().collect();

        if !VALID_WORD_COUNTS.contains(&words.len()) {
            return Err(MnemonicError::InvalidWordCount(words.len()));
        }

        if let Some(position) = words
            .iter()
            .position(|word| !word.bytes().all(|byte| byte.is_ascii_lowercase()))
        {
            return Err(MnemonicError::InvalidWord {
                position: position + 1,
            });
        }

        Ok(Self {
            phrase: words.join(" "),
        })
    }
}

impl TryFrom<String> for Mnemonic {
    type Error = MnemonicError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Mnemonic> for String {
    fn from(value: Mnemonic) -> Self {
        value.phrase
    }
}

impl fmt::Debug for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_public_test_phrase() {
            f.debug_tuple("Mnemonic").field(&self.phrase).finish()
        } else {
            f.debug_tuple("Mnemonic").field(&REDACTED).finish()
        }
    }
}
