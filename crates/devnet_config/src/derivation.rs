use core::{fmt, str::FromStr};

/// Offset of hardened child indices in BIP-32.
const HARDENED_OFFSET: u32 = 1 << 31;

/// An error that occurs when parsing or extending a [`DerivationPath`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DerivationPathError {
    /// The path does not start with the master key `m`.
    #[error("Derivation path must start with `m`, found `{0}`")]
    MissingRoot(String),
    /// A segment between two separators is empty.
    #[error("Derivation path has an empty segment at position {position}")]
    EmptySegment {
        /// One-based position of the segment after `m`.
        position: usize,
    },
    /// A segment is not a decimal index.
    #[error("Invalid derivation path segment `{0}`")]
    InvalidSegment(String),
    /// An index does not fit in 31 bits.
    #[error("Derivation path index {0} must be less than 2^31")]
    IndexOutOfRange(u64),
}

/// A single step of a [`DerivationPath`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ChildIndex {
    index: u32,
    hardened: bool,
}

impl ChildIndex {
    /// Constructs a non-hardened child index.
    pub fn normal(index: u32) -> Result<Self, DerivationPathError> {
        Self::new(index, false)
    }

    /// Constructs a hardened child index.
    pub fn hardened(index: u32) -> Result<Self, DerivationPathError> {
        Self::new(index, true)
    }

    fn new(index: u32, hardened: bool) -> Result<Self, DerivationPathError> {
        if index < HARDENED_OFFSET {
            Ok(Self { index, hardened })
        } else {
            Err(DerivationPathError::IndexOutOfRange(index.into()))
        }
    }

    /// Constructs a child index from a literal known to be in range.
    const fn from_literal(index: u32, hardened: bool) -> Self {
        debug_assert!(index < HARDENED_OFFSET);

        Self { index, hardened }
    }

    /// Returns the index without the hardened offset.
    pub fn index(&self) -> u32 {
        self.index
    }

    /// Whether the index is hardened.
    pub fn is_hardened(&self) -> bool {
        self.hardened
    }

    /// Returns the index as encoded in BIP-32, including the hardened offset.
    pub fn to_bip32(&self) -> u32 {
        if self.hardened {
            self.index | HARDENED_OFFSET
        } else {
            self.index
        }
    }
}

impl fmt::Display for ChildIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.hardened {
            write!(f, "{}'", self.index)
        } else {
            write!(f, "{}", self.index)
        }
    }
}

/// A BIP-32 key derivation path, e.g. `m/44'/60'/0'/0`.
///
/// Used as a template: the key of the n-th test account is derived at the
/// path extended by the account's index.
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
#[serde(try_from = "String", into = "String")]
pub struct DerivationPath {
    children: Vec<ChildIndex>,
}

impl DerivationPath {
    /// Constructs a path from the provided children.
    pub fn new(children: Vec<ChildIndex>) -> Self {
        Self { children }
    }

    /// The BIP-44 path of external Ethereum addresses of the first account:
    /// `m/44'/60'/0'/0`.
    pub fn ethereum() -> Self {
        let mut path = Self::ethereum_account();
        path.children.push(ChildIndex::from_literal(0, false));
        path
    }

    /// The BIP-44 path of the first Ethereum account: `m/44'/60'/0'`.
    pub fn ethereum_account() -> Self {
        Self {
            children: vec![
                ChildIndex::from_literal(44, true),
                ChildIndex::from_literal(60, true),
                ChildIndex::from_literal(0, true),
            ],
        }
    }

    /// Returns the children of the path, excluding the root.
    pub fn children(&self) -> &[ChildIndex] {
        &self.children
    }

    /// Returns a new path extended by a non-hardened index.
    pub fn child(&self, index: u32) -> Result<Self, DerivationPathError> {
        let mut children = self.children.clone();
        children.push(ChildIndex::normal(index)?);

        Ok(Self { children })
    }
}

impl FromStr for DerivationPath {
    type Err = DerivationPathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut segments = s.split('/');

        if segments.next() != Some("m") {
            return Err(DerivationPathError::MissingRoot(s.to_owned()));
        }

        let children = segments
            .enumerate()
            .map(|(idx, segment)| {
                if segment.is_empty() {
                    return Err(DerivationPathError::EmptySegment { position: idx + 1 });
                }

                let (digits, hardened) = match segment.strip_suffix('\'') {
                    Some(digits) => (digits, true),
                    None => (segment, false),
                };

                if digits.is_empty() || !digits.bytes().all(|byte| byte.is_ascii_digit()) {
                    return Err(DerivationPathError::InvalidSegment(segment.to_owned()));
                }

                let index: u64 = digits
                    .parse()
                    .map_err(|_error| DerivationPathError::InvalidSegment(segment.to_owned()))?;

                let index = u32::try_from(index)
                    .map_err(|_error| DerivationPathError::IndexOutOfRange(index))?;

                ChildIndex::new(index, hardened)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { children })
    }
}

impl TryFrom<String> for DerivationPath {
    type Error = DerivationPathError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DerivationPath> for String {
    fn from(value: DerivationPath) -> Self {
        value.to_string()
    }
}

impl fmt::Display for DerivationPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("m")?;

        for child in &self.children {
            write!(f, "/{child}")?;
        }

        Ok(())
    }
}
