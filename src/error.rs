use core::fmt;

/// Error kinds surfaced by parameter construction, key generation, encryption and decryption.
///
/// None of these are recovered internally; every operation either succeeds completely or
/// returns one of these variants with no partial output.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArlcError {
    /// A parameter-set invariant was violated at construction (see [`crate::params::Params::new`]).
    InvalidParameters(&'static str),
    /// A plaintext symbol lies outside `[0, p)`.
    SymbolOutOfRange {
        /// The offending symbol value.
        symbol: u32,
        /// The alphabet size `p` the symbol was checked against.
        p: u32,
    },
    /// The randomness source could not supply the requested bytes.
    RandomnessFailure,
    /// A ciphertext component lies outside `[0, q)`, or the byte length does not match the
    /// expected per-symbol size.
    MalformedCiphertext(&'static str),
}

impl fmt::Display for ArlcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameters(msg) => write!(f, "invalid parameters: {msg}"),
            Self::SymbolOutOfRange { symbol, p } => {
                write!(f, "symbol {symbol} is not in valid range [0, {p})")
            }
            Self::RandomnessFailure => write!(f, "randomness source failed"),
            Self::MalformedCiphertext(msg) => write!(f, "malformed ciphertext: {msg}"),
        }
    }
}

impl std::error::Error for ArlcError {}

/// If the condition is not met, return the given error.
macro_rules! ensure {
    ($cond:expr, $err:expr $(,)?) => {
        if !$cond {
            return Err($err);
        }
    };
}

pub(crate) use ensure;
