//! Symbol ciphertext and ciphertext sequence, plus their wire layout.

use crate::error::ArlcError;
use crate::params::Params;

/// One symbol's ciphertext: `U` (length-`n` ring vector) and `V` (a single ring element).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SymbolCipherText {
    pub(crate) u: Vec<u32>,
    pub(crate) v: u32,
}

impl SymbolCipherText {
    /// The `U` component.
    #[must_use]
    pub fn u(&self) -> &[u32] { &self.u }

    /// The `V` component.
    #[must_use]
    pub fn v(&self) -> u32 { self.v }
}

/// An ordered sequence of symbol ciphertexts; order is decryption order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CipherText(pub(crate) Vec<SymbolCipherText>);

impl CipherText {
    /// Number of symbol ciphertexts.
    #[must_use]
    pub fn len(&self) -> usize { self.0.len() }

    /// True when the ciphertext carries no symbols (the empty-plaintext case).
    #[must_use]
    pub fn is_empty(&self) -> bool { self.0.is_empty() }

    /// Iterates over the symbol ciphertexts in decryption order.
    pub fn iter(&self) -> core::slice::Iter<'_, SymbolCipherText> { self.0.iter() }

    /// Byte width of one ring element: `ceil(bits(q) / 8)`, byte-aligned little-endian.
    fn element_width(params: &Params) -> usize {
        let bits = 32 - (params.q - 1).leading_zeros();
        (bits as usize).div_ceil(8)
    }

    /// Byte width of one symbol ciphertext: `n` elements of `U` followed by `V`.
    #[must_use]
    pub fn symbol_width(params: &Params) -> usize { Self::element_width(params) * (params.n + 1) }

    /// Serializes to the wire layout: per symbol, `U`'s `n` elements (little-endian,
    /// byte-aligned) followed by the scalar `V`, symbols concatenated in order.
    #[must_use]
    pub fn to_bytes(&self, params: &Params) -> Vec<u8> {
        let width = Self::element_width(params);
        let mut out = Vec::with_capacity(self.0.len() * Self::symbol_width(params));
        for symbol in &self.0 {
            for &elem in &symbol.u {
                write_element(&mut out, elem, width);
            }
            write_element(&mut out, symbol.v, width);
        }
        out
    }

    /// Deserializes from the wire layout, validating that every ring element lies in `[0, q)`
    /// and that the byte length is a positive multiple of the per-symbol size (an empty byte
    /// slice deserializes to an empty ciphertext, matching the empty-plaintext edge case).
    ///
    /// # Errors
    /// Returns [`ArlcError::MalformedCiphertext`] on a bad length or an out-of-range element.
    pub fn from_bytes(bytes: &[u8], params: &Params) -> Result<Self, ArlcError> {
        let width = Self::element_width(params);
        let symbol_width = Self::symbol_width(params);
        if bytes.is_empty() {
            return Ok(Self(Vec::new()));
        }
        if symbol_width == 0 || bytes.len() % symbol_width != 0 {
            return Err(ArlcError::MalformedCiphertext(
                "ciphertext length is not a multiple of the per-symbol size",
            ));
        }
        let mut symbols = Vec::with_capacity(bytes.len() / symbol_width);
        for chunk in bytes.chunks_exact(symbol_width) {
            let mut u = Vec::with_capacity(params.n);
            for elem_bytes in chunk[..params.n * width].chunks_exact(width) {
                u.push(read_element(elem_bytes, params.q)?);
            }
            let v = read_element(&chunk[params.n * width..], params.q)?;
            symbols.push(SymbolCipherText { u, v });
        }
        Ok(Self(symbols))
    }
}

fn write_element(out: &mut Vec<u8>, value: u32, width: usize) {
    let bytes = value.to_le_bytes();
    out.extend_from_slice(&bytes[..width]);
}

fn read_element(bytes: &[u8], q: u32) -> Result<u32, ArlcError> {
    let mut buf = [0u8; 4];
    buf[..bytes.len()].copy_from_slice(bytes);
    let value = u32::from_le_bytes(buf);
    if value >= q {
        return Err(ArlcError::MalformedCiphertext("ring element is not in range [0, q)"));
    }
    Ok(value)
}
