//! Character-class predicates shared by every path algorithm.
//!
//! Windows exposes parallel narrow and wide APIs, so each algorithm in this
//! module tree is written once over a [`CodeUnit`] and instantiated for `u8`
//! (UTF-8 bytes) and `u16` (UTF-16 code units).

/// A single code unit of a narrow or wide path string.
pub trait CodeUnit: Copy + Eq + std::fmt::Debug {
    /// Builds a code unit from an ASCII byte.
    fn from_ascii(byte: u8) -> Self;

    /// Returns the ASCII byte for this unit, if it is ASCII.
    fn to_ascii(self) -> Option<u8>;

    /// Whether this unit is an alphabetic character (a drive letter).
    fn is_alphabetic(self) -> bool;

    /// Whether this unit is `/` or `\`.
    fn is_separator(self) -> bool {
        matches!(self.to_ascii(), Some(b'/' | b'\\'))
    }

    /// Whether this unit is the given ASCII byte.
    fn is(self, byte: u8) -> bool {
        self.to_ascii() == Some(byte)
    }
}

impl CodeUnit for u8 {
    fn from_ascii(byte: u8) -> Self {
        byte
    }

    fn to_ascii(self) -> Option<u8> {
        self.is_ascii().then_some(self)
    }

    fn is_alphabetic(self) -> bool {
        self.is_ascii_alphabetic()
    }
}

impl CodeUnit for u16 {
    fn from_ascii(byte: u8) -> Self {
        u16::from(byte)
    }

    fn to_ascii(self) -> Option<u8> {
        u8::try_from(self).ok().filter(u8::is_ascii)
    }

    fn is_alphabetic(self) -> bool {
        char::from_u32(u32::from(self)).is_some_and(char::is_alphabetic)
    }
}

/// Encodes an ASCII literal into code units.
pub(crate) fn ascii<U: CodeUnit>(text: &str) -> Vec<U> {
    text.bytes().map(U::from_ascii).collect()
}

/// Encodes a string as UTF-16, the representation of the wide APIs.
///
/// # Examples
///
/// ```
/// use winpath::path::unit::{from_wide, to_wide};
///
/// let wide = to_wide(r"c:\work");
/// assert_eq!(wide.len(), 7);
/// assert_eq!(from_wide(&wide), r"c:\work");
/// ```
#[must_use]
pub fn to_wide(text: &str) -> Vec<u16> {
    text.encode_utf16().collect()
}

/// Decodes UTF-16 code units, replacing unpaired surrogates.
#[must_use]
pub fn from_wide(wide: &[u16]) -> String {
    String::from_utf16_lossy(wide)
}

/// Reassembles narrow code units into a `String`.
///
/// Narrow algorithms only cut and splice at ASCII positions, so the bytes of
/// a `&str` input always come back as valid UTF-8.
pub(crate) fn into_narrow(bytes: Vec<u8>) -> String {
    String::from_utf8(bytes).unwrap_or_else(|e| String::from_utf8_lossy(e.as_bytes()).into_owned())
}
