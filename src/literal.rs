//! Fixed-capacity text values that can be built entirely at compile time.
//!
//! [`FixedStr`] exists to give unit and dimension combinations a canonical,
//! comparable signature without any runtime string work. Every constructor is
//! a `const fn`; exceeding the capacity panics, which in a `const` context is a
//! compilation error rather than a runtime failure.

use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::ops::Deref;

/// An immutable UTF-8 string stored inline in `N` bytes.
#[derive(Clone, Copy)]
pub struct FixedStr<const N: usize> {
    bytes: [u8; N],
    len: usize,
}

impl<const N: usize> FixedStr<N> {
    /// The empty string.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            bytes: [0; N],
            len: 0,
        }
    }

    /// Copies `s` into a new fixed string.
    #[must_use]
    pub const fn from_str(s: &str) -> Self {
        Self::new().push_str(s)
    }

    /// Returns a copy of `self` with `s` appended.
    #[must_use]
    pub const fn push_str(self, s: &str) -> Self {
        self.push_bytes(s.as_bytes())
    }

    /// Returns a copy of `self` with a single ASCII byte appended.
    #[must_use]
    pub const fn push_ascii(self, byte: u8) -> Self {
        assert!(byte.is_ascii(), "FixedStr::push_ascii requires an ASCII byte");
        self.push_bytes(&[byte])
    }

    /// Concatenates another fixed string of any capacity onto `self`.
    #[must_use]
    pub const fn concat<const M: usize>(self, other: &FixedStr<M>) -> Self {
        let mut out = self;
        let mut i = 0;
        while i < other.len {
            assert!(out.len < N, "FixedStr capacity exceeded");
            out.bytes[out.len] = other.bytes[i];
            out.len += 1;
            i += 1;
        }
        out
    }

    /// Renders an unsigned integer in base 10.
    #[must_use]
    pub const fn from_u64(value: u64) -> Self {
        Self::new().push_u64(value)
    }

    /// Renders a signed integer in base 10.
    #[must_use]
    pub const fn from_i64(value: i64) -> Self {
        Self::new().push_i64(value)
    }

    /// Renders an integer ratio: `"n"` when `den == 1`, otherwise `"(n/d)"`.
    ///
    /// The ratio is printed as given; callers reduce it first when a canonical
    /// form is needed.
    #[must_use]
    pub const fn from_ratio(num: i64, den: i64) -> Self {
        Self::new().push_ratio(num, den)
    }

    /// Appends an unsigned integer in base 10.
    #[must_use]
    pub const fn push_u64(self, value: u64) -> Self {
        let mut digits = [0u8; 20];
        let mut count = 0;
        let mut v = value;
        loop {
            digits[count] = b'0' + (v % 10) as u8;
            count += 1;
            v /= 10;
            if v == 0 {
                break;
            }
        }
        let mut out = self;
        while count > 0 {
            count -= 1;
            out = out.push_ascii(digits[count]);
        }
        out
    }

    /// Appends a signed integer in base 10.
    #[must_use]
    pub const fn push_i64(self, value: i64) -> Self {
        let out = if value < 0 { self.push_ascii(b'-') } else { self };
        out.push_u64(value.unsigned_abs())
    }

    /// Appends an integer ratio, see [`FixedStr::from_ratio`].
    #[must_use]
    pub const fn push_ratio(self, num: i64, den: i64) -> Self {
        if den == 1 {
            self.push_i64(num)
        } else {
            self.push_ascii(b'(')
                .push_i64(num)
                .push_ascii(b'/')
                .push_i64(den)
                .push_ascii(b')')
        }
    }

    /// Length in bytes.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` when no bytes are stored.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Maximum number of bytes this string can hold.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Byte at `index`, or `None` past the end.
    #[must_use]
    pub const fn byte_at(&self, index: usize) -> Option<u8> {
        if index < self.len {
            Some(self.bytes[index])
        } else {
            None
        }
    }

    /// Lexicographic comparison by byte, then by length.
    #[must_use]
    pub const fn const_cmp<const M: usize>(&self, other: &FixedStr<M>) -> Ordering {
        compare_bytes(&self.bytes, self.len, &other.bytes, other.len)
    }

    /// Content equality usable in `const` contexts.
    #[must_use]
    pub const fn const_eq<const M: usize>(&self, other: &FixedStr<M>) -> bool {
        matches!(self.const_cmp(other), Ordering::Equal)
    }

    /// Borrows the content as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        // Only whole `&str` values and ASCII bytes are ever appended.
        core::str::from_utf8(&self.bytes[..self.len]).unwrap_or_default()
    }

    /// FNV-1a hash of the content.
    #[must_use]
    pub const fn fingerprint(&self) -> u32 {
        fnv1a_32(self.bytes.split_at(self.len).0)
    }

    const fn push_bytes(self, bytes: &[u8]) -> Self {
        assert!(self.len + bytes.len() <= N, "FixedStr capacity exceeded");
        let mut out = self;
        let mut i = 0;
        while i < bytes.len() {
            out.bytes[out.len] = bytes[i];
            out.len += 1;
            i += 1;
        }
        out
    }
}

const FNV_OFFSET_BASIS: u32 = 0x811C_9DC5;
const FNV_PRIME: u32 = 0x0100_0193;

/// 32-bit FNV-1a hash, usable in `const` contexts.
#[must_use]
pub const fn fnv1a_32(bytes: &[u8]) -> u32 {
    let mut hash = FNV_OFFSET_BASIS;
    let mut i = 0;
    while i < bytes.len() {
        hash ^= bytes[i] as u32;
        hash = hash.wrapping_mul(FNV_PRIME);
        i += 1;
    }
    hash
}

/// Lexicographic comparison of two `&str` values in `const` contexts.
#[must_use]
pub const fn const_str_cmp(lhs: &str, rhs: &str) -> Ordering {
    compare_bytes(lhs.as_bytes(), lhs.len(), rhs.as_bytes(), rhs.len())
}

const fn compare_bytes(lhs: &[u8], lhs_len: usize, rhs: &[u8], rhs_len: usize) -> Ordering {
    let shared = if lhs_len < rhs_len { lhs_len } else { rhs_len };
    let mut i = 0;
    while i < shared {
        if lhs[i] < rhs[i] {
            return Ordering::Less;
        }
        if lhs[i] > rhs[i] {
            return Ordering::Greater;
        }
        i += 1;
    }
    if lhs_len < rhs_len {
        Ordering::Less
    } else if lhs_len > rhs_len {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

impl<const N: usize> Default for FixedStr<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Deref for FixedStr<N> {
    type Target = str;

    fn deref(&self) -> &str {
        self.as_str()
    }
}

impl<const N: usize> AsRef<str> for FixedStr<N> {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl<const N: usize, const M: usize> PartialEq<FixedStr<M>> for FixedStr<N> {
    fn eq(&self, other: &FixedStr<M>) -> bool {
        self.const_eq(other)
    }
}

impl<const N: usize> PartialEq<str> for FixedStr<N> {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl<const N: usize> PartialEq<&str> for FixedStr<N> {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl<const N: usize> Eq for FixedStr<N> {}

impl<const N: usize, const M: usize> PartialOrd<FixedStr<M>> for FixedStr<N> {
    fn partial_cmp(&self, other: &FixedStr<M>) -> Option<Ordering> {
        Some(self.const_cmp(other))
    }
}

impl<const N: usize> Ord for FixedStr<N> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.const_cmp(other)
    }
}

impl<const N: usize> Hash for FixedStr<N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}

impl<const N: usize> fmt::Display for FixedStr<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<const N: usize> fmt::Debug for FixedStr<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_str(), f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GREETING: FixedStr<16> = FixedStr::from_str("meters").push_ascii(b'^').push_i64(-2);

    #[test]
    fn builds_at_compile_time() {
        assert_eq!(GREETING, "meters^-2");
        assert_eq!(GREETING.len(), 9);
        assert_eq!(GREETING.capacity(), 16);
    }

    #[test]
    fn renders_integers_and_ratios() {
        assert_eq!(FixedStr::<24>::from_u64(0), "0");
        assert_eq!(FixedStr::<24>::from_u64(u64::MAX), "18446744073709551615");
        assert_eq!(FixedStr::<24>::from_i64(i64::MIN), "-9223372036854775808");
        assert_eq!(FixedStr::<16>::from_ratio(3, 1), "3");
        assert_eq!(FixedStr::<16>::from_ratio(-1, 2), "(-1/2)");
    }

    #[test]
    fn concatenates_across_capacities() {
        let head = FixedStr::<8>::from_str("kilo");
        let tail = FixedStr::<32>::from_str("grams");
        let joined = FixedStr::<16>::new().concat(&head).concat(&tail);
        assert_eq!(joined.as_str(), "kilograms");
    }

    #[test]
    fn orders_lexicographically_then_by_length() {
        let a = FixedStr::<8>::from_str("meter");
        let b = FixedStr::<8>::from_str("meters");
        let c = FixedStr::<8>::from_str("moles");
        assert!(a < b);
        assert!(b < c);
        assert_eq!(const_str_cmp("kelvin", "kilograms"), Ordering::Less);
        assert_eq!(const_str_cmp("seconds", "seconds"), Ordering::Equal);
    }

    #[test]
    fn fingerprint_matches_free_function() {
        let s = FixedStr::<32>::from_str("kilograms^1|meters^1|seconds^-2");
        assert_eq!(s.fingerprint(), fnv1a_32(s.as_bytes()));
        assert_eq!(fnv1a_32(b""), 0x811C_9DC5);
        assert_eq!(fnv1a_32(b"a"), 0xE40C_292C);
    }

    #[test]
    #[should_panic(expected = "capacity exceeded")]
    fn overflow_panics() {
        let _ = FixedStr::<4>::from_str("radians");
    }

    #[test]
    fn byte_access_is_bounded() {
        let s = FixedStr::<8>::from_str("kg");
        assert_eq!(s.byte_at(1), Some(b'g'));
        assert_eq!(s.byte_at(2), None);
    }
}
