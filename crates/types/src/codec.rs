// Path: crates/types/src/codec.rs

//! Defines the big-endian, fixed-width integer codec used for every number that
//! lands in a signable payload.
//!
//! Each integer is written most-significant byte first and left-padded with zero
//! bytes to the width of its on-chain field. The native and arbitrary-precision
//! paths share a single minimal-bytes representation, so the same numeric value
//! always serializes to the same bytes regardless of which type the caller holds.

use crate::error::CodecError;
use num_bigint::BigUint;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Selects what happens when a value needs more bytes than its field provides.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum OverflowPolicy {
    /// Fail with [`CodecError::IntegerOverflowForWidth`].
    #[default]
    Reject,
    /// Emit the minimal representation uncut, longer than the declared field.
    ///
    /// Payloads produced this way no longer match the declared field layout. This
    /// exists only to re-derive payloads that legacy signers produced.
    Passthrough,
}

/// An unsigned integer that can be written as a fixed-width big-endian field.
pub trait FixedWidthInteger {
    /// Returns the big-endian bytes of the value with all leading zero bytes removed.
    /// Zero yields an empty vector.
    fn minimal_be_bytes(&self) -> Vec<u8>;
}

macro_rules! impl_fixed_width_native {
    ($($t:ty),*) => {
        $(
            impl FixedWidthInteger for $t {
                fn minimal_be_bytes(&self) -> Vec<u8> {
                    strip_leading_zeros(self.to_be_bytes())
                }
            }
        )*
    };
}

impl_fixed_width_native!(u8, u16, u32, u64, u128);

impl FixedWidthInteger for BigUint {
    fn minimal_be_bytes(&self) -> Vec<u8> {
        // `to_bytes_le` yields the least significant byte first.
        let mut bytes = self.to_bytes_le();
        bytes.reverse();
        strip_leading_zeros(bytes)
    }
}

fn strip_leading_zeros(bytes: impl IntoIterator<Item = u8>) -> Vec<u8> {
    bytes.into_iter().skip_while(|b| *b == 0).collect()
}

/// Encodes `value` as exactly `width` big-endian bytes, rejecting values that do not fit.
pub fn encode_fixed<T: FixedWidthInteger + ?Sized>(
    value: &T,
    width: usize,
) -> Result<Vec<u8>, CodecError> {
    encode_fixed_with_policy(value, width, OverflowPolicy::Reject)
}

/// Encodes `value` as big-endian bytes left-padded to `width`, applying `policy`
/// when the value needs more than `width` bytes.
pub fn encode_fixed_with_policy<T: FixedWidthInteger + ?Sized>(
    value: &T,
    width: usize,
    policy: OverflowPolicy,
) -> Result<Vec<u8>, CodecError> {
    if width == 0 {
        return Err(CodecError::ZeroWidth);
    }
    let minimal = value.minimal_be_bytes();
    if minimal.len() > width {
        return match policy {
            OverflowPolicy::Reject => Err(CodecError::IntegerOverflowForWidth {
                width,
                needed: minimal.len(),
            }),
            OverflowPolicy::Passthrough => {
                log::warn!(
                    "emitting {} byte integer into a {} byte field under passthrough policy",
                    minimal.len(),
                    width
                );
                Ok(minimal)
            }
        };
    }
    let mut out = vec![0u8; width - minimal.len()];
    out.extend_from_slice(&minimal);
    Ok(out)
}

/// Encodes a machine-native integer into `width` big-endian bytes.
pub fn encode_native(value: u128, width: usize) -> Result<Vec<u8>, CodecError> {
    encode_fixed(&value, width)
}

/// Encodes an arbitrary-precision integer into `width` big-endian bytes.
///
/// Produces byte-identical output to [`encode_native`] for any value both can hold.
pub fn encode_arbitrary(value: &BigUint, width: usize) -> Result<Vec<u8>, CodecError> {
    encode_fixed(value, width)
}

/// A record field that callers may supply as either a native or an arbitrary-precision
/// integer. Both forms encode identically for the same numeric value.
#[derive(Debug, Clone)]
pub enum Uint {
    /// A machine-native value.
    Native(u128),
    /// An arbitrary-precision value.
    Arbitrary(BigUint),
}

impl FixedWidthInteger for Uint {
    fn minimal_be_bytes(&self) -> Vec<u8> {
        match self {
            Self::Native(v) => v.minimal_be_bytes(),
            Self::Arbitrary(v) => v.minimal_be_bytes(),
        }
    }
}

impl PartialEq for Uint {
    fn eq(&self, other: &Self) -> bool {
        self.minimal_be_bytes() == other.minimal_be_bytes()
    }
}

impl Eq for Uint {}

impl fmt::Display for Uint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Native(v) => write!(f, "{v}"),
            Self::Arbitrary(v) => write!(f, "{v}"),
        }
    }
}

impl FromStr for Uint {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(v) = trimmed.parse::<u128>() {
            return Ok(Self::Native(v));
        }
        trimmed
            .parse::<BigUint>()
            .map(Self::Arbitrary)
            .map_err(|e| CodecError::InvalidInteger(format!("{trimmed:?}: {e}")))
    }
}

macro_rules! impl_uint_from_native {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Uint {
                fn from(v: $t) -> Self {
                    Self::Native(u128::from(v))
                }
            }
        )*
    };
}

impl_uint_from_native!(u8, u16, u32, u64, u128);

impl From<BigUint> for Uint {
    fn from(v: BigUint) -> Self {
        Self::Arbitrary(v)
    }
}

impl Serialize for Uint {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        // Decimal strings survive JSON consumers that cannot hold 128-bit numbers.
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Uint {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(UintVisitor)
    }
}

struct UintVisitor;

impl<'de> Visitor<'de> for UintVisitor {
    type Value = Uint;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an unsigned integer or a decimal string")
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Uint, E> {
        Ok(Uint::from(v))
    }

    fn visit_u128<E: de::Error>(self, v: u128) -> Result<Uint, E> {
        Ok(Uint::from(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Uint, E> {
        u64::try_from(v)
            .map(Uint::from)
            .map_err(|_| E::custom(format!("integer {v} is negative")))
    }

    // JSON parsers hand integers above u64::MAX over as floats, losing precision.
    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Uint, E> {
        Err(E::custom(format!(
            "number {v} is not an exact 64-bit integer; pass it as a decimal string"
        )))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Uint, E> {
        v.parse().map_err(E::custom)
    }
}
