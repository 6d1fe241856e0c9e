// Copyright 2024-2025 Irreducible Inc.

//! Scalar lane types and their per-lane semantics.

use std::{
	fmt::{Debug, Display},
	hash::Hash,
};

use bytemuck::Pod;

use crate::register::Register;

/// Unsigned integer holding the raw bits of a lane.
pub trait LaneBits: Pod + Eq + Hash + Debug + Send + Sync + 'static {
	const ZERO: Self;
	/// All bits set, the lane value of a true comparison.
	const ONES: Self;
}

macro_rules! impl_lane_bits {
	($($bits:ty),*) => {
		$(
			impl LaneBits for $bits {
				const ZERO: Self = 0;
				const ONES: Self = <$bits>::MAX;
			}
		)*
	};
}

impl_lane_bits!(u8, u16, u32, u64, u128);

/// A primitive value occupying one lane of a vector register.
///
/// A lane is fully described by its bit pattern: `from_bits(to_bits(x)) == x`
/// for every value except non-canonical `bool` bytes.
pub trait Lane:
	Copy + PartialEq + PartialOrd + Debug + Display + Default + Send + Sync + 'static
{
	type Bits: LaneBits;

	/// Width of the lane in bits.
	const BITS: usize = 8 * std::mem::size_of::<Self::Bits>();

	fn to_bits(self) -> Self::Bits;

	fn from_bits(bits: Self::Bits) -> Self;

	/// Complement every lane of `value`, a register holding lanes of this type.
	#[inline]
	fn complement<R: Register>(value: R) -> R {
		!value
	}

	/// Rewrite every lane of `value` to the canonical bit pattern of its value.
	///
	/// Bitwise operators and vector equality work on canonical lanes.
	#[inline]
	fn canonicalize<R: Register>(value: R) -> R {
		value
	}

	/// Value equality used by lane search.
	#[inline]
	fn same_value(self, other: Self) -> bool {
		self == other
	}
}

/// Lane with arithmetic, following the scalar semantics of the type:
/// wrapping two's complement for integers and IEEE 754 for floats.
pub trait NumericLane: Lane {
	fn lane_add(self, rhs: Self) -> Self;

	fn lane_sub(self, rhs: Self) -> Self;

	fn lane_mul(self, rhs: Self) -> Self;

	/// Truncating division.
	///
	/// ## Panics
	/// For integer lanes, panics if `rhs` is zero.
	fn lane_div(self, rhs: Self) -> Self;

	/// Remainder with the sign of the dividend.
	///
	/// ## Panics
	/// For integer lanes, panics if `rhs` is zero.
	fn lane_rem(self, rhs: Self) -> Self;

	fn lane_neg(self) -> Self;

	/// Division returning `None` for a zero integer divisor.
	fn checked_lane_div(self, rhs: Self) -> Option<Self>;

	/// Remainder returning `None` for a zero integer divisor.
	fn checked_lane_rem(self, rhs: Self) -> Option<Self>;
}

/// Integer lane that can be shifted.
pub trait IntegerLane: NumericLane {
	/// Left shift, yielding zero for counts not smaller than the lane width.
	fn lane_shl(self, count: u32) -> Self;

	/// Right shift, arithmetic for signed and logical for unsigned lanes.
	///
	/// Counts not smaller than the lane width yield the sign fill (signed) or zero (unsigned).
	fn lane_shr(self, count: u32) -> Self;

	/// Interpret the lane as an unsigned shift count.
	fn shift_count(self) -> u32;
}

macro_rules! impl_integer_lane {
	($($lane:ty => $bits:ty),*) => {
		$(
			impl Lane for $lane {
				type Bits = $bits;

				#[inline(always)]
				fn to_bits(self) -> $bits {
					self as $bits
				}

				#[inline(always)]
				fn from_bits(bits: $bits) -> Self {
					bits as $lane
				}
			}

			impl NumericLane for $lane {
				#[inline(always)]
				fn lane_add(self, rhs: Self) -> Self {
					self.wrapping_add(rhs)
				}

				#[inline(always)]
				fn lane_sub(self, rhs: Self) -> Self {
					self.wrapping_sub(rhs)
				}

				#[inline(always)]
				fn lane_mul(self, rhs: Self) -> Self {
					self.wrapping_mul(rhs)
				}

				#[inline(always)]
				fn lane_div(self, rhs: Self) -> Self {
					self.wrapping_div(rhs)
				}

				#[inline(always)]
				fn lane_rem(self, rhs: Self) -> Self {
					self.wrapping_rem(rhs)
				}

				#[inline(always)]
				fn lane_neg(self) -> Self {
					self.wrapping_neg()
				}

				#[inline]
				fn checked_lane_div(self, rhs: Self) -> Option<Self> {
					(rhs != 0).then(|| self.wrapping_div(rhs))
				}

				#[inline]
				fn checked_lane_rem(self, rhs: Self) -> Option<Self> {
					(rhs != 0).then(|| self.wrapping_rem(rhs))
				}
			}

			impl IntegerLane for $lane {
				#[inline(always)]
				fn lane_shl(self, count: u32) -> Self {
					self.checked_shl(count).unwrap_or(0)
				}

				#[inline(always)]
				#[allow(unused_comparisons)]
				fn lane_shr(self, count: u32) -> Self {
					// `self >> (BITS - 1)` is the sign fill for signed and zero for unsigned lanes
					self.checked_shr(count)
						.unwrap_or_else(|| if self < 0 { self >> (<$lane>::BITS - 1) } else { 0 })
				}

				#[inline(always)]
				fn shift_count(self) -> u32 {
					u32::try_from(self as $bits).unwrap_or(u32::MAX)
				}
			}
		)*
	};
}

impl_integer_lane!(
	u8 => u8, u16 => u16, u32 => u32, u64 => u64,
	i8 => u8, i16 => u16, i32 => u32, i64 => u64
);

macro_rules! impl_float_lane {
	($($lane:ty => $bits:ty),*) => {
		$(
			impl Lane for $lane {
				type Bits = $bits;

				#[inline(always)]
				fn to_bits(self) -> $bits {
					<$lane>::to_bits(self)
				}

				#[inline(always)]
				fn from_bits(bits: $bits) -> Self {
					<$lane>::from_bits(bits)
				}

				/// `NaN` matches `NaN`, and `0.0` matches `-0.0`.
				#[inline]
				fn same_value(self, other: Self) -> bool {
					self == other || (self.is_nan() && other.is_nan())
				}
			}

			impl NumericLane for $lane {
				#[inline(always)]
				fn lane_add(self, rhs: Self) -> Self {
					self + rhs
				}

				#[inline(always)]
				fn lane_sub(self, rhs: Self) -> Self {
					self - rhs
				}

				#[inline(always)]
				fn lane_mul(self, rhs: Self) -> Self {
					self * rhs
				}

				#[inline(always)]
				fn lane_div(self, rhs: Self) -> Self {
					self / rhs
				}

				#[inline(always)]
				fn lane_rem(self, rhs: Self) -> Self {
					self % rhs
				}

				#[inline(always)]
				fn lane_neg(self) -> Self {
					-self
				}

				#[inline]
				fn checked_lane_div(self, rhs: Self) -> Option<Self> {
					Some(self / rhs)
				}

				#[inline]
				fn checked_lane_rem(self, rhs: Self) -> Option<Self> {
					Some(self % rhs)
				}
			}
		)*
	};
}

impl_float_lane!(f32 => u32, f64 => u64);

/// A bool lane is a single byte, `0x00` for false and `0x01` for true.
/// Any non-zero byte reads as true.
impl Lane for bool {
	type Bits = u8;

	#[inline(always)]
	fn to_bits(self) -> u8 {
		self as u8
	}

	#[inline(always)]
	fn from_bits(bits: u8) -> Self {
		bits != 0
	}

	/// Logical not, producing canonical `0x00`/`0x01` lanes.
	#[inline]
	fn complement<R: Register>(value: R) -> R {
		R::from_lane_bits_fn(|i| u8::from(value.lane_bits::<u8>(i) == 0))
	}

	/// Maps any non-zero byte, such as an all-ones comparison mask, to `0x01`.
	#[inline]
	fn canonicalize<R: Register>(value: R) -> R {
		R::from_lane_bits_fn(|i| u8::from(value.lane_bits::<u8>(i) != 0))
	}
}

#[cfg(test)]
mod tests {
	use proptest::prelude::*;

	use super::*;
	use crate::arch::M64;

	#[test]
	fn test_lane_widths() {
		assert_eq!(<u8 as Lane>::BITS, 8);
		assert_eq!(<i16 as Lane>::BITS, 16);
		assert_eq!(<f32 as Lane>::BITS, 32);
		assert_eq!(<i64 as Lane>::BITS, 64);
		assert_eq!(<f64 as Lane>::BITS, 64);
		assert_eq!(<bool as Lane>::BITS, 8);
	}

	#[test]
	fn test_bool_bits() {
		assert_eq!(true.to_bits(), 1);
		assert_eq!(false.to_bits(), 0);
		assert!(bool::from_bits(0x80));
		assert!(!bool::from_bits(0));
	}

	#[test]
	fn test_shift_saturation() {
		assert_eq!(0x81u8.lane_shl(8), 0);
		assert_eq!(0x81u8.lane_shr(9), 0);
		assert_eq!((-100i16).lane_shr(16), -1);
		assert_eq!(100i16.lane_shr(40), 0);
		assert_eq!((-8i32).lane_shr(1), -4);
		assert_eq!(i64::MIN.lane_shl(64), 0);
	}

	#[test]
	fn test_shift_count() {
		assert_eq!((-1i8).shift_count(), 255);
		assert_eq!(3u16.shift_count(), 3);
		assert_eq!(u64::MAX.shift_count(), u32::MAX);
	}

	#[test]
	fn test_division_edge_cases() {
		assert_eq!(i32::MIN.lane_div(-1), i32::MIN);
		assert_eq!(i32::MIN.lane_rem(-1), 0);
		assert_eq!((-7i8).lane_rem(2), -1);
		assert_eq!(7u8.checked_lane_div(0), None);
		assert_eq!(7u8.checked_lane_rem(0), None);
		assert_eq!(1.0f64.checked_lane_div(0.0), Some(f64::INFINITY));
	}

	#[test]
	fn test_same_value() {
		assert!(f32::NAN.same_value(f32::NAN));
		assert!(0.0f64.same_value(-0.0));
		assert!(!1.0f32.same_value(f32::NAN));
		assert!(7i16.same_value(7));
		assert!(!7u8.same_value(8));
	}

	#[test]
	fn test_bool_canonicalize() {
		let mask = M64::from_lane_bits_fn(|i| if i % 2 == 0 { 0xFFu8 } else { 0 });
		let canonical = bool::canonicalize(mask);
		for i in 0..8 {
			assert_eq!(canonical.lane_bits::<u8>(i), u8::from(i % 2 == 0));
		}
		assert_eq!(u8::canonicalize(mask), mask);
	}

	#[test]
	#[should_panic]
	fn test_integer_division_by_zero_panics() {
		let _ = 1u16.lane_div(0);
	}

	proptest! {
		#[test]
		fn test_bits_round_trip_i16(value in any::<i16>()) {
			prop_assert_eq!(i16::from_bits(value.to_bits()), value);
		}

		#[test]
		fn test_bits_round_trip_f32(value in any::<f32>()) {
			prop_assert_eq!(f32::from_bits(Lane::to_bits(value)).to_bits(), value.to_bits());
		}

		#[test]
		fn test_shr_matches_std(value in any::<i32>(), count in 0u32..32) {
			prop_assert_eq!(value.lane_shr(count), value >> count);
			prop_assert_eq!((value as u32).lane_shr(count), (value as u32) >> count);
		}
	}
}
