// Copyright 2024-2025 Irreducible Inc.

use std::{
	fmt,
	ops::{
		BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not, Shl, ShlAssign, Shr,
		ShrAssign,
	},
};

use bytemuck::{must_cast, Pod, Zeroable};
use subtle::{Choice, ConstantTimeEq};

use crate::{arch::M128, lane::Lane, vector::Vector128};

/// 128 bits without a lane interpretation.
///
/// Converting a signed integer of up to 64 bits sign-extends it into the lower 64 bits and leaves
/// the upper half zero.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Raw128(M128);

unsafe impl Zeroable for Raw128 {}

unsafe impl Pod for Raw128 {}

impl Raw128 {
	#[inline]
	pub fn from_u128(value: u128) -> Self {
		Self(must_cast(value))
	}

	#[inline]
	pub fn from_halves(lower: u64, upper: u64) -> Self {
		Self::from(((upper as u128) << 64) | lower as u128)
	}

	#[inline]
	pub fn to_u128(self) -> u128 {
		must_cast(self.0)
	}

	#[inline]
	pub fn to_i128(self) -> i128 {
		self.to_u128() as i128
	}

	#[inline]
	pub fn lower64(self) -> u64 {
		self.to_u128() as u64
	}

	#[inline]
	pub fn upper64(self) -> u64 {
		(self.to_u128() >> 64) as u64
	}

	/// Lossy conversion to a primitive, see [`NumCast`].
	#[inline]
	pub fn num_cast<T: NumCast>(self) -> T {
		T::from_raw(self)
	}

	#[inline]
	pub fn to_register(self) -> M128 {
		self.0
	}
}

/// Lossy conversion from the low bits of a [`Raw128`].
///
/// Integers narrower than 64 bits and `bool` read the lowest 32-bit word, which makes `bool`
/// true when any of those bits is set. 64-bit integers read the lower half.
pub trait NumCast: Sized {
	fn from_raw(value: Raw128) -> Self;
}

impl NumCast for bool {
	#[inline]
	fn from_raw(value: Raw128) -> Self {
		value.lower64() as u32 != 0
	}
}

macro_rules! impl_num_cast {
	($($int:ty),*) => {
		$(
			impl NumCast for $int {
				#[inline]
				fn from_raw(value: Raw128) -> Self {
					value.to_u128() as $int
				}
			}
		)*
	};
}

impl_num_cast!(u8, u16, u32, u64, u128, i8, i16, i32, i64, i128);

macro_rules! impl_from_unsigned {
	($($int:ty),*) => {
		$(
			impl From<$int> for Raw128 {
				#[inline]
				fn from(value: $int) -> Self {
					Self::from_u128(value as u128)
				}
			}
		)*
	};
}

impl_from_unsigned!(u8, u16, u32, u64, u128);

macro_rules! impl_from_signed {
	($($int:ty),*) => {
		$(
			impl From<$int> for Raw128 {
				#[inline]
				fn from(value: $int) -> Self {
					Self::from_halves(value as i64 as u64, 0)
				}
			}
		)*
	};
}

impl_from_signed!(i8, i16, i32, i64);

impl From<i128> for Raw128 {
	#[inline]
	fn from(value: i128) -> Self {
		Self::from_u128(value as u128)
	}
}

impl From<Raw128> for u128 {
	#[inline]
	fn from(value: Raw128) -> Self {
		value.to_u128()
	}
}

impl From<Raw128> for i128 {
	#[inline]
	fn from(value: Raw128) -> Self {
		value.to_i128()
	}
}

impl From<M128> for Raw128 {
	#[inline]
	fn from(value: M128) -> Self {
		Self(value)
	}
}

impl<T: Lane> From<Vector128<T>> for Raw128 {
	#[inline]
	fn from(value: Vector128<T>) -> Self {
		Self(value.to_register())
	}
}

impl<T: Lane> From<Raw128> for Vector128<T> {
	#[inline]
	fn from(value: Raw128) -> Self {
		Self::from_register(value.0)
	}
}

impl ConstantTimeEq for Raw128 {
	fn ct_eq(&self, other: &Self) -> Choice {
		self.to_u128().ct_eq(&other.to_u128())
	}
}

macro_rules! impl_bitwise_op {
	($trait:ident, $fn:ident, $assign_trait:ident, $assign_fn:ident) => {
		impl $trait for Raw128 {
			type Output = Self;

			#[inline]
			fn $fn(self, rhs: Self) -> Self {
				Self($trait::$fn(self.0, rhs.0))
			}
		}

		impl $assign_trait for Raw128 {
			#[inline]
			fn $assign_fn(&mut self, rhs: Self) {
				$assign_trait::$assign_fn(&mut self.0, rhs.0);
			}
		}
	};
}

impl_bitwise_op!(BitAnd, bitand, BitAndAssign, bitand_assign);
impl_bitwise_op!(BitOr, bitor, BitOrAssign, bitor_assign);
impl_bitwise_op!(BitXor, bitxor, BitXorAssign, bitxor_assign);

impl Not for Raw128 {
	type Output = Self;

	#[inline]
	fn not(self) -> Self {
		Self(!self.0)
	}
}

/// Shifts of the whole 128-bit value, counts of 128 and more yield zero.
impl Shl<u32> for Raw128 {
	type Output = Self;

	#[inline]
	fn shl(self, count: u32) -> Self {
		Self::from(self.to_u128().checked_shl(count).unwrap_or(0))
	}
}

impl Shr<u32> for Raw128 {
	type Output = Self;

	#[inline]
	fn shr(self, count: u32) -> Self {
		Self::from(self.to_u128().checked_shr(count).unwrap_or(0))
	}
}

impl ShlAssign<u32> for Raw128 {
	#[inline]
	fn shl_assign(&mut self, count: u32) {
		*self = *self << count;
	}
}

impl ShrAssign<u32> for Raw128 {
	#[inline]
	fn shr_assign(&mut self, count: u32) {
		*self = *self >> count;
	}
}

impl fmt::Debug for Raw128 {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Raw128({:#034x})", self.to_u128())
	}
}

/// Uppercase hexadecimal.
impl fmt::Display for Raw128 {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		fmt::UpperHex::fmt(&self.to_u128(), f)
	}
}

macro_rules! impl_fmt_forwarding {
	($($trait:ident),*) => {
		$(
			impl fmt::$trait for Raw128 {
				fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
					fmt::$trait::fmt(&self.to_u128(), f)
				}
			}
		)*
	};
}

impl_fmt_forwarding!(LowerHex, UpperHex, Binary, Octal);

static_assertions::assert_eq_size!(Raw128, u128);
