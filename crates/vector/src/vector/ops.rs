// Copyright 2024-2025 Irreducible Inc.

use std::{
	iter::Sum,
	ops::{
		Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div,
		DivAssign, Mul, MulAssign, Neg, Not, Rem, RemAssign, Shl, ShlAssign, Shr, ShrAssign, Sub,
		SubAssign,
	},
};

use itertools::Itertools;
use lanewise_utils::bail;

use super::Vector;
use crate::{
	arithmetic_traits::{LaneArithmetic, LaneCompare, LaneShift},
	error::Error,
	lane::{IntegerLane, Lane, NumericLane},
	register::Register,
};

macro_rules! impl_arithmetic_op {
	($trait:ident, $fn:ident, $assign_trait:ident, $assign_fn:ident, $lane_fn:ident) => {
		impl<R: LaneArithmetic<T>, T: NumericLane> $trait for Vector<R, T> {
			type Output = Self;

			#[inline]
			fn $fn(self, rhs: Self) -> Self {
				Self::from_register(LaneArithmetic::<T>::$lane_fn(self.0, rhs.0))
			}
		}

		impl<R: LaneArithmetic<T>, T: NumericLane> $trait<T> for Vector<R, T> {
			type Output = Self;

			#[inline]
			fn $fn(self, rhs: T) -> Self {
				<Self as $trait<Self>>::$fn(self, Self::splat(rhs))
			}
		}

		impl<R: LaneArithmetic<T>, T: NumericLane> $assign_trait for Vector<R, T> {
			#[inline]
			fn $assign_fn(&mut self, rhs: Self) {
				*self = <Self as $trait<Self>>::$fn(*self, rhs);
			}
		}

		impl<R: LaneArithmetic<T>, T: NumericLane> $assign_trait<T> for Vector<R, T> {
			#[inline]
			fn $assign_fn(&mut self, rhs: T) {
				*self = <Self as $trait<T>>::$fn(*self, rhs);
			}
		}
	};
}

impl_arithmetic_op!(Add, add, AddAssign, add_assign, add_lanes);
impl_arithmetic_op!(Sub, sub, SubAssign, sub_assign, sub_lanes);
impl_arithmetic_op!(Mul, mul, MulAssign, mul_assign, mul_lanes);
impl_arithmetic_op!(Div, div, DivAssign, div_assign, div_lanes);
impl_arithmetic_op!(Rem, rem, RemAssign, rem_assign, rem_lanes);

/// `scalar * vector` for every numeric lane type.
macro_rules! impl_scalar_mul {
	($($lane:ty),*) => {
		$(
			impl<R: LaneArithmetic<$lane>> Mul<Vector<R, $lane>> for $lane {
				type Output = Vector<R, $lane>;

				#[inline]
				fn mul(self, rhs: Vector<R, $lane>) -> Self::Output {
					Vector::splat(self) * rhs
				}
			}
		)*
	};
}

impl_scalar_mul!(u8, u16, u32, u64, i8, i16, i32, i64, f32, f64);

impl<R: LaneArithmetic<T>, T: NumericLane> Neg for Vector<R, T> {
	type Output = Self;

	#[inline]
	fn neg(self) -> Self {
		Self::from_register(LaneArithmetic::<T>::neg_lanes(self.0))
	}
}

impl<R: LaneArithmetic<T>, T: NumericLane> Sum for Vector<R, T> {
	fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
		iter.fold(Self::zero(), |acc, item| acc + item)
	}
}

impl<R: LaneArithmetic<T>, T: NumericLane> Vector<R, T> {
	/// Lane-wise division failing on the first zero integer divisor.
	pub fn checked_div(self, rhs: Self) -> Result<Self, Error> {
		if let Some(lane) = self.first_invalid_divisor(rhs, T::checked_lane_div) {
			bail!(Error::DivisionByZero { lane });
		}

		Ok(self / rhs)
	}

	/// Lane-wise remainder failing on the first zero integer divisor.
	pub fn checked_rem(self, rhs: Self) -> Result<Self, Error> {
		if let Some(lane) = self.first_invalid_divisor(rhs, T::checked_lane_rem) {
			bail!(Error::DivisionByZero { lane });
		}

		Ok(self % rhs)
	}

	fn first_invalid_divisor(self, rhs: Self, op: impl Fn(T, T) -> Option<T>) -> Option<usize> {
		self.iter()
			.zip_eq(rhs.iter())
			.position(|(lhs, rhs)| op(lhs, rhs).is_none())
	}
}

impl<R: LaneCompare<T>, T: Lane> Vector<R, T> {
	/// Lanes are all ones where `self == rhs` and zero elsewhere.
	#[inline]
	pub fn simd_eq(self, rhs: Self) -> Self {
		Self::from_register(LaneCompare::<T>::eq_lanes(self.0, rhs.0))
	}

	/// Lanes are all ones where `self != rhs` and zero elsewhere, true for unordered floats.
	#[inline]
	pub fn simd_ne(self, rhs: Self) -> Self {
		Self::from_register(LaneCompare::<T>::ne_lanes(self.0, rhs.0))
	}

	#[inline]
	pub fn simd_gt(self, rhs: Self) -> Self {
		Self::from_register(LaneCompare::<T>::gt_lanes(self.0, rhs.0))
	}

	#[inline]
	pub fn simd_lt(self, rhs: Self) -> Self {
		Self::from_register(LaneCompare::<T>::lt_lanes(self.0, rhs.0))
	}

	#[inline]
	pub fn simd_ge(self, rhs: Self) -> Self {
		Self::from_register(LaneCompare::<T>::ge_lanes(self.0, rhs.0))
	}

	#[inline]
	pub fn simd_le(self, rhs: Self) -> Self {
		Self::from_register(LaneCompare::<T>::le_lanes(self.0, rhs.0))
	}
}

// `bool` lanes are canonicalized first, so all-ones comparison masks combine logically.
macro_rules! impl_bitwise_op {
	($trait:ident, $fn:ident, $assign_trait:ident, $assign_fn:ident) => {
		impl<R: Register, T: Lane> $trait for Vector<R, T> {
			type Output = Self;

			#[inline]
			fn $fn(self, rhs: Self) -> Self {
				Self::from_register($trait::$fn(T::canonicalize(self.0), T::canonicalize(rhs.0)))
			}
		}

		impl<R: Register, T: Lane> $assign_trait for Vector<R, T> {
			#[inline]
			fn $assign_fn(&mut self, rhs: Self) {
				*self = $trait::$fn(*self, rhs);
			}
		}
	};
}

impl_bitwise_op!(BitAnd, bitand, BitAndAssign, bitand_assign);
impl_bitwise_op!(BitOr, bitor, BitOrAssign, bitor_assign);
impl_bitwise_op!(BitXor, bitxor, BitXorAssign, bitxor_assign);

/// Bitwise complement, logical not for `bool` lanes.
impl<R: Register, T: Lane> Not for Vector<R, T> {
	type Output = Self;

	#[inline]
	fn not(self) -> Self {
		Self::from_register(T::complement(self.0))
	}
}

macro_rules! impl_shift_op {
	(
		$(#[$attr:meta])*
		$trait:ident,
		$fn:ident,
		$assign_trait:ident,
		$assign_fn:ident,
		$lanes_fn:ident,
		$lanes_by_fn:ident
	) => {
		$(#[$attr])*
		impl<R: LaneShift<T>, T: IntegerLane> $trait<u32> for Vector<R, T> {
			type Output = Self;

			#[inline]
			fn $fn(self, count: u32) -> Self {
				Self::from_register(LaneShift::<T>::$lanes_fn(self.0, count))
			}
		}

		$(#[$attr])*
		impl<R: LaneShift<T>, T: IntegerLane> $trait for Vector<R, T> {
			type Output = Self;

			#[inline]
			fn $fn(self, counts: Self) -> Self {
				Self::from_register(LaneShift::<T>::$lanes_by_fn(self.0, counts.0))
			}
		}

		impl<R: LaneShift<T>, T: IntegerLane> $assign_trait<u32> for Vector<R, T> {
			#[inline]
			fn $assign_fn(&mut self, count: u32) {
				*self = <Self as $trait<u32>>::$fn(*self, count);
			}
		}

		impl<R: LaneShift<T>, T: IntegerLane> $assign_trait for Vector<R, T> {
			#[inline]
			fn $assign_fn(&mut self, counts: Self) {
				*self = <Self as $trait<Self>>::$fn(*self, counts);
			}
		}
	};
}

impl_shift_op!(
	/// Lane-wise left shift. Counts not smaller than the lane width yield zero.
	Shl, shl, ShlAssign, shl_assign, shl_lanes, shl_lanes_by
);
impl_shift_op!(
	/// Lane-wise right shift, following the scalar `>>` of the lane type: arithmetic (sign
	/// filling) for signed lanes and logical for unsigned lanes. For a logical shift of signed
	/// lanes, `reinterpret` to the unsigned lane type first.
	Shr, shr, ShrAssign, shr_assign, shr_lanes, shr_lanes_by
);
