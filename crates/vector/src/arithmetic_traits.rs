// Copyright 2024-2025 Irreducible Inc.

use crate::{
	lane::{IntegerLane, Lane, NumericLane},
	register::Register,
};

/// Lane-wise arithmetic over a register viewed as lanes of `T`.
pub trait LaneArithmetic<T: NumericLane>: Register {
	fn add_lanes(self, rhs: Self) -> Self;

	fn sub_lanes(self, rhs: Self) -> Self;

	fn mul_lanes(self, rhs: Self) -> Self;

	/// ## Panics
	/// For integer lanes, panics if any lane of `rhs` is zero.
	fn div_lanes(self, rhs: Self) -> Self;

	/// ## Panics
	/// For integer lanes, panics if any lane of `rhs` is zero.
	fn rem_lanes(self, rhs: Self) -> Self;

	fn neg_lanes(self) -> Self;
}

/// Lane-wise comparisons over a register viewed as lanes of `T`.
///
/// Every lane of the result is either all ones (true) or all zeros (false).
pub trait LaneCompare<T: Lane>: Register {
	fn eq_lanes(self, rhs: Self) -> Self;

	fn ne_lanes(self, rhs: Self) -> Self;

	fn gt_lanes(self, rhs: Self) -> Self;

	fn lt_lanes(self, rhs: Self) -> Self;

	fn ge_lanes(self, rhs: Self) -> Self;

	fn le_lanes(self, rhs: Self) -> Self;
}

/// Lane-wise shifts over a register viewed as lanes of `T`.
pub trait LaneShift<T: IntegerLane>: Register {
	/// Shift every lane left by `count`.
	fn shl_lanes(self, count: u32) -> Self;

	/// Shift every lane right by `count`.
	fn shr_lanes(self, count: u32) -> Self;

	/// Shift every lane left by the count held in the same lane of `counts`.
	fn shl_lanes_by(self, counts: Self) -> Self;

	/// Shift every lane right by the count held in the same lane of `counts`.
	fn shr_lanes_by(self, counts: Self) -> Self;
}

/// Lane arithmetic that is parameterized with some strategy.
pub trait TaggedLaneArithmetic<Strategy, T: NumericLane>: Register {
	fn add_lanes(self, rhs: Self) -> Self;
	fn sub_lanes(self, rhs: Self) -> Self;
	fn mul_lanes(self, rhs: Self) -> Self;
	fn div_lanes(self, rhs: Self) -> Self;
	fn rem_lanes(self, rhs: Self) -> Self;
	fn neg_lanes(self) -> Self;
}

/// Lane comparisons that are parameterized with some strategy.
pub trait TaggedLaneCompare<Strategy, T: Lane>: Register {
	fn eq_lanes(self, rhs: Self) -> Self;
	fn ne_lanes(self, rhs: Self) -> Self;
	fn gt_lanes(self, rhs: Self) -> Self;
	fn lt_lanes(self, rhs: Self) -> Self;
	fn ge_lanes(self, rhs: Self) -> Self;
	fn le_lanes(self, rhs: Self) -> Self;
}

/// Lane shifts that are parameterized with some strategy.
pub trait TaggedLaneShift<Strategy, T: IntegerLane>: Register {
	fn shl_lanes(self, count: u32) -> Self;
	fn shr_lanes(self, count: u32) -> Self;
	fn shl_lanes_by(self, counts: Self) -> Self;
	fn shr_lanes_by(self, counts: Self) -> Self;
}

macro_rules! impl_lane_arithmetic_with {
	($register:ty, $strategy:ty; $($lane:ty),* $(,)?) => {
		$(
			impl $crate::arithmetic_traits::LaneArithmetic<$lane> for $register {
				#[inline]
				fn add_lanes(self, rhs: Self) -> Self {
					$crate::arithmetic_traits::TaggedLaneArithmetic::<$strategy, $lane>::add_lanes(self, rhs)
				}

				#[inline]
				fn sub_lanes(self, rhs: Self) -> Self {
					$crate::arithmetic_traits::TaggedLaneArithmetic::<$strategy, $lane>::sub_lanes(self, rhs)
				}

				#[inline]
				fn mul_lanes(self, rhs: Self) -> Self {
					$crate::arithmetic_traits::TaggedLaneArithmetic::<$strategy, $lane>::mul_lanes(self, rhs)
				}

				#[inline]
				fn div_lanes(self, rhs: Self) -> Self {
					$crate::arithmetic_traits::TaggedLaneArithmetic::<$strategy, $lane>::div_lanes(self, rhs)
				}

				#[inline]
				fn rem_lanes(self, rhs: Self) -> Self {
					$crate::arithmetic_traits::TaggedLaneArithmetic::<$strategy, $lane>::rem_lanes(self, rhs)
				}

				#[inline]
				fn neg_lanes(self) -> Self {
					$crate::arithmetic_traits::TaggedLaneArithmetic::<$strategy, $lane>::neg_lanes(self)
				}
			}
		)*
	};
}

pub(crate) use impl_lane_arithmetic_with;

macro_rules! impl_lane_compare_with {
	($register:ty, $strategy:ty; $($lane:ty),* $(,)?) => {
		$(
			impl $crate::arithmetic_traits::LaneCompare<$lane> for $register {
				#[inline]
				fn eq_lanes(self, rhs: Self) -> Self {
					$crate::arithmetic_traits::TaggedLaneCompare::<$strategy, $lane>::eq_lanes(self, rhs)
				}

				#[inline]
				fn ne_lanes(self, rhs: Self) -> Self {
					$crate::arithmetic_traits::TaggedLaneCompare::<$strategy, $lane>::ne_lanes(self, rhs)
				}

				#[inline]
				fn gt_lanes(self, rhs: Self) -> Self {
					$crate::arithmetic_traits::TaggedLaneCompare::<$strategy, $lane>::gt_lanes(self, rhs)
				}

				#[inline]
				fn lt_lanes(self, rhs: Self) -> Self {
					$crate::arithmetic_traits::TaggedLaneCompare::<$strategy, $lane>::lt_lanes(self, rhs)
				}

				#[inline]
				fn ge_lanes(self, rhs: Self) -> Self {
					$crate::arithmetic_traits::TaggedLaneCompare::<$strategy, $lane>::ge_lanes(self, rhs)
				}

				#[inline]
				fn le_lanes(self, rhs: Self) -> Self {
					$crate::arithmetic_traits::TaggedLaneCompare::<$strategy, $lane>::le_lanes(self, rhs)
				}
			}
		)*
	};
}

pub(crate) use impl_lane_compare_with;

macro_rules! impl_lane_shift_with {
	($register:ty, $strategy:ty; $($lane:ty),* $(,)?) => {
		$(
			impl $crate::arithmetic_traits::LaneShift<$lane> for $register {
				#[inline]
				fn shl_lanes(self, count: u32) -> Self {
					$crate::arithmetic_traits::TaggedLaneShift::<$strategy, $lane>::shl_lanes(self, count)
				}

				#[inline]
				fn shr_lanes(self, count: u32) -> Self {
					$crate::arithmetic_traits::TaggedLaneShift::<$strategy, $lane>::shr_lanes(self, count)
				}

				#[inline]
				fn shl_lanes_by(self, counts: Self) -> Self {
					$crate::arithmetic_traits::TaggedLaneShift::<$strategy, $lane>::shl_lanes_by(self, counts)
				}

				#[inline]
				fn shr_lanes_by(self, counts: Self) -> Self {
					$crate::arithmetic_traits::TaggedLaneShift::<$strategy, $lane>::shr_lanes_by(self, counts)
				}
			}
		)*
	};
}

pub(crate) use impl_lane_shift_with;

/// Implements all lane operations of every lane type for `$register` with one strategy.
macro_rules! impl_lane_ops_with {
	($register:ty, $strategy:ty) => {
		$crate::arithmetic_traits::impl_lane_arithmetic_with!(
			$register, $strategy; u8, u16, u32, u64, i8, i16, i32, i64, f32, f64
		);
		$crate::arithmetic_traits::impl_lane_compare_with!(
			$register, $strategy; u8, u16, u32, u64, i8, i16, i32, i64, f32, f64, bool
		);
		$crate::arithmetic_traits::impl_lane_shift_with!(
			$register, $strategy; u8, u16, u32, u64, i8, i16, i32, i64
		);
	};
}

pub(crate) use impl_lane_ops_with;
