// Copyright 2024-2025 Irreducible Inc.

use std::{
	array,
	ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not},
};

use bytemuck::{Pod, Zeroable};
use subtle::{Choice, ConstantTimeEq};

use crate::{
	arch::HalvesStrategy,
	arithmetic_traits::{
		LaneArithmetic, LaneCompare, LaneShift, TaggedLaneArithmetic, TaggedLaneCompare,
		TaggedLaneShift,
	},
	lane::{IntegerLane, Lane, NumericLane},
	register::{Halves, Register},
};

/// A register composed of `N` registers of the same type, the lower one first.
/// Every lane operation is delegated to the parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct ScaledRegister<R, const N: usize>(pub [R; N]);

impl<R: Default, const N: usize> Default for ScaledRegister<R, N> {
	fn default() -> Self {
		Self(array::from_fn(|_| R::default()))
	}
}

impl<R, const N: usize> From<[R; N]> for ScaledRegister<R, N> {
	fn from(value: [R; N]) -> Self {
		Self(value)
	}
}

impl<R, const N: usize> From<ScaledRegister<R, N>> for [R; N] {
	fn from(value: ScaledRegister<R, N>) -> Self {
		value.0
	}
}

impl<R: ConstantTimeEq, const N: usize> ConstantTimeEq for ScaledRegister<R, N> {
	fn ct_eq(&self, other: &Self) -> Choice {
		self.0.ct_eq(&other.0)
	}
}

unsafe impl<R: Zeroable, const N: usize> Zeroable for ScaledRegister<R, N> {}

unsafe impl<R: Pod, const N: usize> Pod for ScaledRegister<R, N> {}

impl<R: BitAnd<Output = R> + Copy, const N: usize> BitAnd for ScaledRegister<R, N> {
	type Output = Self;

	fn bitand(self, rhs: Self) -> Self::Output {
		Self(array::from_fn(|i| self.0[i] & rhs.0[i]))
	}
}

impl<R: BitAndAssign + Copy, const N: usize> BitAndAssign for ScaledRegister<R, N> {
	fn bitand_assign(&mut self, rhs: Self) {
		for i in 0..N {
			self.0[i] &= rhs.0[i];
		}
	}
}

impl<R: BitOr<Output = R> + Copy, const N: usize> BitOr for ScaledRegister<R, N> {
	type Output = Self;

	fn bitor(self, rhs: Self) -> Self::Output {
		Self(array::from_fn(|i| self.0[i] | rhs.0[i]))
	}
}

impl<R: BitOrAssign + Copy, const N: usize> BitOrAssign for ScaledRegister<R, N> {
	fn bitor_assign(&mut self, rhs: Self) {
		for i in 0..N {
			self.0[i] |= rhs.0[i];
		}
	}
}

impl<R: BitXor<Output = R> + Copy, const N: usize> BitXor for ScaledRegister<R, N> {
	type Output = Self;

	fn bitxor(self, rhs: Self) -> Self::Output {
		Self(array::from_fn(|i| self.0[i] ^ rhs.0[i]))
	}
}

impl<R: BitXorAssign + Copy, const N: usize> BitXorAssign for ScaledRegister<R, N> {
	fn bitxor_assign(&mut self, rhs: Self) {
		for i in 0..N {
			self.0[i] ^= rhs.0[i];
		}
	}
}

impl<R: Not<Output = R>, const N: usize> Not for ScaledRegister<R, N> {
	type Output = Self;

	fn not(self) -> Self::Output {
		Self(self.0.map(R::not))
	}
}

impl<R: Register, const N: usize> Register for ScaledRegister<R, N> {
	const BITS: usize = R::BITS * N;
}

impl<R: Register> Halves for ScaledRegister<R, 2> {
	type Half = R;

	#[inline]
	fn split(self) -> (R, R) {
		let [lower, upper] = self.0;
		(lower, upper)
	}

	#[inline]
	fn join(lower: R, upper: R) -> Self {
		Self([lower, upper])
	}
}

impl<R: LaneArithmetic<T>, T: NumericLane> LaneArithmetic<T> for ScaledRegister<R, 2> {
	#[inline]
	fn add_lanes(self, rhs: Self) -> Self {
		TaggedLaneArithmetic::<HalvesStrategy, T>::add_lanes(self, rhs)
	}

	#[inline]
	fn sub_lanes(self, rhs: Self) -> Self {
		TaggedLaneArithmetic::<HalvesStrategy, T>::sub_lanes(self, rhs)
	}

	#[inline]
	fn mul_lanes(self, rhs: Self) -> Self {
		TaggedLaneArithmetic::<HalvesStrategy, T>::mul_lanes(self, rhs)
	}

	#[inline]
	fn div_lanes(self, rhs: Self) -> Self {
		TaggedLaneArithmetic::<HalvesStrategy, T>::div_lanes(self, rhs)
	}

	#[inline]
	fn rem_lanes(self, rhs: Self) -> Self {
		TaggedLaneArithmetic::<HalvesStrategy, T>::rem_lanes(self, rhs)
	}

	#[inline]
	fn neg_lanes(self) -> Self {
		TaggedLaneArithmetic::<HalvesStrategy, T>::neg_lanes(self)
	}
}

impl<R: LaneCompare<T>, T: Lane> LaneCompare<T> for ScaledRegister<R, 2> {
	#[inline]
	fn eq_lanes(self, rhs: Self) -> Self {
		TaggedLaneCompare::<HalvesStrategy, T>::eq_lanes(self, rhs)
	}

	#[inline]
	fn ne_lanes(self, rhs: Self) -> Self {
		TaggedLaneCompare::<HalvesStrategy, T>::ne_lanes(self, rhs)
	}

	#[inline]
	fn gt_lanes(self, rhs: Self) -> Self {
		TaggedLaneCompare::<HalvesStrategy, T>::gt_lanes(self, rhs)
	}

	#[inline]
	fn lt_lanes(self, rhs: Self) -> Self {
		TaggedLaneCompare::<HalvesStrategy, T>::lt_lanes(self, rhs)
	}

	#[inline]
	fn ge_lanes(self, rhs: Self) -> Self {
		TaggedLaneCompare::<HalvesStrategy, T>::ge_lanes(self, rhs)
	}

	#[inline]
	fn le_lanes(self, rhs: Self) -> Self {
		TaggedLaneCompare::<HalvesStrategy, T>::le_lanes(self, rhs)
	}
}

impl<R: LaneShift<T>, T: IntegerLane> LaneShift<T> for ScaledRegister<R, 2> {
	#[inline]
	fn shl_lanes(self, count: u32) -> Self {
		TaggedLaneShift::<HalvesStrategy, T>::shl_lanes(self, count)
	}

	#[inline]
	fn shr_lanes(self, count: u32) -> Self {
		TaggedLaneShift::<HalvesStrategy, T>::shr_lanes(self, count)
	}

	#[inline]
	fn shl_lanes_by(self, counts: Self) -> Self {
		TaggedLaneShift::<HalvesStrategy, T>::shl_lanes_by(self, counts)
	}

	#[inline]
	fn shr_lanes_by(self, counts: Self) -> Self {
		TaggedLaneShift::<HalvesStrategy, T>::shr_lanes_by(self, counts)
	}
}
