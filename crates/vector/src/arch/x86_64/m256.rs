// Copyright 2024-2025 Irreducible Inc.

use std::{
	arch::x86_64::*,
	fmt,
	hash::{Hash, Hasher},
	ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not},
};

use bytemuck::{must_cast, Pod, Zeroable};
use subtle::{Choice, ConstantTimeEq};

use super::m128::M128;
use crate::{
	lane::LaneBits,
	register::{Halves, Register},
};

/// 256-bit value that is used for 256-bit SIMD operations
#[derive(Copy, Clone)]
#[repr(transparent)]
pub struct M256(pub(super) __m256i);

impl From<__m256i> for M256 {
	#[inline(always)]
	fn from(value: __m256i) -> Self {
		Self(value)
	}
}

impl From<M256> for __m256i {
	#[inline(always)]
	fn from(value: M256) -> Self {
		value.0
	}
}

impl From<[u128; 2]> for M256 {
	#[inline(always)]
	fn from(value: [u128; 2]) -> Self {
		must_cast(value)
	}
}

impl From<M256> for [u128; 2] {
	#[inline(always)]
	fn from(value: M256) -> Self {
		must_cast(value)
	}
}

unsafe impl Zeroable for M256 {}

unsafe impl Pod for M256 {}

impl Default for M256 {
	#[inline(always)]
	fn default() -> Self {
		Self(unsafe { _mm256_setzero_si256() })
	}
}

impl PartialEq for M256 {
	#[inline(always)]
	fn eq(&self, other: &Self) -> bool {
		unsafe { _mm256_movemask_epi8(_mm256_cmpeq_epi8(self.0, other.0)) == -1 }
	}
}

impl Eq for M256 {}

impl Hash for M256 {
	fn hash<H: Hasher>(&self, state: &mut H) {
		<[u128; 2]>::from(*self).hash(state)
	}
}

impl ConstantTimeEq for M256 {
	#[inline(always)]
	fn ct_eq(&self, other: &Self) -> Choice {
		<[u128; 2]>::from(*self).ct_eq(&<[u128; 2]>::from(*other))
	}
}

impl fmt::Debug for M256 {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let [lower, upper] = <[u128; 2]>::from(*self);
		write!(f, "M256({upper:#034x}{lower:032x})")
	}
}

impl BitAnd for M256 {
	type Output = Self;

	#[inline(always)]
	fn bitand(self, rhs: Self) -> Self::Output {
		Self(unsafe { _mm256_and_si256(self.0, rhs.0) })
	}
}

impl BitAndAssign for M256 {
	#[inline(always)]
	fn bitand_assign(&mut self, rhs: Self) {
		*self = *self & rhs
	}
}

impl BitOr for M256 {
	type Output = Self;

	#[inline(always)]
	fn bitor(self, rhs: Self) -> Self::Output {
		Self(unsafe { _mm256_or_si256(self.0, rhs.0) })
	}
}

impl BitOrAssign for M256 {
	#[inline(always)]
	fn bitor_assign(&mut self, rhs: Self) {
		*self = *self | rhs
	}
}

impl BitXor for M256 {
	type Output = Self;

	#[inline(always)]
	fn bitxor(self, rhs: Self) -> Self::Output {
		Self(unsafe { _mm256_xor_si256(self.0, rhs.0) })
	}
}

impl BitXorAssign for M256 {
	#[inline(always)]
	fn bitxor_assign(&mut self, rhs: Self) {
		*self = *self ^ rhs;
	}
}

impl Not for M256 {
	type Output = Self;

	#[inline(always)]
	fn not(self) -> Self::Output {
		Self(unsafe { _mm256_xor_si256(self.0, _mm256_set1_epi32(-1)) })
	}
}

impl Register for M256 {
	const BITS: usize = 256;

	#[inline]
	fn broadcast_lane_bits<B: LaneBits>(value: B) -> Self {
		let half = M128::broadcast_lane_bits(value);
		Self::join(half, half)
	}
}

impl Halves for M256 {
	type Half = M128;

	#[inline(always)]
	fn split(self) -> (M128, M128) {
		unsafe {
			(
				_mm256_castsi256_si128(self.0).into(),
				_mm256_extracti128_si256::<1>(self.0).into(),
			)
		}
	}

	#[inline(always)]
	fn join(lower: M128, upper: M128) -> Self {
		Self(unsafe { _mm256_set_m128i(upper.into(), lower.into()) })
	}
}
