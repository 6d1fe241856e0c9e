// Copyright 2024-2025 Irreducible Inc.

use std::{
	arch::x86_64::*,
	fmt,
	hash::{Hash, Hasher},
	ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not},
};

use bytemuck::{must_cast, Pod, Zeroable};
use subtle::{Choice, ConstantTimeEq};

use crate::{
	arch::portable::m64::M64,
	lane::LaneBits,
	register::{Halves, Register},
};

/// 128-bit value that is used for 128-bit SIMD operations
#[derive(Copy, Clone)]
#[repr(transparent)]
pub struct M128(pub(super) __m128i);

impl From<__m128i> for M128 {
	#[inline(always)]
	fn from(value: __m128i) -> Self {
		Self(value)
	}
}

impl From<M128> for __m128i {
	#[inline(always)]
	fn from(value: M128) -> Self {
		value.0
	}
}

impl From<u128> for M128 {
	#[inline(always)]
	fn from(value: u128) -> Self {
		must_cast(value)
	}
}

impl From<M128> for u128 {
	#[inline(always)]
	fn from(value: M128) -> Self {
		must_cast(value)
	}
}

unsafe impl Zeroable for M128 {}

unsafe impl Pod for M128 {}

impl Default for M128 {
	#[inline(always)]
	fn default() -> Self {
		Self(unsafe { _mm_setzero_si128() })
	}
}

impl PartialEq for M128 {
	#[inline(always)]
	fn eq(&self, other: &Self) -> bool {
		unsafe { _mm_movemask_epi8(_mm_cmpeq_epi8(self.0, other.0)) == 0xFFFF }
	}
}

impl Eq for M128 {}

impl Hash for M128 {
	fn hash<H: Hasher>(&self, state: &mut H) {
		u128::from(*self).hash(state)
	}
}

impl ConstantTimeEq for M128 {
	#[inline(always)]
	fn ct_eq(&self, other: &Self) -> Choice {
		u128::from(*self).ct_eq(&u128::from(*other))
	}
}

impl fmt::Debug for M128 {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "M128({:#034x})", u128::from(*self))
	}
}

impl BitAnd for M128 {
	type Output = Self;

	#[inline(always)]
	fn bitand(self, rhs: Self) -> Self::Output {
		Self(unsafe { _mm_and_si128(self.0, rhs.0) })
	}
}

impl BitAndAssign for M128 {
	#[inline(always)]
	fn bitand_assign(&mut self, rhs: Self) {
		*self = *self & rhs
	}
}

impl BitOr for M128 {
	type Output = Self;

	#[inline(always)]
	fn bitor(self, rhs: Self) -> Self::Output {
		Self(unsafe { _mm_or_si128(self.0, rhs.0) })
	}
}

impl BitOrAssign for M128 {
	#[inline(always)]
	fn bitor_assign(&mut self, rhs: Self) {
		*self = *self | rhs
	}
}

impl BitXor for M128 {
	type Output = Self;

	#[inline(always)]
	fn bitxor(self, rhs: Self) -> Self::Output {
		Self(unsafe { _mm_xor_si128(self.0, rhs.0) })
	}
}

impl BitXorAssign for M128 {
	#[inline(always)]
	fn bitxor_assign(&mut self, rhs: Self) {
		*self = *self ^ rhs;
	}
}

impl Not for M128 {
	type Output = Self;

	#[inline(always)]
	fn not(self) -> Self::Output {
		Self(unsafe { _mm_xor_si128(self.0, _mm_set1_epi32(-1)) })
	}
}

impl Register for M128 {
	const BITS: usize = 128;

	#[inline]
	fn broadcast_lane_bits<B: LaneBits>(value: B) -> Self {
		let value: u64 = match std::mem::size_of::<B>() {
			1 => u64::from(bytemuck::cast::<B, u8>(value)) * 0x0101_0101_0101_0101,
			2 => u64::from(bytemuck::cast::<B, u16>(value)) * 0x0001_0001_0001_0001,
			4 => u64::from(bytemuck::cast::<B, u32>(value)) * 0x0000_0001_0000_0001,
			8 => bytemuck::cast::<B, u64>(value),
			_ => return Self::from_lane_bits_fn(|_| value),
		};

		Self(unsafe { _mm_set1_epi64x(value as i64) })
	}
}

impl Halves for M128 {
	type Half = M64;

	#[inline(always)]
	fn split(self) -> (M64, M64) {
		unsafe {
			let lower = _mm_cvtsi128_si64(self.0) as u64;
			let upper = _mm_cvtsi128_si64(_mm_srli_si128::<8>(self.0)) as u64;
			(M64::from(lower), M64::from(upper))
		}
	}

	#[inline(always)]
	fn join(lower: M64, upper: M64) -> Self {
		Self(unsafe { _mm_set_epi64x(u64::from(upper) as i64, u64::from(lower) as i64) })
	}
}

#[cfg(test)]
mod tests {
	use proptest::prelude::*;

	use super::*;

	#[test]
	fn test_debug() {
		assert_eq!(
			format!("{:?}", M128::from(0xFFu128)),
			"M128(0x000000000000000000000000000000ff)"
		);
	}

	#[test]
	fn test_broadcast() {
		assert_eq!(
			M128::broadcast_lane_bits(0x7Fu8),
			M128::from(0x7F7F7F7F7F7F7F7F7F7F7F7F7F7F7F7Fu128)
		);
		assert_eq!(
			M128::broadcast_lane_bits(0xDEADu16),
			M128::from(0xDEADDEADDEADDEADDEADDEADDEADDEADu128)
		);
		assert_eq!(
			M128::broadcast_lane_bits(0x1234_5678u32),
			M128::from(0x12345678123456781234567812345678u128)
		);
		assert_eq!(M128::broadcast_lane_bits(u128::MAX - 1), M128::from(u128::MAX - 1));
	}

	proptest! {
		#[test]
		fn test_split_join(value in any::<u128>()) {
			let value = M128::from(value);
			let (lower, upper) = value.split();

			prop_assert_eq!(u64::from(lower), u128::from(value) as u64);
			prop_assert_eq!(u64::from(upper), (u128::from(value) >> 64) as u64);
			prop_assert_eq!(M128::join(lower, upper), value);
		}

		#[test]
		fn test_bit_ops(a in any::<u128>(), b in any::<u128>()) {
			let (ma, mb) = (M128::from(a), M128::from(b));

			prop_assert_eq!(u128::from(ma & mb), a & b);
			prop_assert_eq!(u128::from(ma | mb), a | b);
			prop_assert_eq!(u128::from(ma ^ mb), a ^ b);
			prop_assert_eq!(u128::from(!ma), !a);
			prop_assert_eq!(ma == mb, a == b);
		}
	}
}
