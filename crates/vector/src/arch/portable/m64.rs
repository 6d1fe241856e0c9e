// Copyright 2024-2025 Irreducible Inc.

use std::{
	fmt,
	ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not},
};

use bytemuck::{Pod, Zeroable};
use subtle::{Choice, ConstantTimeEq};

use crate::{
	arch::ScalarStrategy, arithmetic_traits::impl_lane_ops_with, lane::LaneBits,
	register::Register,
};

/// 64-bit register backed by a general purpose word.
///
/// Lanes are processed one by one, the narrow register only exists to give the
/// composed registers a portable building block.
#[derive(Default, Clone, Copy, PartialEq, Eq, Hash, Pod, Zeroable)]
#[repr(transparent)]
pub struct M64(u64);

impl From<u64> for M64 {
	#[inline(always)]
	fn from(value: u64) -> Self {
		Self(value)
	}
}

impl From<M64> for u64 {
	#[inline(always)]
	fn from(value: M64) -> Self {
		value.0
	}
}

impl ConstantTimeEq for M64 {
	fn ct_eq(&self, other: &Self) -> Choice {
		self.0.ct_eq(&other.0)
	}
}

impl BitAnd for M64 {
	type Output = Self;

	#[inline(always)]
	fn bitand(self, rhs: Self) -> Self::Output {
		Self(self.0 & rhs.0)
	}
}

impl BitAndAssign for M64 {
	#[inline(always)]
	fn bitand_assign(&mut self, rhs: Self) {
		self.0 &= rhs.0
	}
}

impl BitOr for M64 {
	type Output = Self;

	#[inline(always)]
	fn bitor(self, rhs: Self) -> Self::Output {
		Self(self.0 | rhs.0)
	}
}

impl BitOrAssign for M64 {
	#[inline(always)]
	fn bitor_assign(&mut self, rhs: Self) {
		self.0 |= rhs.0
	}
}

impl BitXor for M64 {
	type Output = Self;

	#[inline(always)]
	fn bitxor(self, rhs: Self) -> Self::Output {
		Self(self.0 ^ rhs.0)
	}
}

impl BitXorAssign for M64 {
	#[inline(always)]
	fn bitxor_assign(&mut self, rhs: Self) {
		self.0 ^= rhs.0
	}
}

impl Not for M64 {
	type Output = Self;

	#[inline(always)]
	fn not(self) -> Self::Output {
		Self(!self.0)
	}
}

impl fmt::Debug for M64 {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "M64({:#018x})", self.0)
	}
}

impl Register for M64 {
	const BITS: usize = 64;

	#[inline]
	fn broadcast_lane_bits<B: LaneBits>(value: B) -> Self {
		let bytes = bytemuck::bytes_of(&value);
		let mut result = [0u8; 8];
		for chunk in result.chunks_exact_mut(bytes.len()) {
			chunk.copy_from_slice(bytes);
		}

		Self(u64::from_ne_bytes(result))
	}
}

impl_lane_ops_with!(M64, ScalarStrategy);

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_broadcast() {
		assert_eq!(M64::broadcast_lane_bits(0xABu8), M64(0xABAB_ABAB_ABAB_ABAB));
		assert_eq!(M64::broadcast_lane_bits(0x1234u16), M64(0x1234_1234_1234_1234));
		assert_eq!(M64::broadcast_lane_bits(u64::MAX), !M64::default());
	}

	#[test]
	fn test_debug() {
		assert_eq!(format!("{:?}", M64(0xFF)), "M64(0x00000000000000ff)");
	}
}
