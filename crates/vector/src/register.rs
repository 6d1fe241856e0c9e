// Copyright 2024-2025 Irreducible Inc.

use std::{
	fmt::Debug,
	mem::size_of,
	ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not},
};

use bytemuck::{bytes_of, bytes_of_mut, pod_read_unaligned, Pod};
use rand::RngCore;

use crate::lane::LaneBits;

/// Fixed-width register holding the bits of a vector.
///
/// Lane `i` of a register occupies the bytes `[i * size, (i + 1) * size)` in memory order,
/// where `size` is the byte width of the lane. The default lane accessors rely on this layout.
pub trait Register:
	Copy
	+ Default
	+ Debug
	+ Eq
	+ Pod
	+ Send
	+ Sync
	+ 'static
	+ BitAnd<Output = Self>
	+ BitAndAssign
	+ BitOr<Output = Self>
	+ BitOrAssign
	+ BitXor<Output = Self>
	+ BitXorAssign
	+ Not<Output = Self>
{
	/// Width of the register in bits.
	const BITS: usize;

	/// Returns the bits of `index`-th lane of width `B`.
	///
	/// ## Panics
	/// Panics if the lane is outside of the register.
	#[inline]
	fn lane_bits<B: LaneBits>(&self, index: usize) -> B {
		let size = size_of::<B>();
		pod_read_unaligned(&bytes_of(self)[index * size..(index + 1) * size])
	}

	/// Builds a register from the bits of each lane of width `B`.
	#[inline]
	fn from_lane_bits_fn<B: LaneBits>(mut f: impl FnMut(usize) -> B) -> Self {
		let mut result = Self::zeroed();
		for (i, chunk) in bytes_of_mut(&mut result)
			.chunks_exact_mut(size_of::<B>())
			.enumerate()
		{
			chunk.copy_from_slice(bytes_of(&f(i)));
		}

		result
	}

	/// Sets all lanes of width `B` to `value`.
	#[inline]
	fn broadcast_lane_bits<B: LaneBits>(value: B) -> Self {
		Self::from_lane_bits_fn(|_| value)
	}

	/// Register filled with random bits.
	fn random(mut rng: impl RngCore) -> Self {
		let mut result = Self::zeroed();
		rng.fill_bytes(bytes_of_mut(&mut result));

		result
	}
}

/// Register composed of two registers of half the width.
pub trait Halves: Register {
	type Half: Register;

	/// Returns the lower and the upper half.
	fn split(self) -> (Self::Half, Self::Half);

	fn join(lower: Self::Half, upper: Self::Half) -> Self;
}

#[cfg(test)]
mod tests {
	use rand::{rngs::StdRng, SeedableRng};

	use super::*;
	use crate::arch::{M128, M256, M64};

	#[test]
	fn test_lane_bits_layout() {
		let value = M64::from(0x0807_0605_0403_0201u64);

		assert_eq!(value.lane_bits::<u8>(0), 0x01);
		assert_eq!(value.lane_bits::<u8>(7), 0x08);
		assert_eq!(value.lane_bits::<u16>(1), 0x0403);
		assert_eq!(value.lane_bits::<u32>(1), 0x0807_0605);
		assert_eq!(value.lane_bits::<u64>(0), 0x0807_0605_0403_0201);
	}

	#[test]
	#[should_panic]
	fn test_lane_bits_out_of_range() {
		let _ = M64::default().lane_bits::<u16>(4);
	}

	#[test]
	fn test_from_lane_bits_fn() {
		let value = M128::from_lane_bits_fn(|i| i as u32 + 1);
		for i in 0..4 {
			assert_eq!(value.lane_bits::<u32>(i), i as u32 + 1);
		}
		assert_eq!(M128::broadcast_lane_bits(u16::MAX), !M128::default());
	}

	#[test]
	fn test_split_join() {
		let mut rng = StdRng::seed_from_u64(0);
		let value = M256::random(&mut rng);
		let (lower, upper) = value.split();

		assert_eq!(M256::join(lower, upper), value);
		assert_eq!(lower.lane_bits::<u64>(0), value.lane_bits::<u64>(0));
		assert_eq!(lower.lane_bits::<u64>(1), value.lane_bits::<u64>(1));
		assert_eq!(upper.lane_bits::<u64>(0), value.lane_bits::<u64>(2));
		assert_eq!(upper.lane_bits::<u64>(1), value.lane_bits::<u64>(3));

		let (lower, upper) = lower.split();
		assert_eq!(u64::from(lower), value.lane_bits::<u64>(0));
		assert_eq!(u64::from(upper), value.lane_bits::<u64>(1));
	}
}
