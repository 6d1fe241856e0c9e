// Copyright 2024-2025 Irreducible Inc.

use crate::{
	arch::ScalarStrategy,
	arithmetic_traits::{TaggedLaneArithmetic, TaggedLaneCompare, TaggedLaneShift},
	lane::{IntegerLane, Lane, LaneBits, NumericLane},
	register::Register,
	tracing::trace_emulation,
};

#[inline]
fn lane<R: Register, T: Lane>(value: &R, index: usize) -> T {
	T::from_bits(value.lane_bits(index))
}

#[inline]
pub(crate) fn map_lanes<R: Register, T: Lane>(value: R, f: impl Fn(T) -> T) -> R {
	R::from_lane_bits_fn(|i| f(lane(&value, i)).to_bits())
}

#[inline]
pub(crate) fn zip_lanes<R: Register, T: Lane>(lhs: R, rhs: R, f: impl Fn(T, T) -> T) -> R {
	R::from_lane_bits_fn(|i| f(lane(&lhs, i), lane(&rhs, i)).to_bits())
}

#[inline]
fn mask_lanes<R: Register, T: Lane>(lhs: R, rhs: R, predicate: impl Fn(T, T) -> bool) -> R {
	R::from_lane_bits_fn(|i| {
		if predicate(lane(&lhs, i), lane(&rhs, i)) {
			T::Bits::ONES
		} else {
			T::Bits::ZERO
		}
	})
}

impl<R: Register, T: NumericLane> TaggedLaneArithmetic<ScalarStrategy, T> for R {
	#[inline]
	fn add_lanes(self, rhs: Self) -> Self {
		trace_emulation!("add", "scalar", T, R);

		zip_lanes(self, rhs, T::lane_add)
	}

	#[inline]
	fn sub_lanes(self, rhs: Self) -> Self {
		trace_emulation!("sub", "scalar", T, R);

		zip_lanes(self, rhs, T::lane_sub)
	}

	#[inline]
	fn mul_lanes(self, rhs: Self) -> Self {
		trace_emulation!("mul", "scalar", T, R);

		zip_lanes(self, rhs, T::lane_mul)
	}

	#[inline]
	fn div_lanes(self, rhs: Self) -> Self {
		trace_emulation!("div", "scalar", T, R);

		zip_lanes(self, rhs, T::lane_div)
	}

	#[inline]
	fn rem_lanes(self, rhs: Self) -> Self {
		trace_emulation!("rem", "scalar", T, R);

		zip_lanes(self, rhs, T::lane_rem)
	}

	#[inline]
	fn neg_lanes(self) -> Self {
		trace_emulation!("neg", "scalar", T, R);

		map_lanes(self, T::lane_neg)
	}
}

impl<R: Register, T: Lane> TaggedLaneCompare<ScalarStrategy, T> for R {
	#[inline]
	fn eq_lanes(self, rhs: Self) -> Self {
		trace_emulation!("eq", "scalar", T, R);

		mask_lanes(self, rhs, |a: T, b: T| a == b)
	}

	#[inline]
	fn ne_lanes(self, rhs: Self) -> Self {
		trace_emulation!("ne", "scalar", T, R);

		mask_lanes(self, rhs, |a: T, b: T| a != b)
	}

	#[inline]
	fn gt_lanes(self, rhs: Self) -> Self {
		trace_emulation!("gt", "scalar", T, R);

		mask_lanes(self, rhs, |a: T, b: T| a > b)
	}

	#[inline]
	fn lt_lanes(self, rhs: Self) -> Self {
		trace_emulation!("lt", "scalar", T, R);

		mask_lanes(self, rhs, |a: T, b: T| a < b)
	}

	#[inline]
	fn ge_lanes(self, rhs: Self) -> Self {
		trace_emulation!("ge", "scalar", T, R);

		mask_lanes(self, rhs, |a: T, b: T| a >= b)
	}

	#[inline]
	fn le_lanes(self, rhs: Self) -> Self {
		trace_emulation!("le", "scalar", T, R);

		mask_lanes(self, rhs, |a: T, b: T| a <= b)
	}
}

impl<R: Register, T: IntegerLane> TaggedLaneShift<ScalarStrategy, T> for R {
	#[inline]
	fn shl_lanes(self, count: u32) -> Self {
		trace_emulation!("shl", "scalar", T, R);

		map_lanes(self, |value: T| value.lane_shl(count))
	}

	#[inline]
	fn shr_lanes(self, count: u32) -> Self {
		trace_emulation!("shr", "scalar", T, R);

		map_lanes(self, |value: T| value.lane_shr(count))
	}

	#[inline]
	fn shl_lanes_by(self, counts: Self) -> Self {
		trace_emulation!("shl_by", "scalar", T, R);

		zip_lanes(self, counts, |value: T, count: T| value.lane_shl(count.shift_count()))
	}

	#[inline]
	fn shr_lanes_by(self, counts: Self) -> Self {
		trace_emulation!("shr_by", "scalar", T, R);

		zip_lanes(self, counts, |value: T, count: T| value.lane_shr(count.shift_count()))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::arch::M64;

	#[test]
	fn test_scalar_division() {
		let lhs = M64::from_lane_bits_fn(|i| (i as i16 * 10).to_bits());
		let rhs = M64::broadcast_lane_bits((-3i16).to_bits());
		let result = TaggedLaneArithmetic::<ScalarStrategy, i16>::div_lanes(lhs, rhs);

		let expected = [0i16, -3, -6, -10];
		for (i, expected) in expected.into_iter().enumerate() {
			assert_eq!(lane::<_, i16>(&result, i), expected);
		}
	}

	#[test]
	fn test_scalar_compare_masks() {
		let lhs = M64::from_lane_bits_fn(|i| (i as f32).to_bits());
		let rhs = M64::broadcast_lane_bits(f32::NAN.to_bits());

		let ne = TaggedLaneCompare::<ScalarStrategy, f32>::ne_lanes(lhs, rhs);
		assert_eq!(ne, !M64::default());

		let eq = TaggedLaneCompare::<ScalarStrategy, f32>::eq_lanes(lhs, lhs);
		assert_eq!(eq, !M64::default());

		let gt = TaggedLaneCompare::<ScalarStrategy, f32>::gt_lanes(lhs, M64::default());
		assert_eq!(gt.lane_bits::<u32>(0), 0);
		assert_eq!(gt.lane_bits::<u32>(1), u32::MAX);
	}

	#[test]
	fn test_scalar_variable_shift() {
		let value = M64::broadcast_lane_bits(0x80u8);
		let counts = M64::from_lane_bits_fn(|i| i as u8);
		let result = TaggedLaneShift::<ScalarStrategy, i8>::shr_lanes_by(value, counts);

		for i in 0..8 {
			assert_eq!(lane::<_, i8>(&result, i), i8::MIN >> i);
		}
	}
}
