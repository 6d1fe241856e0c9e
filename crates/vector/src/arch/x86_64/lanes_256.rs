// Copyright 2024-2025 Irreducible Inc.

//! Lane operations of the 256-bit AVX2 register.
//!
//! Operations without an AVX2 instruction are applied to the 128-bit halves.

use std::arch::x86_64::*;

use seq_macro::seq;

use super::m256::M256;
use crate::{
	arch::HalvesStrategy,
	arithmetic_traits::{
		impl_lane_compare_with, LaneArithmetic, LaneCompare, LaneShift, TaggedLaneArithmetic,
		TaggedLaneShift,
	},
	register::Register,
};

#[inline(always)]
fn count_register(count: u32) -> __m128i {
	unsafe { _mm_cvtsi64_si128(count as i64) }
}

macro_rules! m256_binary_fn {
	($($name:ident = $intrinsic:ident),* $(,)?) => {
		$(
			#[inline(always)]
			fn $name(lhs: M256, rhs: M256) -> M256 {
				unsafe { $intrinsic(lhs.0, rhs.0) }.into()
			}
		)*
	};
}

// Multiplication

#[inline(always)]
fn mul_epi8(lhs: M256, rhs: M256) -> M256 {
	unsafe {
		let low_byte = _mm256_set1_epi16(0x00FF);
		let even = _mm256_and_si256(_mm256_mullo_epi16(lhs.0, rhs.0), low_byte);
		let odd = _mm256_slli_epi16::<8>(_mm256_mullo_epi16(
			_mm256_srli_epi16::<8>(lhs.0),
			_mm256_srli_epi16::<8>(rhs.0),
		));
		_mm256_or_si256(even, odd)
	}
	.into()
}

m256_binary_fn!(mul_epi16 = _mm256_mullo_epi16, mul_epi32 = _mm256_mullo_epi32);

#[inline(always)]
fn mul_epi64(lhs: M256, rhs: M256) -> M256 {
	unsafe {
		let low = _mm256_mul_epu32(lhs.0, rhs.0);
		let cross = _mm256_add_epi64(
			_mm256_mul_epu32(_mm256_srli_epi64::<32>(lhs.0), rhs.0),
			_mm256_mul_epu32(lhs.0, _mm256_srli_epi64::<32>(rhs.0)),
		);
		_mm256_add_epi64(low, _mm256_slli_epi64::<32>(cross))
	}
	.into()
}

macro_rules! impl_integer_arithmetic {
	($lane:ty, add = $add:ident, sub = $sub:ident, mul = $mul:expr) => {
		impl LaneArithmetic<$lane> for M256 {
			#[inline(always)]
			fn add_lanes(self, rhs: Self) -> Self {
				unsafe { $add(self.0, rhs.0) }.into()
			}

			#[inline(always)]
			fn sub_lanes(self, rhs: Self) -> Self {
				unsafe { $sub(self.0, rhs.0) }.into()
			}

			#[inline(always)]
			fn mul_lanes(self, rhs: Self) -> Self {
				($mul)(self, rhs)
			}

			#[inline]
			fn div_lanes(self, rhs: Self) -> Self {
				TaggedLaneArithmetic::<HalvesStrategy, $lane>::div_lanes(self, rhs)
			}

			#[inline]
			fn rem_lanes(self, rhs: Self) -> Self {
				TaggedLaneArithmetic::<HalvesStrategy, $lane>::rem_lanes(self, rhs)
			}

			#[inline(always)]
			fn neg_lanes(self) -> Self {
				unsafe { $sub(_mm256_setzero_si256(), self.0) }.into()
			}
		}
	};
}

impl_integer_arithmetic!(u8, add = _mm256_add_epi8, sub = _mm256_sub_epi8, mul = mul_epi8);
impl_integer_arithmetic!(i8, add = _mm256_add_epi8, sub = _mm256_sub_epi8, mul = mul_epi8);
impl_integer_arithmetic!(u16, add = _mm256_add_epi16, sub = _mm256_sub_epi16, mul = mul_epi16);
impl_integer_arithmetic!(i16, add = _mm256_add_epi16, sub = _mm256_sub_epi16, mul = mul_epi16);
impl_integer_arithmetic!(u32, add = _mm256_add_epi32, sub = _mm256_sub_epi32, mul = mul_epi32);
impl_integer_arithmetic!(i32, add = _mm256_add_epi32, sub = _mm256_sub_epi32, mul = mul_epi32);
impl_integer_arithmetic!(u64, add = _mm256_add_epi64, sub = _mm256_sub_epi64, mul = mul_epi64);
impl_integer_arithmetic!(i64, add = _mm256_add_epi64, sub = _mm256_sub_epi64, mul = mul_epi64);

macro_rules! impl_float_arithmetic {
	(
		$lane:ty,
		cast_in = $cast_in:ident,
		cast_out = $cast_out:ident,
		add = $add:ident,
		sub = $sub:ident,
		mul = $mul:ident,
		div = $div:ident,
		sign = $sign:expr
	) => {
		impl LaneArithmetic<$lane> for M256 {
			#[inline(always)]
			fn add_lanes(self, rhs: Self) -> Self {
				unsafe { $cast_out($add($cast_in(self.0), $cast_in(rhs.0))) }.into()
			}

			#[inline(always)]
			fn sub_lanes(self, rhs: Self) -> Self {
				unsafe { $cast_out($sub($cast_in(self.0), $cast_in(rhs.0))) }.into()
			}

			#[inline(always)]
			fn mul_lanes(self, rhs: Self) -> Self {
				unsafe { $cast_out($mul($cast_in(self.0), $cast_in(rhs.0))) }.into()
			}

			#[inline(always)]
			fn div_lanes(self, rhs: Self) -> Self {
				unsafe { $cast_out($div($cast_in(self.0), $cast_in(rhs.0))) }.into()
			}

			#[inline]
			fn rem_lanes(self, rhs: Self) -> Self {
				TaggedLaneArithmetic::<HalvesStrategy, $lane>::rem_lanes(self, rhs)
			}

			#[inline(always)]
			fn neg_lanes(self) -> Self {
				self ^ M256::broadcast_lane_bits($sign)
			}
		}
	};
}

impl_float_arithmetic!(
	f32,
	cast_in = _mm256_castsi256_ps,
	cast_out = _mm256_castps_si256,
	add = _mm256_add_ps,
	sub = _mm256_sub_ps,
	mul = _mm256_mul_ps,
	div = _mm256_div_ps,
	sign = 1u32 << 31
);
impl_float_arithmetic!(
	f64,
	cast_in = _mm256_castsi256_pd,
	cast_out = _mm256_castpd_si256,
	add = _mm256_add_pd,
	sub = _mm256_sub_pd,
	mul = _mm256_mul_pd,
	div = _mm256_div_pd,
	sign = 1u64 << 63
);

// Comparisons

m256_binary_fn!(
	eq_epi8 = _mm256_cmpeq_epi8,
	gt_epi8 = _mm256_cmpgt_epi8,
	eq_epi16 = _mm256_cmpeq_epi16,
	gt_epi16 = _mm256_cmpgt_epi16,
	eq_epi32 = _mm256_cmpeq_epi32,
	gt_epi32 = _mm256_cmpgt_epi32,
	eq_epi64 = _mm256_cmpeq_epi64,
	gt_epi64 = _mm256_cmpgt_epi64,
);

macro_rules! impl_integer_compare {
	($lane:ty, eq = $eq:expr, gt = $gt:expr, bias = $bias:expr) => {
		impl LaneCompare<$lane> for M256 {
			#[inline(always)]
			fn eq_lanes(self, rhs: Self) -> Self {
				($eq)(self, rhs)
			}

			#[inline(always)]
			fn ne_lanes(self, rhs: Self) -> Self {
				!($eq)(self, rhs)
			}

			#[inline(always)]
			fn gt_lanes(self, rhs: Self) -> Self {
				let bias = M256::broadcast_lane_bits($bias);
				($gt)(self ^ bias, rhs ^ bias)
			}

			#[inline(always)]
			fn lt_lanes(self, rhs: Self) -> Self {
				LaneCompare::<$lane>::gt_lanes(rhs, self)
			}

			#[inline(always)]
			fn ge_lanes(self, rhs: Self) -> Self {
				!LaneCompare::<$lane>::gt_lanes(rhs, self)
			}

			#[inline(always)]
			fn le_lanes(self, rhs: Self) -> Self {
				!LaneCompare::<$lane>::gt_lanes(self, rhs)
			}
		}
	};
}

// signed lanes use a zero bias
impl_integer_compare!(i8, eq = eq_epi8, gt = gt_epi8, bias = 0u8);
impl_integer_compare!(u8, eq = eq_epi8, gt = gt_epi8, bias = 0x80u8);
impl_integer_compare!(i16, eq = eq_epi16, gt = gt_epi16, bias = 0u16);
impl_integer_compare!(u16, eq = eq_epi16, gt = gt_epi16, bias = 0x8000u16);
impl_integer_compare!(i32, eq = eq_epi32, gt = gt_epi32, bias = 0u32);
impl_integer_compare!(u32, eq = eq_epi32, gt = gt_epi32, bias = 0x8000_0000u32);
impl_integer_compare!(i64, eq = eq_epi64, gt = gt_epi64, bias = 0u64);
impl_integer_compare!(u64, eq = eq_epi64, gt = gt_epi64, bias = 1u64 << 63);

macro_rules! impl_float_compare {
	($lane:ty, cast_in = $cast_in:ident, cast_out = $cast_out:ident, cmp = $cmp:ident) => {
		impl LaneCompare<$lane> for M256 {
			#[inline(always)]
			fn eq_lanes(self, rhs: Self) -> Self {
				unsafe { $cast_out($cmp::<_CMP_EQ_OQ>($cast_in(self.0), $cast_in(rhs.0))) }.into()
			}

			#[inline(always)]
			fn ne_lanes(self, rhs: Self) -> Self {
				unsafe { $cast_out($cmp::<_CMP_NEQ_UQ>($cast_in(self.0), $cast_in(rhs.0))) }.into()
			}

			#[inline(always)]
			fn gt_lanes(self, rhs: Self) -> Self {
				unsafe { $cast_out($cmp::<_CMP_GT_OQ>($cast_in(self.0), $cast_in(rhs.0))) }.into()
			}

			#[inline(always)]
			fn lt_lanes(self, rhs: Self) -> Self {
				unsafe { $cast_out($cmp::<_CMP_LT_OQ>($cast_in(self.0), $cast_in(rhs.0))) }.into()
			}

			#[inline(always)]
			fn ge_lanes(self, rhs: Self) -> Self {
				unsafe { $cast_out($cmp::<_CMP_GE_OQ>($cast_in(self.0), $cast_in(rhs.0))) }.into()
			}

			#[inline(always)]
			fn le_lanes(self, rhs: Self) -> Self {
				unsafe { $cast_out($cmp::<_CMP_LE_OQ>($cast_in(self.0), $cast_in(rhs.0))) }.into()
			}
		}
	};
}

impl_float_compare!(
	f32,
	cast_in = _mm256_castsi256_ps,
	cast_out = _mm256_castps_si256,
	cmp = _mm256_cmp_ps
);
impl_float_compare!(
	f64,
	cast_in = _mm256_castsi256_pd,
	cast_out = _mm256_castpd_si256,
	cmp = _mm256_cmp_pd
);

impl_lane_compare_with!(M256, HalvesStrategy; bool);

// Shifts

macro_rules! m256_count_shift_fn {
	($($name:ident = $intrinsic:ident),* $(,)?) => {
		$(
			#[inline(always)]
			fn $name(value: M256, count: u32) -> M256 {
				unsafe { $intrinsic(value.0, count_register(count)) }.into()
			}
		)*
	};
}

m256_count_shift_fn!(
	shl_epi16 = _mm256_sll_epi16,
	shr_epu16 = _mm256_srl_epi16,
	shr_epi16 = _mm256_sra_epi16,
	shl_epi32 = _mm256_sll_epi32,
	shr_epu32 = _mm256_srl_epi32,
	shr_epi32 = _mm256_sra_epi32,
	shl_epi64 = _mm256_sll_epi64,
	shr_epu64 = _mm256_srl_epi64,
);

#[inline(always)]
fn shl_epi8(value: M256, count: u32) -> M256 {
	let mask = if count >= 8 { 0 } else { 0xFFu8 << count };
	shl_epi16(value, count) & M256::broadcast_lane_bits(mask)
}

#[inline(always)]
fn shr_epu8(value: M256, count: u32) -> M256 {
	let mask = if count >= 8 { 0 } else { 0xFFu8 >> count };
	shr_epu16(value, count) & M256::broadcast_lane_bits(mask)
}

/// Unpack and pack work within 128-bit lanes, so the byte order is restored.
#[inline(always)]
fn shr_epi8(value: M256, count: u32) -> M256 {
	let count = count_register(count.min(7) + 8);
	unsafe {
		let low = _mm256_sra_epi16(_mm256_unpacklo_epi8(value.0, value.0), count);
		let high = _mm256_sra_epi16(_mm256_unpackhi_epi8(value.0, value.0), count);
		_mm256_packs_epi16(low, high)
	}
	.into()
}

m256_binary_fn!(
	shl_by_epi32 = _mm256_sllv_epi32,
	shr_by_epu32 = _mm256_srlv_epi32,
	shr_by_epi32 = _mm256_srav_epi32,
	shl_by_epi64 = _mm256_sllv_epi64,
	shr_by_epu64 = _mm256_srlv_epi64,
);

#[inline(always)]
fn shift_epu8_by(value: M256, counts: M256, shift: impl Fn(M256, M256) -> M256) -> M256 {
	unsafe {
		let byte = _mm256_set1_epi32(0xFF);
		let mut result = _mm256_setzero_si256();
		seq!(N in 0..4 {
			let lane = _mm256_and_si256(_mm256_srli_epi32::<{ N * 8 }>(value.0), byte);
			let count = _mm256_and_si256(_mm256_srli_epi32::<{ N * 8 }>(counts.0), byte);
			let shifted = _mm256_and_si256(shift(lane.into(), count.into()).0, byte);
			result = _mm256_or_si256(result, _mm256_slli_epi32::<{ N * 8 }>(shifted));
		});
		result
	}
	.into()
}

#[inline(always)]
fn shl_by_epi8(value: M256, counts: M256) -> M256 {
	shift_epu8_by(value, counts, shl_by_epi32)
}

#[inline(always)]
fn shr_by_epu8(value: M256, counts: M256) -> M256 {
	shift_epu8_by(value, counts, shr_by_epu32)
}

#[inline(always)]
fn shr_by_epi8(value: M256, counts: M256) -> M256 {
	unsafe {
		let byte = _mm256_set1_epi32(0xFF);
		let mut result = _mm256_setzero_si256();
		seq!(N in 0..4 {
			let lane = _mm256_srai_epi32::<24>(_mm256_slli_epi32::<{ 24 - N * 8 }>(value.0));
			let count = _mm256_and_si256(_mm256_srli_epi32::<{ N * 8 }>(counts.0), byte);
			let shifted = _mm256_and_si256(_mm256_srav_epi32(lane, count), byte);
			result = _mm256_or_si256(result, _mm256_slli_epi32::<{ N * 8 }>(shifted));
		});
		result
	}
	.into()
}

#[inline(always)]
fn shift_epu16_by(value: M256, counts: M256, shift: impl Fn(M256, M256) -> M256) -> M256 {
	unsafe {
		let half = _mm256_set1_epi32(0xFFFF);
		let low = shift(
			_mm256_and_si256(value.0, half).into(),
			_mm256_and_si256(counts.0, half).into(),
		);
		let high = shift(
			_mm256_srli_epi32::<16>(value.0).into(),
			_mm256_srli_epi32::<16>(counts.0).into(),
		);
		_mm256_or_si256(
			_mm256_and_si256(low.0, half),
			_mm256_slli_epi32::<16>(_mm256_and_si256(high.0, half)),
		)
	}
	.into()
}

#[inline(always)]
fn shl_by_epi16(value: M256, counts: M256) -> M256 {
	shift_epu16_by(value, counts, shl_by_epi32)
}

#[inline(always)]
fn shr_by_epu16(value: M256, counts: M256) -> M256 {
	shift_epu16_by(value, counts, shr_by_epu32)
}

#[inline(always)]
fn shr_by_epi16(value: M256, counts: M256) -> M256 {
	unsafe {
		let half = _mm256_set1_epi32(0xFFFF);
		let low = _mm256_srav_epi32(
			_mm256_srai_epi32::<16>(_mm256_slli_epi32::<16>(value.0)),
			_mm256_and_si256(counts.0, half),
		);
		let high =
			_mm256_srav_epi32(_mm256_srai_epi32::<16>(value.0), _mm256_srli_epi32::<16>(counts.0));
		_mm256_or_si256(_mm256_and_si256(low, half), _mm256_slli_epi32::<16>(high))
	}
	.into()
}

#[inline(always)]
fn shr_epi64(value: M256, count: u32) -> M256 {
	TaggedLaneShift::<HalvesStrategy, i64>::shr_lanes(value, count)
}

#[inline(always)]
fn shr_by_epi64(value: M256, counts: M256) -> M256 {
	TaggedLaneShift::<HalvesStrategy, i64>::shr_lanes_by(value, counts)
}

macro_rules! impl_shift {
	($lane:ty, shl = $shl:expr, shr = $shr:expr, shl_by = $shl_by:expr, shr_by = $shr_by:expr) => {
		impl LaneShift<$lane> for M256 {
			#[inline(always)]
			fn shl_lanes(self, count: u32) -> Self {
				($shl)(self, count)
			}

			#[inline(always)]
			fn shr_lanes(self, count: u32) -> Self {
				($shr)(self, count)
			}

			#[inline(always)]
			fn shl_lanes_by(self, counts: Self) -> Self {
				($shl_by)(self, counts)
			}

			#[inline(always)]
			fn shr_lanes_by(self, counts: Self) -> Self {
				($shr_by)(self, counts)
			}
		}
	};
}

impl_shift!(u8, shl = shl_epi8, shr = shr_epu8, shl_by = shl_by_epi8, shr_by = shr_by_epu8);
impl_shift!(i8, shl = shl_epi8, shr = shr_epi8, shl_by = shl_by_epi8, shr_by = shr_by_epi8);
impl_shift!(u16, shl = shl_epi16, shr = shr_epu16, shl_by = shl_by_epi16, shr_by = shr_by_epu16);
impl_shift!(i16, shl = shl_epi16, shr = shr_epi16, shl_by = shl_by_epi16, shr_by = shr_by_epi16);
impl_shift!(u32, shl = shl_epi32, shr = shr_epu32, shl_by = shl_by_epi32, shr_by = shr_by_epu32);
impl_shift!(i32, shl = shl_epi32, shr = shr_epi32, shl_by = shl_by_epi32, shr_by = shr_by_epi32);
impl_shift!(u64, shl = shl_epi64, shr = shr_epu64, shl_by = shl_by_epi64, shr_by = shr_by_epu64);
impl_shift!(i64, shl = shl_epi64, shr = shr_epi64, shl_by = shl_by_epi64, shr_by = shr_by_epi64);

#[cfg(test)]
mod tests {
	use proptest::prelude::*;

	use super::*;
	use crate::{
		arch::ScalarStrategy,
		arithmetic_traits::TaggedLaneCompare,
		lane::Lane,
	};

	fn m256<T: Lane>(lanes: &[T]) -> M256 {
		M256::from_lane_bits_fn(|i| lanes[i].to_bits())
	}

	macro_rules! check_integer_lanes {
		($lane:ty, $a:expr, $b:expr, $count:expr) => {{
			let lhs = m256::<$lane>(&$a);
			let rhs = m256::<$lane>(&$b);
			let divisor = m256::<$lane>(&$b.map(|x: $lane| if x == 0 { 1 } else { x }));

			prop_assert_eq!(
				LaneArithmetic::<$lane>::mul_lanes(lhs, rhs),
				TaggedLaneArithmetic::<ScalarStrategy, $lane>::mul_lanes(lhs, rhs)
			);
			prop_assert_eq!(
				LaneArithmetic::<$lane>::rem_lanes(lhs, divisor),
				TaggedLaneArithmetic::<ScalarStrategy, $lane>::rem_lanes(lhs, divisor)
			);
			prop_assert_eq!(
				LaneArithmetic::<$lane>::neg_lanes(lhs),
				TaggedLaneArithmetic::<ScalarStrategy, $lane>::neg_lanes(lhs)
			);
			prop_assert_eq!(
				LaneCompare::<$lane>::gt_lanes(lhs, rhs),
				TaggedLaneCompare::<ScalarStrategy, $lane>::gt_lanes(lhs, rhs)
			);
			prop_assert_eq!(
				LaneCompare::<$lane>::le_lanes(lhs, rhs),
				TaggedLaneCompare::<ScalarStrategy, $lane>::le_lanes(lhs, rhs)
			);
			prop_assert_eq!(
				LaneShift::<$lane>::shl_lanes(lhs, $count),
				TaggedLaneShift::<ScalarStrategy, $lane>::shl_lanes(lhs, $count)
			);
			prop_assert_eq!(
				LaneShift::<$lane>::shr_lanes(lhs, $count),
				TaggedLaneShift::<ScalarStrategy, $lane>::shr_lanes(lhs, $count)
			);
			prop_assert_eq!(
				LaneShift::<$lane>::shl_lanes_by(lhs, rhs),
				TaggedLaneShift::<ScalarStrategy, $lane>::shl_lanes_by(lhs, rhs)
			);
			prop_assert_eq!(
				LaneShift::<$lane>::shr_lanes_by(lhs, rhs),
				TaggedLaneShift::<ScalarStrategy, $lane>::shr_lanes_by(lhs, rhs)
			);
		}};
	}

	proptest! {
		#[test]
		fn test_u8_lanes(a in any::<[u8; 32]>(), b in any::<[u8; 32]>(), count in 0u32..20) {
			check_integer_lanes!(u8, a, b, count);
		}

		#[test]
		fn test_i8_lanes(a in any::<[i8; 32]>(), b in any::<[i8; 32]>(), count in 0u32..20) {
			check_integer_lanes!(i8, a, b, count);
		}

		#[test]
		fn test_u16_lanes(a in any::<[u16; 16]>(), b in any::<[u16; 16]>(), count in 0u32..40) {
			check_integer_lanes!(u16, a, b, count);
		}

		#[test]
		fn test_i16_lanes(a in any::<[i16; 16]>(), b in any::<[i16; 16]>(), count in 0u32..40) {
			check_integer_lanes!(i16, a, b, count);
		}

		#[test]
		fn test_i32_lanes(a in any::<[i32; 8]>(), b in any::<[i32; 8]>(), count in 0u32..70) {
			check_integer_lanes!(i32, a, b, count);
		}

		#[test]
		fn test_u64_lanes(a in any::<[u64; 4]>(), b in any::<[u64; 4]>(), count in 0u32..130) {
			check_integer_lanes!(u64, a, b, count);
		}

		#[test]
		fn test_i64_lanes(a in any::<[i64; 4]>(), b in any::<[i64; 4]>(), count in 0u32..130) {
			check_integer_lanes!(i64, a, b, count);
		}

		#[test]
		fn test_f64_compare(
			a in prop::array::uniform4(-1e3f64..1e3),
			b in prop::array::uniform4(-1e3f64..1e3),
		) {
			let (lhs, rhs) = (m256(&a), m256(&b));

			prop_assert_eq!(
				LaneCompare::<f64>::ge_lanes(lhs, rhs),
				TaggedLaneCompare::<ScalarStrategy, f64>::ge_lanes(lhs, rhs)
			);
			prop_assert_eq!(
				LaneArithmetic::<f64>::rem_lanes(lhs, rhs),
				TaggedLaneArithmetic::<ScalarStrategy, f64>::rem_lanes(lhs, rhs)
			);
		}
	}
}
