// Copyright 2024-2025 Irreducible Inc.

//! Lane operations of the 128-bit SSE register.
//!
//! SSE2 is the baseline. SSE4.1, SSE4.2 and AVX2 instructions are used when the target enables
//! them, everything else falls back to `ScalarStrategy`.

use std::arch::x86_64::*;

use cfg_if::cfg_if;

use super::m128::M128;
use crate::{
	arch::ScalarStrategy,
	arithmetic_traits::{
		impl_lane_compare_with, LaneArithmetic, LaneCompare, LaneShift, TaggedLaneArithmetic,
		TaggedLaneShift,
	},
	lane::IntegerLane,
	register::Register,
};

/// Shift count register as expected by `_mm_sll_epi*` and friends.
#[inline(always)]
fn count_register(count: u32) -> __m128i {
	unsafe { _mm_cvtsi64_si128(count as i64) }
}

#[cfg_attr(target_feature = "avx2", allow(dead_code))]
#[inline(always)]
fn scalar_shl_by<T: IntegerLane>(value: M128, counts: M128) -> M128 {
	TaggedLaneShift::<ScalarStrategy, T>::shl_lanes_by(value, counts)
}

#[inline(always)]
fn scalar_shr_by<T: IntegerLane>(value: M128, counts: M128) -> M128 {
	TaggedLaneShift::<ScalarStrategy, T>::shr_lanes_by(value, counts)
}

#[inline(always)]
fn scalar_shr<T: IntegerLane>(value: M128, count: u32) -> M128 {
	TaggedLaneShift::<ScalarStrategy, T>::shr_lanes(value, count)
}

// Multiplication

/// 8-bit lanes are multiplied as 16-bit lanes, once for the even and once for the odd bytes.
#[inline(always)]
fn mul_epi8(lhs: M128, rhs: M128) -> M128 {
	unsafe {
		let low_byte = _mm_set1_epi16(0x00FF);
		let even = _mm_and_si128(_mm_mullo_epi16(lhs.0, rhs.0), low_byte);
		let odd = _mm_slli_epi16::<8>(_mm_mullo_epi16(
			_mm_srli_epi16::<8>(lhs.0),
			_mm_srli_epi16::<8>(rhs.0),
		));
		_mm_or_si128(even, odd)
	}
	.into()
}

#[inline(always)]
fn mul_epi16(lhs: M128, rhs: M128) -> M128 {
	unsafe { _mm_mullo_epi16(lhs.0, rhs.0) }.into()
}

#[inline(always)]
fn mul_epi32(lhs: M128, rhs: M128) -> M128 {
	cfg_if! {
		if #[cfg(target_feature = "sse4.1")] {
			unsafe { _mm_mullo_epi32(lhs.0, rhs.0) }.into()
		} else {
			// `_mm_mul_epu32` multiplies the even 32-bit lanes into 64-bit products
			unsafe {
				let even = _mm_mul_epu32(lhs.0, rhs.0);
				let odd = _mm_mul_epu32(_mm_srli_epi64::<32>(lhs.0), _mm_srli_epi64::<32>(rhs.0));
				_mm_unpacklo_epi32(
					_mm_shuffle_epi32::<0b00_00_10_00>(even),
					_mm_shuffle_epi32::<0b00_00_10_00>(odd),
				)
			}
			.into()
		}
	}
}

/// The low 64 bits of the product are `lo * lo + ((hi * lo + lo * hi) << 32)`.
#[inline(always)]
fn mul_epi64(lhs: M128, rhs: M128) -> M128 {
	unsafe {
		let low = _mm_mul_epu32(lhs.0, rhs.0);
		let cross = _mm_add_epi64(
			_mm_mul_epu32(_mm_srli_epi64::<32>(lhs.0), rhs.0),
			_mm_mul_epu32(lhs.0, _mm_srli_epi64::<32>(rhs.0)),
		);
		_mm_add_epi64(low, _mm_slli_epi64::<32>(cross))
	}
	.into()
}

macro_rules! impl_integer_arithmetic {
	($lane:ty, add = $add:ident, sub = $sub:ident, mul = $mul:expr) => {
		impl LaneArithmetic<$lane> for M128 {
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
				TaggedLaneArithmetic::<ScalarStrategy, $lane>::div_lanes(self, rhs)
			}

			#[inline]
			fn rem_lanes(self, rhs: Self) -> Self {
				TaggedLaneArithmetic::<ScalarStrategy, $lane>::rem_lanes(self, rhs)
			}

			#[inline(always)]
			fn neg_lanes(self) -> Self {
				unsafe { $sub(_mm_setzero_si128(), self.0) }.into()
			}
		}
	};
}

impl_integer_arithmetic!(u8, add = _mm_add_epi8, sub = _mm_sub_epi8, mul = mul_epi8);
impl_integer_arithmetic!(i8, add = _mm_add_epi8, sub = _mm_sub_epi8, mul = mul_epi8);
impl_integer_arithmetic!(u16, add = _mm_add_epi16, sub = _mm_sub_epi16, mul = mul_epi16);
impl_integer_arithmetic!(i16, add = _mm_add_epi16, sub = _mm_sub_epi16, mul = mul_epi16);
impl_integer_arithmetic!(u32, add = _mm_add_epi32, sub = _mm_sub_epi32, mul = mul_epi32);
impl_integer_arithmetic!(i32, add = _mm_add_epi32, sub = _mm_sub_epi32, mul = mul_epi32);
impl_integer_arithmetic!(u64, add = _mm_add_epi64, sub = _mm_sub_epi64, mul = mul_epi64);
impl_integer_arithmetic!(i64, add = _mm_add_epi64, sub = _mm_sub_epi64, mul = mul_epi64);

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
		impl LaneArithmetic<$lane> for M128 {
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
				TaggedLaneArithmetic::<ScalarStrategy, $lane>::rem_lanes(self, rhs)
			}

			/// Flips the sign bit.
			#[inline(always)]
			fn neg_lanes(self) -> Self {
				self ^ M128::broadcast_lane_bits($sign)
			}
		}
	};
}

impl_float_arithmetic!(
	f32,
	cast_in = _mm_castsi128_ps,
	cast_out = _mm_castps_si128,
	add = _mm_add_ps,
	sub = _mm_sub_ps,
	mul = _mm_mul_ps,
	div = _mm_div_ps,
	sign = 1u32 << 31
);
impl_float_arithmetic!(
	f64,
	cast_in = _mm_castsi128_pd,
	cast_out = _mm_castpd_si128,
	add = _mm_add_pd,
	sub = _mm_sub_pd,
	mul = _mm_mul_pd,
	div = _mm_div_pd,
	sign = 1u64 << 63
);

// Comparisons

#[inline(always)]
fn eq_epi64(lhs: M128, rhs: M128) -> M128 {
	cfg_if! {
		if #[cfg(target_feature = "sse4.1")] {
			unsafe { _mm_cmpeq_epi64(lhs.0, rhs.0) }.into()
		} else {
			// both 32-bit halves of a 64-bit lane must be equal
			unsafe {
				let eq = _mm_cmpeq_epi32(lhs.0, rhs.0);
				_mm_and_si128(eq, _mm_shuffle_epi32::<0b10_11_00_01>(eq))
			}
			.into()
		}
	}
}

/// Signed comparisons, `gt` is the only native ordering.
macro_rules! impl_signed_compare {
	($lane:ty, eq = $eq:expr, gt = $gt:expr) => {
		impl LaneCompare<$lane> for M128 {
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
				($gt)(self, rhs)
			}

			#[inline(always)]
			fn lt_lanes(self, rhs: Self) -> Self {
				($gt)(rhs, self)
			}

			#[inline(always)]
			fn ge_lanes(self, rhs: Self) -> Self {
				!($gt)(rhs, self)
			}

			#[inline(always)]
			fn le_lanes(self, rhs: Self) -> Self {
				!($gt)(self, rhs)
			}
		}
	};
}

/// Unsigned comparisons flip the sign bit of both operands and compare them as signed values.
macro_rules! impl_unsigned_compare {
	($lane:ty, eq = $eq:expr, gt = $gt:expr, bias = $bias:expr) => {
		impl LaneCompare<$lane> for M128 {
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
				let bias = M128::broadcast_lane_bits($bias);
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

macro_rules! m128_binary_fn {
	($($name:ident = $intrinsic:ident),* $(,)?) => {
		$(
			#[inline(always)]
			fn $name(lhs: M128, rhs: M128) -> M128 {
				unsafe { $intrinsic(lhs.0, rhs.0) }.into()
			}
		)*
	};
}

m128_binary_fn!(
	eq_epi8 = _mm_cmpeq_epi8,
	gt_epi8 = _mm_cmpgt_epi8,
	eq_epi16 = _mm_cmpeq_epi16,
	gt_epi16 = _mm_cmpgt_epi16,
	eq_epi32 = _mm_cmpeq_epi32,
	gt_epi32 = _mm_cmpgt_epi32,
);

impl_signed_compare!(i8, eq = eq_epi8, gt = gt_epi8);
impl_unsigned_compare!(u8, eq = eq_epi8, gt = gt_epi8, bias = 0x80u8);
impl_signed_compare!(i16, eq = eq_epi16, gt = gt_epi16);
impl_unsigned_compare!(u16, eq = eq_epi16, gt = gt_epi16, bias = 0x8000u16);
impl_signed_compare!(i32, eq = eq_epi32, gt = gt_epi32);
impl_unsigned_compare!(u32, eq = eq_epi32, gt = gt_epi32, bias = 0x8000_0000u32);

cfg_if! {
	if #[cfg(target_feature = "sse4.2")] {
		m128_binary_fn!(gt_epi64 = _mm_cmpgt_epi64);

		impl_signed_compare!(i64, eq = eq_epi64, gt = gt_epi64);
		impl_unsigned_compare!(u64, eq = eq_epi64, gt = gt_epi64, bias = 1u64 << 63);
	} else {
		macro_rules! impl_equality_only_compare {
			($($lane:ty),*) => {
				$(
					impl LaneCompare<$lane> for M128 {
						#[inline(always)]
						fn eq_lanes(self, rhs: Self) -> Self {
							eq_epi64(self, rhs)
						}

						#[inline(always)]
						fn ne_lanes(self, rhs: Self) -> Self {
							!eq_epi64(self, rhs)
						}

						#[inline]
						fn gt_lanes(self, rhs: Self) -> Self {
							crate::arithmetic_traits::TaggedLaneCompare::<ScalarStrategy, $lane>::gt_lanes(self, rhs)
						}

						#[inline]
						fn lt_lanes(self, rhs: Self) -> Self {
							crate::arithmetic_traits::TaggedLaneCompare::<ScalarStrategy, $lane>::lt_lanes(self, rhs)
						}

						#[inline]
						fn ge_lanes(self, rhs: Self) -> Self {
							crate::arithmetic_traits::TaggedLaneCompare::<ScalarStrategy, $lane>::ge_lanes(self, rhs)
						}

						#[inline]
						fn le_lanes(self, rhs: Self) -> Self {
							crate::arithmetic_traits::TaggedLaneCompare::<ScalarStrategy, $lane>::le_lanes(self, rhs)
						}
					}
				)*
			};
		}

		impl_equality_only_compare!(i64, u64);
	}
}

macro_rules! impl_float_compare {
	(
		$lane:ty,
		cast_in = $cast_in:ident,
		cast_out = $cast_out:ident,
		eq = $eq:ident,
		ne = $ne:ident,
		gt = $gt:ident,
		lt = $lt:ident,
		ge = $ge:ident,
		le = $le:ident
	) => {
		impl LaneCompare<$lane> for M128 {
			#[inline(always)]
			fn eq_lanes(self, rhs: Self) -> Self {
				unsafe { $cast_out($eq($cast_in(self.0), $cast_in(rhs.0))) }.into()
			}

			#[inline(always)]
			fn ne_lanes(self, rhs: Self) -> Self {
				unsafe { $cast_out($ne($cast_in(self.0), $cast_in(rhs.0))) }.into()
			}

			#[inline(always)]
			fn gt_lanes(self, rhs: Self) -> Self {
				unsafe { $cast_out($gt($cast_in(self.0), $cast_in(rhs.0))) }.into()
			}

			#[inline(always)]
			fn lt_lanes(self, rhs: Self) -> Self {
				unsafe { $cast_out($lt($cast_in(self.0), $cast_in(rhs.0))) }.into()
			}

			#[inline(always)]
			fn ge_lanes(self, rhs: Self) -> Self {
				unsafe { $cast_out($ge($cast_in(self.0), $cast_in(rhs.0))) }.into()
			}

			#[inline(always)]
			fn le_lanes(self, rhs: Self) -> Self {
				unsafe { $cast_out($le($cast_in(self.0), $cast_in(rhs.0))) }.into()
			}
		}
	};
}

impl_float_compare!(
	f32,
	cast_in = _mm_castsi128_ps,
	cast_out = _mm_castps_si128,
	eq = _mm_cmpeq_ps,
	ne = _mm_cmpneq_ps,
	gt = _mm_cmpgt_ps,
	lt = _mm_cmplt_ps,
	ge = _mm_cmpge_ps,
	le = _mm_cmple_ps
);
impl_float_compare!(
	f64,
	cast_in = _mm_castsi128_pd,
	cast_out = _mm_castpd_si128,
	eq = _mm_cmpeq_pd,
	ne = _mm_cmpneq_pd,
	gt = _mm_cmpgt_pd,
	lt = _mm_cmplt_pd,
	ge = _mm_cmpge_pd,
	le = _mm_cmple_pd
);

impl_lane_compare_with!(M128, ScalarStrategy; bool);

// Shifts

macro_rules! m128_count_shift_fn {
	($($name:ident = $intrinsic:ident),* $(,)?) => {
		$(
			#[inline(always)]
			fn $name(value: M128, count: u32) -> M128 {
				unsafe { $intrinsic(value.0, count_register(count)) }.into()
			}
		)*
	};
}

m128_count_shift_fn!(
	shl_epi16 = _mm_sll_epi16,
	shr_epu16 = _mm_srl_epi16,
	shr_epi16 = _mm_sra_epi16,
	shl_epi32 = _mm_sll_epi32,
	shr_epu32 = _mm_srl_epi32,
	shr_epi32 = _mm_sra_epi32,
	shl_epi64 = _mm_sll_epi64,
	shr_epu64 = _mm_srl_epi64,
);

/// There are no 8-bit shifts, the 16-bit result is masked to drop the bits crossing
/// the byte boundary.
#[inline(always)]
fn shl_epi8(value: M128, count: u32) -> M128 {
	let mask = if count >= 8 { 0 } else { 0xFFu8 << count };
	shl_epi16(value, count) & M128::broadcast_lane_bits(mask)
}

#[inline(always)]
fn shr_epu8(value: M128, count: u32) -> M128 {
	let mask = if count >= 8 { 0 } else { 0xFFu8 >> count };
	shr_epu16(value, count) & M128::broadcast_lane_bits(mask)
}

/// Every byte is duplicated into a 16-bit lane, so the arithmetic 16-bit shift by `count + 8`
/// leaves the sign-extended result in the lane.
#[inline(always)]
fn shr_epi8(value: M128, count: u32) -> M128 {
	let count = count_register(count.min(7) + 8);
	unsafe {
		let low = _mm_sra_epi16(_mm_unpacklo_epi8(value.0, value.0), count);
		let high = _mm_sra_epi16(_mm_unpackhi_epi8(value.0, value.0), count);
		_mm_packs_epi16(low, high)
	}
	.into()
}

cfg_if! {
	if #[cfg(target_feature = "avx2")] {
		use seq_macro::seq;

		m128_binary_fn!(
			shl_by_epi32 = _mm_sllv_epi32,
			shr_by_epu32 = _mm_srlv_epi32,
			shr_by_epi32 = _mm_srav_epi32,
			shl_by_epi64 = _mm_sllv_epi64,
			shr_by_epu64 = _mm_srlv_epi64,
		);

		/// Variable 8-bit shifts are done in 32-bit lanes, one byte of every lane at a time.
		#[inline(always)]
		fn shift_epu8_by(value: M128, counts: M128, shift: impl Fn(M128, M128) -> M128) -> M128 {
			unsafe {
				let byte = _mm_set1_epi32(0xFF);
				let mut result = _mm_setzero_si128();
				seq!(N in 0..4 {
					let lane = _mm_and_si128(_mm_srli_epi32::<{ N * 8 }>(value.0), byte);
					let count = _mm_and_si128(_mm_srli_epi32::<{ N * 8 }>(counts.0), byte);
					let shifted = _mm_and_si128(shift(lane.into(), count.into()).0, byte);
					result = _mm_or_si128(result, _mm_slli_epi32::<{ N * 8 }>(shifted));
				});
				result
			}
			.into()
		}

		#[inline(always)]
		fn shl_by_epi8(value: M128, counts: M128) -> M128 {
			shift_epu8_by(value, counts, shl_by_epi32)
		}

		#[inline(always)]
		fn shr_by_epu8(value: M128, counts: M128) -> M128 {
			shift_epu8_by(value, counts, shr_by_epu32)
		}

		/// Each byte is sign-extended to its 32-bit lane before the arithmetic shift.
		#[inline(always)]
		fn shr_by_epi8(value: M128, counts: M128) -> M128 {
			unsafe {
				let byte = _mm_set1_epi32(0xFF);
				let mut result = _mm_setzero_si128();
				seq!(N in 0..4 {
					let lane = _mm_srai_epi32::<24>(_mm_slli_epi32::<{ 24 - N * 8 }>(value.0));
					let count = _mm_and_si128(_mm_srli_epi32::<{ N * 8 }>(counts.0), byte);
					let shifted = _mm_and_si128(_mm_srav_epi32(lane, count), byte);
					result = _mm_or_si128(result, _mm_slli_epi32::<{ N * 8 }>(shifted));
				});
				result
			}
			.into()
		}

		#[inline(always)]
		fn shift_epu16_by(value: M128, counts: M128, shift: impl Fn(M128, M128) -> M128) -> M128 {
			unsafe {
				let half = _mm_set1_epi32(0xFFFF);
				let low = _mm_and_si128(
					shift(_mm_and_si128(value.0, half).into(), _mm_and_si128(counts.0, half).into()).0,
					half,
				);
				let high = _mm_and_si128(
					shift(_mm_srli_epi32::<16>(value.0).into(), _mm_srli_epi32::<16>(counts.0).into()).0,
					half,
				);
				_mm_or_si128(low, _mm_slli_epi32::<16>(high))
			}
			.into()
		}

		#[inline(always)]
		fn shl_by_epi16(value: M128, counts: M128) -> M128 {
			shift_epu16_by(value, counts, shl_by_epi32)
		}

		#[inline(always)]
		fn shr_by_epu16(value: M128, counts: M128) -> M128 {
			shift_epu16_by(value, counts, shr_by_epu32)
		}

		#[inline(always)]
		fn shr_by_epi16(value: M128, counts: M128) -> M128 {
			unsafe {
				let half = _mm_set1_epi32(0xFFFF);
				let low = _mm_srav_epi32(
					_mm_srai_epi32::<16>(_mm_slli_epi32::<16>(value.0)),
					_mm_and_si128(counts.0, half),
				);
				let high = _mm_srav_epi32(_mm_srai_epi32::<16>(value.0), _mm_srli_epi32::<16>(counts.0));
				_mm_or_si128(_mm_and_si128(low, half), _mm_slli_epi32::<16>(high))
			}
			.into()
		}
	} else {
		macro_rules! scalar_shift_by_fn {
			($($name:ident = $scalar:ident::<$lane:ty>),* $(,)?) => {
				$(
					#[inline(always)]
					fn $name(value: M128, counts: M128) -> M128 {
						$scalar::<$lane>(value, counts)
					}
				)*
			};
		}

		scalar_shift_by_fn!(
			shl_by_epi8 = scalar_shl_by::<u8>,
			shr_by_epu8 = scalar_shr_by::<u8>,
			shr_by_epi8 = scalar_shr_by::<i8>,
			shl_by_epi16 = scalar_shl_by::<u16>,
			shr_by_epu16 = scalar_shr_by::<u16>,
			shr_by_epi16 = scalar_shr_by::<i16>,
			shl_by_epi32 = scalar_shl_by::<u32>,
			shr_by_epu32 = scalar_shr_by::<u32>,
			shr_by_epi32 = scalar_shr_by::<i32>,
			shl_by_epi64 = scalar_shl_by::<u64>,
			shr_by_epu64 = scalar_shr_by::<u64>,
		);
	}
}

macro_rules! impl_shift {
	($lane:ty, shl = $shl:expr, shr = $shr:expr, shl_by = $shl_by:expr, shr_by = $shr_by:expr) => {
		impl LaneShift<$lane> for M128 {
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
// no 64-bit arithmetic shift below AVX-512
impl_shift!(
	i64,
	shl = shl_epi64,
	shr = scalar_shr::<i64>,
	shl_by = shl_by_epi64,
	shr_by = scalar_shr_by::<i64>
);
