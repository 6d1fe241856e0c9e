// Copyright 2024-2025 Irreducible Inc.

//! Conversions between vectors and the `std::arch` register types.

use std::arch::x86_64::*;

use super::m128::M128;
use crate::{lane::Lane, vector::Vector};

macro_rules! impl_integer_register_conversions {
	($register:ty, $native:ty) => {
		impl<T: Lane> From<$native> for Vector<$register, T> {
			#[inline(always)]
			fn from(value: $native) -> Self {
				Self::from_register(value.into())
			}
		}

		impl<T: Lane> From<Vector<$register, T>> for $native {
			#[inline(always)]
			fn from(value: Vector<$register, T>) -> Self {
				value.to_register().into()
			}
		}
	};
}

macro_rules! impl_float_register_conversions {
	(
		$register:ty,
		$lane:ty,
		$native:ty,
		from_native = $from_native:ident,
		to_native = $to_native:ident
	) => {
		impl From<$native> for Vector<$register, $lane> {
			#[inline(always)]
			fn from(value: $native) -> Self {
				Self::from_register(unsafe { $from_native(value) }.into())
			}
		}

		impl From<Vector<$register, $lane>> for $native {
			#[inline(always)]
			fn from(value: Vector<$register, $lane>) -> Self {
				unsafe { $to_native(value.to_register().into()) }
			}
		}
	};
}

impl_integer_register_conversions!(M128, __m128i);
impl_float_register_conversions!(
	M128,
	f32,
	__m128,
	from_native = _mm_castps_si128,
	to_native = _mm_castsi128_ps
);
impl_float_register_conversions!(
	M128,
	f64,
	__m128d,
	from_native = _mm_castpd_si128,
	to_native = _mm_castsi128_pd
);

#[cfg(target_feature = "avx2")]
mod avx2 {
	use std::arch::x86_64::*;

	use super::super::m256::M256;
	use crate::{lane::Lane, vector::Vector};

	impl_integer_register_conversions!(M256, __m256i);
	impl_float_register_conversions!(
		M256,
		f32,
		__m256,
		from_native = _mm256_castps_si256,
		to_native = _mm256_castsi256_ps
	);
	impl_float_register_conversions!(
		M256,
		f64,
		__m256d,
		from_native = _mm256_castpd_si256,
		to_native = _mm256_castsi256_pd
	);
}
