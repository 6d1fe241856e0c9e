// Copyright 2024-2025 Irreducible Inc.

//! Register types and the lane operation implementations for the target architecture.
//!
//! `M64` is always a portable word. `M128` and `M256` map to the SSE2 and AVX2 registers when the
//! target supports them and to pairs of half-width registers otherwise. The `portable_only`
//! feature forces the composed registers on every target.

use cfg_if::cfg_if;

mod portable;
mod strategies;

cfg_if! {
	if #[cfg(all(target_arch = "x86_64", target_feature = "sse2", not(feature = "portable_only")))] {
		mod x86_64;

		pub use x86_64::m128::M128;

		cfg_if! {
			if #[cfg(target_feature = "avx2")] {
				pub use x86_64::m256::M256;
			} else {
				/// 256-bit register composed of two 128-bit registers.
				pub type M256 = ScaledRegister<M128, 2>;
			}
		}
	} else {
		/// 128-bit register composed of two 64-bit registers.
		pub type M128 = ScaledRegister<M64, 2>;
		/// 256-bit register composed of two 128-bit registers.
		pub type M256 = ScaledRegister<M128, 2>;
	}
}

pub use portable::{m64::M64, scaled::ScaledRegister};
pub use strategies::*;

static_assertions::assert_eq_size!(M64, u64);
static_assertions::assert_eq_size!(M128, u128);
static_assertions::assert_eq_size!(M256, [u128; 2]);
static_assertions::const_assert_eq!(<M128 as crate::register::Register>::BITS, 128);
static_assertions::const_assert_eq!(<M256 as crate::register::Register>::BITS, 256);
