// Copyright 2024-2025 Irreducible Inc.

mod lanes_128;
pub mod m128;

cfg_if::cfg_if! {
	if #[cfg(target_feature = "avx2")] {
		mod lanes_256;
		pub mod m256;
	}
}

mod vector_conversions;
