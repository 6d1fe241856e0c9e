// Copyright 2024-2025 Irreducible Inc.

mod halves_arithmetic;
pub mod m64;
pub(crate) mod scalar_arithmetic;
pub mod scaled;
