// Copyright 2024-2025 Irreducible Inc.

/// Scalar strategy. Extracts every lane to a scalar, applies the scalar operation and
/// reassembles the register.
pub struct ScalarStrategy;
/// Halves strategy. Applies the operation of the half-width register to both halves
/// independently and recomposes the result.
pub struct HalvesStrategy;
