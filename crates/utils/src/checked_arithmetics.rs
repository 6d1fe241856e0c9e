// Copyright 2024-2025 Irreducible Inc.

/// Division implementation that fails in case when `a` isn't divisible by `b`.
///
/// Used in constant contexts, where the failed assertion becomes a compile-time error.
pub const fn checked_int_div(a: usize, b: usize) -> usize {
	assert!(b != 0, "divisor must be non-zero");
	let result = a / b;
	assert!(b * result == a, "value is not divisible by the divisor");

	result
}

/// Number of `lane_bits`-wide lanes in a `register_bits`-wide register.
///
/// Fails when the lane width doesn't divide the register width.
pub const fn checked_lane_count(register_bits: usize, lane_bits: usize) -> usize {
	assert!(lane_bits <= register_bits, "lane is wider than the register");

	checked_int_div(register_bits, lane_bits)
}
