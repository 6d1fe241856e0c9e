// Copyright 2024-2025 Irreducible Inc.

use assert_matches::assert_matches;
use lanewise_vector::{
	Error, I16x4, I16x8, I32x4, Raw128, U8x16, Vector128, Vector256, Vector64, F32x8, U32x4,
};

#[test]
fn test_narrow_division_by_ones() {
	let value = I16x4::from_lanes(&[1, 2, 3, 4]).unwrap();
	let ones = I16x4::splat(1);

	assert_eq!(value / ones, value);
	assert_eq!((value / ones).to_vec(), vec![1, 2, 3, 4]);
}

#[test]
fn test_medium_division_by_ones() {
	let value = I16x8::from_fn(|i| i as i16 + 1);
	let ones = I16x8::from_lanes(&[1; 8]).unwrap();

	assert_eq!(value / ones, value);
	assert_eq!(value.to_string(), "<1, 2, 3, 4, 5, 6, 7, 8>");
}

#[test]
fn test_reinterpret_round_trip() {
	let value = I32x4::from_lanes(&[-1, 0x0102_0304, i32::MIN, 42]).unwrap();
	let bytes: U8x16 = value.reinterpret();

	assert_eq!(bytes.get(4), 0x04);
	assert_eq!(bytes.get(7), 0x01);
	assert_eq!(bytes.reinterpret::<i32>(), value);
}

#[test]
fn test_too_many_values() {
	assert_matches!(
		I16x4::from_lanes(&[1, 2, 3, 4, 5]),
		Err(Error::TooManyLanes { actual: 5, max: 4 })
	);
	assert_matches!(
		I16x4::try_from(&[0i16; 5][..]),
		Err(Error::TooManyLanes { actual: 5, max: 4 })
	);
}

#[test]
fn test_lane_counts() {
	assert_eq!(Vector64::<u8>::LANES, 8);
	assert_eq!(Vector64::<f64>::LANES, 1);
	assert_eq!(Vector128::<u16>::LANES, 8);
	assert_eq!(Vector128::<bool>::LANES, 16);
	assert_eq!(Vector256::<i64>::LANES, 4);
	assert_eq!(Vector256::<f32>::LANES, 8);
}

#[test]
fn test_width_composition() {
	let wide = F32x8::from_fn(|i| i as f32 * 0.5);
	let doubled = F32x8::from_halves(wide.lower() * 2.0, wide.upper() * 2.0);

	assert_eq!(doubled, wide * 2.0);
	assert_eq!(wide.upper().lower().to_vec(), vec![2.0, 2.5]);
}

#[test]
fn test_checked_division() {
	let value = U32x4::splat(12);
	let divisor = U32x4::from_lanes(&[1, 2, 3]).unwrap();

	assert_matches!(value.checked_div(divisor), Err(Error::DivisionByZero { lane: 3 }));
	assert_eq!(Error::DivisionByZero { lane: 3 }.to_string(), "division by zero in lane 3");
	assert_eq!(value.checked_rem(U32x4::splat(5)), Ok(U32x4::splat(2)));
}

#[test]
fn test_raw_bits() {
	let raw = Raw128::from(U32x4::splat(u32::MAX));

	assert_eq!(raw.to_u128(), u128::MAX);
	assert_eq!(raw.num_cast::<i8>(), -1);
	assert_eq!((raw >> 96).to_string(), "FFFFFFFF");
	assert_eq!(U32x4::from(raw & Raw128::from(7u8)).to_vec(), vec![7, 0, 0, 0]);
}
