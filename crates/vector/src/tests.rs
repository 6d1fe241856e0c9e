// Copyright 2024-2025 Irreducible Inc.

//! Property tests shared by every vector width and lane type.

use proptest::prelude::*;

use crate::{
	arch::{HalvesStrategy, ScalarStrategy, M128, M256, M64},
	arithmetic_traits::{
		LaneArithmetic, LaneCompare, LaneShift, TaggedLaneArithmetic, TaggedLaneCompare,
		TaggedLaneShift,
	},
	lane::{IntegerLane, Lane, LaneBits, NumericLane},
	register::{Halves, Register},
	vector::Vector,
};

fn vector_from<R: Register, T: Lane>(values: &[T]) -> Vector<R, T> {
	Vector::from_lanes(&values[..Vector::<R, T>::LANES]).unwrap()
}

fn check_lane_count<R: Register, T: Lane>() {
	assert_eq!(Vector::<R, T>::LANES, R::BITS / T::BITS);
	assert_eq!(Vector::<R, T>::zero().iter().len(), R::BITS / T::BITS);
}

fn check_round_trip<R: Register, T: Lane>(values: &[T]) {
	let vector = vector_from::<R, T>(values);
	for (i, value) in vector.iter().enumerate() {
		assert_eq!(value.to_bits(), values[i].to_bits());
	}
	assert_eq!(Vector::<R, T>::from_register(vector.to_register()), vector);
}

fn check_integer_ops<R, T>(a: &[T], b: &[T], count: u32)
where
	R: Register
		+ LaneArithmetic<T>
		+ LaneCompare<T>
		+ LaneShift<T>,
	T: IntegerLane,
{
	let a = vector_from::<R, T>(a);
	let b = vector_from::<R, T>(b);
	let zero = Vector::<R, T>::zero();

	assert_eq!(a + (-a), zero);
	assert_eq!(a - a, zero);

	// zero divisors are replaced by the first lane of `a`
	let divisor = Vector::from_fn(|i| if b.get(i) == T::default() { a.get(0) } else { b.get(i) });
	if divisor.iter().all(|lane| lane != T::default()) {
		assert_eq!((a / divisor) * divisor + a % divisor, a);
		assert_eq!(a.checked_div(divisor), Ok(a / divisor));
	}

	let counts = Vector::<R, T>::from_fn(|_| b.get(0));
	assert_eq!(a << counts, a << b.get(0).shift_count());
	assert_eq!(a >> counts, a >> b.get(0).shift_count());
	assert_eq!(a << count, Vector::from_fn(|i| a.get(i).lane_shl(count)));
	assert_eq!(a >> count, Vector::from_fn(|i| a.get(i).lane_shr(count)));

	check_compare_masks(a, b);
}

fn check_float_ops<R, T>(a: &[T], b: &[T])
where
	R: LaneArithmetic<T> + LaneCompare<T>,
	T: NumericLane,
{
	let a = vector_from::<R, T>(a);
	let b = vector_from::<R, T>(b);

	assert_eq!(a + (-a), Vector::zero());
	assert_eq!(-(-a), a);
	assert_eq!(a * b, Vector::from_fn(|i| a.get(i).lane_mul(b.get(i))));
	assert_eq!(a / b, Vector::from_fn(|i| a.get(i).lane_div(b.get(i))));

	check_compare_masks(a, b);
}

fn check_compare_masks<R, T>(a: Vector<R, T>, b: Vector<R, T>)
where
	R: Register + LaneCompare<T>,
	T: Lane,
{
	let cases: [(Vector<R, T>, fn(&T, &T) -> bool); 6] = [
		(a.simd_eq(b), |x, y| x == y),
		(a.simd_ne(b), |x, y| x != y),
		(a.simd_gt(b), |x, y| x > y),
		(a.simd_lt(b), |x, y| x < y),
		(a.simd_ge(b), |x, y| x >= y),
		(a.simd_le(b), |x, y| x <= y),
	];

	for (mask, predicate) in cases {
		for i in 0..Vector::<R, T>::LANES {
			let expected = if predicate(&a.get(i), &b.get(i)) {
				T::Bits::ONES
			} else {
				T::Bits::ZERO
			};
			assert_eq!(mask.to_register().lane_bits::<T::Bits>(i), expected);
		}
	}
}

fn check_halves_strategy<R, T>(a: &[T], b: &[T])
where
	R: Halves
		+ TaggedLaneArithmetic<HalvesStrategy, T>
		+ TaggedLaneArithmetic<ScalarStrategy, T>
		+ TaggedLaneCompare<HalvesStrategy, T>
		+ TaggedLaneCompare<ScalarStrategy, T>,
	T: NumericLane,
{
	let a = vector_from::<R, T>(a).to_register();
	let b = vector_from::<R, T>(b).to_register();

	assert_eq!(
		TaggedLaneArithmetic::<HalvesStrategy, T>::add_lanes(a, b),
		TaggedLaneArithmetic::<ScalarStrategy, T>::add_lanes(a, b)
	);
	assert_eq!(
		TaggedLaneArithmetic::<HalvesStrategy, T>::mul_lanes(a, b),
		TaggedLaneArithmetic::<ScalarStrategy, T>::mul_lanes(a, b)
	);
	assert_eq!(
		TaggedLaneCompare::<HalvesStrategy, T>::lt_lanes(a, b),
		TaggedLaneCompare::<ScalarStrategy, T>::lt_lanes(a, b)
	);
}

fn check_halves_shift<R, T>(a: &[T], count: u32)
where
	R: Halves + TaggedLaneShift<HalvesStrategy, T> + TaggedLaneShift<ScalarStrategy, T>,
	T: IntegerLane,
{
	let a = vector_from::<R, T>(a).to_register();

	assert_eq!(
		TaggedLaneShift::<HalvesStrategy, T>::shr_lanes(a, count),
		TaggedLaneShift::<ScalarStrategy, T>::shr_lanes(a, count)
	);
	assert_eq!(
		TaggedLaneShift::<HalvesStrategy, T>::shl_lanes_by(a, a),
		TaggedLaneShift::<ScalarStrategy, T>::shl_lanes_by(a, a)
	);
}

macro_rules! define_integer_tests {
	($($lane:ident),*) => {
		$(
			paste::paste! {
				proptest! {
					#[test]
					fn [<test_ $lane _lanes>](
						a in prop::array::uniform32(any::<$lane>()),
						b in prop::array::uniform32(any::<$lane>()),
						count in 0u32..72,
					) {
						check_lane_count::<M64, $lane>();
						check_lane_count::<M128, $lane>();
						check_lane_count::<M256, $lane>();

						check_round_trip::<M64, $lane>(&a);
						check_round_trip::<M128, $lane>(&a);
						check_round_trip::<M256, $lane>(&a);

						check_integer_ops::<M64, $lane>(&a, &b, count);
						check_integer_ops::<M128, $lane>(&a, &b, count);
						check_integer_ops::<M256, $lane>(&a, &b, count);

						check_halves_strategy::<M128, $lane>(&a, &b);
						check_halves_strategy::<M256, $lane>(&a, &b);
						check_halves_shift::<M128, $lane>(&a, count);
						check_halves_shift::<M256, $lane>(&a, count);
					}
				}
			}
		)*
	};
}

define_integer_tests!(u8, u16, u32, u64, i8, i16, i32, i64);

macro_rules! define_float_tests {
	($($lane:ident),*) => {
		$(
			paste::paste! {
				proptest! {
					#[test]
					fn [<test_ $lane _lanes>](
						a in prop::array::uniform32(-1e6 as $lane..1e6),
						b in prop::array::uniform32(1e-3 as $lane..1e6),
					) {
						check_lane_count::<M64, $lane>();
						check_lane_count::<M128, $lane>();
						check_lane_count::<M256, $lane>();

						check_round_trip::<M64, $lane>(&a);
						check_round_trip::<M128, $lane>(&a);
						check_round_trip::<M256, $lane>(&a);

						check_float_ops::<M64, $lane>(&a, &b);
						check_float_ops::<M128, $lane>(&a, &b);
						check_float_ops::<M256, $lane>(&a, &b);

						check_halves_strategy::<M128, $lane>(&a, &b);
						check_halves_strategy::<M256, $lane>(&a, &b);
					}
				}
			}
		)*
	};
}

define_float_tests!(f32, f64);

proptest! {
	#[test]
	fn test_bool_lanes(
		a in prop::array::uniform32(any::<bool>()),
		b in prop::array::uniform32(any::<bool>()),
	) {
		check_lane_count::<M64, bool>();
		check_lane_count::<M128, bool>();
		check_lane_count::<M256, bool>();

		check_round_trip::<M256, bool>(&a);

		let va = vector_from::<M256, bool>(&a);
		let vb = vector_from::<M256, bool>(&b);
		for i in 0..32 {
			prop_assert_eq!((!va).get(i), !a[i]);
			prop_assert_eq!((va & vb).get(i), a[i] & b[i]);
			prop_assert_eq!((va ^ vb).get(i), a[i] ^ b[i]);
			prop_assert_eq!(va.simd_eq(vb).get(i), a[i] == b[i]);
		}

		let either = va.simd_eq(vb) ^ va.simd_ne(vb);
		prop_assert_eq!(either.reinterpret::<u8>().to_vec(), vec![1u8; 32]);
		prop_assert_eq!(va.simd_ne(vb), !va.simd_eq(vb));

		check_compare_masks(vector_from::<M64, bool>(&a), vector_from::<M64, bool>(&b));
		check_compare_masks(vector_from::<M128, bool>(&a), vector_from::<M128, bool>(&b));
	}
}
