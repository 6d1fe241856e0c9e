// Copyright 2024-2025 Irreducible Inc.

use std::array;

use criterion::{
	criterion_group, criterion_main, measurement::WallTime, BenchmarkGroup, Criterion, Throughput,
};
use lanewise_vector::{
	arithmetic_traits::{LaneArithmetic, LaneShift},
	lane::LaneBits,
	IntegerLane, NumericLane, Register, Vector, M128, M256, M64,
};
use rand::thread_rng;

const BATCH_SIZE: usize = 32;

/// Replaces zero lanes with all bits set, so that integer division doesn't panic.
fn non_zero<R: Register, T: NumericLane>(value: Vector<R, T>) -> Vector<R, T> {
	Vector::from_fn(|i| {
		let lane = value.get(i);
		if lane == T::default() {
			T::from_bits(T::Bits::ONES)
		} else {
			lane
		}
	})
}

fn benchmark_arithmetic_impl<R, T>(group: &mut BenchmarkGroup<'_, WallTime>, id: &str)
where
	R: LaneArithmetic<T>,
	T: NumericLane,
{
	let mut rng = thread_rng();
	let lhs = array::from_fn::<_, BATCH_SIZE, _>(|_| Vector::<R, T>::random(&mut rng));
	let rhs = array::from_fn::<_, BATCH_SIZE, _>(|_| non_zero(Vector::<R, T>::random(&mut rng)));

	group.throughput(Throughput::Elements((BATCH_SIZE * Vector::<R, T>::LANES) as _));
	group.bench_function(format!("{id}/add"), |b| {
		b.iter(|| array::from_fn::<_, BATCH_SIZE, _>(|i| lhs[i] + rhs[i]))
	});
	group.bench_function(format!("{id}/mul"), |b| {
		b.iter(|| array::from_fn::<_, BATCH_SIZE, _>(|i| lhs[i] * rhs[i]))
	});
	group.bench_function(format!("{id}/div"), |b| {
		b.iter(|| array::from_fn::<_, BATCH_SIZE, _>(|i| lhs[i] / rhs[i]))
	});
}

fn benchmark_shift_impl<R, T>(group: &mut BenchmarkGroup<'_, WallTime>, id: &str)
where
	R: LaneShift<T>,
	T: IntegerLane,
{
	let mut rng = thread_rng();
	let values = array::from_fn::<_, BATCH_SIZE, _>(|_| Vector::<R, T>::random(&mut rng));
	let counts = Vector::<R, T>::from_register(R::random(&mut rng));

	group.throughput(Throughput::Elements((BATCH_SIZE * Vector::<R, T>::LANES) as _));
	group.bench_function(format!("{id}/shr"), |b| {
		b.iter(|| values.map(|value| value >> 3))
	});
	group.bench_function(format!("{id}/shr_by"), |b| {
		b.iter(|| values.map(|value| value >> counts))
	});
}

macro_rules! benchmark_lanes {
	($register:ty, $g:ident; integer = [$($int:ty),*]; float = [$($float:ty),*]) => {
		$(
			benchmark_arithmetic_impl::<$register, $int>(&mut $g, stringify!($int));
			benchmark_shift_impl::<$register, $int>(&mut $g, stringify!($int));
		)*
		$(
			benchmark_arithmetic_impl::<$register, $float>(&mut $g, stringify!($float));
		)*
	};
}

fn vector_64(c: &mut Criterion) {
	let mut group = c.benchmark_group("vector_64");

	benchmark_lanes!(M64, group; integer = [u8, i16, i32, u64]; float = [f32]);
}

fn vector_128(c: &mut Criterion) {
	let mut group = c.benchmark_group("vector_128");

	benchmark_lanes!(M128, group; integer = [u8, i8, u16, i16, i32, u64, i64]; float = [f32, f64]);
}

fn vector_256(c: &mut Criterion) {
	let mut group = c.benchmark_group("vector_256");

	benchmark_lanes!(M256, group; integer = [u8, i8, u16, i16, i32, u64, i64]; float = [f32, f64]);
}

criterion_group!(lane_arithmetic, vector_64, vector_128, vector_256);
criterion_main!(lane_arithmetic);
