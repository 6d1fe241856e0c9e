// Copyright 2024-2025 Irreducible Inc.

use std::array;

use criterion::{
	criterion_group, criterion_main, measurement::WallTime, BenchmarkGroup, Criterion, Throughput,
};
use lanewise_vector::{Lane, Register, Vector, M128, M256, M64};
use rand::{
	distributions::{Distribution, Uniform},
	thread_rng,
};

const BATCH_SIZE: usize = 32;

fn benchmark_get_impl<R: Register, T: Lane>(group: &mut BenchmarkGroup<'_, WallTime>, id: &str) {
	let mut rng = thread_rng();
	let value = Vector::<R, T>::random(&mut rng);
	let distr = Uniform::<usize>::new(0, Vector::<R, T>::LANES);
	let indices = array::from_fn::<_, BATCH_SIZE, _>(|_| distr.sample(&mut rng));

	group.throughput(Throughput::Elements(BATCH_SIZE as _));
	group.bench_function(format!("{id}/get"), |b| b.iter(|| indices.map(|i| value.get(i))));
}

fn benchmark_from_fn_impl<R: Register, T: Lane>(
	group: &mut BenchmarkGroup<'_, WallTime>,
	id: &str,
) {
	let mut rng = thread_rng();
	let values = array::from_fn::<_, BATCH_SIZE, _>(|_| Vector::<R, T>::random(&mut rng).to_vec());

	group.throughput(Throughput::Elements((BATCH_SIZE * Vector::<R, T>::LANES) as _));
	group.bench_function(format!("{id}/from_fn"), |b| {
		b.iter(|| {
			array::from_fn::<_, BATCH_SIZE, _>(|j| {
				let values = &values[j];
				Vector::<R, T>::from_fn(|i| values[i])
			})
		})
	});
	group.bench_function(format!("{id}/load"), |b| {
		b.iter(|| array::from_fn::<_, BATCH_SIZE, _>(|j| Vector::<R, T>::load(&values[j])))
	});
}

macro_rules! benchmark_access {
	($register:ty, $g:ident; $($lane:ty),*) => {
		$(
			benchmark_get_impl::<$register, $lane>(&mut $g, stringify!($lane));
			benchmark_from_fn_impl::<$register, $lane>(&mut $g, stringify!($lane));
		)*
	};
}

fn vector_64(c: &mut Criterion) {
	let mut group = c.benchmark_group("vector_64");

	benchmark_access!(M64, group; u8, i16, f32, bool);
}

fn vector_128(c: &mut Criterion) {
	let mut group = c.benchmark_group("vector_128");

	benchmark_access!(M128, group; i8, i16, u32, u64, f32, bool);
}

fn vector_256(c: &mut Criterion) {
	let mut group = c.benchmark_group("vector_256");

	benchmark_access!(M256, group; u8, i16, i32, f64, bool);
}

criterion_group!(lane_access, vector_64, vector_128, vector_256);
criterion_main!(lane_access);
