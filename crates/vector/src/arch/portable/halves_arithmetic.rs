// Copyright 2024-2025 Irreducible Inc.

use crate::{
	arch::HalvesStrategy,
	arithmetic_traits::{
		LaneArithmetic, LaneCompare, LaneShift, TaggedLaneArithmetic, TaggedLaneCompare,
		TaggedLaneShift,
	},
	lane::{IntegerLane, Lane, NumericLane},
	register::Halves,
	tracing::trace_emulation,
};

#[inline]
fn map_halves<R: Halves>(value: R, f: impl Fn(R::Half) -> R::Half) -> R {
	let (lower, upper) = value.split();
	R::join(f(lower), f(upper))
}

#[inline]
fn zip_halves<R: Halves>(lhs: R, rhs: R, f: impl Fn(R::Half, R::Half) -> R::Half) -> R {
	let (lhs_lower, lhs_upper) = lhs.split();
	let (rhs_lower, rhs_upper) = rhs.split();
	R::join(f(lhs_lower, rhs_lower), f(lhs_upper, rhs_upper))
}

impl<R, T> TaggedLaneArithmetic<HalvesStrategy, T> for R
where
	R: Halves,
	R::Half: LaneArithmetic<T>,
	T: NumericLane,
{
	#[inline]
	fn add_lanes(self, rhs: Self) -> Self {
		trace_emulation!("add", "halves", T, R);

		zip_halves(self, rhs, LaneArithmetic::<T>::add_lanes)
	}

	#[inline]
	fn sub_lanes(self, rhs: Self) -> Self {
		trace_emulation!("sub", "halves", T, R);

		zip_halves(self, rhs, LaneArithmetic::<T>::sub_lanes)
	}

	#[inline]
	fn mul_lanes(self, rhs: Self) -> Self {
		trace_emulation!("mul", "halves", T, R);

		zip_halves(self, rhs, LaneArithmetic::<T>::mul_lanes)
	}

	#[inline]
	fn div_lanes(self, rhs: Self) -> Self {
		trace_emulation!("div", "halves", T, R);

		zip_halves(self, rhs, LaneArithmetic::<T>::div_lanes)
	}

	#[inline]
	fn rem_lanes(self, rhs: Self) -> Self {
		trace_emulation!("rem", "halves", T, R);

		zip_halves(self, rhs, LaneArithmetic::<T>::rem_lanes)
	}

	#[inline]
	fn neg_lanes(self) -> Self {
		trace_emulation!("neg", "halves", T, R);

		map_halves(self, LaneArithmetic::<T>::neg_lanes)
	}
}

impl<R, T> TaggedLaneCompare<HalvesStrategy, T> for R
where
	R: Halves,
	R::Half: LaneCompare<T>,
	T: Lane,
{
	#[inline]
	fn eq_lanes(self, rhs: Self) -> Self {
		trace_emulation!("eq", "halves", T, R);

		zip_halves(self, rhs, LaneCompare::<T>::eq_lanes)
	}

	#[inline]
	fn ne_lanes(self, rhs: Self) -> Self {
		trace_emulation!("ne", "halves", T, R);

		zip_halves(self, rhs, LaneCompare::<T>::ne_lanes)
	}

	#[inline]
	fn gt_lanes(self, rhs: Self) -> Self {
		trace_emulation!("gt", "halves", T, R);

		zip_halves(self, rhs, LaneCompare::<T>::gt_lanes)
	}

	#[inline]
	fn lt_lanes(self, rhs: Self) -> Self {
		trace_emulation!("lt", "halves", T, R);

		zip_halves(self, rhs, LaneCompare::<T>::lt_lanes)
	}

	#[inline]
	fn ge_lanes(self, rhs: Self) -> Self {
		trace_emulation!("ge", "halves", T, R);

		zip_halves(self, rhs, LaneCompare::<T>::ge_lanes)
	}

	#[inline]
	fn le_lanes(self, rhs: Self) -> Self {
		trace_emulation!("le", "halves", T, R);

		zip_halves(self, rhs, LaneCompare::<T>::le_lanes)
	}
}

impl<R, T> TaggedLaneShift<HalvesStrategy, T> for R
where
	R: Halves,
	R::Half: LaneShift<T>,
	T: IntegerLane,
{
	#[inline]
	fn shl_lanes(self, count: u32) -> Self {
		trace_emulation!("shl", "halves", T, R);

		map_halves(self, |half| LaneShift::<T>::shl_lanes(half, count))
	}

	#[inline]
	fn shr_lanes(self, count: u32) -> Self {
		trace_emulation!("shr", "halves", T, R);

		map_halves(self, |half| LaneShift::<T>::shr_lanes(half, count))
	}

	#[inline]
	fn shl_lanes_by(self, counts: Self) -> Self {
		trace_emulation!("shl_by", "halves", T, R);

		zip_halves(self, counts, LaneShift::<T>::shl_lanes_by)
	}

	#[inline]
	fn shr_lanes_by(self, counts: Self) -> Self {
		trace_emulation!("shr_by", "halves", T, R);

		zip_halves(self, counts, LaneShift::<T>::shr_lanes_by)
	}
}
