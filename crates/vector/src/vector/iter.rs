// Copyright 2024-2025 Irreducible Inc.

use std::{iter::FusedIterator, ops::Range};

use super::Vector;
use crate::{lane::Lane, register::Register};

/// Iterator over the lanes of a vector by value.
#[derive(Clone)]
pub struct Lanes<R, T> {
	vector: Vector<R, T>,
	range: Range<usize>,
}

impl<R: Register, T: Lane> Lanes<R, T> {
	pub(super) fn new(vector: Vector<R, T>) -> Self {
		Self {
			vector,
			range: 0..Vector::<R, T>::LANES,
		}
	}
}

impl<R: Register, T: Lane> Iterator for Lanes<R, T> {
	type Item = T;

	#[inline]
	fn next(&mut self) -> Option<T> {
		self.range.next().map(|i| self.vector.lane(i))
	}

	#[inline]
	fn size_hint(&self) -> (usize, Option<usize>) {
		self.range.size_hint()
	}

	#[inline]
	fn nth(&mut self, n: usize) -> Option<T> {
		self.range.nth(n).map(|i| self.vector.lane(i))
	}
}

impl<R: Register, T: Lane> DoubleEndedIterator for Lanes<R, T> {
	#[inline]
	fn next_back(&mut self) -> Option<T> {
		self.range.next_back().map(|i| self.vector.lane(i))
	}
}

impl<R: Register, T: Lane> ExactSizeIterator for Lanes<R, T> {}

impl<R: Register, T: Lane> FusedIterator for Lanes<R, T> {}
