// Copyright 2024-2025 Irreducible Inc.

/// Error returned by the fallible vector operations.
#[derive(Clone, Copy, thiserror::Error, Debug, PartialEq, Eq)]
pub enum Error {
	#[error("index {index} is out of range 0..{max}")]
	IndexOutOfRange { index: usize, max: usize },
	/// The source collection has more values than the vector has lanes.
	#[error("got {actual} values, but the vector has only {max} lanes")]
	TooManyLanes { actual: usize, max: usize },
	/// The slice is too short for a full register load or store.
	#[error("got {actual} values, but at least {min} are required")]
	NotEnoughLanes { actual: usize, min: usize },
	#[error("division by zero in lane {lane}")]
	DivisionByZero { lane: usize },
}
