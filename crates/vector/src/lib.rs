// Copyright 2024-2025 Irreducible Inc.

//! Lane-wise operator overloads over fixed-width SIMD registers.
//!
//! A [`Vector<R, T>`] views a 64, 128 or 256-bit register `R` as lanes of a primitive type `T`
//! and implements the arithmetic, comparison, shift and bitwise operators lane by lane. Each
//! operation maps to a native instruction where the target provides one and to a short emulation
//! sequence otherwise. See the [`arch`] module for the register selection.

pub mod arch;
pub mod arithmetic_traits;
mod error;
pub mod lane;
mod raw128;
pub mod register;
#[cfg(test)]
mod tests;
mod tracing;
mod vector;

pub use arch::{M128, M256, M64};
pub use error::Error;
pub use lane::{IntegerLane, Lane, NumericLane};
pub use raw128::*;
pub use register::{Halves, Register};
pub use vector::*;
