// Copyright 2024-2025 Irreducible Inc.

//! Vector values: a register viewed as a fixed number of lanes.

mod fmt;
mod iter;
mod ops;

use std::{
	hash::{Hash, Hasher},
	marker::PhantomData,
};

use bytemuck::{bytes_of, Pod, Zeroable};
use lanewise_utils::{checked_arithmetics::checked_lane_count, ensure};
use rand::RngCore;
use subtle::{Choice, ConstantTimeEq};

pub use self::{fmt::DisplayWith, iter::Lanes};
use crate::{
	arch::{M128, M256, M64},
	error::Error,
	lane::Lane,
	register::{Halves, Register},
};

/// A register `R` viewed as [`Self::LANES`] lanes of type `T`.
///
/// The lane count must be a whole number. A lane type that doesn't divide the register width
/// fails to compile:
///
/// ```compile_fail
/// use std::fmt;
///
/// use lanewise_vector::{Lane, Vector64};
///
/// #[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
/// struct Wide(u128);
///
/// impl fmt::Display for Wide {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         write!(f, "{}", self.0)
///     }
/// }
///
/// impl Lane for Wide {
///     type Bits = u128;
///
///     fn to_bits(self) -> u128 {
///         self.0
///     }
///
///     fn from_bits(bits: u128) -> Self {
///         Self(bits)
///     }
/// }
///
/// let _ = Vector64::<Wide>::splat(Wide(1));
/// ```
#[derive(Clone, Copy)]
#[repr(transparent)]
pub struct Vector<R, T>(R, PhantomData<T>);

pub type Vector64<T> = Vector<M64, T>;
pub type Vector128<T> = Vector<M128, T>;
pub type Vector256<T> = Vector<M256, T>;

pub type I8x8 = Vector64<i8>;
pub type U8x8 = Vector64<u8>;
pub type I16x4 = Vector64<i16>;
pub type U16x4 = Vector64<u16>;
pub type I32x2 = Vector64<i32>;
pub type U32x2 = Vector64<u32>;
pub type I64x1 = Vector64<i64>;
pub type U64x1 = Vector64<u64>;
pub type F32x2 = Vector64<f32>;
pub type F64x1 = Vector64<f64>;
pub type Boolx8 = Vector64<bool>;

pub type I8x16 = Vector128<i8>;
pub type U8x16 = Vector128<u8>;
pub type I16x8 = Vector128<i16>;
pub type U16x8 = Vector128<u16>;
pub type I32x4 = Vector128<i32>;
pub type U32x4 = Vector128<u32>;
pub type I64x2 = Vector128<i64>;
pub type U64x2 = Vector128<u64>;
pub type F32x4 = Vector128<f32>;
pub type F64x2 = Vector128<f64>;
pub type Boolx16 = Vector128<bool>;

pub type I8x32 = Vector256<i8>;
pub type U8x32 = Vector256<u8>;
pub type I16x16 = Vector256<i16>;
pub type U16x16 = Vector256<u16>;
pub type I32x8 = Vector256<i32>;
pub type U32x8 = Vector256<u32>;
pub type I64x4 = Vector256<i64>;
pub type U64x4 = Vector256<u64>;
pub type F32x8 = Vector256<f32>;
pub type F64x4 = Vector256<f64>;
pub type Boolx32 = Vector256<bool>;

static_assertions::const_assert_eq!(I8x8::LANES, 8);
static_assertions::const_assert_eq!(I64x1::LANES, 1);
static_assertions::const_assert_eq!(I16x8::LANES, 8);
static_assertions::const_assert_eq!(F64x2::LANES, 2);
static_assertions::const_assert_eq!(Boolx16::LANES, 16);
static_assertions::const_assert_eq!(U8x32::LANES, 32);
static_assertions::const_assert_eq!(F32x8::LANES, 8);

unsafe impl<R: Zeroable, T> Zeroable for Vector<R, T> {}

unsafe impl<R: Pod, T: Lane> Pod for Vector<R, T> {}

impl<R: Register, T: Lane> Vector<R, T> {
	/// Number of lanes.
	pub const LANES: usize = checked_lane_count(R::BITS, T::BITS);

	#[inline(always)]
	pub fn from_register(register: R) -> Self {
		// force the evaluation of the lane count check for every instantiated pair
		let _ = Self::LANES;

		Self(register, PhantomData)
	}

	#[inline(always)]
	pub fn to_register(self) -> R {
		self.0
	}

	#[inline]
	pub fn zero() -> Self {
		Self::from_register(R::default())
	}

	/// Vector with all lanes set to `value`.
	#[inline]
	pub fn splat(value: T) -> Self {
		Self::from_register(R::broadcast_lane_bits(value.to_bits()))
	}

	/// Vector with `value` in the first lane and zeros in the others.
	#[inline]
	pub fn from_scalar(value: T) -> Self {
		Self::from_fn(|i| if i == 0 { value } else { T::default() })
	}

	#[inline]
	pub fn from_fn(mut f: impl FnMut(usize) -> T) -> Self {
		Self::from_register(R::from_lane_bits_fn(|i| f(i).to_bits()))
	}

	/// Vector holding `values` in the leading lanes, the remaining lanes are zero.
	pub fn from_lanes(values: &[T]) -> Result<Self, Error> {
		ensure!(
			values.len() <= Self::LANES,
			Error::TooManyLanes {
				actual: values.len(),
				max: Self::LANES,
			}
		);

		Ok(Self::from_fn(|i| values.get(i).copied().unwrap_or_default()))
	}

	/// Loads the first [`Self::LANES`] values of `values`.
	pub fn load(values: &[T]) -> Result<Self, Error> {
		ensure!(
			values.len() >= Self::LANES,
			Error::NotEnoughLanes {
				actual: values.len(),
				min: Self::LANES,
			}
		);

		Ok(Self::from_fn(|i| values[i]))
	}

	/// Reads a vector from memory.
	///
	/// # Safety
	/// `ptr` must be valid for reads of [`Self::LANES`] consecutive values of `T`.
	#[inline]
	pub unsafe fn read_unaligned(ptr: *const T) -> Self {
		Self::from_register(ptr.cast::<R>().read_unaligned())
	}

	/// Writes the lanes to memory.
	///
	/// # Safety
	/// `ptr` must be valid for writes of [`Self::LANES`] consecutive values of `T`.
	#[inline]
	pub unsafe fn write_unaligned(self, ptr: *mut T) {
		ptr.cast::<R>().write_unaligned(self.0)
	}

	/// Vector with random bits in every lane.
	pub fn random(rng: impl RngCore) -> Self {
		Self::from_register(R::random(rng))
	}

	#[inline(always)]
	pub(crate) fn lane(&self, index: usize) -> T {
		T::from_bits(self.0.lane_bits(index))
	}

	pub fn get_checked(&self, index: usize) -> Result<T, Error> {
		ensure!(
			index < Self::LANES,
			Error::IndexOutOfRange {
				index,
				max: Self::LANES,
			}
		);

		Ok(self.lane(index))
	}

	/// Returns the `index`-th lane.
	///
	/// ## Panics
	/// Panics if `index` is not smaller than [`Self::LANES`].
	pub fn get(&self, index: usize) -> T {
		assert!(index < Self::LANES, "lane index {index} is out of range 0..{}", Self::LANES);

		self.lane(index)
	}

	/// Whether any lane holds `value`. A `NaN` lane matches a `NaN` value.
	pub fn contains(&self, value: &T) -> bool {
		self.iter().any(|lane| lane.same_value(*value))
	}

	/// Index of the first lane holding `value`, compared with [`Lane::same_value`].
	pub fn position(&self, value: &T) -> Option<usize> {
		self.iter().position(|lane| lane.same_value(*value))
	}

	/// Copies the lanes into the leading elements of `dst`.
	pub fn store(&self, dst: &mut [T]) -> Result<(), Error> {
		ensure!(
			dst.len() >= Self::LANES,
			Error::NotEnoughLanes {
				actual: dst.len(),
				min: Self::LANES,
			}
		);

		for (dst, lane) in dst.iter_mut().zip(self.iter()) {
			*dst = lane;
		}

		Ok(())
	}

	pub fn to_vec(&self) -> Vec<T> {
		self.iter().collect()
	}

	#[inline]
	pub fn iter(&self) -> Lanes<R, T> {
		Lanes::new(*self)
	}

	/// Reinterprets the register bits as lanes of `U`.
	#[inline(always)]
	pub fn reinterpret<U: Lane>(self) -> Vector<R, U> {
		Vector::from_register(self.0)
	}
}

impl<R: Halves, T: Lane> Vector<R, T> {
	/// The lanes `0..LANES / 2`.
	#[inline]
	pub fn lower(self) -> Vector<R::Half, T> {
		Vector::from_register(self.0.split().0)
	}

	/// The lanes `LANES / 2..LANES`.
	#[inline]
	pub fn upper(self) -> Vector<R::Half, T> {
		Vector::from_register(self.0.split().1)
	}

	#[inline]
	pub fn from_halves(lower: Vector<R::Half, T>, upper: Vector<R::Half, T>) -> Self {
		Self::from_register(R::join(lower.0, upper.0))
	}
}

impl<R: Register, T: Lane> Default for Vector<R, T> {
	fn default() -> Self {
		Self::zero()
	}
}

impl<R: Register, T: Lane> From<R> for Vector<R, T> {
	#[inline(always)]
	fn from(register: R) -> Self {
		Self::from_register(register)
	}
}

impl<R: Register, T: Lane> TryFrom<&[T]> for Vector<R, T> {
	type Error = Error;

	fn try_from(values: &[T]) -> Result<Self, Self::Error> {
		Self::from_lanes(values)
	}
}

/// Bitwise equality of the registers.
impl<R: Register, T: Lane> PartialEq for Vector<R, T> {
	#[inline]
	fn eq(&self, other: &Self) -> bool {
		T::canonicalize(self.0) == T::canonicalize(other.0)
	}
}

impl<R: Register, T: Lane> Eq for Vector<R, T> {}

impl<R: Register, T: Lane> Hash for Vector<R, T> {
	fn hash<H: Hasher>(&self, state: &mut H) {
		bytes_of(&T::canonicalize(self.0)).hash(state)
	}
}

impl<R: Register, T: Lane> ConstantTimeEq for Vector<R, T> {
	fn ct_eq(&self, other: &Self) -> Choice {
		bytes_of(&T::canonicalize(self.0)).ct_eq(bytes_of(&T::canonicalize(other.0)))
	}
}

impl<R: Register, T: Lane> IntoIterator for Vector<R, T> {
	type Item = T;
	type IntoIter = Lanes<R, T>;

	fn into_iter(self) -> Self::IntoIter {
		Lanes::new(self)
	}
}

impl<R: Register, T: Lane> IntoIterator for &Vector<R, T> {
	type Item = T;
	type IntoIter = Lanes<R, T>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}
