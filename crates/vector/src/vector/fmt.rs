// Copyright 2024-2025 Irreducible Inc.

use std::{any::type_name, fmt};

use super::Vector;
use crate::{lane::Lane, register::Register};

const DEFAULT_SEPARATOR: &str = ", ";

impl<R: Register, T: Lane> Vector<R, T> {
	/// Writes `<lane0{separator}lane1...>`, formatting each lane with `fmt_lane` and the options of
	/// `f`.
	fn fmt_lanes(
		&self,
		f: &mut fmt::Formatter<'_>,
		separator: &str,
		fmt_lane: impl Fn(&T, &mut fmt::Formatter<'_>) -> fmt::Result,
	) -> fmt::Result {
		f.write_str("<")?;
		for (i, lane) in self.iter().enumerate() {
			if i != 0 {
				f.write_str(separator)?;
			}
			fmt_lane(&lane, f)?;
		}
		f.write_str(">")
	}

	/// Displays the lanes with a custom list separator.
	pub fn display_with<'a>(&'a self, separator: &'a str) -> DisplayWith<'a, R, T> {
		DisplayWith {
			vector: self,
			separator,
		}
	}
}

/// [`Vector`] formatter returned by [`Vector::display_with`].
pub struct DisplayWith<'a, R, T> {
	vector: &'a Vector<R, T>,
	separator: &'a str,
}

impl<R: Register, T: Lane> fmt::Display for DisplayWith<'_, R, T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		self.vector
			.fmt_lanes(f, self.separator, fmt::Display::fmt)
	}
}

impl<R: Register, T: Lane> fmt::Debug for Vector<R, T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Vector{}<{}>(", R::BITS, type_name::<T>())?;
		self.fmt_lanes(f, DEFAULT_SEPARATOR, fmt::Debug::fmt)?;
		f.write_str(")")
	}
}

impl<R: Register, T: Lane> fmt::Display for Vector<R, T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		self.fmt_lanes(f, DEFAULT_SEPARATOR, fmt::Display::fmt)
	}
}

macro_rules! impl_fmt_forwarding {
	($($trait:ident),*) => {
		$(
			impl<R: Register, T: Lane + fmt::$trait> fmt::$trait for Vector<R, T> {
				fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
					self.fmt_lanes(f, DEFAULT_SEPARATOR, fmt::$trait::fmt)
				}
			}
		)*
	};
}

impl_fmt_forwarding!(LowerHex, UpperHex, Binary, LowerExp, UpperExp);

#[cfg(test)]
mod tests {
	use crate::vector::{Boolx8, F32x2, I32x4, U16x4, U8x8};

	#[test]
	fn test_display() {
		let value = I32x4::from_lanes(&[1, -2, 3, 4]).unwrap();

		assert_eq!(value.to_string(), "<1, -2, 3, 4>");
		assert_eq!(format!("{value:+}"), "<+1, -2, +3, +4>");
		assert_eq!(format!("{value:>3}"), "<  1,  -2,   3,   4>");
		assert_eq!(format!("{:?}", value), "Vector128<i32>(<1, -2, 3, 4>)");
	}

	#[test]
	fn test_float_format_options() {
		let value = F32x2::from_lanes(&[1.0, 0.25]).unwrap();

		assert_eq!(format!("{value:.2}"), "<1.00, 0.25>");
		assert_eq!(format!("{value:e}"), "<1e0, 2.5e-1>");
		assert_eq!(format!("{value:?}"), "Vector64<f32>(<1.0, 0.25>)");
	}

	#[test]
	fn test_radix_formats() {
		let value = U16x4::from_lanes(&[255, 16, 1, 0]).unwrap();

		assert_eq!(format!("{value:x}"), "<ff, 10, 1, 0>");
		assert_eq!(format!("{value:#X}"), "<0xFF, 0x10, 0x1, 0x0>");
		assert_eq!(format!("{value:04b}"), "<11111111, 10000, 0001, 0000>");
	}

	#[test]
	fn test_display_with() {
		let value = U8x8::from_fn(|i| i as u8);
		assert_eq!(value.display_with("; ").to_string(), "<0; 1; 2; 3; 4; 5; 6; 7>");

		let flags = Boolx8::from_fn(|i| i < 2);
		assert_eq!(
			flags.display_with(" ").to_string(),
			"<true true false false false false false false>"
		);
	}
}
