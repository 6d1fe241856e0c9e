// Copyright 2024-2025 Irreducible Inc.

/// Return early with the given error.
///
/// With the `bail_panic` feature the error is raised as a panic instead, which gives a backtrace
/// at the failing call site.
#[cfg(feature = "bail_panic")]
#[macro_export]
macro_rules! bail {
	($err:expr) => {
		panic!("{}", $err);
	};
}

/// Return early with the given error.
#[cfg(not(feature = "bail_panic"))]
#[macro_export]
macro_rules! bail {
	($err:expr) => {
		return Err($err.into());
	};
}

/// Return early with the given error unless the condition holds.
#[macro_export]
macro_rules! ensure {
	($cond:expr, $err:expr) => {
		if !$cond {
			$crate::bail!($err);
		}
	};
}

#[cfg(all(test, not(feature = "bail_panic")))]
mod tests {
	#[derive(Debug, PartialEq, Eq)]
	struct TooLong(usize);

	impl std::fmt::Display for TooLong {
		fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
			write!(f, "too long: {}", self.0)
		}
	}

	fn check_len(len: usize) -> Result<usize, TooLong> {
		ensure!(len <= 4, TooLong(len));
		Ok(len)
	}

	#[test]
	fn test_ensure() {
		assert_eq!(check_len(3), Ok(3));
		assert_eq!(check_len(5), Err(TooLong(5)));
	}
}
