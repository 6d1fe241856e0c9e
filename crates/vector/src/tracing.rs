// Copyright 2024-2025 Irreducible Inc.
use cfg_if::cfg_if;

cfg_if! {
	if #[cfg(feature = "trace_emulation")] {
		/// Emits a trace event for a lane operation that is emulated rather than
		/// mapped to a single instruction.
		macro_rules! trace_emulation {
			($op:literal, $strategy:literal, $lane:ty, $register:ty) => {
				tracing::event!(
					name: "emulated_lane_op",
					tracing::Level::TRACE,
					op = $op,
					strategy = $strategy,
					lane = std::any::type_name::<$lane>(),
					register_bits = <$register as $crate::register::Register>::BITS
				);
			};
		}
	} else {
		macro_rules! trace_emulation {
			($op:literal, $strategy:literal, $lane:ty, $register:ty) => {};
		}
	}
}

pub(crate) use trace_emulation;
