// Copyright 2023-2025 Irreducible Inc.

use crate::env::boolean_env_flag_set;

/// Environment flag switching the log output to the compact single-line format.
pub const COMPACT_LOG_FLAG: &str = "LANEWISE_LOG_COMPACT";

/// Install the global tracing subscriber.
///
/// Events are filtered with `RUST_LOG` (defaults to `info`). Emulated lane operations are traced at
/// the `TRACE` level when `lanewise_vector` is built with the `trace_emulation` feature.
/// Calling this more than once is a no-op.
pub fn init_tracing() {
	use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

	if boolean_env_flag_set(COMPACT_LOG_FLAG) {
		let _ = tracing_subscriber::registry()
			.with(filter)
			.with(tracing_subscriber::fmt::layer().compact())
			.try_init();
	} else {
		let _ = tracing_subscriber::registry()
			.with(filter)
			.with(tracing_subscriber::fmt::layer())
			.try_init();
	};
}
