// Library root for node-compat-sync.
//
// The binary in `main.rs` and the integration tests both consume the crate
// through this surface: the parsed suite configuration, the compiled ignore
// patterns, the path extraction function, and the partitioning function.

// `core` module:
// Holds the configuration store (loading and parsing the JSON suite config)
// and the host platform detection used to pick separator-aware patterns.
pub mod core;

// `builders` module:
// Everything derived from the configuration lives here: the ignore-pattern
// list, the flattened test-path list, the parallel/sequential partition,
// the config validator, and the console status reporter.
pub mod builders;

// `utils` module:
// Small pure helpers (suite-path joining, order-preserving partitioning)
// plus the command implementations the CLI dispatches into.
pub mod utils;
