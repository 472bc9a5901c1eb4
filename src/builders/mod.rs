// This file is the module declaration file for the `builders` module.
// It declares and makes public all the sub-modules within `src/builders`.
// These modules derive the working data structures from the parsed
// suite configuration.

// `ignore` module:
// Builds the compiled ignore-pattern list from the `ignore` suite map.
// The list always starts with a built-in pattern matching `package.json`,
// and every configured fragment is treated as raw regex text joined with
// its suite name.
pub mod ignore;

// `suites` module:
// Flattens a suite map into composite test paths, keeping only the fixed
// set of recognized suite directories.
pub mod suites;

// `partition` module:
// Splits a path list into the `parallel` and `sequential` buckets using a
// platform-aware prefix pattern.
pub mod partition;

// `validator` module:
// Checks a loaded configuration for problems that would otherwise surface
// later or not at all: ignore fragments that don't compile, suites the
// extractor silently drops, and the ignore-implies-tests convention.
pub mod validator;

// `reporter` module:
// Generates the human-readable summary shown by the `status` command.
pub mod reporter;
