// This file is the module declaration file for the `core` module.
// It declares the submodules contained in `src/core/` and exposes them
// to the rest of the crate.

// `config` module:
// Defines the data structures for the suite configuration file
// (`SuiteConfig` and the `TestSuiteMap` alias), the `ConfigProvider`
// trait for abstracting configuration access, and the `ConfigStore`
// that resolves the fixed on-disk location and performs the one
// synchronous read at startup.
pub mod config;

// `platform` module:
// Detects the host operating system once so that platform-dependent
// path-separator patterns can be selected up front and the matching
// functions stay pure.
pub mod platform;
