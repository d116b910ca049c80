// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Shared utilities for the binary and the library.

pub mod miette_setup_global_report_handler;

pub use miette_setup_global_report_handler::*;
