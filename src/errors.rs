// ABOUTME: Error types shared by the questionnaire library and its binaries
// ABOUTME: Re-exports the core error codes and result alias
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling
//!
//! Every fallible operation returns [`AppResult`]. Validation failures carry
//! a code in the 3000 range and are recoverable at the point of entry: the
//! form re-prompts and the stored answer stays unchanged.

pub use ap_core::errors::{AppError, AppResult, ErrorCode};
