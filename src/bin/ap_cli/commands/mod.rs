// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Re-exports command modules for ap-cli
// ABOUTME: Provides access to the interactive, evaluate, bmi, and questions commands

pub mod bmi;
pub mod evaluate;
pub mod interactive;
pub mod questions;
