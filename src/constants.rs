// ABOUTME: Constant re-exports for the server crate
// ABOUTME: Provider paths, validation bounds and admission defaults live in recipe-core
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use recipe_core::constants::*;
