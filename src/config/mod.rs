// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod registrar;

pub use registrar::{ConfigError, RegistrarConfig, DEFAULT_ENDPOINT};
