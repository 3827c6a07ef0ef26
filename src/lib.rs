// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod cli;
pub mod config;
pub mod registration;

pub use config::RegistrarConfig;
pub use registration::{
    EmbeddingModelForm, ErrorSink, FormField, FormValidity, HttpRegistrationClient, IntField,
    Language, RegisterEmbeddingModel, RegistrationError, SharedErrorSlot, SubmitOutcome,
};
