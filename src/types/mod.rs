// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Custom resource definitions and UI-facing configuration objects.

pub mod accelerator_profile;
pub mod inference_service;
pub mod modal;
pub mod project;

pub use accelerator_profile::AcceleratorProfile;
pub use inference_service::InferenceService;
pub use project::Project;
