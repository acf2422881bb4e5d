// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::types::inference_service::Toleration;
use kube::CustomResource;
use serde::{Deserialize, Serialize};

/// A named set of hardware-toleration and device-count preferences for
/// scheduling models onto specialized compute.
#[derive(CustomResource, Serialize, Deserialize, Clone, Debug, schemars::JsonSchema)]
#[kube(group = "dashboard.opendatahub.io", version = "v1", kind = "AcceleratorProfile")]
#[kube(plural = "acceleratorprofiles")]
#[kube(namespaced)]
#[serde(rename_all = "camelCase")]
pub struct AcceleratorProfileSpec {
    pub display_name: String,
    pub enabled: bool,
    /// Resource name the profile schedules against, e.g. "nvidia.com/gpu"
    pub identifier: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tolerations: Option<Vec<Toleration>>,
}
