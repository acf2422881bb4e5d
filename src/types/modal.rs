// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Form state collected by the model deployment modal. Produced by the UI,
//! consumed once by the assembler, then discarded.

use crate::types::accelerator_profile::AcceleratorProfile;
use crate::types::inference_service::ModelFormat;
use serde::{Deserialize, Serialize};

/// Which serving backend a model is deployed onto. The two backends have
/// mutually exclusive annotation and predictor-field contracts, so the
/// distinction is a proper sum type rather than a flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeploymentMode {
    /// KServe serverless (Knative-backed), one deployment per model
    Serverless,
    /// ModelMesh, multi-model serving inside a shared runtime
    ModelMesh,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct InferenceServiceModalData {
    /// Human display name; the manifest name is derived from it
    pub name: String,
    /// Target project/namespace
    pub project: String,
    pub serving_runtime_name: String,
    pub storage: InferenceServiceStorage,
    pub format: ModelFormat,
    pub min_replicas: i32,
    pub max_replicas: i32,
    pub external_route: bool,
    pub token_auth: bool,
    pub tokens: Vec<ServingRuntimeToken>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct InferenceServiceStorage {
    #[serde(rename = "type")]
    pub storage_type: InferenceServiceStorageType,
    pub path: String,
    /// Name of the data connection secret holding credentials for the model store
    pub data_connection: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum InferenceServiceStorageType {
    #[serde(rename = "new-storage")]
    NewStorage,
    #[serde(rename = "existing-storage")]
    ExistingStorage,
    #[serde(rename = "existing-uri")]
    ExistingUri,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ServingRuntimeToken {
    pub uuid: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edit_name: Option<String>,
}

/// Accelerator selection made in the modal: the chosen profile plus how many
/// devices to request.
#[derive(Clone, Debug, Default)]
pub struct AcceleratorProfileState {
    pub accelerator_profile: Option<AcceleratorProfile>,
    pub count: u32,
}
