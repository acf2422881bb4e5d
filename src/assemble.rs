// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Assembly of InferenceService manifests from modal form state.

use crate::constants::{annotations, labels, DEPLOYMENT_MODE_MODEL_MESH, GPU_RESOURCE_KEY};
use crate::types::inference_service::{
    InferenceService, InferenceServiceSpec, ModelStorageSpec, PredictorModelSpec, PredictorSpec,
    ResourceRequirements, Toleration,
};
use crate::types::modal::{AcceleratorProfileState, DeploymentMode, InferenceServiceModalData};
use kube::api::ObjectMeta;
use std::collections::BTreeMap;

/// Derive a cluster-safe resource name from a human display name: lowercase,
/// whitespace becomes '-', everything else outside [a-z0-9-] is dropped.
pub fn translate_display_name(display_name: &str) -> String {
    display_name
        .trim()
        .to_lowercase()
        .chars()
        .map(|c| if c.is_whitespace() { '-' } else { c })
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-')
        .collect()
}

/// Build a complete InferenceService manifest from modal form state.
///
/// Total over well-formed input; never fails. When `existing` is given its
/// name, namespace, and labels carry over so an update targets the same
/// resource. The deployment mode decides which annotation set is written and
/// whether replica bounds and accelerator resources are attached at all:
/// ModelMesh manifests leave them absent regardless of what the modal holds.
pub fn assemble_inference_service(
    data: &InferenceServiceModalData,
    existing_annotations: Option<BTreeMap<String, String>>,
    user_access_annotation: Option<String>,
    mode: DeploymentMode,
    existing: Option<&InferenceService>,
    accelerator: Option<&AcceleratorProfileState>,
) -> InferenceService {
    let display_name = data.name.trim();

    let mut manifest_annotations = existing_annotations.unwrap_or_default();
    manifest_annotations.insert(annotations::DISPLAY_NAME.to_string(), display_name.to_string());
    match mode {
        DeploymentMode::Serverless => {
            manifest_annotations
                .insert(annotations::ENABLE_PASSTHROUGH.to_string(), "true".to_string());
            manifest_annotations.insert(annotations::ISTIO_INJECT.to_string(), "true".to_string());
            manifest_annotations
                .insert(annotations::ISTIO_REWRITE_PROBERS.to_string(), "true".to_string());
        }
        DeploymentMode::ModelMesh => {
            manifest_annotations.insert(
                annotations::DEPLOYMENT_MODE.to_string(),
                DEPLOYMENT_MODE_MODEL_MESH.to_string(),
            );
        }
    }
    if let Some(value) = user_access_annotation {
        manifest_annotations.insert(annotations::ENABLE_AUTH.to_string(), value);
    }

    let name = existing
        .and_then(|r| r.metadata.name.clone())
        .unwrap_or_else(|| translate_display_name(display_name));
    let namespace = existing
        .and_then(|r| r.metadata.namespace.clone())
        .unwrap_or_else(|| data.project.clone());
    let manifest_labels = existing
        .and_then(|r| r.metadata.labels.clone())
        .unwrap_or_else(|| BTreeMap::from([(labels::DASHBOARD.to_string(), "true".to_string())]));

    // Replica bounds and accelerator resources only apply to serverless
    // deployments; the model-mesh runtime owns its own pod sizing.
    let (min_replicas, max_replicas, tolerations, resources) = match mode {
        DeploymentMode::Serverless => {
            let (tolerations, resources) = accelerator_attachments(accelerator);
            (
                Some(data.min_replicas),
                Some(data.max_replicas),
                tolerations,
                resources,
            )
        }
        DeploymentMode::ModelMesh => (None, None, None, None),
    };

    let (storage, storage_uri) = match &data.storage.uri {
        Some(uri) => (None, Some(uri.clone())),
        None => (
            Some(ModelStorageSpec {
                key: data.storage.data_connection.clone(),
                path: Some(data.storage.path.clone()),
            }),
            None,
        ),
    };

    InferenceService {
        metadata: ObjectMeta {
            name: Some(name),
            namespace: Some(namespace),
            labels: Some(manifest_labels),
            annotations: Some(manifest_annotations),
            ..Default::default()
        },
        spec: InferenceServiceSpec {
            predictor: PredictorSpec {
                model: PredictorModelSpec {
                    model_format: data.format.clone(),
                    runtime: Some(data.serving_runtime_name.clone()),
                    storage,
                    storage_uri,
                    resources,
                },
                tolerations,
                min_replicas,
                max_replicas,
            },
        },
        status: None,
    }
}

/// Tolerations and GPU limits/requests for the selected accelerator profile
fn accelerator_attachments(
    accelerator: Option<&AcceleratorProfileState>,
) -> (Option<Vec<Toleration>>, Option<ResourceRequirements>) {
    let Some(state) = accelerator else {
        return (None, None);
    };
    let Some(profile) = state.accelerator_profile.as_ref() else {
        return (None, None);
    };

    let gpu_count = serde_json::Value::from(state.count);
    let resources = ResourceRequirements {
        limits: Some(BTreeMap::from([(
            GPU_RESOURCE_KEY.to_string(),
            gpu_count.clone(),
        )])),
        requests: Some(BTreeMap::from([(GPU_RESOURCE_KEY.to_string(), gpu_count)])),
    };

    (profile.spec.tolerations.clone(), Some(resources))
}
