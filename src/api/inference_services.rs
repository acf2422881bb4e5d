// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! CRUD operations for InferenceService resources.
//!
//! Every function issues exactly one API call and propagates rejections from
//! the client unchanged. The one deliberate exception is delete, which
//! resolves to the server's Status object even when that status encodes a
//! failure; only transport-level errors reject. Callers inspect the status
//! fields to tell the two apart.

use crate::assemble::assemble_inference_service;
use crate::config::Config;
use crate::error::{ModelServeError, Result};
use crate::types::modal::{AcceleratorProfileState, DeploymentMode, InferenceServiceModalData};
use crate::types::InferenceService;
use either::Either;
use kube::api::{DeleteParams, ListParams, PostParams};
use kube::core::Status;
use kube::{Api, Client, ResourceExt};
use tracing::instrument;

/// List inference services across all namespaces
#[instrument(skip(client))]
pub async fn list_inference_services(
    client: &Client,
    label_selector: Option<&str>,
) -> Result<Vec<InferenceService>> {
    let services: Api<InferenceService> = Api::all(client.clone());
    let mut lp = ListParams::default();
    if let Some(selector) = label_selector {
        lp = lp.labels(selector);
    }

    Ok(services.list(&lp).await?.items)
}

/// List inference services within a single namespace
#[instrument(skip(client))]
pub async fn list_inference_services_in(
    client: &Client,
    namespace: &str,
    label_selector: Option<&str>,
) -> Result<Vec<InferenceService>> {
    let services: Api<InferenceService> = Api::namespaced(client.clone(), namespace);
    let mut lp = ListParams::default();
    if let Some(selector) = label_selector {
        lp = lp.labels(selector);
    }

    Ok(services.list(&lp).await?.items)
}

/// List inference services in the given namespace, falling back to the
/// configured default project when none is given
#[instrument(skip(client, config))]
pub async fn get_inference_service_context(
    client: &Client,
    config: &Config,
    namespace: Option<&str>,
) -> Result<Vec<InferenceService>> {
    let namespace = namespace.unwrap_or(&config.default_project);
    list_inference_services_in(client, namespace, None).await
}

/// Fetch a single inference service. Not-found propagates as an error.
#[instrument(skip(client))]
pub async fn get_inference_service(
    client: &Client,
    name: &str,
    namespace: &str,
) -> Result<InferenceService> {
    let services: Api<InferenceService> = Api::namespaced(client.clone(), namespace);
    Ok(services.get(name).await?)
}

/// Assemble a manifest from modal data and create it
#[instrument(skip(client, data, existing, accelerator, opts))]
pub async fn create_inference_service(
    client: &Client,
    data: &InferenceServiceModalData,
    mode: DeploymentMode,
    existing: Option<&InferenceService>,
    accelerator: Option<&AcceleratorProfileState>,
    opts: Option<PostParams>,
) -> Result<InferenceService> {
    let manifest = assemble_inference_service(data, None, None, mode, existing, accelerator);
    let namespace = manifest.namespace().unwrap_or_else(|| data.project.clone());
    let services: Api<InferenceService> = Api::namespaced(client.clone(), &namespace);

    Ok(services.create(&opts.unwrap_or_default(), &manifest).await?)
}

/// Assemble a manifest reusing the existing resource's identity and replace it
#[instrument(skip(client, data, existing, accelerator, opts))]
pub async fn update_inference_service(
    client: &Client,
    data: &InferenceServiceModalData,
    mode: DeploymentMode,
    existing: &InferenceService,
    accelerator: Option<&AcceleratorProfileState>,
    opts: Option<PostParams>,
) -> Result<InferenceService> {
    let name = existing
        .metadata
        .name
        .clone()
        .ok_or_else(|| ModelServeError::MissingName("inferenceservice".to_string()))?;

    let mut manifest = assemble_inference_service(
        data,
        existing.metadata.annotations.clone(),
        None,
        mode,
        Some(existing),
        accelerator,
    );
    manifest.metadata.resource_version = existing.metadata.resource_version.clone();

    let namespace = existing.namespace().unwrap_or_else(|| data.project.clone());
    let services: Api<InferenceService> = Api::namespaced(client.clone(), &namespace);

    Ok(services
        .replace(&name, &opts.unwrap_or_default(), &manifest)
        .await?)
}

/// Delete an inference service, resolving to the server's Status object.
///
/// An API-level failure (e.g. not found) resolves to a failure Status with
/// code/reason/message populated; only transport-level failures return Err.
/// When the server answers with the in-progress object instead of a Status,
/// the deletion was accepted and a success Status is returned.
#[instrument(skip(client))]
pub async fn delete_inference_service(
    client: &Client,
    name: &str,
    namespace: &str,
) -> Result<Status> {
    let services: Api<InferenceService> = Api::namespaced(client.clone(), namespace);

    match services.delete(name, &DeleteParams::default()).await {
        Ok(Either::Right(status)) => Ok(status),
        Ok(Either::Left(_)) => Ok(Status::success()),
        Err(kube::Error::Api(err)) => {
            Ok(Status::failure(&err.message, &err.reason).with_code(err.code))
        }
        Err(e) => Err(e.into()),
    }
}
