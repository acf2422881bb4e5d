// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Project listing and project-scoped reads.

use crate::api::inference_services::list_inference_services_in;
use crate::constants::labels;
use crate::error::Result;
use crate::types::{InferenceService, Project};
use futures::future::try_join_all;
use kube::api::ListParams;
use kube::{Api, Client, ResourceExt};
use tracing::instrument;

/// List projects that are dashboard-visible and model-mesh enabled
#[instrument(skip(client))]
pub async fn list_serving_projects(client: &Client) -> Result<Vec<Project>> {
    let projects: Api<Project> = Api::all(client.clone());
    let lp = ListParams::default().labels(labels::SERVING_PROJECTS_SELECTOR);

    Ok(projects.list(&lp).await?.items)
}

/// List inference services across all serving projects.
///
/// Two-phase read: find the labeled projects first, then list services in
/// each project's namespace. A project-list failure aborts before any
/// service listing happens; a failure in any per-namespace fetch propagates
/// immediately. Results keep project order, then per-namespace response
/// order.
#[instrument(skip(client))]
pub async fn list_scoped_inference_services(
    client: &Client,
    label_selector: Option<&str>,
) -> Result<Vec<InferenceService>> {
    let projects = list_serving_projects(client).await?;

    let fetches = projects.iter().map(|project| {
        let namespace = project.name_any();
        async move { list_inference_services_in(client, &namespace, label_selector).await }
    });
    let per_project = try_join_all(fetches).await?;

    Ok(per_project.into_iter().flatten().collect())
}
