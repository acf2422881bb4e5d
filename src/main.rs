// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::Result;
use kube::{Client, ResourceExt};
use tracing::info;

use modelserve::api::{get_inference_service_context, list_scoped_inference_services};
use modelserve::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    info!("Starting model serving inventory");

    // Load configuration
    let config = Config::from_env()?;
    info!("Configuration loaded: default_project={}", config.default_project);

    // Create Kubernetes client
    let client = Client::try_default().await?;
    info!("Connected to Kubernetes cluster");

    let services = list_scoped_inference_services(&client, None).await?;
    info!("Found {} inference services across serving projects", services.len());
    for svc in &services {
        info!(
            "{}/{}: '{}' (loaded: {})",
            svc.namespace().unwrap_or_default(),
            svc.name_any(),
            svc.display_name(),
            svc.is_loaded()
        );
    }

    let in_default = get_inference_service_context(&client, &config, None).await?;
    info!(
        "{} inference services in default project {}",
        in_default.len(),
        config.default_project
    );

    Ok(())
}
