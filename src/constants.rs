// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Kubernetes annotation keys written onto InferenceService manifests
pub mod annotations {
    /// Human-readable display name, preserved alongside the k8s-safe resource name
    pub const DISPLAY_NAME: &str = "openshift.io/display-name";
    /// Serverless deployments only: route TLS passthrough for Knative
    pub const ENABLE_PASSTHROUGH: &str = "serving.knative.openshift.io/enablePassthrough";
    /// Serverless deployments only: istio sidecar injection
    pub const ISTIO_INJECT: &str = "sidecar.istio.io/inject";
    /// Serverless deployments only: rewrite HTTP probes to go through the sidecar
    pub const ISTIO_REWRITE_PROBERS: &str = "sidecar.istio.io/rewriteAppHTTPProbers";
    /// Selects the serving backend; only ever written with the ModelMesh value
    pub const DEPLOYMENT_MODE: &str = "serving.kserve.io/deploymentMode";
    /// Token-authenticated access to the model endpoint
    pub const ENABLE_AUTH: &str = "security.opendatahub.io/enable-auth";
}

/// Label keys and selector expressions
pub mod labels {
    /// Marks resources as owned/visible by the dashboard
    pub const DASHBOARD: &str = "opendatahub.io/dashboard";
    /// Selects namespaces that are dashboard-visible and model-mesh enabled
    pub const SERVING_PROJECTS_SELECTOR: &str = "opendatahub.io/dashboard=true,modelmesh-enabled";
}

/// Value written to the deploymentMode annotation for model-mesh deployments
pub const DEPLOYMENT_MODE_MODEL_MESH: &str = "ModelMesh";

/// Resource name used for accelerator limits/requests on the predictor
pub const GPU_RESOURCE_KEY: &str = "nvidia.com/gpu";
