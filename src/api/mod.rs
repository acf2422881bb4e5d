// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Query functions over the cluster API: one thin function per CRUD
//! operation, plus the project-scoped listing.

pub mod inference_services;
pub mod projects;

pub use inference_services::{
    create_inference_service, delete_inference_service, get_inference_service,
    get_inference_service_context, list_inference_services, list_inference_services_in,
    update_inference_service,
};
pub use projects::{list_scoped_inference_services, list_serving_projects};
