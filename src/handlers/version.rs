//! Version information endpoint handler.

use crate::{
    models::VersionResponse,
    services::{BUILD_COMMIT, BUILD_TIMESTAMP},
};
use actix_web::web;
use paperclip::actix::api_v2_operation;

/// Version information endpoint
///
/// Commit and build time come from the build script and read `unknown`
/// when the crate was built outside a git checkout.
#[api_v2_operation(
    summary = "Version Information Endpoint",
    description = "Returns the widget version, commit hash, and build time.",
    tags("Version"),
    responses(
        (status = 200, description = "Successful response", body = VersionResponse)
    )
)]
pub async fn version() -> web::Json<VersionResponse> {
    web::Json(VersionResponse {
        version: env!("CARGO_PKG_VERSION").to_string(),
        commit: BUILD_COMMIT.to_string(),
        build_time: BUILD_TIMESTAMP.to_string(),
    })
}
