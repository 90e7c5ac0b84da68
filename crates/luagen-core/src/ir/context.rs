use serde::Serialize;

use super::operations::{IrOperation, IrRequestBody};

/// API metadata carried into the render-context.
#[derive(Debug, Clone, Serialize)]
pub struct IrInfo {
    pub title: String,
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// The fully normalized render-context: the sole contract between the
/// pipeline and a code generator. Operations and component request bodies
/// keep their declaration order.
#[derive(Debug, Clone, Serialize)]
pub struct SdkContext {
    pub info: IrInfo,
    pub operations: Vec<IrOperation>,
    pub request_bodies: Vec<IrRequestBody>,
}
