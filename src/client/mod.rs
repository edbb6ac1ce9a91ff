//! Gateway client layer - wire types, the `GatewayApi` trait, and implementations

mod gateway;
mod mock;
mod types;

pub use gateway::{GatewayApi, HttpGateway};
pub use mock::MockGateway;
pub use types::{
    API_KEY_HEADER, Credentials, ExecuteRequest, ExecuteResponse, HealthResponse, LOCATION_ID_HEADER, ToolTotals,
    ToolsResponse,
};
