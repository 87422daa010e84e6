//! Client of the canister registration API.
//!
//! ```no_run
//! use canister_registry_core::api::canister::CanisterType;
//! use canister_registry_core::client::api_url::ApiUrl;
//! use canister_registry_core::client::registration_client::RegistrationClient;
//!
//! # async fn run() {
//! let client = RegistrationClient::new(ApiUrl::prod());
//! let result = client
//!     .register_canister("abc-principal", "xyz-canister", CanisterType::TokenBackend)
//!     .await;
//! println!("registered: {}", result.success);
//! # }
//! ```

pub mod api;
pub mod client;
pub mod errors;
pub mod registry_tracing;

pub use api::canister::{ApiCanisterType, CanisterId, CanisterType, Principal};
pub use api::result::{ApiResult, RegistrationResult};
pub use client::api_url::ApiUrl;
pub use client::registration_client::RegistrationClient;
