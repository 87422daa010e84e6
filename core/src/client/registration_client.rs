use serde_json::Value;
use tracing::{error, instrument, Instrument};

use crate::api::canister::{
    ApiCanisterType, CanisterId, CanisterType, Principal, RegistrationRequest,
};
use crate::api::result::{ApiResult, RegistrationResult};
use crate::client::api_url::ApiUrl;
use crate::client::transport::{HttpTransport, RegistryRequest, RegistryTransport};
use crate::errors::RegistryError;
use crate::registry_tracing::client_span;

pub const CANISTERS: &str = "canisters";
pub const CANISTERS_BY_TYPE: &str = "type";
pub const MODULE_HASHES: &str = "module-hashes";
pub const TOKENS: &str = "tokens";
pub const MINERS: &str = "miners";
pub const MINERS_BY_TOKEN: &str = "by-token";

/// Client of the canister registration API.
///
/// Every operation performs exactly one request and resolves to an [`ApiResult`];
/// errors never reach the caller.
pub struct RegistrationClient<T: RegistryTransport = HttpTransport> {
    transport: T,
}

impl RegistrationClient<HttpTransport> {
    pub fn new(api_url: ApiUrl) -> Self {
        Self::with_transport(HttpTransport::new(api_url))
    }
}

impl<T: RegistryTransport> RegistrationClient<T> {
    pub fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub async fn register_canister(
        &self,
        principal: impl Into<Principal>,
        canister_id: impl Into<CanisterId>,
        canister_type: CanisterType,
    ) -> RegistrationResult {
        let request = RegistrationRequest {
            principal: principal.into(),
            canister_id: canister_id.into(),
            canister_type,
        };
        self.register(&request).await
    }

    #[instrument(skip_all, fields(canister_id = %request.canister_id))]
    pub async fn register(&self, request: &RegistrationRequest) -> RegistrationResult {
        ApiResult::from(self.try_register(request).await)
    }

    /// Same call as [`Self::register`], keeping the typed error (and the http status of a rejection).
    pub async fn try_register(&self, request: &RegistrationRequest) -> Result<Value, RegistryError> {
        let http_request = RegistryRequest::post([CANISTERS], &request.to_wire())?;
        self.call(http_request).await
    }

    #[instrument(skip_all)]
    pub async fn list_canisters(&self) -> ApiResult {
        self.fetch(RegistryRequest::get([CANISTERS])).await
    }

    #[instrument(skip_all, fields(canister_id = %canister_id))]
    pub async fn get_canister(&self, canister_id: &CanisterId) -> ApiResult {
        let segments = [CANISTERS, canister_id.0.as_str()];
        self.fetch(RegistryRequest::get(segments)).await
    }

    #[instrument(skip_all, fields(canister_type = %api_type))]
    pub async fn list_canisters_by_type(&self, api_type: ApiCanisterType) -> ApiResult {
        let segments = [CANISTERS, CANISTERS_BY_TYPE, api_type.as_str()];
        self.fetch(RegistryRequest::get(segments)).await
    }

    #[instrument(skip_all)]
    pub async fn list_verified_module_hashes(&self) -> ApiResult {
        self.fetch(RegistryRequest::get([MODULE_HASHES])).await
    }

    #[instrument(skip_all)]
    pub async fn list_tokens(&self) -> ApiResult {
        self.fetch(RegistryRequest::get([TOKENS])).await
    }

    #[instrument(skip_all, fields(canister_id = %canister_id))]
    pub async fn get_token(&self, canister_id: &CanisterId) -> ApiResult {
        let segments = [TOKENS, canister_id.0.as_str()];
        self.fetch(RegistryRequest::get(segments)).await
    }

    #[instrument(skip_all)]
    pub async fn list_miners(&self) -> ApiResult {
        self.fetch(RegistryRequest::get([MINERS])).await
    }

    #[instrument(skip_all, fields(canister_id = %canister_id))]
    pub async fn get_miner(&self, canister_id: &CanisterId) -> ApiResult {
        let segments = [MINERS, canister_id.0.as_str()];
        self.fetch(RegistryRequest::get(segments)).await
    }

    #[instrument(skip_all, fields(token_canister_id = %token_canister_id))]
    pub async fn list_miners_by_token(&self, token_canister_id: &CanisterId) -> ApiResult {
        let segments = [MINERS, MINERS_BY_TOKEN, token_canister_id.0.as_str()];
        self.fetch(RegistryRequest::get(segments)).await
    }

    async fn fetch(&self, request: RegistryRequest) -> ApiResult {
        ApiResult::from(self.call(request).await)
    }

    async fn call(&self, request: RegistryRequest) -> Result<Value, RegistryError> {
        let method = request.method.clone();
        let path = request.path();

        let response = match self.transport.send(request).instrument(client_span()).await {
            Ok(response) => response,
            Err(err) => {
                error!("Error calling {} {}: {:?}", method, path, err);
                return Err(RegistryError::from(err));
            }
        };

        if !response.is_ok() {
            error!(
                status = response.status,
                "Error calling {} {}: {}", method, path, response.body
            );
            return Err(RegistryError::Rejected {
                status: response.status,
                body: response.body,
            });
        }

        serde_json::from_str(&response.body).map_err(|err| {
            error!("Error parsing response of {} {}: {}", method, path, err);
            RegistryError::from(err)
        })
    }
}
