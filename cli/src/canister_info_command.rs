use anyhow::Result;
use canister_registry_core::{ApiCanisterType, CanisterId};

use crate::base_command::BaseCommand;

/// Read-only queries against the registration API
pub struct CanisterInfoCommand {
    pub base: BaseCommand,
}

impl CanisterInfoCommand {
    pub fn new(base: BaseCommand) -> Self {
        Self { base }
    }

    pub async fn show_canisters(&self) -> Result<bool> {
        let result = self.base.client().list_canisters().await;
        self.base.report(&result)
    }

    pub async fn show_canister(&self, canister_id: &CanisterId) -> Result<bool> {
        let result = self.base.client().get_canister(canister_id).await;
        self.base.report(&result)
    }

    pub async fn show_canisters_by_type(&self, api_type: ApiCanisterType) -> Result<bool> {
        let result = self.base.client().list_canisters_by_type(api_type).await;
        self.base.report(&result)
    }

    pub async fn show_module_hashes(&self) -> Result<bool> {
        let result = self.base.client().list_verified_module_hashes().await;
        self.base.report(&result)
    }

    pub async fn show_tokens(&self) -> Result<bool> {
        let result = self.base.client().list_tokens().await;
        self.base.report(&result)
    }

    pub async fn show_token(&self, canister_id: &CanisterId) -> Result<bool> {
        let result = self.base.client().get_token(canister_id).await;
        self.base.report(&result)
    }

    pub async fn show_miners(&self) -> Result<bool> {
        let result = self.base.client().list_miners().await;
        self.base.report(&result)
    }

    pub async fn show_miner(&self, canister_id: &CanisterId) -> Result<bool> {
        let result = self.base.client().get_miner(canister_id).await;
        self.base.report(&result)
    }

    pub async fn show_miners_by_token(&self, token_canister_id: &CanisterId) -> Result<bool> {
        let result = self.base.client().list_miners_by_token(token_canister_id).await;
        self.base.report(&result)
    }
}
