use anyhow::Result;
use canister_registry_core::{CanisterId, CanisterType, Principal};

use crate::base_command::BaseCommand;

pub struct RegisterCommand {
    pub base: BaseCommand,
    pub principal: Principal,
    pub canister_id: CanisterId,
    pub canister_type: CanisterType,
}

impl RegisterCommand {
    pub async fn execute(&self) -> Result<bool> {
        let result = self
            .base
            .client()
            .register_canister(
                self.principal.clone(),
                self.canister_id.clone(),
                self.canister_type,
            )
            .await;

        self.base.report(&result)
    }
}
