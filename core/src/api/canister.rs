use std::fmt;
use std::str::FromStr;

use anyhow::bail;
use derive_more::{Display, From};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Hash, Display, From, Serialize, Deserialize)]
pub struct Principal(pub String);

impl From<&str> for Principal {
    fn from(principal: &str) -> Self {
        Principal::from(String::from(principal))
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Display, From, Serialize, Deserialize)]
pub struct CanisterId(pub String);

impl From<&str> for CanisterId {
    fn from(canister_id: &str) -> Self {
        CanisterId::from(String::from(canister_id))
    }
}

/////////////////// CanisterType ///////////////////

pub const TOKEN_BACKEND: &str = "token_backend";
pub const TOKEN: &str = "token";
pub const MINER: &str = "miner";

/// Canister category as the caller knows it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CanisterType {
    TokenBackend,
    Miner,
}

impl CanisterType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CanisterType::TokenBackend => TOKEN_BACKEND,
            CanisterType::Miner => MINER,
        }
    }
}

impl fmt::Display for CanisterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CanisterType {
    type Err = anyhow::Error;

    fn from_str(canister_type: &str) -> Result<Self, Self::Err> {
        match canister_type {
            TOKEN_BACKEND => Ok(CanisterType::TokenBackend),
            MINER => Ok(CanisterType::Miner),
            _ => {
                bail!("Unknown canister type: {}", canister_type);
            }
        }
    }
}

/// Canister category as the registration API names it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiCanisterType {
    Token,
    Miner,
}

impl ApiCanisterType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApiCanisterType::Token => TOKEN,
            ApiCanisterType::Miner => MINER,
        }
    }
}

impl From<CanisterType> for ApiCanisterType {
    fn from(canister_type: CanisterType) -> Self {
        match canister_type {
            CanisterType::TokenBackend => ApiCanisterType::Token,
            CanisterType::Miner => ApiCanisterType::Miner,
        }
    }
}

impl fmt::Display for ApiCanisterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ApiCanisterType {
    type Err = anyhow::Error;

    fn from_str(api_type: &str) -> Result<Self, Self::Err> {
        match api_type {
            TOKEN => Ok(ApiCanisterType::Token),
            MINER => Ok(ApiCanisterType::Miner),
            _ => {
                bail!("Unknown api canister type: {}", api_type);
            }
        }
    }
}

/////////////////// Registration ///////////////////

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegistrationRequest {
    pub principal: Principal,
    pub canister_id: CanisterId,
    pub canister_type: CanisterType,
}

impl RegistrationRequest {
    pub fn to_wire(&self) -> WireBody {
        WireBody::from(self)
    }
}

/// Json body of `POST /canisters`.
///
/// `module_hash` is reserved by the registration API and always sent as `null`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireBody {
    pub principal: Principal,
    pub canister_id: CanisterId,
    pub canister_type: ApiCanisterType,
    pub module_hash: Option<String>,
}

impl From<&RegistrationRequest> for WireBody {
    fn from(request: &RegistrationRequest) -> Self {
        Self {
            principal: request.principal.clone(),
            canister_id: request.canister_id.clone(),
            canister_type: ApiCanisterType::from(request.canister_type),
            module_hash: None,
        }
    }
}
