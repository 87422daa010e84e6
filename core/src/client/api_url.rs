use run_mode::ClientRunMode;

pub const DEV_API_URL: &str = "http://localhost:8080";
pub const PROD_API_URL: &str = "http://134.209.193.115:8080";

/// Base endpoint of the registration API.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiUrl {
    url: String,
}

impl ApiUrl {
    pub fn get(run_mode: ClientRunMode) -> Self {
        match run_mode {
            ClientRunMode::Dev => ApiUrl::dev(),
            ClientRunMode::Prod => ApiUrl::prod(),
        }
    }

    pub fn dev() -> Self {
        ApiUrl::custom(DEV_API_URL)
    }

    pub fn prod() -> Self {
        ApiUrl::custom(PROD_API_URL)
    }

    pub fn custom(url: impl Into<String>) -> Self {
        let url: String = url.into();
        ApiUrl {
            url: url.trim_end_matches('/').to_string(),
        }
    }
}

impl Default for ApiUrl {
    fn default() -> Self {
        ApiUrl::prod()
    }
}

impl ApiUrl {
    pub fn get_url(&self) -> &str {
        self.url.as_str()
    }
}

pub mod run_mode {
    use anyhow::{bail, Result};
    use std::str::FromStr;

    pub const DEV: &str = "dev";
    pub const PROD: &str = "prod";

    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
    pub enum ClientRunMode {
        Dev,
        #[default]
        Prod,
    }

    impl ClientRunMode {
        pub fn parse(mode: &str) -> Result<ClientRunMode> {
            match mode {
                DEV => Ok(ClientRunMode::Dev),
                PROD => Ok(ClientRunMode::Prod),
                _ => {
                    bail!("Unknown run mode: {}", mode);
                }
            }
        }
    }

    impl FromStr for ClientRunMode {
        type Err = anyhow::Error;

        fn from_str(mode: &str) -> Result<Self> {
            ClientRunMode::parse(mode)
        }
    }
}
