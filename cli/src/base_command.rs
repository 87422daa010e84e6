use std::io::{self, Write};

use anyhow::Result;
use canister_registry_core::{ApiResult, ApiUrl, RegistrationClient};

use crate::cli_format::CliOutputFormat;

pub struct BaseCommand {
    pub api_url: ApiUrl,
    pub format: CliOutputFormat,
}

impl BaseCommand {
    pub fn new(api_url: ApiUrl, format: CliOutputFormat) -> Self {
        Self { api_url, format }
    }

    pub fn client(&self) -> RegistrationClient {
        RegistrationClient::new(self.api_url.clone())
    }

    /// Prints the result to stdout and tells whether the call succeeded
    pub fn report(&self, result: &ApiResult) -> Result<bool> {
        self.report_to(&mut io::stdout().lock(), result)
    }

    pub fn report_to(&self, out: &mut impl Write, result: &ApiResult) -> Result<bool> {
        writeln!(out, "{}", self.format.render(result)?)?;
        Ok(result.is_success())
    }
}
