use tracing::{info_span, Span};

pub const CLIENT_SPAN: &str = "RegistryClient";
pub const CLI_SPAN: &str = "RegistryCli";

pub fn client_span() -> Span {
    info_span!(CLIENT_SPAN)
}

pub fn cli_span() -> Span {
    info_span!(CLI_SPAN)
}
