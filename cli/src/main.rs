mod base_command;
mod canister_info_command;
mod cli_format;
mod register_command;

use std::process::ExitCode;

use anyhow::Result;
use canister_registry_core::client::api_url::run_mode::ClientRunMode;
use canister_registry_core::registry_tracing::cli_span;
use canister_registry_core::{ApiCanisterType, ApiUrl, CanisterId, CanisterType, Principal};
use clap::{Parser, Subcommand};
use tracing::Instrument;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use crate::base_command::BaseCommand;
use crate::canister_info_command::CanisterInfoCommand;
use crate::cli_format::CliOutputFormat;
use crate::register_command::RegisterCommand;

#[derive(Debug, Parser)]
#[command(about = "Canister registration API client", long_about = None)]
struct CmdLine {
    /// Selects the default api url: dev or prod
    #[arg(long, default_value = "prod")]
    run_mode: ClientRunMode,

    /// Base url of the registration API, overrides --run-mode
    #[arg(long)]
    api_url: Option<String>,

    /// Output format: json or yaml
    #[arg(long, default_value = "json")]
    format: CliOutputFormat,

    #[command(subcommand)]
    command: Command,
}

impl CmdLine {
    fn api_url(&self) -> ApiUrl {
        match &self.api_url {
            Some(url) => ApiUrl::custom(url.as_str()),
            None => ApiUrl::get(self.run_mode),
        }
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Register a canister
    Register {
        #[arg(long)]
        principal: String,
        #[arg(long)]
        canister_id: String,
        /// token_backend or miner
        #[arg(long)]
        canister_type: CanisterType,
    },
    /// List registered canisters
    List,
    /// Show one registered canister
    Get {
        #[arg(long)]
        canister_id: String,
    },
    /// List registered canisters of one type
    ListByType {
        /// token or miner
        #[arg(long)]
        canister_type: ApiCanisterType,
    },
    /// List verified module hashes
    ModuleHashes,
    /// List registered token canisters
    Tokens,
    /// Show one registered token canister
    Token {
        #[arg(long)]
        canister_id: String,
    },
    /// List registered miner canisters
    Miners,
    /// Show one registered miner canister
    Miner {
        #[arg(long)]
        canister_id: String,
    },
    /// List miners attached to a token canister
    MinersByToken {
        #[arg(long)]
        token_canister_id: String,
    },
}

fn init_tracing() -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"))
        .add_directive("hyper=warn".parse()?)
        .add_directive("reqwest=info".parse()?);

    let subscriber = FmtSubscriber::builder()
        .compact()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    Ok(())
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    init_tracing()?;

    let args = CmdLine::parse();
    let base = BaseCommand::new(args.api_url(), args.format);

    let success = run(base, args.command).instrument(cli_span()).await?;
    Ok(exit_code(success))
}

fn exit_code(success: bool) -> ExitCode {
    if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

async fn run(base: BaseCommand, command: Command) -> Result<bool> {
    match command {
        Command::Register {
            principal,
            canister_id,
            canister_type,
        } => {
            let register_cmd = RegisterCommand {
                base,
                principal: Principal::from(principal),
                canister_id: CanisterId::from(canister_id),
                canister_type,
            };
            register_cmd.execute().await
        }
        Command::List => CanisterInfoCommand::new(base).show_canisters().await,
        Command::Get { canister_id } => {
            let canister_id = CanisterId::from(canister_id);
            CanisterInfoCommand::new(base).show_canister(&canister_id).await
        }
        Command::ListByType { canister_type } => {
            CanisterInfoCommand::new(base)
                .show_canisters_by_type(canister_type)
                .await
        }
        Command::ModuleHashes => CanisterInfoCommand::new(base).show_module_hashes().await,
        Command::Tokens => CanisterInfoCommand::new(base).show_tokens().await,
        Command::Token { canister_id } => {
            let canister_id = CanisterId::from(canister_id);
            CanisterInfoCommand::new(base).show_token(&canister_id).await
        }
        Command::Miners => CanisterInfoCommand::new(base).show_miners().await,
        Command::Miner { canister_id } => {
            let canister_id = CanisterId::from(canister_id);
            CanisterInfoCommand::new(base).show_miner(&canister_id).await
        }
        Command::MinersByToken { token_canister_id } => {
            let token_canister_id = CanisterId::from(token_canister_id);
            CanisterInfoCommand::new(base)
                .show_miners_by_token(&token_canister_id)
                .await
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use axum::Router;
    use axum::http::{StatusCode, Uri};
    use canister_registry_core::client::api_url::{DEV_API_URL, PROD_API_URL};
    use tokio::net::TcpListener;

    /// Serves every path with a fixed reply and returns the base url
    async fn start_api(status: StatusCode, body: &'static str) -> ApiUrl {
        let app = Router::new().fallback(move |uri: Uri| async move {
            if uri.path().starts_with("/missing") {
                (StatusCode::NOT_FOUND, "not found")
            } else {
                (status, body)
            }
        });

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        ApiUrl::custom(format!("http://{addr}"))
    }

    fn register_command() -> Command {
        Command::Register {
            principal: String::from("abc-principal"),
            canister_id: String::from("xyz-canister"),
            canister_type: CanisterType::TokenBackend,
        }
    }

    #[test]
    fn test_parse_register() {
        let args = CmdLine::try_parse_from([
            "canister-registry",
            "register",
            "--principal",
            "abc-principal",
            "--canister-id",
            "xyz-canister",
            "--canister-type",
            "token_backend",
        ])
        .unwrap();

        assert_eq!(args.api_url().get_url(), PROD_API_URL);
        assert_eq!(args.format, CliOutputFormat::Json);

        match args.command {
            Command::Register {
                principal,
                canister_id,
                canister_type,
            } => {
                assert_eq!(principal, "abc-principal");
                assert_eq!(canister_id, "xyz-canister");
                assert_eq!(canister_type, CanisterType::TokenBackend);
            }
            _ => panic!("Expected Register command"),
        }
    }

    #[test]
    fn test_register_rejects_api_type_name() {
        let result = CmdLine::try_parse_from([
            "canister-registry",
            "register",
            "--principal",
            "p",
            "--canister-id",
            "c",
            "--canister-type",
            "token",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_api_url_selection() {
        let args = CmdLine::try_parse_from(["canister-registry", "--run-mode", "dev", "list"]).unwrap();
        assert_eq!(args.api_url().get_url(), DEV_API_URL);

        let args = CmdLine::try_parse_from([
            "canister-registry",
            "--run-mode",
            "dev",
            "--api-url",
            "http://127.0.0.1:3000/",
            "--format",
            "yaml",
            "module-hashes",
        ])
        .unwrap();
        assert_eq!(args.api_url().get_url(), "http://127.0.0.1:3000");
        assert_eq!(args.format, CliOutputFormat::Yaml);
        assert!(matches!(args.command, Command::ModuleHashes));
    }

    #[test]
    fn test_parse_list_by_type() {
        let args = CmdLine::try_parse_from([
            "canister-registry",
            "list-by-type",
            "--canister-type",
            "miner",
        ])
        .unwrap();

        match args.command {
            Command::ListByType { canister_type } => {
                assert_eq!(canister_type, ApiCanisterType::Miner)
            }
            _ => panic!("Expected ListByType command"),
        }
    }

    #[test]
    fn test_parse_miners_by_token() {
        let args = CmdLine::try_parse_from([
            "canister-registry",
            "miners-by-token",
            "--token-canister-id",
            "tok",
        ])
        .unwrap();

        match args.command {
            Command::MinersByToken { token_canister_id } => assert_eq!(token_canister_id, "tok"),
            _ => panic!("Expected MinersByToken command"),
        }

        let args = CmdLine::try_parse_from(["canister-registry", "tokens"]).unwrap();
        assert!(matches!(args.command, Command::Tokens));
    }

    #[test]
    fn test_exit_code() {
        assert_eq!(
            format!("{:?}", exit_code(true)),
            format!("{:?}", ExitCode::SUCCESS)
        );
        assert_eq!(
            format!("{:?}", exit_code(false)),
            format!("{:?}", ExitCode::FAILURE)
        );
    }

    #[tokio::test]
    async fn test_run_register_success() {
        let api_url = start_api(StatusCode::OK, r#"{"id": 42}"#).await;
        let base = BaseCommand::new(api_url, CliOutputFormat::Json);

        let success = run(base, register_command()).await.unwrap();
        assert!(success);
    }

    #[tokio::test]
    async fn test_run_register_failure() {
        let api_url = start_api(StatusCode::INTERNAL_SERVER_ERROR, "server error").await;
        let base = BaseCommand::new(api_url, CliOutputFormat::Yaml);

        let success = run(base, register_command()).await.unwrap();
        assert!(!success);
    }

    #[tokio::test]
    async fn test_run_register_server_down() {
        let addr = {
            let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
            listener.local_addr().unwrap()
        };
        let api_url = ApiUrl::custom(format!("http://{addr}"));
        let base = BaseCommand::new(api_url, CliOutputFormat::Json);

        let success = run(base, register_command()).await.unwrap();
        assert!(!success);
    }

    #[tokio::test]
    async fn test_run_read_commands() {
        let api_url = start_api(StatusCode::OK, r#"{"success":true,"data":[]}"#).await;

        let commands = vec![
            Command::List,
            Command::Get {
                canister_id: String::from("c"),
            },
            Command::ListByType {
                canister_type: ApiCanisterType::Token,
            },
            Command::ModuleHashes,
            Command::Tokens,
            Command::Token {
                canister_id: String::from("tok"),
            },
            Command::Miners,
            Command::Miner {
                canister_id: String::from("min"),
            },
            Command::MinersByToken {
                token_canister_id: String::from("tok"),
            },
        ];

        for command in commands {
            let base = BaseCommand::new(api_url.clone(), CliOutputFormat::Json);
            assert!(run(base, command).await.unwrap());
        }
    }

    #[tokio::test]
    async fn test_run_get_not_found() {
        let api_url = start_api(StatusCode::OK, "{}").await;
        let missing = ApiUrl::custom(format!("{}/missing", api_url.get_url()));
        let base = BaseCommand::new(missing, CliOutputFormat::Json);

        let command = Command::Get {
            canister_id: String::from("c"),
        };
        let success = run(base, command).await.unwrap();
        assert!(!success);
    }
}
