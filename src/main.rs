use coffee_shop_client::api::{DrinksApi, DrinksClient};
use coffee_shop_client::auth::AuthSession;
use coffee_shop_client::config::{DeploymentTarget, SettingsProvider};
use std::{env, process};
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt};

/// Page the identity provider should return to after login.
const DEFAULT_CALLBACK_PATH: &str = "/tabs/user-page";

/// Permissions checked after reading a callback URL.
const DRINK_PERMISSIONS: [&str; 5] = [
    "get:drinks",
    "get:drinks-detail",
    "post:drinks",
    "patch:drinks",
    "delete:drinks",
];

struct Args {
    target: Option<String>,
    config: Option<String>,
    callback_path: String,
    callback: Option<String>,
    ping: bool,
}

fn parse_args() -> Args {
    let mut args = Args {
        target: None,
        config: None,
        callback_path: DEFAULT_CALLBACK_PATH.to_string(),
        callback: None,
        ping: false,
    };

    for arg in env::args().skip(1) {
        if let Some(value) = arg.strip_prefix("--target=") {
            args.target = Some(value.to_string());
        } else if let Some(value) = arg.strip_prefix("--config=") {
            args.config = Some(value.to_string());
        } else if let Some(value) = arg.strip_prefix("--callback-path=") {
            args.callback_path = value.to_string();
        } else if let Some(value) = arg.strip_prefix("--callback=") {
            args.callback = Some(value.to_string());
        } else if arg == "--ping" {
            args.ping = true;
        } else {
            eprintln!("ignoring unknown argument: {}", arg);
        }
    }

    args
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();
}

fn load_settings(args: &Args) -> Result<SettingsProvider, String> {
    let target = match args.target.as_deref() {
        Some(name) => name.parse::<DeploymentTarget>().map_err(|e| e.to_string())?,
        None => DeploymentTarget::default(),
    };

    let provider = match args.config.as_deref() {
        Some(path) => SettingsProvider::load(target, path),
        None => SettingsProvider::for_target(target),
    };
    provider.map_err(|e| e.to_string())
}

/// Fetch the drinks list once to check the API server answers.
async fn ping(api: &dyn DrinksApi, token: Option<&str>) -> bool {
    match api.list_drinks(token).await {
        Ok(drinks) => {
            info!(drinks = drinks.len(), "api server reachable");
            true
        }
        Err(e) => {
            error!(error = %e, "api server unreachable");
            false
        }
    }
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    init_tracing();

    let args = parse_args();

    let provider = match load_settings(&args) {
        Ok(provider) => provider,
        Err(e) => {
            eprintln!("Failed to load settings: {}", e);
            process::exit(1);
        }
    };
    let settings = provider.shared();

    let mut session = AuthSession::new(settings.auth0.clone());
    println!("{}", session.login_link(&args.callback_path));

    if let Some(callback) = args.callback.as_deref() {
        match session.check_token_fragment(callback) {
            Ok(true) => {
                for permission in DRINK_PERMISSIONS {
                    info!(permission, granted = session.can(permission), "permission");
                }
            }
            Ok(false) => warn!("callback url carries no access token"),
            Err(e) => {
                error!(error = %e, "access token rejected");
                process::exit(1);
            }
        }
    }

    if args.ping {
        let client = match DrinksClient::from_settings(&settings) {
            Ok(client) => client,
            Err(e) => {
                eprintln!("Failed to create api client: {}", e);
                process::exit(1);
            }
        };

        if !ping(&client, session.token()).await {
            process::exit(1);
        }
    }
}
