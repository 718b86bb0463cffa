use std::process;

use structopt::StructOpt;
use tracing_subscriber::EnvFilter;

use token_dispenser_client::{ClientConfig, TokenDispenserClient};

use args::*;

mod args;

/// Token Dispenser Client
/// Command Line
/// --region, -r => Set region for SSM and Lambda
/// --decrypt, -d => Decrypt parameter value
/// --ssm-key, -k KEY => SSM name holding the Token Dispenser ARN
/// --default-path, -p PATH => SSM path searched when no key is given
/// --minimum-alive-secs, -m SECS => Minimum alive seconds for the token (default 300)
/// --envelope, -e => Print failures as {"statusCode", "body"} JSON
/// CLIENT_ID => Caller defined client id
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let clap_options = Opt::clap().get_matches_safe();

    // Will exit with error code 1 even for VersionDisplayed and HelpDisplayed
    let options = match clap_options {
        Ok(matches) => Opt::from_clap(&matches),
        Err(err) => {
            println!("{}", err.message);
            process::exit(1)
        }
    };

    let mut config = ClientConfig::from_env();
    if let Some(region) = options.region {
        config.region = region;
    }
    if let Some(path) = options.default_path {
        config.default_path = path;
    }
    config.with_decryption = options.decrypt;

    let client = TokenDispenserClient::from_config(&config);
    match client.get_token(&options.client_id, options.minimum_alive_secs, options.ssm_key.as_deref()) {
        Ok(body) => println!("{}", body),
        Err(err) if options.envelope => {
            println!("{}", err.envelope().to_json());
            process::exit(1)
        }
        Err(err) => {
            eprintln!("{}", err);
            process::exit(1)
        }
    }
}
