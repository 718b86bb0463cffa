use std::env;

pub const DEFAULT_REGION: &str = "us-east-1";
/// SSM namespace searched for the token dispenser ARN when no key is given.
pub const DEFAULT_SSM_PATH: &str = "/service/token-dispenser";
pub const DEFAULT_MAX_PAGES: usize = 50;

#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub region: String,
    pub default_path: String,
    pub with_decryption: bool,
    /// Upper bound on continuation tokens followed during a path listing.
    pub max_pages: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            region: String::from(DEFAULT_REGION),
            default_path: String::from(DEFAULT_SSM_PATH),
            with_decryption: false,
            max_pages: DEFAULT_MAX_PAGES,
        }
    }
}

impl ClientConfig {
    /// Region from `AWS_REGION` / `AWS_DEFAULT_REGION`, namespace from `TDS_DEFAULT_SSM_PATH`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<L: Fn(&str) -> Option<String>>(lookup: L) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = ClientConfig::default();
        ClientConfig {
            region: non_empty("AWS_REGION")
                .or_else(|| non_empty("AWS_DEFAULT_REGION"))
                .unwrap_or(defaults.region),
            default_path: non_empty("TDS_DEFAULT_SSM_PATH").unwrap_or(defaults.default_path),
            ..defaults
        }
    }
}
