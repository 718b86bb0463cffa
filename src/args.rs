use structopt::StructOpt;

#[derive(StructOpt, Debug)]
#[structopt(name = "token_dispenser",
    about = "Token Dispenser Client - Requests a short-lived token from the Token Dispenser Lambda found through AWS SSM Parameter Store."
)]
pub struct Opt {
    /// AWS Region, taken from AWS_REGION / AWS_DEFAULT_REGION when absent
    #[structopt(short = "r", long = "region")]
    pub region: Option<String>,
    /// Decrypt Parameter Value
    #[structopt(short = "d", long = "decrypt")]
    pub decrypt: bool,
    /// SSM Parameter Name holding the Token Dispenser ARN, default path lookup if absent
    #[structopt(short = "k", long = "ssm-key")]
    pub ssm_key: Option<String>,
    /// SSM Path searched when no key is given
    #[structopt(short = "p", long = "default-path")]
    pub default_path: Option<String>,
    /// Minimum seconds the returned token must stay alive
    #[structopt(short = "m", long = "minimum-alive-secs")]
    pub minimum_alive_secs: Option<f64>,
    /// Print failures as {"statusCode", "body"} JSON on stdout
    #[structopt(short = "e", long = "envelope")]
    pub envelope: bool,
    /// Caller defined Client Id
    pub client_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_command_line() {
        let opt = Opt::from_iter(vec!["token_dispenser", "-r", "us-west-2", "-k", "/service/token-dispenser/sndbx", "-m", "120", "--envelope", "davidyen"]);
        assert_eq!(opt.region.as_deref(), Some("us-west-2"));
        assert_eq!(opt.ssm_key.as_deref(), Some("/service/token-dispenser/sndbx"));
        assert_eq!(opt.minimum_alive_secs, Some(120.0));
        assert!(opt.envelope);
        assert!(!opt.decrypt);
        assert_eq!(opt.client_id, "davidyen");
    }

    #[test]
    fn client_id_is_required() {
        assert!(Opt::from_iter_safe(vec!["token_dispenser"]).is_err());
    }
}
