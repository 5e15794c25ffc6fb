use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::util::RON;

pub const AWS_PROGRAM: &str = "aws";

pub const DESCRIBE_ADDRESSES_ARGS: [&str; 4] = ["ec2", "describe-addresses", "--output", "json"];

/// Settings forwarded to the AWS CLI. Nothing here changes which address is selected.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct EipLookupConfig {
    pub region:  Option<String>,
    pub profile: Option<String>,
}

impl EipLookupConfig {
    pub fn try_load(prefix: &Path) -> anyhow::Result<EipLookupConfig> {
        let config_path = prefix.join("aws/eip/config.ron");
        if config_path.is_file() {
            tracing::info!("Loading EipLookup config file at {:?}", config_path);
            let config: EipLookupConfig = RON.from_str(&std::fs::read_to_string(config_path)?)?;
            Ok(config)
        } else {
            tracing::debug!("EipLookup config file at {:?} not present, using defaults.", config_path);
            Ok(EipLookupConfig::default())
        }
    }

    /// `aws ec2 describe-addresses` arguments, with `--region`/`--profile` appended when set.
    pub fn command_args(&self) -> Vec<String> {
        let mut args: Vec<String> = DESCRIBE_ADDRESSES_ARGS.iter().map(|s| s.to_string()).collect();

        if let Some(region) = &self.region {
            args.push(String::from("--region"));
            args.push(region.clone());
        }

        if let Some(profile) = &self.profile {
            args.push(String::from("--profile"));
            args.push(profile.clone());
        }

        args
    }
}
