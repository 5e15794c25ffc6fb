use std::process::Command;

use crate::{
    address::AddressCollection,
    config::{AWS_PROGRAM, EipLookupConfig},
    error::LookupError,
};

/// Source of the current Elastic IP allocations.
pub trait AddressInventory {
    fn describe_addresses(&self) -> Result<AddressCollection, LookupError>;
}

/// Runs the AWS CLI and decodes its `describe-addresses` output.
/// Credentials and region resolution are left entirely to the CLI.
#[derive(Debug, Clone)]
pub struct AwsCliInventory {
    pub program: String,
    pub args:    Vec<String>,
}

impl AwsCliInventory {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        AwsCliInventory {
            program: program.into(),
            args,
        }
    }

    pub fn from_config(config: &EipLookupConfig) -> Self {
        AwsCliInventory::new(AWS_PROGRAM, config.command_args())
    }

    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn command_error(&self, reason: impl Into<String>) -> LookupError {
        LookupError::ExternalCommand {
            command: self.command_line(),
            reason:  reason.into(),
        }
    }
}

impl AddressInventory for AwsCliInventory {
    fn describe_addresses(&self) -> Result<AddressCollection, LookupError> {
        tracing::debug!("Running `{}`", self.command_line());

        let output = Command::new(&self.program)
            .args(&self.args)
            .output()
            .map_err(|e| self.command_error(e.to_string()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            tracing::error!("`{}` exited with {}: {}", self.command_line(), output.status, stderr.trim());
            return Err(self.command_error(format!("{}: {}", output.status, stderr.trim())));
        }

        let stdout = String::from_utf8(output.stdout).map_err(|e| LookupError::Parse(e.to_string()))?;

        let collection = AddressCollection::from_json(&stdout)?;
        tracing::debug!("Inventory returned {} address allocations", collection.len());

        Ok(collection)
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    fn sh(script: &str) -> AwsCliInventory {
        AwsCliInventory::new("sh", vec![String::from("-c"), String::from(script)])
    }

    #[test]
    fn decodes_command_stdout() {
        let inventory = sh(r#"printf '%s' '{"Addresses":[{"AllocationId":"eip-1","Tags":null}]}'"#);

        let collection = inventory.describe_addresses().unwrap();

        assert_eq!(collection.len(), 1);
        assert_eq!(collection.addresses[0].allocation_id(), Some("eip-1"));
    }

    #[test]
    fn non_zero_exit_is_a_command_error() {
        let inventory = sh("echo 'Unable to locate credentials' >&2; exit 253");

        match inventory.describe_addresses() {
            Err(LookupError::ExternalCommand { command, reason }) => {
                assert!(command.starts_with("sh -c"));
                assert!(reason.contains("Unable to locate credentials"), "{reason}");
            }
            other => panic!("expected command error, got {other:?}"),
        }
    }

    #[test]
    fn missing_program_is_a_command_error() {
        let inventory = AwsCliInventory::new("aws-eip-lookup-no-such-program", vec![]);

        assert!(matches!(
            inventory.describe_addresses(),
            Err(LookupError::ExternalCommand { .. })
        ));
    }

    #[test]
    fn garbage_output_is_a_parse_error() {
        let inventory = sh("echo 'ADDRESSES 3.14.15.92 eipalloc-0abc'");

        assert!(matches!(inventory.describe_addresses(), Err(LookupError::Parse(_))));
    }

    #[test]
    fn from_config_forwards_region_and_profile() {
        let config = EipLookupConfig {
            region: Some(String::from("us-west-2")),
            profile: Some(String::from("games")),
        };

        let inventory = AwsCliInventory::from_config(&config);

        assert_eq!(
            inventory.command_line(),
            "aws ec2 describe-addresses --output json --region us-west-2 --profile games"
        );
    }
}
