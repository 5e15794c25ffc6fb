use aws_eip_lookup_core::{
    address::AddressRecord, config::EipLookupConfig, inventory::AwsCliInventory, lookup::lookup, tags::TagFilter,
};
use tracing_subscriber::EnvFilter;

fn run() -> anyhow::Result<AddressRecord> {
    let config = EipLookupConfig::try_load(&std::env::current_dir()?)?;
    let inventory = AwsCliInventory::from_config(&config);

    Ok(lookup(&inventory, &TagFilter::default())?)
}

pub fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    match run() {
        Ok(record) => {
            println!("{}", record.to_json()?);
            Ok(())
        }
        Err(e) => {
            tracing::error!("get-eip failed: {:#}", e);
            Err(e)
        }
    }
}
