use crate::{
    address::{AddressCollection, AddressRecord},
    error::LookupError,
    inventory::AddressInventory,
    tags::TagFilter,
};

/// Records `filter` accepts, in inventory order.
pub fn matching<'a, 'f>(
    collection: &'a AddressCollection,
    filter: &'f TagFilter,
) -> impl Iterator<Item = &'a AddressRecord> {
    collection.addresses.iter().filter(move |record| filter.matches(record))
}

pub fn find_first<'a>(collection: &'a AddressCollection, filter: &TagFilter) -> Option<&'a AddressRecord> {
    matching(collection, filter).next()
}

/// First matching record. Later matches are ignored.
pub fn select<'a>(collection: &'a AddressCollection, filter: &TagFilter) -> Result<&'a AddressRecord, LookupError> {
    let Some(record) = find_first(collection, filter) else {
        return Err(LookupError::NotFound {
            key:   filter.key.clone(),
            value: filter.value.clone(),
        });
    };

    let ignored = matching(collection, filter).count() - 1;
    if ignored > 0 {
        tracing::warn!(
            "{} further address allocations are tagged {}={}, using the first one",
            ignored,
            filter.key,
            filter.value
        );
    }

    Ok(record)
}

/// Queries `inventory` once and returns the first allocation tagged per `filter`.
pub fn lookup(inventory: &impl AddressInventory, filter: &TagFilter) -> Result<AddressRecord, LookupError> {
    let collection = inventory.describe_addresses()?;

    let record = select(&collection, filter)?.clone();
    tracing::info!(
        "Found address allocation {} ({}) tagged {}={}",
        record.allocation_id().unwrap_or("<unknown>"),
        record.public_ip().unwrap_or("<no public ip>"),
        filter.key,
        filter.value
    );

    Ok(record)
}
