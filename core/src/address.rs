use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::{
    error::LookupError,
    tags::{Tag, Tags},
};

/// One entry of `Addresses` as reported by `ec2 describe-addresses`.
///
/// Only `Tags` is interpreted. Every field, `Tags` included, is kept in its
/// original order so the record serializes back out exactly as it came in.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct AddressRecord {
    fields: Map<String, Value>,
    tags:   Tags,
}

impl TryFrom<Map<String, Value>> for AddressRecord {
    type Error = serde_json::Error;

    fn try_from(fields: Map<String, Value>) -> Result<Self, Self::Error> {
        let tags = match fields.get("Tags") {
            None | Some(Value::Null) => Tags::default(),
            Some(tags) => Tags::from(Some(Vec::<Tag>::deserialize(tags)?)),
        };

        Ok(AddressRecord { fields, tags })
    }
}

impl Serialize for AddressRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.fields.serialize(serializer)
    }
}

impl AddressRecord {
    pub fn tags(&self) -> &Tags {
        &self.tags
    }

    pub fn allocation_id(&self) -> Option<&str> {
        self.fields.get("AllocationId").and_then(Value::as_str)
    }

    pub fn public_ip(&self) -> Option<&str> {
        self.fields.get("PublicIp").and_then(Value::as_str)
    }

    pub fn to_json(&self) -> Result<String, LookupError> {
        Ok(serde_json::to_string(self)?)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AddressCollection {
    #[serde(rename = "Addresses")]
    pub addresses: Vec<AddressRecord>,
}

impl AddressCollection {
    pub fn from_json(s: &str) -> Result<Self, LookupError> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn len(&self) -> usize {
        self.addresses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.addresses.is_empty()
    }
}
