//! Ids are kept as lower-case hex strings in memory and stored as native
//! object ids. Documents written with string ids are still readable.
use bson::oid::ObjectId;
use bson::Bson;
use serde::de::{Error as DeError, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Canonical form of an id, or `None` if it is not an object id
pub fn canonical(id: &str) -> Option<String> {
    ObjectId::parse_str(id).ok().map(|oid| oid.to_hex())
}

/// Value to match against a stored id
pub fn to_bson(id: &str) -> Bson {
    match ObjectId::parse_str(id) {
        Ok(oid) => Bson::ObjectId(oid),
        Err(_) => Bson::String(id.to_string()),
    }
}

/// Every stored form the given id may take
pub fn any_form(id: &str) -> Vec<Bson> {
    match ObjectId::parse_str(id) {
        Ok(oid) => vec![Bson::ObjectId(oid), Bson::String(oid.to_hex())],
        Err(_) => vec![Bson::String(id.to_string())],
    }
}

pub fn serialize<S>(value: &str, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match ObjectId::parse_str(value) {
        Ok(oid) => oid.serialize(serializer),
        Err(_) => serializer.serialize_str(value),
    }
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(ObjectIdVisitor)
}

struct ObjectIdVisitor;

impl<'de> Visitor<'de> for ObjectIdVisitor {
    type Value = String;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an object id or its hex string")
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: DeError,
    {
        Ok(canonical(value).unwrap_or_else(|| value.to_string()))
    }

    fn visit_map<M>(self, map: M) -> Result<Self::Value, M::Error>
    where
        M: MapAccess<'de>,
    {
        // { "$oid": ... } sub-document
        ObjectId::deserialize(serde::de::value::MapAccessDeserializer::new(map))
            .map(|oid| oid.to_hex())
    }
}
