pub mod bridge;
pub mod iso_bson_chrono;
pub mod object_id;
pub mod reference;

#[cfg(test)]
pub mod test_fixtures;

/// Generate a new object id in its string form
pub fn new_id() -> String {
    bson::oid::ObjectId::new().to_hex()
}
