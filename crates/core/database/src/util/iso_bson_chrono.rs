use bson::serde_helpers::chrono_datetime_as_bson_datetime;
use chrono::{DateTime, Utc};
use serde::de::{Error as DeError, Visitor};
use serde::{Deserializer, Serializer};
use std::fmt;

pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    // Always store in Mongo as a real date
    chrono_datetime_as_bson_datetime::serialize(value, serializer)
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(DateTimeFallbackVisitor)
}

struct DateTimeFallbackVisitor;

impl<'de> Visitor<'de> for DateTimeFallbackVisitor {
    type Value = DateTime<Utc>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an ISO8601 string, a BSON date or epoch milliseconds")
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: DeError,
    {
        value.parse::<DateTime<Utc>>().map_err(DeError::custom)
    }

    fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
    where
        E: DeError,
    {
        DateTime::<Utc>::from_timestamp_millis(value)
            .ok_or_else(|| DeError::custom("timestamp out of range"))
    }

    fn visit_map<M>(self, map: M) -> Result<Self::Value, M::Error>
    where
        M: serde::de::MapAccess<'de>,
    {
        // { "$date": ... } sub-document
        chrono_datetime_as_bson_datetime::deserialize(
            serde::de::value::MapAccessDeserializer::new(map),
        )
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, TimeZone, Utc};

    #[derive(Serialize, Deserialize)]
    struct Stamp {
        #[serde(with = "super")]
        at: DateTime<Utc>,
    }

    #[test]
    fn stored_as_bson_date() {
        let at = Utc.with_ymd_and_hms(2026, 10, 16, 9, 30, 0).unwrap();
        let document = bson::to_document(&Stamp { at }).unwrap();
        assert!(matches!(document.get("at"), Some(bson::Bson::DateTime(_))));

        let stamp: Stamp = bson::from_document(document).unwrap();
        assert_eq!(stamp.at, at);
    }

    #[test]
    fn accepts_iso_strings() {
        let stamp: Stamp =
            serde_json::from_str(r#"{ "at": "2026-10-16T09:30:00Z" }"#).unwrap();
        assert_eq!(
            stamp.at,
            Utc.with_ymd_and_hms(2026, 10, 16, 9, 30, 0).unwrap()
        );
    }
}
