//! Lenient field decoders for request bodies and query strings.
//!
//! Clients send identifiers and prices either as JSON numbers or as strings
//! (query strings only ever carry strings). An empty string counts as absent,
//! and so does an id of `0`.

use serde::{Deserialize, Deserializer, de::Error};

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Scalar {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

fn scalar<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Scalar>, D::Error> {
    Ok(match Option::<Scalar>::deserialize(deserializer)? {
        Some(Scalar::Text(s)) if s.trim().is_empty() => None,
        other => other,
    })
}

pub fn id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i64>, D::Error> {
    let id = match scalar(deserializer)? {
        None => None,
        Some(Scalar::Int(v)) => Some(v),
        Some(Scalar::Text(s)) => Some(
            s.trim()
                .parse::<i64>()
                .map_err(|_| D::Error::custom(format!("invalid id '{s}'")))?,
        ),
        Some(other) => return Err(D::Error::custom(format!("invalid id {other:?}"))),
    };
    Ok(id.filter(|&v| v != 0))
}

pub fn number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    match scalar(deserializer)? {
        None => Ok(None),
        Some(Scalar::Int(v)) => Ok(Some(v as f64)),
        Some(Scalar::Float(v)) => Ok(Some(v)),
        Some(Scalar::Text(s)) => s
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| D::Error::custom(format!("invalid number '{s}'"))),
        Some(Scalar::Bool(b)) => Err(D::Error::custom(format!("invalid number {b}"))),
    }
}

/// Accepts `true`/`false`, `0`/`1` or their string forms.
pub fn flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<bool>, D::Error> {
    match scalar(deserializer)? {
        None => Ok(None),
        Some(Scalar::Bool(b)) => Ok(Some(b)),
        Some(Scalar::Int(v)) => Ok(Some(v != 0)),
        Some(Scalar::Float(v)) => Ok(Some(v != 0.0)),
        Some(Scalar::Text(s)) => match s.trim() {
            "1" | "true" => Ok(Some(true)),
            "0" | "false" => Ok(Some(false)),
            other => Err(D::Error::custom(format!("invalid flag '{other}'"))),
        },
    }
}

/// Plain text where `""` means the field was not sent.
pub fn text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    match scalar(deserializer)? {
        None => Ok(None),
        Some(Scalar::Text(s)) => Ok(Some(s)),
        Some(Scalar::Int(v)) => Ok(Some(v.to_string())),
        Some(Scalar::Float(v)) => Ok(Some(v.to_string())),
        Some(Scalar::Bool(b)) => Err(D::Error::custom(format!("expected text, found {b}"))),
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Default, Deserialize)]
    #[serde(default)]
    struct Fields {
        #[serde(deserialize_with = "super::id")]
        id: Option<i64>,
        #[serde(deserialize_with = "super::number")]
        price: Option<f64>,
        #[serde(deserialize_with = "super::flag")]
        active: Option<bool>,
        #[serde(deserialize_with = "super::text")]
        name: Option<String>,
    }

    fn decode(value: serde_json::Value) -> Fields {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn ids_accept_numbers_and_strings() {
        assert_eq!(decode(json!({ "id": 7 })).id, Some(7));
        assert_eq!(decode(json!({ "id": "42" })).id, Some(42));
        assert_eq!(decode(json!({ "id": "" })).id, None);
        assert_eq!(decode(json!({ "id": null })).id, None);
        assert_eq!(decode(json!({})).id, None);
        assert!(serde_json::from_value::<Fields>(json!({ "id": "abc" })).is_err());
    }

    #[test]
    fn zero_id_is_absent() {
        assert_eq!(decode(json!({ "id": 0 })).id, None);
        assert_eq!(decode(json!({ "id": "0" })).id, None);
    }

    #[test]
    fn zero_price_is_present() {
        assert_eq!(decode(json!({ "price": 0 })).price, Some(0.0));
        assert_eq!(decode(json!({ "price": "12.5" })).price, Some(12.5));
    }

    #[test]
    fn flags_accept_bools_and_digits() {
        assert_eq!(decode(json!({ "active": false })).active, Some(false));
        assert_eq!(decode(json!({ "active": 1 })).active, Some(true));
        assert_eq!(decode(json!({ "active": "0" })).active, Some(false));
    }

    #[test]
    fn empty_text_is_absent() {
        assert_eq!(decode(json!({ "name": "" })).name, None);
        assert_eq!(decode(json!({ "name": "Ana" })).name.as_deref(), Some("Ana"));
    }
}
