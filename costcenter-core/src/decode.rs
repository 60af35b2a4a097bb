use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{CostCenterError, Header, RecordShape, Text, ToText};

/// Decode an OData v2 collection payload (`{"d":{"results":[...]}}`).
///
/// A payload that is not JSON, lacks `d.results`, carries a non-array
/// `results`, or contains a record that does not fit `T` is a decode
/// error. OData error documents surface their server message. An empty
/// `results` array is a valid, empty result.
///
/// # Errors
/// Returns [`CostCenterError::Decode`] tagged with `shape`.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        name = "costcenter_core::decode",
        level = "debug",
        skip_all,
        fields(shape = %shape, bytes = body.len())
    )
)]
pub fn decode_records<T: DeserializeOwned>(
    body: &[u8],
    shape: RecordShape,
) -> Result<Vec<T>, CostCenterError> {
    let doc: Value = serde_json::from_slice(body)
        .map_err(|e| CostCenterError::decode(shape, format!("malformed JSON: {e}")))?;

    if let Some(message) = service_error_message(&doc) {
        return Err(CostCenterError::decode(
            shape,
            format!("service error: {message}"),
        ));
    }

    let Some(d) = doc.get("d") else {
        return Err(CostCenterError::decode(shape, "missing `d` object"));
    };
    let Some(results) = d.get("results") else {
        return Err(CostCenterError::decode(shape, "missing `d.results` collection"));
    };
    let Value::Array(items) = results else {
        return Err(CostCenterError::decode(shape, "`d.results` is not an array"));
    };

    items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            T::deserialize(item)
                .map_err(|e| CostCenterError::decode(shape, format!("record {i}: {e}")))
        })
        .collect()
}

/// Decode an `A_CostCenter` payload.
///
/// # Errors
/// See [`decode_records`].
pub fn decode_headers(body: &[u8]) -> Result<Vec<Header>, CostCenterError> {
    decode_records(body, RecordShape::Header)
}

/// Decode an `A_CostCenterText` payload.
///
/// # Errors
/// See [`decode_records`].
pub fn decode_texts(body: &[u8]) -> Result<Vec<Text>, CostCenterError> {
    decode_records(body, RecordShape::Text)
}

/// Decode the payload behind a header's `to_Text` link.
///
/// # Errors
/// See [`decode_records`].
pub fn decode_to_texts(body: &[u8]) -> Result<Vec<ToText>, CostCenterError> {
    decode_records(body, RecordShape::ToText)
}

/// `error.code` / `error.message.value` of an OData error document.
fn service_error_message(doc: &Value) -> Option<String> {
    let err = doc.get("error")?;
    let message = err
        .get("message")
        .and_then(|m| m.get("value").or(Some(m)))
        .and_then(Value::as_str)
        .unwrap_or("unspecified");
    match err.get("code").and_then(Value::as_str) {
        Some(code) => Some(format!("{code}: {message}")),
        None => Some(message.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_HEADERS: &str = r#"{"d":{"results":[
        {"ControllingArea":"A000","CostCenter":"10101101","CompanyCode":"1010",
         "to_Text":{"__deferred":{"uri":"https://h/API_COSTCENTER_SRV/A_CostCenter(ControllingArea='A000',CostCenter='10101101',ValidityEndDate=datetime'9999-12-31T00%3A00%3A00')/to_Text"}}},
        {"ControllingArea":"A000","CostCenter":"10101201"}
    ]}}"#;

    #[test]
    fn decodes_every_record_in_order() {
        let headers = decode_headers(TWO_HEADERS.as_bytes()).unwrap();
        assert_eq!(headers.len(), 2);
        assert_eq!(headers[0].cost_center, "10101101");
        assert_eq!(headers[0].company_code.as_deref(), Some("1010"));
        assert!(headers[0].to_text.as_deref().unwrap().ends_with("/to_Text"));
        assert_eq!(headers[1].cost_center, "10101201");
        assert_eq!(headers[1].to_text, None);
    }

    #[test]
    fn empty_results_is_not_an_error() {
        let texts = decode_texts(br#"{"d":{"results":[]}}"#).unwrap();
        assert!(texts.is_empty());
    }

    #[test]
    fn missing_results_is_decode_error() {
        let err = decode_to_texts(br#"{"d":{"ControllingArea":"A000"}}"#).unwrap_err();
        assert_eq!(
            err,
            CostCenterError::decode(RecordShape::ToText, "missing `d.results` collection")
        );
    }

    #[test]
    fn non_array_results_is_decode_error() {
        let err = decode_texts(br#"{"d":{"results":{"a":1}}}"#).unwrap_err();
        assert!(matches!(
            err,
            CostCenterError::Decode {
                shape: RecordShape::Text,
                ..
            }
        ));
    }

    #[test]
    fn malformed_json_is_decode_error() {
        let err = decode_headers(b"<html>Bad Gateway</html>").unwrap_err();
        match err {
            CostCenterError::Decode { shape, msg } => {
                assert_eq!(shape, RecordShape::Header);
                assert!(msg.starts_with("malformed JSON"));
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn record_missing_key_field_is_decode_error() {
        let err = decode_headers(br#"{"d":{"results":[{"CostCenter":"1"}]}}"#).unwrap_err();
        match err {
            CostCenterError::Decode { msg, .. } => assert!(msg.starts_with("record 0:")),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn service_error_document_surfaces_message() {
        let body = br#"{"error":{"code":"/IWBEP/CM_MGW_RT/020","message":{"lang":"en","value":"Invalid filter"}}}"#;
        let err = decode_headers(body).unwrap_err();
        assert_eq!(
            err,
            CostCenterError::decode(
                RecordShape::Header,
                "service error: /IWBEP/CM_MGW_RT/020: Invalid filter"
            )
        );
    }
}
