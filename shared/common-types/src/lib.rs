use serde::{Deserialize, Serialize};

/// Object returned by a platform when building the payload for its providers
pub type ProviderPayload = serde_json::Map<String, serde_json::Value>;

/// Verification request submitted for a single stamp
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RequestPayload {
    /// Address being verified
    pub address: String,
    /// Provider id requested by the caller, e.g. `ETHScore#50`
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub provider_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl RequestPayload {
    #[must_use]
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            provider_type: None,
            version: None,
        }
    }
}

/// Record attached to a successful verification
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VerifiedRecord {
    pub address: String,
}

/// Outcome of a provider check.
///
/// Serialized as `{"valid": true, "record": {...}}` or
/// `{"valid": false, "errors": [...]}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(try_from = "VerifiedPayloadWire", into = "VerifiedPayloadWire")]
pub enum VerifiedPayload {
    Valid { record: VerifiedRecord },
    Invalid { errors: Vec<String> },
}

impl VerifiedPayload {
    #[must_use]
    pub fn valid(address: impl Into<String>) -> Self {
        Self::Valid {
            record: VerifiedRecord {
                address: address.into(),
            },
        }
    }

    #[must_use]
    pub fn invalid(error: impl Into<String>) -> Self {
        Self::Invalid {
            errors: vec![error.into()],
        }
    }

    #[must_use]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid { .. })
    }

    /// Failure messages, empty for a valid outcome
    #[must_use]
    pub fn errors(&self) -> &[String] {
        match self {
            Self::Valid { .. } => &[],
            Self::Invalid { errors } => errors,
        }
    }
}

#[derive(Serialize, Deserialize)]
struct VerifiedPayloadWire {
    valid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    record: Option<VerifiedRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    errors: Option<Vec<String>>,
}

impl From<VerifiedPayload> for VerifiedPayloadWire {
    fn from(payload: VerifiedPayload) -> Self {
        match payload {
            VerifiedPayload::Valid { record } => Self {
                valid: true,
                record: Some(record),
                errors: None,
            },
            VerifiedPayload::Invalid { errors } => Self {
                valid: false,
                record: None,
                errors: Some(errors),
            },
        }
    }
}

impl TryFrom<VerifiedPayloadWire> for VerifiedPayload {
    type Error = String;

    fn try_from(wire: VerifiedPayloadWire) -> Result<Self, Self::Error> {
        match (wire.valid, wire.record, wire.errors) {
            (true, Some(record), _) => Ok(Self::Valid { record }),
            (true, None, _) => Err("valid payload is missing its record".to_string()),
            (false, _, errors) => Ok(Self::Invalid {
                errors: errors.unwrap_or_default(),
            }),
        }
    }
}

/// Context handed to a platform when it builds its provider payload
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppContext {
    /// Opaque OAuth state value round-tripped through the platform
    pub state: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_valid_payload_wire_shape() {
        let payload = VerifiedPayload::valid("0xabc");
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({ "valid": true, "record": { "address": "0xabc" } })
        );
    }

    #[test]
    fn test_invalid_payload_wire_shape() {
        let payload = VerifiedPayload::invalid("not enough");
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({ "valid": false, "errors": ["not enough"] })
        );
        assert!(!payload.is_valid());
        assert_eq!(payload.errors(), ["not enough".to_string()]);
    }

    #[test]
    fn test_valid_payload_without_record_is_rejected() {
        let result = serde_json::from_value::<VerifiedPayload>(json!({ "valid": true }));
        assert!(result.is_err());
    }

    #[test]
    fn test_request_payload_reads_type_field() {
        let payload: RequestPayload = serde_json::from_value(json!({
            "address": "0xabc",
            "type": "ETHScore#50",
            "version": "0.0.0"
        }))
        .unwrap();

        assert_eq!(payload.address, "0xabc");
        assert_eq!(payload.provider_type.as_deref(), Some("ETHScore#50"));
        assert_eq!(payload.version.as_deref(), Some("0.0.0"));
    }
}
