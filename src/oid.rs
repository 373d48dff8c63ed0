//! Hex form of MongoDB object ids.
//!
//! Load-test scripts shuttle document ids around as plain strings; this
//! module restores the native 12-byte form for use in filters.

use crate::error::ClientError;
use bson::oid::ObjectId;

/// Convert a 24-character hex string into an [`ObjectId`].
///
/// Fails with [`ClientError::MalformedObjectId`] on anything that is not
/// valid hex of exactly that length.
pub fn hex_to_object_id(hex: &str) -> Result<ObjectId, ClientError> {
    ObjectId::parse_str(hex).map_err(|source| ClientError::MalformedObjectId {
        hex: hex.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_hex_round_trips() {
        let hex = "507f1f77bcf86cd799439011";
        let oid = hex_to_object_id(hex).unwrap();
        assert_eq!(oid.to_hex(), hex);
    }

    #[test]
    fn uppercase_hex_is_accepted() {
        let oid = hex_to_object_id("507F1F77BCF86CD799439011").unwrap();
        assert_eq!(oid.to_hex(), "507f1f77bcf86cd799439011");
    }

    #[test]
    fn generated_ids_survive_the_round_trip() {
        let oid = ObjectId::new();
        assert_eq!(hex_to_object_id(&oid.to_hex()).unwrap(), oid);
    }

    #[test]
    fn wrong_length_is_rejected() {
        assert!(hex_to_object_id("").is_err());
        assert!(hex_to_object_id("507f1f77bcf86cd79943901").is_err());
        assert!(hex_to_object_id("507f1f77bcf86cd7994390112").is_err());
    }

    #[test]
    fn non_hex_is_rejected() {
        let err = hex_to_object_id("zzzzzzzzzzzzzzzzzzzzzzzz").unwrap_err();
        assert!(matches!(err, ClientError::MalformedObjectId { .. }));
    }
}
