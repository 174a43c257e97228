use crate::{Identifier, codec::BYTE_LEN};
use core::fmt;
use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{self, SeqAccess, Visitor},
};

impl Serialize for Identifier {
    fn serialize<S>(&self, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if s.is_human_readable() {
            let mut buf = [0; crate::codec::COMPACT_LEN];
            s.serialize_str(self.encode_compact_to_buf(&mut buf))
        } else {
            s.serialize_bytes(&self.to_bytes())
        }
    }
}

impl<'de> Deserialize<'de> for Identifier {
    fn deserialize<D>(d: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        if d.is_human_readable() {
            d.deserialize_str(IdentifierVisitor)
        } else {
            d.deserialize_bytes(IdentifierVisitor)
        }
    }
}

/// Accepts either text encoding, the raw bytes, or a sequence of 12 bytes.
struct IdentifierVisitor;

impl<'de> Visitor<'de> for IdentifierVisitor {
    type Value = Identifier;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a 16 character compact id, a 24 character hex id, or 12 bytes")
    }

    #[inline]
    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Identifier::try_parse(v).map_err(E::custom)
    }

    #[inline]
    fn visit_bytes<E>(self, v: &[u8]) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Identifier::try_from(v).map_err(E::custom)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut bytes = [0u8; BYTE_LEN];
        for (i, byte) in bytes.iter_mut().enumerate() {
            *byte = seq
                .next_element()?
                .ok_or_else(|| <A::Error as de::Error>::invalid_length(i, &self))?;
        }
        if seq.next_element::<u8>()?.is_some() {
            return Err(de::Error::invalid_length(BYTE_LEN + 1, &self));
        }
        Ok(Identifier::from_byte_array(bytes))
    }
}

/// Serializes an [`Identifier`] as its 24 character lowercase hex string.
///
/// Deserialization accepts either text encoding.
pub mod as_hex {
    use super::*;

    pub fn serialize<S>(id: &Identifier, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut buf = [0; crate::codec::HEX_LEN];
        s.serialize_str(id.encode_hex_to_buf(&mut buf))
    }

    pub fn deserialize<'de, D>(d: D) -> Result<Identifier, D::Error>
    where
        D: Deserializer<'de>,
    {
        d.deserialize_str(IdentifierVisitor)
    }
}

/// Serializes an [`Identifier`] as its 16 character compact string, in every
/// format.
pub mod as_compact {
    use super::*;

    pub fn serialize<S>(id: &Identifier, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut buf = [0; crate::codec::COMPACT_LEN];
        s.serialize_str(id.encode_compact_to_buf(&mut buf))
    }

    pub fn deserialize<'de, D>(d: D) -> Result<Identifier, D::Error>
    where
        D: Deserializer<'de>,
    {
        d.deserialize_str(IdentifierVisitor)
    }
}

/// Serializes an [`Identifier`] as its 12 raw bytes, in every format.
pub mod as_bytes {
    use super::*;

    pub fn serialize<S>(id: &Identifier, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        s.serialize_bytes(&id.to_bytes())
    }

    pub fn deserialize<'de, D>(d: D) -> Result<Identifier, D::Error>
    where
        D: Deserializer<'de>,
    {
        d.deserialize_bytes(IdentifierVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Tick, TickKind, UNIX_EPOCH_TICKS};

    fn sample() -> Identifier {
        let tick = Tick::from_count(UNIX_EPOCH_TICKS, TickKind::Utc);
        Identifier::from_components(tick, 7, 300, -1)
    }

    #[test]
    fn default_representation_is_compact_string() {
        let json = serde_json::to_string(&sample()).expect("serialize");
        assert_eq!(json, r#""i9Z_ZvuRw0070iP_""#);
        let back: Identifier = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, sample());
    }

    #[test]
    fn default_deserialize_accepts_hex() {
        let back: Identifier =
            serde_json::from_str(r#""489F7FF5F7B5800007012CFF""#).expect("deserialize");
        assert_eq!(back, sample());
    }

    #[test]
    fn default_deserialize_rejects_malformed() {
        assert!(serde_json::from_str::<Identifier>(r#""i9Z_ZvuRw0070iP""#).is_err());
        assert!(serde_json::from_str::<Identifier>(r#""i9Z_ZvuRw0070iP!""#).is_err());
        assert!(serde_json::from_str::<Identifier>("42").is_err());
    }

    #[test]
    fn hex_field_roundtrip() {
        #[derive(PartialEq, Eq, Debug, Serialize, Deserialize)]
        struct Row {
            #[serde(with = "as_hex")]
            event_id: Identifier,
        }
        let row = Row { event_id: sample() };

        let json = serde_json::to_string(&row).expect("serialize");
        assert_eq!(json, r#"{"event_id":"489f7ff5f7b5800007012cff"}"#);
        let back: Row = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, row);
    }

    #[test]
    fn compact_field_roundtrip() {
        #[derive(PartialEq, Eq, Debug, Serialize, Deserialize)]
        struct Row {
            #[serde(with = "as_compact")]
            event_id: Identifier,
        }
        let row = Row { event_id: sample() };

        let json = serde_json::to_string(&row).expect("serialize");
        assert_eq!(json, r#"{"event_id":"i9Z_ZvuRw0070iP_"}"#);
        let back: Row = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, row);
    }

    #[test]
    fn bytes_field_roundtrip() {
        #[derive(PartialEq, Eq, Debug, Serialize, Deserialize)]
        struct Row {
            #[serde(with = "as_bytes")]
            event_id: Identifier,
        }
        let row = Row { event_id: sample() };

        let json = serde_json::to_string(&row).expect("serialize");
        assert_eq!(
            json,
            r#"{"event_id":[72,159,127,245,247,181,128,0,7,1,44,255]}"#
        );
        let back: Row = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, row);
    }

    #[test]
    fn bytes_field_rejects_wrong_length() {
        #[derive(Debug, Deserialize)]
        struct Row {
            #[serde(with = "as_bytes")]
            #[allow(dead_code)]
            event_id: Identifier,
        }
        assert!(serde_json::from_str::<Row>(r#"{"event_id":[1,2,3]}"#).is_err());
        assert!(
            serde_json::from_str::<Row>(r#"{"event_id":[0,0,0,0,0,0,0,0,0,0,0,0,0]}"#).is_err()
        );
    }

    #[test]
    fn tick_serializes_as_raw_integer() {
        let tick = Tick::from_count(UNIX_EPOCH_TICKS, TickKind::Utc);
        let json = serde_json::to_string(&tick).expect("serialize");
        assert_eq!(json, "5233041986427387904");
        let back: Tick = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, tick);
    }
}
