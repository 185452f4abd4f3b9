// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Serialization policy set and entry points.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use abi_json_config::{
    AddressEncoding, BytesEncoding, FloatEncoding, IntEncoding, SerializerConfig, TupleFormat,
};
use serde_json::Value;

use crate::context::SerializeContext;
use crate::encoding::{
    AddressEncoder, Base64Bytes, ByteEncoder, ChecksumAddress, DecimalString, FloatEncoder,
    HexBytes, HexInt, IndexNames, IntEncoder, JsonNumber, NameGenerator, PlainHexAddress,
    PrefixedHexAddress, PrefixedHexBytes, SafeNumberOrDecimal,
};
use crate::error::{Result, SerializeError};
use crate::value::ValueNode;
use crate::walk::Walker;

/// How function parameters, event fields and nested tuples are laid out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum FormattingMode {
    /// Field names as object keys.
    #[default]
    Objects,
    /// Plain positional arrays.
    FlatArrays,
    /// Arrays of `{"name": ..., "type": ..., "value": ...}` entries.
    SelfDescribingArrays,
}

impl FormattingMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormattingMode::Objects => "objects",
            FormattingMode::FlatArrays => "flat-arrays",
            FormattingMode::SelfDescribingArrays => "self-describing-arrays",
        }
    }
}

impl fmt::Display for FormattingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Numeric mode identifiers, in declaration order.
impl TryFrom<u8> for FormattingMode {
    type Error = SerializeError;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(FormattingMode::Objects),
            1 => Ok(FormattingMode::FlatArrays),
            2 => Ok(FormattingMode::SelfDescribingArrays),
            other => Err(SerializeError::UnknownTupleSerializer {
                mode: other.to_string(),
            }),
        }
    }
}

impl FromStr for FormattingMode {
    type Err = SerializeError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "objects" => Ok(FormattingMode::Objects),
            "flat-arrays" => Ok(FormattingMode::FlatArrays),
            "self-describing-arrays" => Ok(FormattingMode::SelfDescribingArrays),
            other => Err(SerializeError::UnknownTupleSerializer {
                mode: other.to_string(),
            }),
        }
    }
}

impl From<TupleFormat> for FormattingMode {
    fn from(format: TupleFormat) -> Self {
        match format {
            TupleFormat::Objects => FormattingMode::Objects,
            TupleFormat::FlatArrays => FormattingMode::FlatArrays,
            TupleFormat::SelfDescribingArrays => FormattingMode::SelfDescribingArrays,
        }
    }
}

/// Policy set for turning a decoded ABI value tree into JSON.
///
/// Defaults:
/// - formatting mode: [`FormattingMode::Objects`]
/// - integers and floats: [`DecimalString`]
/// - bytes: [`HexBytes`]
/// - addresses: no dedicated encoder, the bytes encoder is used
/// - default field names: [`IndexNames`]
/// - compact JSON output
///
/// A configured serializer is read-only while serializing and can be shared between
/// threads; reconfiguring consumes it.
///
/// # Examples
/// ```
/// use abi_json::{
///     ElementaryKind, FormattingMode, SafeNumberOrDecimal, Serializer, TypeDescriptor, ValueNode,
/// };
///
/// let serializer = Serializer::new()
///     .with_formatting_mode(FormattingMode::FlatArrays)
///     .with_int_encoder(SafeNumberOrDecimal);
///
/// let node = ValueNode::integer(TypeDescriptor::elementary(ElementaryKind::Uint, "uint256"), 42);
/// assert_eq!(serializer.serialize_value(&node)?, serde_json::json!(42));
/// # Ok::<(), abi_json::SerializeError>(())
/// ```
#[derive(Clone)]
pub struct Serializer {
    mode: FormattingMode,
    ints: Arc<dyn IntEncoder>,
    floats: Arc<dyn FloatEncoder>,
    bytes: Arc<dyn ByteEncoder>,
    addresses: Option<Arc<dyn AddressEncoder>>,
    names: Arc<dyn NameGenerator>,
    pretty: bool,
}

impl Default for Serializer {
    fn default() -> Self {
        Self {
            mode: FormattingMode::default(),
            ints: Arc::new(DecimalString),
            floats: Arc::new(DecimalString),
            bytes: Arc::new(HexBytes),
            addresses: None,
            names: Arc::new(IndexNames),
            pretty: false,
        }
    }
}

impl fmt::Debug for Serializer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Serializer")
            .field("mode", &self.mode)
            .field("address_encoder", &self.addresses.is_some())
            .field("pretty", &self.pretty)
            .finish_non_exhaustive()
    }
}

impl Serializer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a serializer from environment-level settings.
    pub fn from_config(config: &SerializerConfig) -> Self {
        let serializer = Self::new()
            .with_formatting_mode(config.format.into())
            .with_pretty(config.pretty);

        let serializer = match config.int_encoding {
            IntEncoding::Decimal => serializer.with_int_encoder(DecimalString),
            IntEncoding::Hex => serializer.with_int_encoder(HexInt),
            IntEncoding::SafeNumber => serializer.with_int_encoder(SafeNumberOrDecimal),
            IntEncoding::JsonNumber => serializer.with_int_encoder(JsonNumber),
        };

        let serializer = match config.float_encoding {
            FloatEncoding::Decimal => serializer.with_float_encoder(DecimalString),
            FloatEncoding::SafeNumber => serializer.with_float_encoder(SafeNumberOrDecimal),
        };

        let serializer = match config.bytes_encoding {
            BytesEncoding::Hex => serializer.with_byte_encoder(HexBytes),
            BytesEncoding::Hex0x => serializer.with_byte_encoder(PrefixedHexBytes),
            BytesEncoding::Base64 => serializer.with_byte_encoder(Base64Bytes),
        };

        match config.address_encoding {
            AddressEncoding::Bytes => serializer.without_address_encoder(),
            AddressEncoding::Hex0x => serializer.with_address_encoder(PrefixedHexAddress),
            AddressEncoding::PlainHex => serializer.with_address_encoder(PlainHexAddress),
            AddressEncoding::Checksum => serializer.with_address_encoder(ChecksumAddress),
        }
    }

    pub fn with_formatting_mode(mut self, mode: FormattingMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_int_encoder(mut self, encoder: impl IntEncoder + 'static) -> Self {
        self.ints = Arc::new(encoder);
        self
    }

    pub fn with_float_encoder(mut self, encoder: impl FloatEncoder + 'static) -> Self {
        self.floats = Arc::new(encoder);
        self
    }

    pub fn with_byte_encoder(mut self, encoder: impl ByteEncoder + 'static) -> Self {
        self.bytes = Arc::new(encoder);
        self
    }

    pub fn with_address_encoder(mut self, encoder: impl AddressEncoder + 'static) -> Self {
        self.addresses = Some(Arc::new(encoder));
        self
    }

    /// Drop the address encoder so addresses go through the bytes encoder.
    pub fn without_address_encoder(mut self) -> Self {
        self.addresses = None;
        self
    }

    pub fn with_default_name_generator(mut self, names: impl NameGenerator + 'static) -> Self {
        self.names = Arc::new(names);
        self
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn formatting_mode(&self) -> FormattingMode {
        self.mode
    }

    pub fn is_pretty(&self) -> bool {
        self.pretty
    }

    pub(crate) fn int_encoder(&self) -> &dyn IntEncoder {
        self.ints.as_ref()
    }

    pub(crate) fn float_encoder(&self) -> &dyn FloatEncoder {
        self.floats.as_ref()
    }

    pub(crate) fn byte_encoder(&self) -> &dyn ByteEncoder {
        self.bytes.as_ref()
    }

    pub(crate) fn address_encoder(&self) -> Option<&dyn AddressEncoder> {
        self.addresses.as_deref()
    }

    pub(crate) fn default_name(&self, index: usize) -> String {
        self.names.default_name(index)
    }

    /// Serialize a value tree into a JSON value.
    pub fn serialize_value(&self, root: &ValueNode) -> Result<Value> {
        self.serialize_value_with(&SerializeContext::default(), root)
    }

    /// Serialize a value tree into a JSON value, honouring the cancellation and
    /// deadline settings in `ctx`.
    pub fn serialize_value_with(&self, ctx: &SerializeContext, root: &ValueNode) -> Result<Value> {
        tracing::trace!(mode = %self.mode, "Serializing ABI value tree");

        Walker::new(self, ctx).walk(root).inspect_err(|err| {
            tracing::debug!(
                key = err.key(),
                breadcrumb = err.breadcrumb().unwrap_or_default(),
                error = %err,
                "ABI value tree serialization failed"
            );
        })
    }

    /// Serialize a value tree into JSON bytes, indented with two spaces when pretty
    /// output is configured.
    pub fn serialize_json(&self, root: &ValueNode) -> Result<Vec<u8>> {
        self.serialize_json_with(&SerializeContext::default(), root)
    }

    pub fn serialize_json_with(&self, ctx: &SerializeContext, root: &ValueNode) -> Result<Vec<u8>> {
        let value = self.serialize_value_with(ctx, root)?;
        let bytes = if self.pretty {
            serde_json::to_vec_pretty(&value)?
        } else {
            serde_json::to_vec(&value)?
        };
        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::{ElementaryKind, TypeDescriptor};
    use serde_json::json;

    fn uint(name: &str, value: i64) -> ValueNode {
        ValueNode::integer(
            TypeDescriptor::elementary(ElementaryKind::Uint, "uint256").named(name),
            value,
        )
    }

    fn address(value: u64) -> ValueNode {
        ValueNode::integer(
            TypeDescriptor::elementary(ElementaryKind::Address, "address"),
            value,
        )
    }

    #[test]
    fn test_defaults() {
        let serializer = Serializer::new();
        assert_eq!(serializer.formatting_mode(), FormattingMode::Objects);
        assert!(!serializer.is_pretty());
        assert!(serializer.address_encoder().is_none());
        assert_eq!(serializer.default_name(4), "4");
        assert_eq!(serializer.serialize_value(&uint("", 1)).unwrap(), json!("1"));
    }

    #[test]
    fn test_formatting_mode_from_u8() {
        assert_eq!(FormattingMode::try_from(0).unwrap(), FormattingMode::Objects);
        assert_eq!(FormattingMode::try_from(1).unwrap(), FormattingMode::FlatArrays);
        assert_eq!(
            FormattingMode::try_from(2).unwrap(),
            FormattingMode::SelfDescribingArrays
        );

        let err = FormattingMode::try_from(3).unwrap_err();
        assert!(matches!(err, SerializeError::UnknownTupleSerializer { ref mode } if mode == "3"));
        assert!(FormattingMode::try_from(u8::MAX).is_err());
    }

    #[test]
    fn test_formatting_mode_from_str() {
        for mode in [
            FormattingMode::Objects,
            FormattingMode::FlatArrays,
            FormattingMode::SelfDescribingArrays,
        ] {
            assert_eq!(mode.as_str().parse::<FormattingMode>().unwrap(), mode);
        }

        let err = "tables".parse::<FormattingMode>().unwrap_err();
        assert_eq!(err.key(), "abi.serializer.unknown_tuple_serializer");
    }

    #[test]
    fn test_from_config() {
        let config = SerializerConfig {
            format: TupleFormat::FlatArrays,
            int_encoding: IntEncoding::Hex,
            bytes_encoding: BytesEncoding::Base64,
            address_encoding: AddressEncoding::Checksum,
            pretty: true,
            ..Default::default()
        };
        let serializer = Serializer::from_config(&config);

        assert_eq!(serializer.formatting_mode(), FormattingMode::FlatArrays);
        assert!(serializer.is_pretty());
        assert_eq!(serializer.serialize_value(&uint("", 255)).unwrap(), json!("0xff"));
        assert_eq!(
            serializer.serialize_value(&address(0xab)).unwrap(),
            json!("0x00000000000000000000000000000000000000AB")
        );
    }

    #[test]
    fn test_from_default_config_matches_new() {
        let serializer = Serializer::from_config(&SerializerConfig::default());
        assert_eq!(serializer.formatting_mode(), FormattingMode::Objects);
        assert!(serializer.address_encoder().is_none());
        assert_eq!(
            serializer.serialize_value(&address(1)).unwrap(),
            json!("0000000000000000000000000000000000000001")
        );
    }

    #[test]
    fn test_without_address_encoder_falls_back_to_bytes() {
        let serializer = Serializer::new()
            .with_byte_encoder(PrefixedHexBytes)
            .with_address_encoder(ChecksumAddress)
            .without_address_encoder();
        assert_eq!(
            serializer.serialize_value(&address(0xab)).unwrap(),
            json!("0x00000000000000000000000000000000000000ab")
        );
    }

    #[test]
    fn test_serialize_json_compact_and_pretty() {
        let tuple = ValueNode::composite(
            TypeDescriptor::tuple("(uint256,uint256)"),
            vec![uint("a", 1), uint("b", 2)],
        );

        let compact = Serializer::new().serialize_json(&tuple).unwrap();
        assert_eq!(String::from_utf8(compact).unwrap(), r#"{"a":"1","b":"2"}"#);

        let pretty = Serializer::new()
            .with_pretty(true)
            .serialize_json(&tuple)
            .unwrap();
        assert_eq!(
            String::from_utf8(pretty).unwrap(),
            "{\n  \"a\": \"1\",\n  \"b\": \"2\"\n}"
        );
    }

    #[test]
    fn test_serializer_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Serializer>();
    }
}
