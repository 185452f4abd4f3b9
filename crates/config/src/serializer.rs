// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Serializer policy settings.
//!
//! These are plain names for the encoding strategies; the serializer crate maps
//! them onto its encoder implementations.

use serde::Deserialize;

/// Output shape for tuples (function parameters, event fields, nested structs).
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum TupleFormat {
    /// `{"name": value, ...}`
    #[default]
    Objects,
    /// `[value, ...]`
    FlatArrays,
    /// `[{"name": ..., "type": ..., "value": ...}, ...]`
    SelfDescribingArrays,
}

#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum IntEncoding {
    /// Base-10 string
    #[default]
    Decimal,
    /// `0x` prefixed hex string, sign in front of the prefix
    Hex,
    /// JSON number inside the safe integer range, base-10 string outside it
    SafeNumber,
    /// JSON number literal; past 64 bits only with the serializer's `arbitrary-precision` feature
    JsonNumber,
}

#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum FloatEncoding {
    #[default]
    Decimal,
    SafeNumber,
}

#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum BytesEncoding {
    #[default]
    Hex,
    #[serde(rename = "hex-0x")]
    Hex0x,
    Base64,
}

#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum AddressEncoding {
    /// No address specific encoding, addresses go through the bytes encoding
    #[default]
    Bytes,
    #[serde(rename = "hex-0x")]
    Hex0x,
    PlainHex,
    Checksum,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SerializerConfig {
    /// Tuple output shape
    ///
    /// Env: ABI_JSON_SERIALIZER_FORMAT
    /// Valid values: objects, flat-arrays, self-describing-arrays
    /// Default: objects
    pub format: TupleFormat,

    /// Integer encoding
    ///
    /// Env: ABI_JSON_SERIALIZER_INT
    /// Valid values: decimal, hex, safe-number, json-number
    /// Default: decimal
    pub int_encoding: IntEncoding,

    /// Fixed point encoding
    ///
    /// Env: ABI_JSON_SERIALIZER_FLOAT
    /// Valid values: decimal, safe-number
    /// Default: decimal
    pub float_encoding: FloatEncoding,

    /// Byte string encoding
    ///
    /// Env: ABI_JSON_SERIALIZER_BYTES
    /// Valid values: hex, hex-0x, base64
    /// Default: hex
    pub bytes_encoding: BytesEncoding,

    /// Address encoding
    ///
    /// Env: ABI_JSON_SERIALIZER_ADDRESS
    /// Valid values: bytes, hex-0x, plain-hex, checksum
    /// Default: bytes
    pub address_encoding: AddressEncoding,

    /// Indent serialized JSON
    ///
    /// Env: ABI_JSON_SERIALIZER_PRETTY
    /// Default: false
    pub pretty: bool,
}
