// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Encoding strategies for the scalar parts of a value tree.
//!
//! Each concern has its own trait so one strategy can be swapped without touching the
//! walker. Every strategy is a pure function of its input; any closure with the
//! matching signature works as a strategy too.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use bigdecimal::BigDecimal;
use num_bigint::{BigInt, Sign};
use num_traits::ToPrimitive;
use serde_json::Value;

/// Largest integer magnitude a JSON client backed by IEEE-754 doubles can hold exactly.
pub const MAX_SAFE_JSON_INTEGER: i64 = 9_007_199_254_740_991;

/// Length of an address in bytes.
pub const ADDRESS_LEN: usize = 20;

pub trait IntEncoder: Send + Sync {
    fn encode_int(&self, value: &BigInt) -> Value;
}

pub trait FloatEncoder: Send + Sync {
    fn encode_float(&self, value: &BigDecimal) -> Value;
}

pub trait ByteEncoder: Send + Sync {
    fn encode_bytes(&self, value: &[u8]) -> Value;
}

pub trait AddressEncoder: Send + Sync {
    fn encode_address(&self, address: &[u8; ADDRESS_LEN]) -> Value;
}

/// Names tuple fields that were declared without one.
pub trait NameGenerator: Send + Sync {
    fn default_name(&self, index: usize) -> String;
}

impl<F> IntEncoder for F
where
    F: Fn(&BigInt) -> Value + Send + Sync,
{
    fn encode_int(&self, value: &BigInt) -> Value {
        self(value)
    }
}

impl<F> FloatEncoder for F
where
    F: Fn(&BigDecimal) -> Value + Send + Sync,
{
    fn encode_float(&self, value: &BigDecimal) -> Value {
        self(value)
    }
}

impl<F> ByteEncoder for F
where
    F: Fn(&[u8]) -> Value + Send + Sync,
{
    fn encode_bytes(&self, value: &[u8]) -> Value {
        self(value)
    }
}

impl<F> AddressEncoder for F
where
    F: Fn(&[u8; ADDRESS_LEN]) -> Value + Send + Sync,
{
    fn encode_address(&self, address: &[u8; ADDRESS_LEN]) -> Value {
        self(address)
    }
}

impl<F> NameGenerator for F
where
    F: Fn(usize) -> String + Send + Sync,
{
    fn default_name(&self, index: usize) -> String {
        self(index)
    }
}

// ================================================================================================
// Numbers
// ================================================================================================

/// Base-10 string, exact for any magnitude. Default for integers and floats.
#[derive(Debug, Clone, Copy, Default)]
pub struct DecimalString;

impl IntEncoder for DecimalString {
    fn encode_int(&self, value: &BigInt) -> Value {
        Value::String(value.to_string())
    }
}

impl FloatEncoder for DecimalString {
    fn encode_float(&self, value: &BigDecimal) -> Value {
        Value::String(decimal_string(value))
    }
}

/// `0x` prefixed lowercase hex, with the sign in front of the prefix (`-0x1a`).
#[derive(Debug, Clone, Copy, Default)]
pub struct HexInt;

impl IntEncoder for HexInt {
    fn encode_int(&self, value: &BigInt) -> Value {
        let sign = if value.sign() == Sign::Minus { "-" } else { "" };
        Value::String(format!("{}0x{}", sign, value.magnitude().to_str_radix(16)))
    }
}

/// Native JSON number while the value is within [`MAX_SAFE_JSON_INTEGER`], base-10
/// string beyond it.
///
/// Floats inside the range go through `f64`, so digits past the 53-bit mantissa are
/// lost. That conversion is accepted for this strategy.
#[derive(Debug, Clone, Copy, Default)]
pub struct SafeNumberOrDecimal;

impl IntEncoder for SafeNumberOrDecimal {
    fn encode_int(&self, value: &BigInt) -> Value {
        let limit = BigInt::from(MAX_SAFE_JSON_INTEGER);
        if value.magnitude() > limit.magnitude() {
            return Value::String(value.to_string());
        }
        match value.to_i64() {
            Some(n) => Value::from(n),
            None => Value::String(value.to_string()),
        }
    }
}

impl FloatEncoder for SafeNumberOrDecimal {
    fn encode_float(&self, value: &BigDecimal) -> Value {
        if value.abs() > BigDecimal::from(MAX_SAFE_JSON_INTEGER) {
            return Value::String(decimal_string(value));
        }
        match value.to_f64() {
            Some(f) => Value::from(f),
            None => Value::String(decimal_string(value)),
        }
    }
}

/// JSON number literal for any integer that fits `i64` or `u64`.
///
/// Wider integers stay JSON numbers only with the `arbitrary-precision` feature,
/// which keeps every digit; without it they fall back to a base-10 string. Only
/// useful for clients whose JSON parser keeps big numbers intact.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonNumber;

impl IntEncoder for JsonNumber {
    fn encode_int(&self, value: &BigInt) -> Value {
        if let Some(n) = value.to_i64() {
            return Value::from(n);
        }
        if let Some(n) = value.to_u64() {
            return Value::from(n);
        }
        wide_number(value.to_string())
    }
}

#[cfg(feature = "arbitrary-precision")]
fn wide_number(digits: String) -> Value {
    match serde_json::from_str::<serde_json::Number>(&digits) {
        Ok(number) => Value::Number(number),
        Err(_) => Value::String(digits),
    }
}

#[cfg(not(feature = "arbitrary-precision"))]
fn wide_number(digits: String) -> Value {
    Value::String(digits)
}

/// Plain decimal rendering of a fixed point value, trailing zeros dropped.
fn decimal_string(value: &BigDecimal) -> String {
    value.normalized().to_plain_string()
}

// ================================================================================================
// Bytes
// ================================================================================================

/// Lowercase hex without prefix. Default for bytes.
#[derive(Debug, Clone, Copy, Default)]
pub struct HexBytes;

impl ByteEncoder for HexBytes {
    fn encode_bytes(&self, value: &[u8]) -> Value {
        Value::String(hex::encode(value))
    }
}

/// Lowercase hex with `0x` prefix.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrefixedHexBytes;

impl ByteEncoder for PrefixedHexBytes {
    fn encode_bytes(&self, value: &[u8]) -> Value {
        Value::String(hex_with_prefix(value))
    }
}

/// Standard alphabet base64 with padding.
#[derive(Debug, Clone, Copy, Default)]
pub struct Base64Bytes;

impl ByteEncoder for Base64Bytes {
    fn encode_bytes(&self, value: &[u8]) -> Value {
        Value::String(BASE64_STANDARD.encode(value))
    }
}

// ================================================================================================
// Addresses
// ================================================================================================

/// Lowercase hex with `0x` prefix.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrefixedHexAddress;

impl AddressEncoder for PrefixedHexAddress {
    fn encode_address(&self, address: &[u8; ADDRESS_LEN]) -> Value {
        Value::String(hex_with_prefix(address))
    }
}

/// Plain lowercase hex address; renders the same as [`PrefixedHexAddress`].
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainHexAddress;

impl AddressEncoder for PlainHexAddress {
    fn encode_address(&self, address: &[u8; ADDRESS_LEN]) -> Value {
        Value::String(hex_with_prefix(address))
    }
}

/// Mixed-case checksummed hex (EIP-55).
#[derive(Debug, Clone, Copy, Default)]
pub struct ChecksumAddress;

impl AddressEncoder for ChecksumAddress {
    fn encode_address(&self, address: &[u8; ADDRESS_LEN]) -> Value {
        Value::String(to_checksum_address(address))
    }
}

/// Format bytes as hex string with "0x" prefix
pub fn hex_with_prefix(data: &[u8]) -> String {
    format!("0x{}", hex::encode(data))
}

/// Render an address with EIP-55 checksum casing.
///
/// A hex letter is upper-cased when the matching nibble of the keccak-256 hash of the
/// lowercase hex string is 8 or more.
pub fn to_checksum_address(address: &[u8; ADDRESS_LEN]) -> String {
    let lower = hex::encode(address);
    let hash = sp_crypto_hashing::keccak_256(lower.as_bytes());

    let mut out = String::with_capacity(2 + lower.len());
    out.push_str("0x");
    for (i, ch) in lower.chars().enumerate() {
        let byte = hash[i / 2];
        let nibble = if i % 2 == 0 { byte >> 4 } else { byte & 0x0f };
        if ch.is_ascii_alphabetic() && nibble >= 8 {
            out.push(ch.to_ascii_uppercase());
        } else {
            out.push(ch);
        }
    }
    out
}

// ================================================================================================
// Names
// ================================================================================================

/// Decimal string of the field index. Default name generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct IndexNames;

impl NameGenerator for IndexNames {
    fn default_name(&self, index: usize) -> String {
        index.to_string()
    }
}
