// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use bigdecimal::BigDecimal;
use num_bigint::{BigInt, Sign};
use num_traits::One;
use serde_json::Value;

use super::Walker;
use crate::encoding::ADDRESS_LEN;
use crate::error::{Result, SerializeError};
use crate::value::{DecodedValue, ElementaryKind, ValueNode};

impl<'a> Walker<'a> {
    pub(super) fn elementary(
        &mut self,
        kind: ElementaryKind,
        node: &'a ValueNode,
    ) -> Result<Value> {
        let policy = self.policy;
        match kind {
            ElementaryKind::Int | ElementaryKind::Uint => {
                Ok(policy.int_encoder().encode_int(self.integer(kind, node)?))
            }
            ElementaryKind::Address => {
                let address = self.address(self.integer(kind, node)?)?;
                match policy.address_encoder() {
                    Some(encoder) => Ok(encoder.encode_address(&address)),
                    None => Ok(policy.byte_encoder().encode_bytes(&address)),
                }
            }
            // Anything other than exactly 1 is false.
            ElementaryKind::Bool => Ok(Value::Bool(self.integer(kind, node)?.is_one())),
            ElementaryKind::Fixed | ElementaryKind::Ufixed => {
                Ok(policy.float_encoder().encode_float(self.float(kind, node)?))
            }
            ElementaryKind::Bytes | ElementaryKind::Function => {
                Ok(policy.byte_encoder().encode_bytes(self.bytes(kind, node)?))
            }
            ElementaryKind::String => Ok(Value::String(self.text(kind, node)?.to_owned())),
        }
    }

    fn integer(&self, kind: ElementaryKind, node: &'a ValueNode) -> Result<&'a BigInt> {
        match node.value() {
            DecodedValue::Integer(value) => Ok(value),
            other => Err(self.mismatch(kind, "integer", other)),
        }
    }

    fn float(&self, kind: ElementaryKind, node: &'a ValueNode) -> Result<&'a BigDecimal> {
        match node.value() {
            DecodedValue::Float(value) => Ok(value),
            other => Err(self.mismatch(kind, "float", other)),
        }
    }

    fn bytes(&self, kind: ElementaryKind, node: &'a ValueNode) -> Result<&'a [u8]> {
        match node.value() {
            DecodedValue::Bytes(value) => Ok(value),
            other => Err(self.mismatch(kind, "bytes", other)),
        }
    }

    fn text(&self, kind: ElementaryKind, node: &'a ValueNode) -> Result<&'a str> {
        match node.value() {
            DecodedValue::Text(value) => Ok(value),
            other => Err(self.mismatch(kind, "text", other)),
        }
    }

    fn mismatch(
        &self,
        kind: ElementaryKind,
        expected: &'static str,
        actual: &DecodedValue,
    ) -> SerializeError {
        SerializeError::ValueMismatch {
            kind: kind.as_str(),
            expected,
            actual: actual.shape(),
            breadcrumb: self.path.to_string(),
        }
    }

    /// Big-endian bytes of the address integer, left-padded with zeros.
    fn address(&self, value: &BigInt) -> Result<[u8; ADDRESS_LEN]> {
        let (sign, magnitude) = value.to_bytes_be();
        if sign == Sign::Minus || magnitude.len() > ADDRESS_LEN {
            return Err(SerializeError::AddressOutOfRange {
                byte_len: magnitude.len(),
                negative: sign == Sign::Minus,
                breadcrumb: self.path.to_string(),
            });
        }

        let mut address = [0u8; ADDRESS_LEN];
        address[ADDRESS_LEN - magnitude.len()..].copy_from_slice(&magnitude);
        Ok(address)
    }
}
