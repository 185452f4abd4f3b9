// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, SerializeError>;

/// Errors produced while serializing a value tree.
///
/// Every variant has a stable message key and a set of named parameters, so callers
/// can render it through their own message catalog. The `Display` output is meant
/// for logs.
#[derive(Debug, Error)]
pub enum SerializeError {
    /// Node has no type descriptor.
    #[error("bad ABI type component at '{breadcrumb}': {component}")]
    BadComponent {
        /// Summary of the offending node.
        component: String,
        breadcrumb: String,
    },

    /// Elementary base type is not one this serializer knows.
    #[error("unknown ABI elementary type '{kind}' at '{breadcrumb}'")]
    UnknownElementaryType { kind: String, breadcrumb: String },

    /// Tuple formatting mode is not one of the known modes.
    #[error("unknown tuple serializer mode {mode}")]
    UnknownTupleSerializer { mode: String },

    /// Decoded value does not have the shape the elementary kind requires.
    #[error("ABI value mismatch at '{breadcrumb}': {kind} expects {expected}, got {actual}")]
    ValueMismatch {
        kind: &'static str,
        expected: &'static str,
        actual: &'static str,
        breadcrumb: String,
    },

    /// Address integer cannot be represented in 20 bytes.
    #[error(
        "address value at '{breadcrumb}' does not fit 20 bytes (len={byte_len}, negative={negative})"
    )]
    AddressOutOfRange {
        byte_len: usize,
        negative: bool,
        breadcrumb: String,
    },

    /// Caller cancelled the call, or its deadline passed, before the walk finished.
    #[error("serialization {reason} at '{breadcrumb}'")]
    Cancelled {
        reason: &'static str,
        breadcrumb: String,
    },

    /// Marshalling the finished JSON value failed.
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
}

impl SerializeError {
    /// Stable message key for localization.
    pub fn key(&self) -> &'static str {
        match self {
            SerializeError::BadComponent { .. } => "abi.serializer.bad_component",
            SerializeError::UnknownElementaryType { .. } => {
                "abi.serializer.unknown_elementary_type"
            }
            SerializeError::UnknownTupleSerializer { .. } => {
                "abi.serializer.unknown_tuple_serializer"
            }
            SerializeError::ValueMismatch { .. } => "abi.serializer.value_mismatch",
            SerializeError::AddressOutOfRange { .. } => "abi.serializer.address_out_of_range",
            SerializeError::Cancelled { .. } => "abi.serializer.cancelled",
            SerializeError::Json(_) => "abi.serializer.json",
        }
    }

    /// Named parameters to interpolate into the localized message.
    pub fn params(&self) -> Vec<(&'static str, String)> {
        match self {
            SerializeError::BadComponent {
                component,
                breadcrumb,
            } => vec![
                ("component", component.clone()),
                ("breadcrumb", breadcrumb.clone()),
            ],
            SerializeError::UnknownElementaryType { kind, breadcrumb } => vec![
                ("kind", kind.clone()),
                ("breadcrumb", breadcrumb.clone()),
            ],
            SerializeError::UnknownTupleSerializer { mode } => vec![("mode", mode.clone())],
            SerializeError::ValueMismatch {
                kind,
                expected,
                actual,
                breadcrumb,
            } => vec![
                ("kind", kind.to_string()),
                ("expected", expected.to_string()),
                ("actual", actual.to_string()),
                ("breadcrumb", breadcrumb.clone()),
            ],
            SerializeError::AddressOutOfRange {
                byte_len,
                negative,
                breadcrumb,
            } => vec![
                ("byte_len", byte_len.to_string()),
                ("negative", negative.to_string()),
                ("breadcrumb", breadcrumb.clone()),
            ],
            SerializeError::Cancelled { reason, breadcrumb } => vec![
                ("reason", reason.to_string()),
                ("breadcrumb", breadcrumb.clone()),
            ],
            SerializeError::Json(err) => vec![("error", err.to_string())],
        }
    }

    /// Breadcrumb of the node that failed, if the error is tied to one.
    pub fn breadcrumb(&self) -> Option<&str> {
        match self {
            SerializeError::BadComponent { breadcrumb, .. }
            | SerializeError::UnknownElementaryType { breadcrumb, .. }
            | SerializeError::ValueMismatch { breadcrumb, .. }
            | SerializeError::AddressOutOfRange { breadcrumb, .. }
            | SerializeError::Cancelled { breadcrumb, .. } => Some(breadcrumb),
            SerializeError::UnknownTupleSerializer { .. } | SerializeError::Json(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_are_stable() {
        let err = SerializeError::UnknownTupleSerializer {
            mode: "9".to_string(),
        };
        assert_eq!(err.key(), "abi.serializer.unknown_tuple_serializer");
        assert_eq!(err.params(), vec![("mode", "9".to_string())]);
        assert_eq!(err.breadcrumb(), None);
    }

    #[test]
    fn test_value_mismatch_params() {
        let err = SerializeError::ValueMismatch {
            kind: "uint",
            expected: "integer",
            actual: "text",
            breadcrumb: "[0][amount]".to_string(),
        };
        assert_eq!(err.key(), "abi.serializer.value_mismatch");
        assert_eq!(err.breadcrumb(), Some("[0][amount]"));
        assert_eq!(
            err.params(),
            vec![
                ("kind", "uint".to_string()),
                ("expected", "integer".to_string()),
                ("actual", "text".to_string()),
                ("breadcrumb", "[0][amount]".to_string()),
            ]
        );
        assert_eq!(
            err.to_string(),
            "ABI value mismatch at '[0][amount]': uint expects integer, got text"
        );
    }
}
