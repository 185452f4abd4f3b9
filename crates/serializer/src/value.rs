// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Decoded ABI value tree.
//!
//! Nodes are produced by an ABI decoder and only read here. Each node carries the
//! type descriptor the decoder resolved for it, the decoded scalar (for elementary
//! types) and its children (for arrays and tuples).

use std::fmt;
use std::str::FromStr;

use bigdecimal::BigDecimal;
use num_bigint::BigInt;

use crate::error::SerializeError;

/// Scalar ABI base types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementaryKind {
    Int,
    Uint,
    Address,
    Bool,
    Fixed,
    Ufixed,
    Bytes,
    Function,
    String,
}

impl ElementaryKind {
    /// ABI base type name, as it appears in a type signature.
    pub fn as_str(&self) -> &'static str {
        match self {
            ElementaryKind::Int => "int",
            ElementaryKind::Uint => "uint",
            ElementaryKind::Address => "address",
            ElementaryKind::Bool => "bool",
            ElementaryKind::Fixed => "fixed",
            ElementaryKind::Ufixed => "ufixed",
            ElementaryKind::Bytes => "bytes",
            ElementaryKind::Function => "function",
            ElementaryKind::String => "string",
        }
    }
}

impl fmt::Display for ElementaryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ElementaryKind {
    type Err = SerializeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "int" => Ok(ElementaryKind::Int),
            "uint" => Ok(ElementaryKind::Uint),
            "address" => Ok(ElementaryKind::Address),
            "bool" => Ok(ElementaryKind::Bool),
            "fixed" => Ok(ElementaryKind::Fixed),
            "ufixed" => Ok(ElementaryKind::Ufixed),
            "bytes" => Ok(ElementaryKind::Bytes),
            "function" => Ok(ElementaryKind::Function),
            "string" => Ok(ElementaryKind::String),
            other => Err(SerializeError::UnknownElementaryType {
                kind: other.to_string(),
                breadcrumb: String::new(),
            }),
        }
    }
}

/// Structural category of a type descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentType {
    Elementary(ElementaryKind),
    FixedArray(usize),
    DynamicArray,
    Tuple,
}

/// Type information attached to a node by the decoder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDescriptor {
    component: ComponentType,
    key_name: String,
    signature: String,
}

impl TypeDescriptor {
    pub fn new(component: ComponentType, signature: impl Into<String>) -> Self {
        Self {
            component,
            key_name: String::new(),
            signature: signature.into(),
        }
    }

    pub fn elementary(kind: ElementaryKind, signature: impl Into<String>) -> Self {
        Self::new(ComponentType::Elementary(kind), signature)
    }

    pub fn fixed_array(len: usize, signature: impl Into<String>) -> Self {
        Self::new(ComponentType::FixedArray(len), signature)
    }

    pub fn dynamic_array(signature: impl Into<String>) -> Self {
        Self::new(ComponentType::DynamicArray, signature)
    }

    pub fn tuple(signature: impl Into<String>) -> Self {
        Self::new(ComponentType::Tuple, signature)
    }

    /// Attach the parameter / field name this descriptor was declared with.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.key_name = name.into();
        self
    }

    pub fn component(&self) -> ComponentType {
        self.component
    }

    /// Declared field name, empty for unnamed parameters and array elements.
    pub fn key_name(&self) -> &str {
        &self.key_name
    }

    /// Canonical type signature, e.g. `uint256` or `(address,uint256)[]`.
    pub fn signature(&self) -> &str {
        &self.signature
    }
}

/// Decoded scalar payload of a node.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DecodedValue {
    #[default]
    None,
    Integer(BigInt),
    Float(BigDecimal),
    Bytes(Vec<u8>),
    Text(String),
}

impl DecodedValue {
    /// Short name of the payload shape, used in mismatch errors.
    pub fn shape(&self) -> &'static str {
        match self {
            DecodedValue::None => "none",
            DecodedValue::Integer(_) => "integer",
            DecodedValue::Float(_) => "float",
            DecodedValue::Bytes(_) => "bytes",
            DecodedValue::Text(_) => "text",
        }
    }
}

/// One node of a decoded ABI value tree.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValueNode {
    descriptor: Option<TypeDescriptor>,
    value: DecodedValue,
    children: Vec<ValueNode>,
}

impl ValueNode {
    pub fn new(
        descriptor: Option<TypeDescriptor>,
        value: DecodedValue,
        children: Vec<ValueNode>,
    ) -> Self {
        Self {
            descriptor,
            value,
            children,
        }
    }

    /// Node the decoder could not attach a type to.
    pub fn untyped(value: DecodedValue) -> Self {
        Self::new(None, value, Vec::new())
    }

    /// Elementary node holding a decoded scalar.
    pub fn scalar(descriptor: TypeDescriptor, value: DecodedValue) -> Self {
        Self {
            descriptor: Some(descriptor),
            value,
            children: Vec::new(),
        }
    }

    /// Array or tuple node.
    pub fn composite(descriptor: TypeDescriptor, children: Vec<ValueNode>) -> Self {
        Self {
            descriptor: Some(descriptor),
            value: DecodedValue::None,
            children,
        }
    }

    pub fn integer(descriptor: TypeDescriptor, value: impl Into<BigInt>) -> Self {
        Self::scalar(descriptor, DecodedValue::Integer(value.into()))
    }

    pub fn float(descriptor: TypeDescriptor, value: BigDecimal) -> Self {
        Self::scalar(descriptor, DecodedValue::Float(value))
    }

    pub fn bytes(descriptor: TypeDescriptor, value: impl Into<Vec<u8>>) -> Self {
        Self::scalar(descriptor, DecodedValue::Bytes(value.into()))
    }

    pub fn text(descriptor: TypeDescriptor, value: impl Into<String>) -> Self {
        Self::scalar(descriptor, DecodedValue::Text(value.into()))
    }

    pub fn descriptor(&self) -> Option<&TypeDescriptor> {
        self.descriptor.as_ref()
    }

    pub fn value(&self) -> &DecodedValue {
        &self.value
    }

    pub fn children(&self) -> &[ValueNode] {
        &self.children
    }

    /// One-line description of the node for error reports.
    pub fn summary(&self) -> String {
        match &self.descriptor {
            Some(descriptor) => format!(
                "{}{} ({} value, {} children)",
                descriptor.signature(),
                if descriptor.key_name().is_empty() {
                    String::new()
                } else {
                    format!(" {}", descriptor.key_name())
                },
                self.value.shape(),
                self.children.len()
            ),
            None => format!(
                "<no type> ({} value, {} children)",
                self.value.shape(),
                self.children.len()
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elementary_kind_round_trips_through_name() {
        for kind in [
            ElementaryKind::Int,
            ElementaryKind::Uint,
            ElementaryKind::Address,
            ElementaryKind::Bool,
            ElementaryKind::Fixed,
            ElementaryKind::Ufixed,
            ElementaryKind::Bytes,
            ElementaryKind::Function,
            ElementaryKind::String,
        ] {
            assert_eq!(kind.as_str().parse::<ElementaryKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_unknown_elementary_kind() {
        let err = "decimal".parse::<ElementaryKind>().unwrap_err();
        assert!(matches!(
            err,
            SerializeError::UnknownElementaryType { ref kind, .. } if kind == "decimal"
        ));
    }

    #[test]
    fn test_descriptor_accessors() {
        let descriptor =
            TypeDescriptor::elementary(ElementaryKind::Uint, "uint256").named("balance");
        assert_eq!(
            descriptor.component(),
            ComponentType::Elementary(ElementaryKind::Uint)
        );
        assert_eq!(descriptor.key_name(), "balance");
        assert_eq!(descriptor.signature(), "uint256");

        let descriptor = TypeDescriptor::fixed_array(3, "bool[3]");
        assert_eq!(descriptor.component(), ComponentType::FixedArray(3));
        assert_eq!(descriptor.key_name(), "");
    }

    #[test]
    fn test_summary() {
        let node = ValueNode::integer(
            TypeDescriptor::elementary(ElementaryKind::Uint, "uint256").named("amount"),
            7,
        );
        assert_eq!(node.summary(), "uint256 amount (integer value, 0 children)");

        let node = ValueNode::default();
        assert_eq!(node.summary(), "<no type> (none value, 0 children)");

        let node = ValueNode::untyped(DecodedValue::Bytes(vec![1, 2]));
        assert_eq!(node.summary(), "<no type> (bytes value, 0 children)");
    }
}
