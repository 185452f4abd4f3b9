// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Serialization of decoded contract ABI value trees into JSON.
//!
//! A [`Serializer`] holds the encoding policy: how integers, floats, byte strings
//! and addresses are rendered, how unnamed tuple fields are named, and how tuples
//! are laid out. It is built once, shared freely, and applied to any number of
//! [`ValueNode`] trees.

pub mod context;
pub mod encoding;
pub mod error;
pub mod logging;
mod path;
pub mod serializer;
pub mod value;
mod walk;

pub use context::SerializeContext;
pub use encoding::{
    AddressEncoder, Base64Bytes, ByteEncoder, ChecksumAddress, DecimalString, FloatEncoder,
    HexBytes, HexInt, IndexNames, IntEncoder, JsonNumber, NameGenerator, PlainHexAddress,
    PrefixedHexAddress, PrefixedHexBytes, SafeNumberOrDecimal,
};
pub use error::{Result, SerializeError};
pub use serializer::{FormattingMode, Serializer};
pub use value::{ComponentType, DecodedValue, ElementaryKind, TypeDescriptor, ValueNode};
