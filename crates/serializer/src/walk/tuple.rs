// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use std::borrow::Cow;

use serde_json::{Map, Value};

use super::Walker;
use crate::error::Result;
use crate::path::Segment;
use crate::serializer::FormattingMode;
use crate::value::{TypeDescriptor, ValueNode};

impl<'a> Walker<'a> {
    pub(super) fn tuple(&mut self, node: &'a ValueNode) -> Result<Value> {
        match self.policy.formatting_mode() {
            FormattingMode::Objects => self.tuple_as_object(node),
            FormattingMode::FlatArrays => self.array(node),
            FormattingMode::SelfDescribingArrays => self.tuple_as_described_array(node),
        }
    }

    /// Declared field name, or the generated default when it was declared without one.
    fn field_name(&self, descriptor: Option<&'a TypeDescriptor>, index: usize) -> Cow<'a, str> {
        match descriptor.map(TypeDescriptor::key_name) {
            Some(name) if !name.is_empty() => Cow::Borrowed(name),
            _ => Cow::Owned(self.policy.default_name(index)),
        }
    }

    fn tuple_as_object(&mut self, node: &'a ValueNode) -> Result<Value> {
        let mut out = Map::new();
        for (i, child) in node.children().iter().enumerate() {
            // Untyped fields are left out of the object entirely.
            let Some(descriptor) = child.descriptor() else {
                continue;
            };
            let name = self.field_name(Some(descriptor), i);
            let value = self.walk_child(Segment::Name(name.clone()), child)?;
            // Duplicate names: the later field wins.
            out.insert(name.into_owned(), value);
        }
        Ok(Value::Object(out))
    }

    fn tuple_as_described_array(&mut self, node: &'a ValueNode) -> Result<Value> {
        let mut out = Vec::with_capacity(node.children().len());
        for (i, child) in node.children().iter().enumerate() {
            let name = self.field_name(child.descriptor(), i);

            let mut entry = Map::new();
            entry.insert("name".to_string(), Value::String(name.to_string()));
            if let Some(descriptor) = child.descriptor() {
                entry.insert(
                    "type".to_string(),
                    Value::String(descriptor.signature().to_string()),
                );
            }
            let value = self.walk_child(Segment::Name(name), child)?;
            entry.insert("value".to_string(), value);

            out.push(Value::Object(entry));
        }
        Ok(Value::Array(out))
    }
}
