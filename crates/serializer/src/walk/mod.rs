// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Depth-first walk over a value tree.
//!
//! Dispatch is purely on the node's descriptor: elementary nodes go to the scalar
//! encoder, fixed and dynamic arrays to the array encoder, tuples to the tuple
//! encoder. The first error aborts the walk; no partial output is returned.

mod elementary;
mod tuple;

use serde_json::Value;

use crate::context::SerializeContext;
use crate::error::{Result, SerializeError};
use crate::path::{Breadcrumb, Segment};
use crate::serializer::Serializer;
use crate::value::{ComponentType, ValueNode};

pub(crate) struct Walker<'a> {
    policy: &'a Serializer,
    ctx: &'a SerializeContext,
    path: Breadcrumb<'a>,
}

impl<'a> Walker<'a> {
    pub(crate) fn new(policy: &'a Serializer, ctx: &'a SerializeContext) -> Self {
        Self {
            policy,
            ctx,
            path: Breadcrumb::default(),
        }
    }

    pub(crate) fn walk(&mut self, node: &'a ValueNode) -> Result<Value> {
        if let Some(reason) = self.ctx.interrupted() {
            return Err(SerializeError::Cancelled {
                reason,
                breadcrumb: self.path.to_string(),
            });
        }

        let Some(descriptor) = node.descriptor() else {
            return Err(SerializeError::BadComponent {
                component: node.summary(),
                breadcrumb: self.path.to_string(),
            });
        };

        match descriptor.component() {
            ComponentType::Elementary(kind) => self.elementary(kind, node),
            ComponentType::FixedArray(_) | ComponentType::DynamicArray => self.array(node),
            ComponentType::Tuple => self.tuple(node),
        }
    }

    fn array(&mut self, node: &'a ValueNode) -> Result<Value> {
        let mut out = Vec::with_capacity(node.children().len());
        for (i, child) in node.children().iter().enumerate() {
            out.push(self.walk_child(Segment::Index(i), child)?);
        }
        Ok(Value::Array(out))
    }

    fn walk_child(&mut self, segment: Segment<'a>, child: &'a ValueNode) -> Result<Value> {
        self.path.push(segment);
        let value = self.walk(child)?;
        self.path.pop();
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::{ElementaryKind, TypeDescriptor};
    use serde_json::json;
    use std::sync::Arc;
    use std::sync::atomic::AtomicBool;

    fn uint(value: i64) -> ValueNode {
        ValueNode::integer(
            TypeDescriptor::elementary(ElementaryKind::Uint, "uint256"),
            value,
        )
    }

    fn walk(node: &ValueNode) -> Result<Value> {
        let serializer = Serializer::new();
        let ctx = SerializeContext::default();
        Walker::new(&serializer, &ctx).walk(node)
    }

    #[test]
    fn test_fixed_and_dynamic_arrays_serialize_the_same() {
        let children = vec![uint(1), uint(2), uint(3)];
        let fixed = ValueNode::composite(
            TypeDescriptor::fixed_array(3, "uint256[3]"),
            children.clone(),
        );
        let dynamic = ValueNode::composite(TypeDescriptor::dynamic_array("uint256[]"), children);

        assert_eq!(walk(&fixed).unwrap(), json!(["1", "2", "3"]));
        assert_eq!(walk(&dynamic).unwrap(), json!(["1", "2", "3"]));
    }

    #[test]
    fn test_empty_array() {
        let node = ValueNode::composite(TypeDescriptor::dynamic_array("uint256[]"), vec![]);
        assert_eq!(walk(&node).unwrap(), json!([]));
    }

    #[test]
    fn test_nested_arrays() {
        let inner = |values: &[i64]| {
            ValueNode::composite(
                TypeDescriptor::dynamic_array("uint256[]"),
                values.iter().map(|v| uint(*v)).collect(),
            )
        };
        let node = ValueNode::composite(
            TypeDescriptor::fixed_array(2, "uint256[][2]"),
            vec![inner(&[1]), inner(&[2, 3])],
        );
        assert_eq!(walk(&node).unwrap(), json!([["1"], ["2", "3"]]));
    }

    #[test]
    fn test_missing_descriptor_is_bad_component() {
        let err = walk(&ValueNode::default()).unwrap_err();
        match err {
            SerializeError::BadComponent {
                component,
                breadcrumb,
            } => {
                assert_eq!(component, "<no type> (none value, 0 children)");
                assert_eq!(breadcrumb, "");
            }
            other => panic!("expected BadComponent, got {:?}", other),
        }
    }

    #[test]
    fn test_array_child_error_aborts_with_index_breadcrumb() {
        let node = ValueNode::composite(
            TypeDescriptor::dynamic_array("uint256[]"),
            vec![uint(1), uint(2), ValueNode::default()],
        );
        let err = walk(&node).unwrap_err();
        assert_eq!(err.key(), "abi.serializer.bad_component");
        assert_eq!(err.breadcrumb(), Some("[2]"));
    }

    #[test]
    fn test_cancelled_context_stops_walk() {
        let serializer = Serializer::new();
        let ctx = SerializeContext::new().with_cancel_flag(Arc::new(AtomicBool::new(true)));
        let node = ValueNode::composite(TypeDescriptor::dynamic_array("uint256[]"), vec![uint(1)]);

        let err = Walker::new(&serializer, &ctx).walk(&node).unwrap_err();
        assert!(matches!(
            err,
            SerializeError::Cancelled {
                reason: "cancelled",
                ref breadcrumb,
            } if breadcrumb.is_empty()
        ));
    }
}
