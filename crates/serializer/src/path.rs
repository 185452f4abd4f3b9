// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Diagnostic location of the node being serialized.

use std::borrow::Cow;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Segment<'a> {
    Index(usize),
    Name(Cow<'a, str>),
}

/// Stack of path segments, rendered as `[0][balance]` only when an error needs it.
#[derive(Debug, Default)]
pub(crate) struct Breadcrumb<'a> {
    segments: Vec<Segment<'a>>,
}

impl<'a> Breadcrumb<'a> {
    pub(crate) fn push(&mut self, segment: Segment<'a>) {
        self.segments.push(segment);
    }

    pub(crate) fn pop(&mut self) {
        self.segments.pop();
    }
}

impl fmt::Display for Breadcrumb<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            match segment {
                Segment::Index(i) => write!(f, "[{}]", i)?,
                Segment::Name(name) => write!(f, "[{}]", name)?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_breadcrumb_renders_empty() {
        assert_eq!(Breadcrumb::default().to_string(), "");
    }

    #[test]
    fn test_push_and_pop() {
        let mut path = Breadcrumb::default();
        path.push(Segment::Index(2));
        path.push(Segment::Name(Cow::Borrowed("balance")));
        assert_eq!(path.to_string(), "[2][balance]");

        path.pop();
        path.push(Segment::Name(Cow::Owned("1".to_string())));
        assert_eq!(path.to_string(), "[2][1]");

        path.pop();
        path.pop();
        path.pop();
        assert_eq!(path.to_string(), "");
    }
}
