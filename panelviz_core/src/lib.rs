// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared types for the panelviz chart engines.
//!
//! This crate holds the two ends of a render pass:
//! - the **input** data model: a query result made of typed fields and rows of primitive cells,
//!   as delivered by a dashboard host, and
//! - the **output** scene: a flat, ordered list of drawable primitives with fully computed
//!   coordinates and paint.
//!
//! Nothing here computes layout. The chart engines in `panelviz_charts` turn the former into
//! the latter; a rendering shell only has to paint a [`Scene`] in order.

#![no_std]

extern crate alloc;

mod data;
mod path;
mod scene;

pub use data::{Cell, DataPoint, Domain, Field, Fields, QueryResult, Row, Value};
pub use path::{ArcPath, PathSegment};
pub use scene::{
    ArcPathPrimitive, CirclePrimitive, LinePrimitive, PolygonPrimitive, Primitive, RectPrimitive,
    Scene, StrokeStyle, TextAnchor, TextBaseline, TextPrimitive, estimate_text_bounds,
};
