//! Editor-owned graph records.
//!
//! Nodes and edges are created and edited by the outer editor.  For the
//! duration of one search run they are read-only inputs.

use crate::{CoreError, EdgeId, NodeId, Point, RoadType};

/// Cosmetic category of a place.  Irrelevant to path costs.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NodeCategory {
    #[default]
    House,
    School,
    Hospital,
    Police,
    Park,
    Shop,
    Factory,
    Airport,
    FireStation,
    Hotel,
}

impl NodeCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            NodeCategory::House       => "House",
            NodeCategory::School      => "School",
            NodeCategory::Hospital    => "Hospital",
            NodeCategory::Police      => "Police",
            NodeCategory::Park        => "Park",
            NodeCategory::Shop        => "Shop",
            NodeCategory::Factory     => "Factory",
            NodeCategory::Airport     => "Airport",
            NodeCategory::FireStation => "FireStation",
            NodeCategory::Hotel       => "Hotel",
        }
    }
}

impl NodeCategory {
    pub const ALL: [NodeCategory; 10] = [
        NodeCategory::House,
        NodeCategory::School,
        NodeCategory::Hospital,
        NodeCategory::Police,
        NodeCategory::Park,
        NodeCategory::Shop,
        NodeCategory::Factory,
        NodeCategory::Airport,
        NodeCategory::FireStation,
        NodeCategory::Hotel,
    ];
}

impl std::str::FromStr for NodeCategory {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<NodeCategory, CoreError> {
        NodeCategory::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CoreError::Parse(format!("unknown node category {s:?}")))
    }
}

impl std::fmt::Display for NodeCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A place on the canvas.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node {
    pub id:       NodeId,
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub pos:      Point,
    #[cfg_attr(feature = "serde", serde(default))]
    pub category: NodeCategory,
    #[cfg_attr(feature = "serde", serde(default))]
    pub label:    String,
}

impl Node {
    pub fn new(id: NodeId, pos: Point, category: NodeCategory, label: impl Into<String>) -> Self {
        Self { id, pos, category, label: label.into() }
    }

    /// Label for display; falls back to the id when the label is blank.
    pub fn display_name(&self) -> String {
        if self.label.is_empty() {
            self.id.to_string()
        } else {
            self.label.clone()
        }
    }
}

/// An undirected road between two nodes.
///
/// `source`/`target` order carries no meaning.  `weight` is the base cost the
/// user entered, normally the pixel distance between the endpoints.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge {
    pub id:     EdgeId,
    pub source: NodeId,
    pub target: NodeId,
    pub weight: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub road:   RoadType,
}

impl Edge {
    pub fn new(id: EdgeId, source: NodeId, target: NodeId, weight: f64, road: RoadType) -> Self {
        Self { id, source, target, weight, road }
    }

    /// `true` if this edge joins `a` and `b`, in either order.
    #[inline]
    pub fn connects(&self, a: NodeId, b: NodeId) -> bool {
        (self.source == a && self.target == b) || (self.source == b && self.target == a)
    }

    /// `true` if `node` is one of the endpoints.
    #[inline]
    pub fn touches(&self, node: NodeId) -> bool {
        self.source == node || self.target == node
    }
}
