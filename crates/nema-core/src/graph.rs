//! Agent Graph
//!
//! The fixed five-node illustration shown next to the code sample. Node
//! positions are in the `0 0 600 360` viewBox.

use crate::error::{Result, SiteError};

/// SVG viewBox for the illustration
pub const VIEW_BOX: &str = "0 0 600 360";

/// Distance from a node centre to its label baseline
pub const LABEL_OFFSET: u32 = 40;

/// One labeled agent
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GraphNode {
    pub x: u32,
    pub y: u32,
    pub label: &'static str,
    pub color: &'static str,
}

impl GraphNode {
    const fn new(x: u32, y: u32, label: &'static str, color: &'static str) -> Self {
        Self { x, y, label, color }
    }

    pub fn label_y(&self) -> u32 {
        self.y + LABEL_OFFSET
    }
}

pub const NODES: [GraphNode; 5] = [
    GraphNode::new(200, 120, "Planner", "#7c3aed"),
    GraphNode::new(400, 80, "Researcher", "#3b82f6"),
    GraphNode::new(350, 240, "Executor", "#06b6d4"),
    GraphNode::new(150, 260, "Validator", "#8b5cf6"),
    GraphNode::new(500, 200, "Reporter", "#0ea5e9"),
];

pub const EDGES: [(usize, usize); 7] = [(0, 1), (0, 3), (1, 2), (1, 4), (2, 3), (2, 4), (3, 0)];

/// A resolved edge ready to draw
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub index: usize,
    pub from: GraphNode,
    pub to: GraphNode,
}

impl Segment {
    /// Stroke-opacity pulse length, e.g. `"4.5s"`
    #[allow(clippy::cast_precision_loss)]
    pub fn pulse_duration(&self) -> String {
        seconds(3.0 + self.index as f64 * 0.5)
    }
}

/// Phase offset for node `index`'s halo radius pulse
#[allow(clippy::cast_precision_loss)]
pub fn halo_begin(index: usize) -> String {
    seconds(index as f64 * 0.8)
}

/// Phase offset for node `index`'s core opacity pulse
#[allow(clippy::cast_precision_loss)]
pub fn core_begin(index: usize) -> String {
    seconds(index as f64 * 0.5)
}

fn seconds(value: f64) -> String {
    // 0.8 * 3 prints as 2.4000000000000004 otherwise
    let rounded = (value * 1000.0).round() / 1000.0;
    format!("{rounded}s")
}

/// Nodes plus index-pair edges
#[derive(Clone, Copy, Debug)]
pub struct AgentGraph {
    nodes: &'static [GraphNode],
    edges: &'static [(usize, usize)],
}

impl AgentGraph {
    pub const fn new(nodes: &'static [GraphNode], edges: &'static [(usize, usize)]) -> Self {
        Self { nodes, edges }
    }

    /// The graph shown on the landing page
    pub const fn standard() -> Self {
        Self::new(&NODES, &EDGES)
    }

    pub fn nodes(&self) -> &'static [GraphNode] {
        self.nodes
    }

    /// Check every edge endpoint exists
    pub fn validate(&self) -> Result<()> {
        for (edge, &(a, b)) in self.edges.iter().enumerate() {
            for node in [a, b] {
                if node >= self.nodes.len() {
                    return Err(SiteError::DanglingEdge { edge, node });
                }
            }
        }
        Ok(())
    }

    /// Edges resolved to node pairs, skipping any dangling ones
    pub fn segments(&self) -> impl Iterator<Item = Segment> + '_ {
        self.edges.iter().enumerate().filter_map(|(index, &(a, b))| {
            Some(Segment {
                index,
                from: *self.nodes.get(a)?,
                to: *self.nodes.get(b)?,
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_shape() {
        let graph = AgentGraph::standard();
        assert_eq!(graph.nodes().len(), 5);
        assert_eq!(EDGES.len(), 7);
        assert_eq!(graph.segments().count(), 7);
        assert!(graph.validate().is_ok());
    }

    #[test]
    fn test_labels_in_order() {
        let labels: Vec<_> = NODES.iter().map(|n| n.label).collect();
        assert_eq!(labels, ["Planner", "Researcher", "Executor", "Validator", "Reporter"]);
    }

    #[test]
    fn test_segment_resolution() {
        let graph = AgentGraph::standard();
        let last = graph.segments().last().unwrap();
        assert_eq!(last.index, 6);
        assert_eq!(last.from.label, "Validator");
        assert_eq!(last.to.label, "Planner");
        assert_eq!(last.pulse_duration(), "6s");
    }

    #[test]
    fn test_dangling_edge() {
        static BAD_EDGES: [(usize, usize); 2] = [(0, 1), (1, 5)];
        let graph = AgentGraph::new(&NODES, &BAD_EDGES);

        assert_eq!(graph.validate(), Err(SiteError::DanglingEdge { edge: 1, node: 5 }));
        assert_eq!(graph.segments().count(), 1);
    }

    #[test]
    fn test_phase_offsets() {
        assert_eq!(halo_begin(0), "0s");
        assert_eq!(halo_begin(3), "2.4s");
        assert_eq!(core_begin(4), "2s");
        assert_eq!(NODES[1].label_y(), 120);
    }

    #[test]
    fn test_phase_strings_are_short() {
        let graph = AgentGraph::standard();
        let durations: Vec<_> = graph.segments().map(|s| s.pulse_duration()).collect();
        assert_eq!(durations, ["3s", "3.5s", "4s", "4.5s", "5s", "5.5s", "6s"]);

        for i in 0..graph.nodes().len() {
            assert!(halo_begin(i).len() <= 5, "{}", halo_begin(i));
            assert!(core_begin(i).len() <= 5, "{}", core_begin(i));
        }
    }
}
