//! The flavor taxonomy: a bundled three-level tree (category → subcategory →
//! descriptor) and the flattener that turns it into angularly-positioned ring
//! segments.

use indexmap::IndexMap;
use serde::Deserialize;

/// Key order in the map is angular order on the wheel, so an
/// insertion-ordered map is load-bearing here.
pub type Taxonomy = IndexMap<String, TaxonomyNode>;

#[derive(Debug, Clone, Deserialize)]
pub struct TaxonomyNode {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub children: Taxonomy,
}

static TAXONOMY_JSON: &str = include_str!("../assets/taxonomy.json");

/// Parse the bundled taxonomy. A parse failure renders as an empty wheel at
/// the call site, never a panic.
pub fn load_taxonomy() -> Result<Taxonomy, serde_json::Error> {
    serde_json::from_str(TAXONOMY_JSON)
}

/// One ring segment, derived once from the taxonomy and immutable afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    /// Path of node keys from root joined with `-`, e.g. `"floral-rich-rose"`.
    pub id: String,
    /// 1-based depth: 1 = category, 2 = subcategory, 3 = descriptor.
    pub ring: u8,
    pub name: String,
    pub description: String,
    /// Absolute degrees, deliberately not normalized into [0, 360); monotonic
    /// across a sibling run.
    pub start_angle: f64,
    pub end_angle: f64,
    /// Id of the immediate ancestor segment; `None` for ring 1.
    pub parent_id: Option<String>,
    /// Key of the ring-1 ancestor (itself for ring 1); drives fill lookup.
    pub category_id: String,
}

/// Flatten the taxonomy into segments. Ring-1 siblings split the full circle
/// evenly starting at `start_angle_deg`, advancing clockwise or
/// counter-clockwise per the winding flag; each child generation splits its
/// parent's span evenly. Pure: identical inputs yield bit-identical angles.
pub fn flatten(taxonomy: &Taxonomy, start_angle_deg: f64, clockwise: bool) -> Vec<Segment> {
    let mut segments = Vec::new();
    let count = taxonomy.len();
    if count == 0 {
        return segments;
    }
    let dir = if clockwise { 1.0 } else { -1.0 };
    let step = 360.0 / count as f64 * dir;
    for (i, (key, node)) in taxonomy.iter().enumerate() {
        let start = start_angle_deg + i as f64 * step;
        descend(&mut segments, key, node, 1, start, step, None, key);
    }
    segments
}

#[allow(clippy::too_many_arguments)]
fn descend(
    out: &mut Vec<Segment>,
    key: &str,
    node: &TaxonomyNode,
    ring: u8,
    start: f64,
    span: f64,
    parent_id: Option<&str>,
    category_id: &str,
) {
    let id = match parent_id {
        Some(p) => format!("{p}-{key}"),
        None => key.to_string(),
    };
    out.push(Segment {
        id: id.clone(),
        ring,
        name: node.name.clone(),
        description: node.description.clone(),
        start_angle: start,
        end_angle: start + span,
        parent_id: parent_id.map(str::to_string),
        category_id: category_id.to_string(),
    });

    let count = node.children.len();
    if count == 0 {
        // Covers both a missing and a present-but-empty children map; the
        // division below must never see a zero count.
        return;
    }
    let child_span = span / count as f64;
    for (i, (child_key, child)) in node.children.iter().enumerate() {
        descend(
            out,
            child_key,
            child,
            ring + 1,
            start + i as f64 * child_span,
            child_span,
            Some(&id),
            category_id,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn parse(json: &str) -> Taxonomy {
        serde_json::from_str(json).expect("test taxonomy parses")
    }

    #[test]
    fn test_empty_taxonomy_flattens_to_nothing() {
        let segments = flatten(&Taxonomy::new(), 0.0, true);
        assert!(segments.is_empty());
    }

    #[test]
    fn test_ring1_partitions_full_circle() {
        let tax = parse(
            r#"{
                "a": {"name": "A", "description": ""},
                "b": {"name": "B", "description": ""},
                "c": {"name": "C", "description": ""}
            }"#,
        );
        let segments = flatten(&tax, 0.0, true);
        let ring1: Vec<_> = segments.iter().filter(|s| s.ring == 1).collect();
        assert_eq!(ring1.len(), 3);

        let total: f64 = ring1.iter().map(|s| s.end_angle - s.start_angle).sum();
        assert!((total - 360.0).abs() < EPS);

        // Contiguous: each sibling starts where the previous one ended
        for pair in ring1.windows(2) {
            assert!((pair[0].end_angle - pair[1].start_angle).abs() < EPS);
        }
        assert!((ring1[0].start_angle - 0.0).abs() < EPS);
        assert!((ring1[2].end_angle - 360.0).abs() < EPS);
    }

    #[test]
    fn test_children_split_parent_span_evenly() {
        let tax = parse(
            r#"{
                "a": {"name": "A", "description": "", "children": {
                    "p": {"name": "P", "description": "", "children": {
                        "x": {"name": "X", "description": ""},
                        "y": {"name": "Y", "description": ""},
                        "z": {"name": "Z", "description": ""}
                    }},
                    "q": {"name": "Q", "description": ""}
                }},
                "b": {"name": "B", "description": ""}
            }"#,
        );
        let segments = flatten(&tax, 0.0, true);

        let parent = segments.iter().find(|s| s.id == "a-p").unwrap();
        let parent_span = parent.end_angle - parent.start_angle;
        // "a" has two children, so "a-p" holds half of 180°
        assert!((parent_span - 90.0).abs() < EPS);

        let kids: Vec<_> = segments.iter().filter(|s| s.parent_id.as_deref() == Some("a-p")).collect();
        assert_eq!(kids.len(), 3);
        for kid in &kids {
            let span = kid.end_angle - kid.start_angle;
            assert!((span - parent_span / 3.0).abs() < EPS);
        }
        // Children cover the parent exactly
        assert!((kids[0].start_angle - parent.start_angle).abs() < EPS);
        assert!((kids[2].end_angle - parent.end_angle).abs() < EPS);
    }

    #[test]
    fn test_two_category_scenario() {
        let tax = parse(
            r#"{
                "a": {"name": "A", "description": "d", "children": {
                    "x": {"name": "X", "description": "dx"}
                }},
                "b": {"name": "B", "description": "d2"}
            }"#,
        );
        let segments = flatten(&tax, 0.0, true);

        let a = segments.iter().find(|s| s.id == "a").unwrap();
        assert_eq!(a.ring, 1);
        assert!((a.start_angle - 0.0).abs() < EPS);
        assert!((a.end_angle - 180.0).abs() < EPS);
        assert_eq!(a.parent_id, None);
        assert_eq!(a.category_id, "a");

        let b = segments.iter().find(|s| s.id == "b").unwrap();
        assert!((b.start_angle - 180.0).abs() < EPS);
        assert!((b.end_angle - 360.0).abs() < EPS);

        // Sole child inherits its parent's full span
        let x = segments.iter().find(|s| s.id == "a-x").unwrap();
        assert_eq!(x.ring, 2);
        assert!((x.start_angle - 0.0).abs() < EPS);
        assert!((x.end_angle - 180.0).abs() < EPS);
        assert_eq!(x.parent_id.as_deref(), Some("a"));
        assert_eq!(x.category_id, "a");
        assert_eq!(x.name, "X");
        assert_eq!(x.description, "dx");
    }

    #[test]
    fn test_empty_children_map_degenerates_to_leaf() {
        let tax = parse(
            r#"{
                "a": {"name": "A", "description": "", "children": {}},
                "b": {"name": "B", "description": ""}
            }"#,
        );
        let segments = flatten(&tax, 0.0, true);
        assert_eq!(segments.len(), 2);
        assert!(segments.iter().all(|s| s.ring == 1));
        assert!(segments.iter().all(|s| s.start_angle.is_finite() && s.end_angle.is_finite()));
    }

    #[test]
    fn test_counter_clockwise_winding_descends() {
        let tax = parse(
            r#"{
                "a": {"name": "A", "description": ""},
                "b": {"name": "B", "description": ""}
            }"#,
        );
        let segments = flatten(&tax, 0.0, false);
        let a = &segments[0];
        let b = &segments[1];
        assert!((a.start_angle - 0.0).abs() < EPS);
        assert!((a.end_angle + 180.0).abs() < EPS);
        assert!((b.start_angle + 180.0).abs() < EPS);
        assert!((b.end_angle + 360.0).abs() < EPS);
    }

    #[test]
    fn test_start_angle_offset_shifts_all_segments() {
        let tax = parse(
            r#"{
                "a": {"name": "A", "description": ""},
                "b": {"name": "B", "description": ""}
            }"#,
        );
        let segments = flatten(&tax, 45.0, true);
        assert!((segments[0].start_angle - 45.0).abs() < EPS);
        // Angles may exceed 360° by construction
        assert!((segments[1].end_angle - 405.0).abs() < EPS);
    }

    #[test]
    fn test_bundled_taxonomy_parses_and_is_three_rings() {
        let tax = load_taxonomy().expect("bundled taxonomy parses");
        assert!(!tax.is_empty());
        let segments = flatten(&tax, 0.0, true);
        let max_ring = segments.iter().map(|s| s.ring).max().unwrap();
        assert_eq!(max_ring, 3);
        // Every segment names itself and carries a ring-1 category
        for seg in &segments {
            assert!(!seg.name.is_empty(), "segment {} has no name", seg.id);
            assert!(tax.contains_key(&seg.category_id));
        }
    }
}
