//! Segment fill lookup: category → base hue, ring → lightness. Outer rings
//! render lighter so the three rings read as one family per category.

fn category_hue(category_id: &str) -> Option<f64> {
    match category_id {
        "floral" => Some(320.0),
        "fruity" => Some(355.0),
        "warm" => Some(38.0),
        "woody" => Some(22.0),
        "fresh" => Some(160.0),
        "vegetal" => Some(95.0),
        "earthy" => Some(55.0),
        "animal" => Some(265.0),
        _ => None,
    }
}

fn ring_lightness(ring: u8) -> f64 {
    match ring {
        1 => 40.0,
        2 => 54.0,
        _ => 68.0,
    }
}

/// Display color for a segment. An unknown category id resolves to a neutral
/// fallback at the ring's lightness rather than failing.
pub fn resolve_fill(category_id: &str, ring: u8) -> String {
    let lightness = ring_lightness(ring);
    match category_hue(category_id) {
        Some(hue) => format!("hsl({hue:.0}, 55%, {lightness:.0}%)"),
        None => format!("hsl(0, 0%, {lightness:.0}%)"),
    }
}
