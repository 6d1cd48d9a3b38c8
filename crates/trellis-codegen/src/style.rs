//! Visual-attribute to utility-class mapping.
//!
//! All thresholds and the named palette live in the const tables below;
//! they are process-wide constant data, never rebuilt per call. The mapper
//! itself is total: a node with no visual attributes maps to no tokens.

use trellis_core::{DesignNode, Effect};

/// Named color palette, in declaration order.
///
/// Nearest-entry lookup uses Euclidean distance in RGB space; a tie keeps
/// the earlier entry.
const PALETTE: &[(&str, [u8; 3])] = &[
    ("white", [255, 255, 255]),
    ("black", [0, 0, 0]),
    ("gray-100", [243, 244, 246]),
    ("gray-200", [229, 231, 235]),
    ("gray-300", [209, 213, 219]),
    ("gray-400", [156, 163, 175]),
    ("gray-500", [107, 114, 128]),
    ("gray-600", [75, 85, 99]),
    ("gray-700", [55, 65, 81]),
    ("gray-800", [31, 41, 55]),
    ("gray-900", [17, 24, 39]),
    ("red-500", [239, 68, 68]),
    ("orange-500", [249, 115, 22]),
    ("amber-500", [245, 158, 11]),
    ("yellow-500", [234, 179, 8]),
    ("green-500", [34, 197, 94]),
    ("teal-500", [20, 184, 166]),
    ("cyan-500", [6, 182, 212]),
    ("blue-500", [59, 130, 246]),
    ("indigo-500", [99, 102, 241]),
    ("purple-500", [168, 85, 247]),
    ("pink-500", [236, 72, 153]),
];

/// Font-size upper bounds (inclusive) to size tokens.
const FONT_SIZE: &[(f64, &str)] = &[
    (12.0, "xs"),
    (14.0, "sm"),
    (16.0, "base"),
    (18.0, "lg"),
    (20.0, "xl"),
    (24.0, "2xl"),
    (30.0, "3xl"),
    (36.0, "4xl"),
    (48.0, "5xl"),
];
const FONT_SIZE_MAX: &str = "6xl";

/// Font-weight upper bounds (exclusive) to weight tokens.
const FONT_WEIGHT: &[(f64, &str)] = &[
    (400.0, "light"),
    (500.0, "normal"),
    (600.0, "medium"),
    (700.0, "semibold"),
];
const FONT_WEIGHT_MAX: &str = "bold";

/// Line-height upper bounds (inclusive) to leading tokens.
const LINE_HEIGHT: &[(f64, &str)] = &[
    (1.0, "none"),
    (1.25, "tight"),
    (1.5, "normal"),
    (1.75, "relaxed"),
];
const LINE_HEIGHT_MAX: &str = "loose";

/// Letter-spacing upper bounds (inclusive) to tracking tokens.
const LETTER_SPACING: &[(f64, &str)] = &[
    (-0.05, "tighter"),
    (0.0, "tight"),
    (0.05, "normal"),
    (0.1, "wide"),
];
const LETTER_SPACING_MAX: &str = "wider";

/// Pixel upper bounds (inclusive) to the discrete size scale.
const SIZE_SCALE: &[(f64, &str)] = &[
    (4.0, "1"),
    (8.0, "2"),
    (12.0, "3"),
    (16.0, "4"),
    (20.0, "5"),
    (24.0, "6"),
    (32.0, "8"),
    (40.0, "10"),
    (48.0, "12"),
    (64.0, "16"),
    (80.0, "20"),
    (96.0, "24"),
    (128.0, "32"),
    (160.0, "40"),
    (192.0, "48"),
    (224.0, "56"),
    (256.0, "64"),
    (288.0, "72"),
    (320.0, "80"),
    (384.0, "96"),
];
const SIZE_SCALE_MAX: &str = "full";

/// Corner-radius upper bounds (inclusive) to radius tokens. An empty token
/// renders as the bare `rounded` class.
const RADIUS: &[(f64, &str)] = &[
    (2.0, "sm"),
    (4.0, ""),
    (6.0, "md"),
    (8.0, "lg"),
    (12.0, "xl"),
    (16.0, "2xl"),
    (24.0, "3xl"),
];
const RADIUS_MAX: &str = "full";

fn threshold(table: &[(f64, &'static str)], value: f64, fallback: &'static str) -> &'static str {
    table
        .iter()
        .find(|(max, _)| value <= *max)
        .map(|(_, token)| *token)
        .unwrap_or(fallback)
}

fn threshold_exclusive(
    table: &[(f64, &'static str)],
    value: f64,
    fallback: &'static str,
) -> &'static str {
    table
        .iter()
        .find(|(max, _)| value < *max)
        .map(|(_, token)| *token)
        .unwrap_or(fallback)
}

/// Nearest palette entry to an 8-bit RGB color.
pub fn nearest_color([r, g, b]: [u8; 3]) -> &'static str {
    let mut best = PALETTE[0].0;
    let mut best_dist = u32::MAX;
    for &(name, [pr, pg, pb]) in PALETTE {
        let dr = pr as i32 - r as i32;
        let dg = pg as i32 - g as i32;
        let db = pb as i32 - b as i32;
        let dist = (dr * dr + dg * dg + db * db) as u32;
        if dist < best_dist {
            best = name;
            best_dist = dist;
        }
    }
    best
}

/// Size token for a font size in pixels.
pub fn font_size_token(px: f64) -> &'static str {
    threshold(FONT_SIZE, px, FONT_SIZE_MAX)
}

/// Weight token for a numeric font weight.
pub fn font_weight_token(weight: f64) -> &'static str {
    threshold_exclusive(FONT_WEIGHT, weight, FONT_WEIGHT_MAX)
}

/// Leading token for a line-height multiplier.
pub fn line_height_token(value: f64) -> &'static str {
    threshold(LINE_HEIGHT, value, LINE_HEIGHT_MAX)
}

/// Tracking token for a letter-spacing value.
pub fn letter_spacing_token(value: f64) -> &'static str {
    threshold(LETTER_SPACING, value, LETTER_SPACING_MAX)
}

/// Discrete size-scale token for a pixel dimension.
pub fn size_token(px: f64) -> &'static str {
    threshold(SIZE_SCALE, px, SIZE_SCALE_MAX)
}

fn radius_class(radius: f64) -> String {
    match threshold(RADIUS, radius, RADIUS_MAX) {
        "" => "rounded".to_string(),
        token => format!("rounded-{token}"),
    }
}

fn border_weight_class(weight: f64) -> &'static str {
    if weight <= 1.0 {
        "border"
    } else if weight <= 2.0 {
        "border-2"
    } else if weight <= 4.0 {
        "border-4"
    } else {
        "border-8"
    }
}

fn shadow_class(effect: &Effect) -> &'static str {
    let radius = effect.radius.unwrap_or(0.0);
    let offset = effect.offset.map(|o| o.y.abs()).unwrap_or(0.0);
    if radius <= 2.0 && offset <= 1.0 {
        "shadow-sm"
    } else if radius <= 4.0 {
        "shadow"
    } else if radius <= 8.0 {
        "shadow-md"
    } else if radius <= 16.0 {
        "shadow-lg"
    } else {
        "shadow-xl"
    }
}

/// Map a node's visual attributes to an ordered utility-class list.
///
/// Categories are applied independently and concatenated in a fixed order:
/// fill color, typography, size, corner radius, border, shadow. Absent
/// attributes contribute no tokens; the function never fails.
pub fn map_styles(node: &DesignNode) -> Vec<String> {
    let mut classes = Vec::new();

    if let Some((color, opacity)) = node.solid_fill() {
        classes.push(format!("text-{}", nearest_color(color.to_rgb8())));
        if opacity < 1.0 {
            classes.push(format!("opacity-{}", (opacity * 100.0).round() as i64));
        }
    }

    if let Some(style) = &node.style {
        if let Some(size) = style.font_size {
            classes.push(format!("text-{}", font_size_token(size)));
        }
        if let Some(weight) = style.font_weight {
            classes.push(format!("font-{}", font_weight_token(weight)));
        }
        if let Some(line_height) = style.line_height {
            classes.push(format!("leading-{}", line_height_token(line_height)));
        }
        if let Some(spacing) = style.letter_spacing {
            classes.push(format!("tracking-{}", letter_spacing_token(spacing)));
        }
    }

    if let Some(bb) = &node.absolute_bounding_box {
        classes.push(format!("w-{}", size_token(bb.width)));
        classes.push(format!("h-{}", size_token(bb.height)));
    }

    if let Some(radius) = node.corner_radius {
        classes.push(radius_class(radius));
    }

    if let Some((color, _)) = node.solid_stroke() {
        classes.push(format!("border-{}", nearest_color(color.to_rgb8())));
        classes.push(border_weight_class(node.stroke_weight.unwrap_or(1.0)).to_string());
    }

    if let Some(shadow) = node.drop_shadow() {
        classes.push(shadow_class(shadow).to_string());
    }

    classes
}

#[cfg(test)]
mod tests {
    use super::*;
    use trellis_core::{BoundingBox, NodeType, Paint, Rgba, TypeStyle, Vector2};

    #[test]
    fn empty_node_maps_to_no_tokens() {
        let node = DesignNode::new("1", "plain", NodeType::Frame);
        assert!(map_styles(&node).is_empty());
    }

    #[test]
    fn white_and_black_round_trip() {
        assert_eq!(nearest_color(Rgba::WHITE.to_rgb8()), "white");
        assert_eq!(nearest_color(Rgba::BLACK.to_rgb8()), "black");
    }

    #[test]
    fn near_white_snaps_to_white() {
        assert_eq!(nearest_color([250, 250, 250]), "white");
    }

    #[test]
    fn font_size_boundaries() {
        assert_eq!(font_size_token(16.0), "base");
        assert_eq!(font_size_token(17.0), "lg");
        assert_eq!(font_size_token(12.0), "xs");
        assert_eq!(font_size_token(100.0), "6xl");
    }

    #[test]
    fn font_weight_boundaries_are_exclusive() {
        assert_eq!(font_weight_token(399.0), "light");
        assert_eq!(font_weight_token(400.0), "normal");
        assert_eq!(font_weight_token(700.0), "bold");
    }

    #[test]
    fn corner_radius_boundaries() {
        let node = DesignNode::new("1", "r", NodeType::Rectangle).with_corner_radius(8.0);
        assert_eq!(map_styles(&node), vec!["rounded-lg"]);

        let node = DesignNode::new("1", "r", NodeType::Rectangle).with_corner_radius(9.0);
        assert_eq!(map_styles(&node), vec!["rounded-xl"]);

        let node = DesignNode::new("1", "r", NodeType::Rectangle).with_corner_radius(4.0);
        assert_eq!(map_styles(&node), vec!["rounded"]);
    }

    #[test]
    fn size_scale_clamps_to_full() {
        assert_eq!(size_token(4.0), "1");
        assert_eq!(size_token(384.0), "96");
        assert_eq!(size_token(385.0), "full");
    }

    #[test]
    fn fill_opacity_appends_token() {
        let fill = Paint {
            opacity: Some(0.5),
            ..Paint::solid(Rgba::BLACK)
        };
        let node = DesignNode::new("1", "dim", NodeType::Rectangle).with_fills(vec![fill]);
        assert_eq!(map_styles(&node), vec!["text-black", "opacity-50"]);
    }

    #[test]
    fn category_order_is_fixed() {
        let node = DesignNode::new("1", "styled", NodeType::Text)
            .with_fills(vec![Paint::solid(Rgba::WHITE)])
            .with_style(TypeStyle {
                font_size: Some(14.0),
                font_weight: Some(600.0),
                ..TypeStyle::default()
            })
            .with_bounding_box(BoundingBox {
                x: 0.0,
                y: 0.0,
                width: 96.0,
                height: 24.0,
            })
            .with_corner_radius(6.0)
            .with_strokes(vec![Paint::solid(Rgba::BLACK)])
            .with_stroke_weight(2.0)
            .with_effect(Effect::drop_shadow(Vector2 { x: 0.0, y: 4.0 }, 6.0));

        assert_eq!(
            map_styles(&node),
            vec![
                "text-white",
                "text-sm",
                "font-semibold",
                "w-24",
                "h-6",
                "rounded-md",
                "border-black",
                "border-2",
                "shadow-md",
            ]
        );
    }

    #[test]
    fn shadow_tiers_check_tightest_first() {
        let sm = Effect::drop_shadow(Vector2 { x: 0.0, y: 1.0 }, 2.0);
        let xl = Effect::drop_shadow(Vector2 { x: 0.0, y: 20.0 }, 32.0);
        let node = DesignNode::new("1", "s", NodeType::Rectangle).with_effect(sm);
        assert_eq!(map_styles(&node), vec!["shadow-sm"]);
        let node = DesignNode::new("1", "s", NodeType::Rectangle).with_effect(xl);
        assert_eq!(map_styles(&node), vec!["shadow-xl"]);
    }
}
