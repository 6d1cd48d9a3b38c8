//! The design-tree node model.
//!
//! Mirrors the JSON shape served by the remote design API. Every visual
//! attribute is optional on the wire; absence always means "contributes
//! nothing" further down the pipeline, never an error.

use serde::{Deserialize, Serialize};

/// Node tag vocabulary of the design tree.
///
/// Unknown tags deserialize to [`NodeType::Other`] so that new upstream
/// node kinds degrade to the generic translation case instead of failing
/// the whole fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NodeType {
    Text,
    Rectangle,
    Ellipse,
    Polygon,
    Star,
    Vector,
    Line,
    Component,
    Instance,
    Frame,
    Group,
    Image,
    #[serde(other)]
    Other,
}

impl NodeType {
    /// Lowercase slug for use in generated class names.
    pub fn slug(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Rectangle => "rectangle",
            Self::Ellipse => "ellipse",
            Self::Polygon => "polygon",
            Self::Star => "star",
            Self::Vector => "vector",
            Self::Line => "line",
            Self::Component => "component",
            Self::Instance => "instance",
            Self::Frame => "frame",
            Self::Group => "group",
            Self::Image => "image",
            Self::Other => "node",
        }
    }

    /// Whether this tag carries children that matter for markup emission.
    pub fn is_container(&self) -> bool {
        matches!(
            self,
            Self::Component | Self::Instance | Self::Frame | Self::Group
        )
    }
}

impl Default for NodeType {
    fn default() -> Self {
        Self::Other
    }
}

/// A color with 0–1 float channels, as served by the design API.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    #[serde(default = "one")]
    pub a: f64,
}

fn one() -> f64 {
    1.0
}

impl Rgba {
    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Convert to 8-bit-per-channel RGB by scaling and rounding.
    pub fn to_rgb8(&self) -> [u8; 3] {
        [
            (self.r.clamp(0.0, 1.0) * 255.0).round() as u8,
            (self.g.clamp(0.0, 1.0) * 255.0).round() as u8,
            (self.b.clamp(0.0, 1.0) * 255.0).round() as u8,
        ]
    }

    /// Convert to a hex string (e.g. `#FF5733`).
    pub fn to_hex(&self) -> String {
        let [r, g, b] = self.to_rgb8();
        format!("#{:02X}{:02X}{:02X}", r, g, b)
    }

    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
}

/// Kind of paint applied as a fill or stroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaintType {
    Solid,
    GradientLinear,
    GradientRadial,
    GradientAngular,
    GradientDiamond,
    Image,
    #[serde(other)]
    Other,
}

impl Default for PaintType {
    fn default() -> Self {
        Self::Other
    }
}

/// A single fill or stroke entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Paint {
    #[serde(rename = "type")]
    pub paint_type: PaintType,
    pub color: Option<Rgba>,
    pub opacity: Option<f64>,
    pub visible: bool,
}

impl Default for Paint {
    fn default() -> Self {
        Self {
            paint_type: PaintType::Other,
            color: None,
            opacity: None,
            visible: true,
        }
    }
}

impl Paint {
    /// Create a visible solid paint.
    pub fn solid(color: Rgba) -> Self {
        Self {
            paint_type: PaintType::Solid,
            color: Some(color),
            opacity: None,
            visible: true,
        }
    }

    /// The color and effective opacity, if this is a visible solid paint.
    pub fn as_solid(&self) -> Option<(Rgba, f64)> {
        if !self.visible || self.paint_type != PaintType::Solid {
            return None;
        }
        self.color.map(|c| (c, self.opacity.unwrap_or(1.0)))
    }
}

/// Kind of visual effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EffectType {
    DropShadow,
    InnerShadow,
    LayerBlur,
    BackgroundBlur,
    #[serde(other)]
    Other,
}

impl Default for EffectType {
    fn default() -> Self {
        Self::Other
    }
}

/// A 2D offset.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

/// A visual effect entry (shadows, blurs).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Effect {
    #[serde(rename = "type")]
    pub effect_type: EffectType,
    pub visible: bool,
    pub offset: Option<Vector2>,
    pub radius: Option<f64>,
}

impl Default for Effect {
    fn default() -> Self {
        Self {
            effect_type: EffectType::Other,
            visible: true,
            offset: None,
            radius: None,
        }
    }
}

impl Effect {
    /// Create a visible drop shadow.
    pub fn drop_shadow(offset: Vector2, radius: f64) -> Self {
        Self {
            effect_type: EffectType::DropShadow,
            visible: true,
            offset: Some(offset),
            radius: Some(radius),
        }
    }
}

/// Absolute placement of a node in the document.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Typography attributes of a text node.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TypeStyle {
    pub font_size: Option<f64>,
    pub font_weight: Option<f64>,
    pub line_height: Option<f64>,
    pub letter_spacing: Option<f64>,
}

/// One node of the design tree.
///
/// `id` and `name` are free text supplied by designers; they must be run
/// through the [`crate::name`] sanitizers before use as identifiers.
/// Child order is preserved and significant for markup emission.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DesignNode {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub node_type: NodeType,
    pub characters: Option<String>,
    pub children: Vec<DesignNode>,
    pub fills: Vec<Paint>,
    pub strokes: Vec<Paint>,
    pub stroke_weight: Option<f64>,
    pub corner_radius: Option<f64>,
    pub effects: Vec<Effect>,
    pub absolute_bounding_box: Option<BoundingBox>,
    pub style: Option<TypeStyle>,
}

impl DesignNode {
    /// Create a bare node.
    pub fn new(id: impl Into<String>, name: impl Into<String>, node_type: NodeType) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            node_type,
            ..Self::default()
        }
    }

    /// Set the text content.
    pub fn with_characters(mut self, characters: impl Into<String>) -> Self {
        self.characters = Some(characters.into());
        self
    }

    /// Append a child node.
    pub fn with_child(mut self, child: DesignNode) -> Self {
        self.children.push(child);
        self
    }

    /// Set the fill paints.
    pub fn with_fills(mut self, fills: Vec<Paint>) -> Self {
        self.fills = fills;
        self
    }

    /// Set the stroke paints.
    pub fn with_strokes(mut self, strokes: Vec<Paint>) -> Self {
        self.strokes = strokes;
        self
    }

    /// Set the stroke weight.
    pub fn with_stroke_weight(mut self, weight: f64) -> Self {
        self.stroke_weight = Some(weight);
        self
    }

    /// Set the corner radius.
    pub fn with_corner_radius(mut self, radius: f64) -> Self {
        self.corner_radius = Some(radius);
        self
    }

    /// Append an effect.
    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }

    /// Set the bounding box.
    pub fn with_bounding_box(mut self, bb: BoundingBox) -> Self {
        self.absolute_bounding_box = Some(bb);
        self
    }

    /// Set the typography style.
    pub fn with_style(mut self, style: TypeStyle) -> Self {
        self.style = Some(style);
        self
    }

    /// The first visible solid fill, if any.
    pub fn solid_fill(&self) -> Option<(Rgba, f64)> {
        self.fills.first().and_then(Paint::as_solid)
    }

    /// The first visible solid stroke, if any.
    pub fn solid_stroke(&self) -> Option<(Rgba, f64)> {
        self.strokes.iter().find_map(Paint::as_solid)
    }

    /// The first visible drop-shadow effect, if any.
    pub fn drop_shadow(&self) -> Option<&Effect> {
        self.effects
            .iter()
            .find(|e| e.visible && e.effect_type == EffectType::DropShadow)
    }

    /// The font size, when a typography style is present.
    pub fn font_size(&self) -> Option<f64> {
        self.style.as_ref().and_then(|s| s.font_size)
    }

    /// Depth-first walk over this node and all descendants.
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a DesignNode)) {
        visit(self);
        for child in &self.children {
            child.walk(visit);
        }
    }
}
