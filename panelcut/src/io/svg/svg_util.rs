use crate::geometry::Rect;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use svg::node::element::Path;
use svg::node::element::path::Data;

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Copy)]
pub struct SvgDrawOptions {
    ///The theme to use for the svg
    #[serde(default)]
    pub theme: SvgLayoutTheme,
    ///Write the part id and size inside every placed part
    #[serde(default = "default_true")]
    pub part_labels: bool,
    ///Print sheet size, part count and density above the sheet
    #[serde(default = "default_true")]
    pub header: bool,
    ///Fill rotated parts with a different color
    #[serde(default)]
    pub highlight_rotated: bool,
}

fn default_true() -> bool {
    true
}

impl Default for SvgDrawOptions {
    fn default() -> Self {
        Self {
            theme: SvgLayoutTheme::default(),
            part_labels: true,
            header: true,
            highlight_rotated: false,
        }
    }
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Copy)]
pub struct SvgLayoutTheme {
    pub stroke_width_multiplier: f32,
    pub sheet_fill: Color,
    pub part_fill: Color,
    pub rotated_part_fill: Color,
    pub label_color: Color,
}

impl Default for SvgLayoutTheme {
    fn default() -> Self {
        SvgLayoutTheme::EARTH_TONES
    }
}

impl SvgLayoutTheme {
    pub const EARTH_TONES: SvgLayoutTheme = SvgLayoutTheme {
        stroke_width_multiplier: 2.0,
        sheet_fill: Color(0xCC, 0x82, 0x4A),
        part_fill: Color(0xFF, 0xC8, 0x79),
        rotated_part_fill: Color(0xFF, 0xA5, 0x00),
        label_color: Color(0x2D, 0x2D, 0x2D),
    };

    pub const GRAY: SvgLayoutTheme = SvgLayoutTheme {
        stroke_width_multiplier: 2.5,
        sheet_fill: Color(0xD3, 0xD3, 0xD3),
        part_fill: Color(0x7A, 0x7A, 0x7A),
        rotated_part_fill: Color(0x63, 0x63, 0x63),
        label_color: Color(0xFF, 0xFF, 0xFF),
    };
}

#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Color(pub u8, pub u8, pub u8);

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

impl FromStr for Color {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        let channel = |range: std::ops::Range<usize>| {
            hex.get(range)
                .and_then(|c| u8::from_str_radix(c, 16).ok())
                .ok_or_else(|| format!("invalid color: {s:?}"))
        };
        match hex.len() {
            6 => Ok(Color(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
            _ => Err(format!("invalid color: {s:?}")),
        }
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Color::from_str(&s).map_err(serde::de::Error::custom)
    }
}

/// Path data of a rectangle, `y_flip` is the height of the drawing area
/// so the lower-left origin of sheet coordinates ends up at the bottom of the image.
pub fn rect_data(rect: Rect, y_flip: f32) -> Data {
    let y_top = y_flip - rect.y_max;
    let y_bottom = y_flip - rect.y_min;
    Data::new()
        .move_to((rect.x_min, y_top))
        .line_to((rect.x_max, y_top))
        .line_to((rect.x_max, y_bottom))
        .line_to((rect.x_min, y_bottom))
        .close()
}

pub fn data_to_path(data: Data, params: &[(&str, &str)]) -> Path {
    let mut path = Path::new();
    for param in params {
        path = path.set(param.0, param.1)
    }
    path.set("d", data)
}
