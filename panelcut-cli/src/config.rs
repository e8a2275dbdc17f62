use panelcut::io::svg::SvgDrawOptions;
use serde::{Deserialize, Serialize};

/// Configuration of the front end
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CutConfig {
    /// Lines that close the part list of a session and trigger the packing, compared case-insensitively
    #[serde(default = "default_finish_keywords")]
    pub finish_keywords: Vec<String>,
    /// Write an SVG drawing for every consumed sheet next to the JSON solution
    #[serde(default = "default_export_svg")]
    pub export_svg: bool,
    /// Optional SVG drawing options
    #[serde(default)]
    pub svg_draw_options: SvgDrawOptions,
}

fn default_finish_keywords() -> Vec<String> {
    vec!["done".to_owned(), "تمام".to_owned()]
}

fn default_export_svg() -> bool {
    true
}

impl CutConfig {
    pub fn is_finish_keyword(&self, line: &str) -> bool {
        let line = line.trim().to_lowercase();
        self.finish_keywords
            .iter()
            .any(|k| k.trim().to_lowercase() == line)
    }
}

impl Default for CutConfig {
    fn default() -> Self {
        Self {
            finish_keywords: default_finish_keywords(),
            export_svg: default_export_svg(),
            svg_draw_options: SvgDrawOptions::default(),
        }
    }
}
