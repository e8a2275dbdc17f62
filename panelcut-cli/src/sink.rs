use crate::config::CutConfig;
use crate::io;
use anyhow::Result;
use panelcut::io::export::export_solution;
use panelcut::io::svg::sheet_to_svg;
use panelcut::packer::Packing;
use std::path::PathBuf;

/// Receives the finished layout of a session together with its statistics.
pub trait LayoutSink {
    fn deliver(&mut self, name: &str, packing: &Packing) -> Result<()>;
}

impl<F> LayoutSink for F
where
    F: FnMut(&str, &Packing) -> Result<()>,
{
    fn deliver(&mut self, name: &str, packing: &Packing) -> Result<()> {
        self(name, packing)
    }
}

/// Writes `sol_<name>.json` and, if enabled, `sol_<name>_<sheet>.svg` for every consumed sheet.
#[derive(Debug, Clone)]
pub struct FolderSink {
    pub folder: PathBuf,
    pub config: CutConfig,
}

impl FolderSink {
    pub fn new(folder: PathBuf, config: CutConfig) -> Self {
        FolderSink { folder, config }
    }
}

impl LayoutSink for FolderSink {
    fn deliver(&mut self, name: &str, packing: &Packing) -> Result<()> {
        let solution = export_solution(packing);
        io::write_json(&solution, &self.folder.join(format!("sol_{name}.json")))?;

        if self.config.export_svg {
            for sheet in packing.sheets.iter() {
                let svg_path = self.folder.join(format!("sol_{name}_{}.svg", sheet.id));
                let svg = sheet_to_svg(sheet, self.config.svg_draw_options, name);
                io::write_svg(&svg, &svg_path)?;
            }
        }
        Ok(())
    }
}
