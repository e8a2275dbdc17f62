use crate::entities::Sheet;
use crate::geometry::Rect;
use crate::io::svg::svg_util;
use crate::io::svg::svg_util::SvgDrawOptions;
use svg::Document;
use svg::node::element::{Group, Text, Title};

/// Draws a sheet and its placed parts.
/// Sheet coordinates have their origin in the lower-left corner, the drawing is flipped accordingly.
pub fn sheet_to_svg(sheet: &Sheet, options: SvgDrawOptions, title: &str) -> Document {
    let stock = sheet.stock;
    let sheet_rect = Rect::from(stock);
    let theme = &options.theme;

    let min_side = stock.min_side();
    let margin = 0.05 * stock.max_side();
    let vbox_svg = (
        -margin,
        -margin,
        stock.width() + 2.0 * margin,
        stock.height() + 2.0 * margin,
    );

    let stroke_width = min_side * 0.001 * theme.stroke_width_multiplier;

    let sheet_group = {
        let title = Title::new(format!(
            "sheet, id: {}, size: {}, density: {:.3}%",
            sheet.id,
            stock,
            sheet.density() * 100.0
        ));
        Group::new()
            .set("id", format!("sheet_{}", sheet.id))
            .add(svg_util::data_to_path(
                svg_util::rect_data(sheet_rect, stock.height()),
                &[
                    ("fill", &*format!("{}", theme.sheet_fill)),
                    ("stroke", "black"),
                    ("stroke-width", &*format!("{}", 2.0 * stroke_width)),
                ],
            ))
            .add(title)
    };

    let parts_group = {
        let font_size = min_side * 0.03;
        let mut parts_group = Group::new().set("id", "parts");
        for placement in sheet.placements.iter() {
            let rect = placement.rect();
            let fill = match options.highlight_rotated && placement.orientation().is_rotated() {
                true => theme.rotated_part_fill,
                false => theme.part_fill,
            };
            let title = Title::new(format!(
                "part, id: {}, x: {:.3}, y: {:.3}, size: {}, {:?}",
                placement.part_id(),
                placement.x(),
                placement.y(),
                placement.dim(),
                placement.orientation()
            ));
            let mut part_group = Group::new()
                .set("id", format!("part_{}", placement.part_id()))
                .add(svg_util::data_to_path(
                    svg_util::rect_data(rect, stock.height()),
                    &[
                        ("fill", &*format!("{}", fill)),
                        ("stroke", "black"),
                        ("stroke-width", &*format!("{}", stroke_width)),
                    ],
                ))
                .add(title);

            if options.part_labels {
                let center_x = rect.x_min + 0.5 * rect.width();
                let center_y = stock.height() - (rect.y_min + 0.5 * rect.height());
                let label = Text::new(format!("#{} {}", placement.part_id(), placement.dim()))
                    .set("x", center_x)
                    .set("y", center_y)
                    .set("font-size", f32::min(font_size, 0.25 * rect.height()))
                    .set("font-family", "monospace")
                    .set("text-anchor", "middle")
                    .set("dominant-baseline", "middle")
                    .set("fill", format!("{}", theme.label_color));
                part_group = part_group.add(label);
            }
            parts_group = parts_group.add(part_group);
        }
        parts_group
    };

    let document = Document::new()
        .set("viewBox", vbox_svg)
        .add(sheet_group)
        .add(parts_group);

    match options.header {
        false => document,
        true => {
            //some information above the top left of the sheet
            let label_content = format!(
                "sheet {} | width: {:.3} | height: {:.3} | parts: {} | density: {:.3}% | {}",
                sheet.id,
                stock.width(),
                stock.height(),
                sheet.placements.len(),
                sheet.density() * 100.0,
                title,
            );
            let header = Text::new(label_content)
                .set("x", 0.0_f32)
                .set("y", -0.5 * margin)
                .set("font-size", 0.4 * margin)
                .set("font-family", "monospace")
                .set("font-weight", "500");
            document.add(header)
        }
    }
}
