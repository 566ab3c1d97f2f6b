use eframe::egui::{
    Align, Color32, FontId, Layout, Pos2, Rect, RichText, Sense, Shape, Stroke, Ui, Vec2,
};
use egui_extras::{Column, TableBuilder};
use strum::IntoEnumIterator;

use crate::domain::{AssetId, Sparkline};
use crate::models::{AssetRow, SortColumn, SortDirection, ViewQuery};
use crate::ui::utils::{format_percentage, format_price, format_supply, format_usd_compact};
use crate::ui::{UI_CONFIG, UI_TEXT, UiStyleExt, get_change_color};
use crate::utils::{min_max, normalize};

/// What the user did to the table this frame.
#[derive(Debug, Default)]
pub(crate) struct TableInteraction {
    pub sort_clicked: Option<SortColumn>,
    pub row_clicked: Option<AssetId>,
}

fn header_label(column: SortColumn, query: &ViewQuery) -> String {
    if query.sort != Some(column) {
        return column.to_string();
    }
    let arrow = match query.direction {
        SortDirection::Ascending => &UI_TEXT.icon_sort_asc,
        SortDirection::Descending => &UI_TEXT.icon_sort_desc,
    };
    format!("{} {}", column, arrow)
}

pub(crate) fn render_asset_table(
    ui: &mut Ui,
    rows: &[AssetRow],
    query: &ViewQuery,
    selected: Option<&AssetId>,
) -> TableInteraction {
    let mut interaction = TableInteraction::default();
    let cfg = UI_CONFIG.table;
    let header_font = FontId::proportional(12.0);

    TableBuilder::new(ui)
        .striped(true)
        .resizable(false)
        .sense(Sense::click())
        .cell_layout(Layout::left_to_right(Align::Center))
        .column(Column::exact(32.0))
        .column(Column::auto().at_least(140.0))
        .columns(Column::auto().at_least(70.0), SortColumn::iter().count() - 2)
        .column(Column::exact(cfg.sparkline_width + 8.0))
        .header(cfg.header_height, |mut header| {
            for column in SortColumn::iter() {
                header.col(|ui| {
                    let label = header_label(column, query);
                    let is_sorted = query.sort == Some(column);
                    if ui
                        .interactive_label(
                            &label,
                            is_sorted,
                            UI_CONFIG.colors.heading,
                            header_font.clone(),
                        )
                        .clicked()
                    {
                        interaction.sort_clicked = Some(column);
                    }
                });
            }
            header.col(|ui| {
                ui.label(RichText::new(&UI_TEXT.col_chart).color(UI_CONFIG.colors.heading));
            });
        })
        .body(|body| {
            body.rows(cfg.row_height, rows.len(), |mut row| {
                let asset_row = &rows[row.index()];
                let asset = asset_row.asset;
                row.set_selected(selected == Some(&asset.id));

                row.col(|ui| {
                    ui.label(asset_row.rank.to_string());
                });
                row.col(|ui| {
                    ui.label(RichText::new(&asset.name).strong());
                    ui.label_subdued(&asset.symbol);
                });
                row.col(|ui| {
                    ui.label(format_price(asset.price));
                });
                for change in [asset.change_1h, asset.change_24h, asset.change_7d] {
                    row.col(|ui| {
                        ui.label(
                            RichText::new(format_percentage(change))
                                .color(get_change_color(change)),
                        );
                    });
                }
                row.col(|ui| {
                    ui.label(format_usd_compact(asset.market_cap));
                });
                row.col(|ui| {
                    ui.label(format_usd_compact(asset.volume_24h));
                });
                row.col(|ui| {
                    ui.label(format_supply(asset.circulating_supply, &asset.symbol));
                });
                row.col(|ui| {
                    ui.label(format_supply(asset.max_supply, &asset.symbol));
                });
                row.col(|ui| {
                    paint_sparkline(
                        ui,
                        &asset.sparkline_7d,
                        Vec2::new(cfg.sparkline_width, cfg.sparkline_height),
                        UI_CONFIG.colors.accent,
                    );
                });

                if row.response().clicked() {
                    interaction.row_clicked = Some(asset.id.clone());
                }
            });
        });

    interaction
}

/// Inline trend sketch: samples spread evenly, scaled to the local range.
pub(crate) fn paint_sparkline(ui: &mut Ui, sparkline: &Sparkline, size: Vec2, color: Color32) {
    let (rect, _) = ui.allocate_exact_size(size, Sense::hover());
    if !ui.is_rect_visible(rect) {
        return;
    }
    let points = sparkline_points(sparkline.samples(), rect);
    if points.len() > 1 {
        ui.painter()
            .add(Shape::line(points, Stroke::new(1.5, color)));
    }
}

fn sparkline_points(samples: &[f64], rect: Rect) -> Vec<Pos2> {
    let Some((lo, hi)) = min_max(samples) else {
        return Vec::new();
    };
    let step = rect.width() / (samples.len().max(2) - 1) as f32;
    samples
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let y = normalize(*v, lo, hi) as f32;
            Pos2::new(rect.left() + i as f32 * step, rect.bottom() - y * rect.height())
        })
        .collect()
}
