use eframe::egui::{RichText, Ui};
use egui_plot::{HLine, Line, LineStyle, Plot, PlotPoints};

use crate::domain::Asset;
use crate::ui::utils::{format_percentage, format_price};
use crate::ui::{UI_CONFIG, UI_TEXT, UiStyleExt, get_change_color};

fn trend_points(asset: &Asset) -> Vec<[f64; 2]> {
    asset
        .sparkline_7d
        .samples()
        .iter()
        .enumerate()
        .map(|(i, v)| [i as f64, *v])
        .collect()
}

/// Side panel content for the selected asset: headline numbers plus a
/// plot of its seven trend samples against the current price.
pub(crate) fn render_trend_panel(ui: &mut Ui, asset: Option<&Asset>) {
    ui.label_subheader(format!("{} {}", UI_TEXT.icon_chart, UI_TEXT.trend_heading));
    ui.separator();

    let Some(asset) = asset else {
        ui.label_subdued(&UI_TEXT.trend_none_selected);
        return;
    };

    ui.horizontal(|ui| {
        ui.heading(RichText::new(&asset.name).color(UI_CONFIG.colors.heading));
        ui.label_subdued(&asset.symbol);
    });
    ui.label(RichText::new(format_price(asset.price)).size(18.0).strong());

    let net = asset.sparkline_7d.net_change();
    let (lo, hi) = asset.sparkline_7d.range();
    ui.horizontal(|ui| {
        ui.metric("7d", &format_percentage(asset.change_7d), get_change_color(asset.change_7d));
        ui.separator();
        ui.metric(&UI_TEXT.trend_net_change, &format!("{:+.2}", net), get_change_color(net));
        ui.separator();
        ui.metric(
            &UI_TEXT.trend_range,
            &format!("{} - {}", format_price(lo), format_price(hi)),
            UI_CONFIG.colors.label,
        );
    });
    ui.add_space(6.0);

    let line_color = get_change_color(net);
    Plot::new(("trend_plot", asset.id.as_str()))
        .height(220.0)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .show_background(false)
        .x_axis_label(UI_TEXT.trend_x_axis.as_str())
        .y_axis_label(UI_TEXT.trend_y_axis.as_str())
        .show(ui, |plot_ui| {
            plot_ui.line(
                Line::new(asset.symbol.as_str(), PlotPoints::new(trend_points(asset)))
                    .color(line_color)
                    .width(2.0),
            );
            plot_ui.hline(
                HLine::new(UI_TEXT.trend_y_axis.as_str(), asset.price)
                    .color(UI_CONFIG.colors.warning)
                    .style(LineStyle::dashed_loose()),
            );
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{SPARKLINE_LEN, seed_assets};

    #[test]
    fn one_point_per_sample() {
        let btc = seed_assets().remove(0);
        let points = trend_points(&btc);
        assert_eq!(points.len(), SPARKLINE_LEN);
        assert_eq!(points[0], [0.0, btc.sparkline_7d[0]]);
        assert_eq!(points[6][0], 6.0);
    }
}
