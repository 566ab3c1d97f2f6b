use eframe::egui::{Color32, FontId, Pos2, Rect, Sense, Ui, Vec2};

use crate::config::TICKER;
use crate::models::MarketSnapshot;
use crate::ui::utils::{format_percentage, format_price};

pub struct TickerItem {
    pub symbol: String,
    pub price: f64,
    pub change_1h: f64,
    /// Free text instead of a quote.
    pub is_message: bool,
}

#[derive(Default)]
pub struct TickerState {
    // Horizontal offset (pixels)
    offset: f32,
    items: Vec<TickerItem>,
    // Snapshot the items were built from
    seq: Option<u64>,
    is_hovered: bool,
    is_dragging: bool,
}

impl TickerState {
    /// Rebuild the quotes when a new snapshot has been published.
    pub fn update_data(&mut self, snapshot: &MarketSnapshot) {
        if self.seq == Some(snapshot.seq) {
            return;
        }
        self.seq = Some(snapshot.seq);

        self.items.clear();
        for asset in &snapshot.assets {
            self.items.push(TickerItem {
                symbol: asset.symbol.clone(),
                price: asset.price,
                change_1h: asset.change_1h,
                is_message: false,
            });
        }
        for text in TICKER.custom_messages {
            self.items.push(TickerItem {
                symbol: text.to_string(),
                price: 0.0,
                change_1h: 0.0,
                is_message: true,
            });
        }
    }

    fn format_item(&self, item: &TickerItem) -> String {
        if item.is_message {
            return item.symbol.clone();
        }
        let sign = if item.change_1h > 0.0 { "+" } else { "" };
        format!(
            "{} {} ({}{})",
            item.symbol,
            format_price(item.price),
            sign,
            format_percentage(item.change_1h)
        )
    }

    fn item_color(item: &TickerItem) -> Color32 {
        if item.is_message {
            TICKER.text_color_message
        } else if item.change_1h > f64::EPSILON {
            TICKER.text_color_up
        } else if item.change_1h < -f64::EPSILON {
            TICKER.text_color_down
        } else {
            TICKER.text_color_neutral
        }
    }

    /// Draws the scrolling strip. Returns the symbol of a clicked quote.
    pub fn render(&mut self, ui: &mut Ui) -> Option<String> {
        let rect = ui.available_rect_before_wrap();
        let height = TICKER.height;
        let panel_rect = Rect::from_min_size(rect.min, Vec2::new(rect.width(), height));
        let response = ui.allocate_rect(panel_rect, Sense::click_and_drag());
        ui.painter()
            .rect_filled(panel_rect, 0.0, TICKER.background_color);

        self.is_hovered = response.hovered();
        self.is_dragging = response.dragged();

        if self.is_dragging {
            // Drag to scrub
            self.offset += response.drag_delta().x;
        } else if !self.is_hovered {
            // Clamp dt so a slow frame doesn't make the strip jump.
            let dt = ui.input(|i| i.stable_dt).min(0.05);
            self.offset -= TICKER.speed_pixels_per_sec * dt;
        }

        let painter = ui.painter().with_clip_rect(panel_rect);
        let font_id = FontId::monospace(TICKER.font_size);

        // Pass 1: total width, needed to wrap around
        let mut total_width = 0.0;
        for item in &self.items {
            let text = self.format_item(item);
            let galley = painter.layout_no_wrap(text, font_id.clone(), Color32::WHITE);
            total_width += galley.size().x + TICKER.item_spacing;
        }

        if total_width < 1.0 {
            return None;
        }

        // Keep the offset negative-flowing within one strip length
        self.offset %= total_width;
        if self.offset > 0.0 {
            self.offset -= total_width;
        }

        // Pass 2: draw as many copies of the strip as the panel needs
        let screen_width = panel_rect.width();
        let start_pos = panel_rect.min;
        let loops_needed = (screen_width / total_width).ceil() as i32 + 2;
        let mut clicked = None;

        for loop_idx in 0..loops_needed {
            let mut loop_x = self.offset + (loop_idx as f32 * total_width);

            for item in &self.items {
                let text_color = Self::item_color(item);
                let galley =
                    painter.layout_no_wrap(self.format_item(item), font_id.clone(), text_color);
                let w = galley.size().x;
                let h = galley.size().y;

                if loop_x + w > 0.0 && loop_x < screen_width {
                    let pos = Pos2::new(
                        (start_pos.x + loop_x).round(),
                        (start_pos.y + (height - h) / 2.0).round(),
                    );
                    painter.galley(pos, galley, text_color);

                    if response.clicked() && !item.is_message {
                        if let Some(pointer) = response.interact_pointer_pos() {
                            let item_rect = Rect::from_min_size(pos, Vec2::new(w, height));
                            if item_rect.contains(pointer) {
                                clicked = Some(item.symbol.clone());
                            }
                        }
                    }
                }

                loop_x += w + TICKER.item_spacing;
            }
        }

        // Keep animating while scrolling
        if !self.is_hovered && !self.is_dragging {
            ui.ctx().request_repaint();
        }

        clicked
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::seed_assets;

    #[test]
    fn items_follow_snapshot_and_messages() {
        let snapshot = MarketSnapshot::new(3, 0, seed_assets());
        let mut ticker = TickerState::default();
        ticker.update_data(&snapshot);
        assert_eq!(
            ticker.items.len(),
            snapshot.len() + TICKER.custom_messages.len()
        );
        assert_eq!(
            ticker.format_item(&ticker.items[0]),
            "BTC $63759.48 (+0.43%)"
        );
        assert!(ticker.items.last().is_some_and(|i| i.is_message));
    }
}
