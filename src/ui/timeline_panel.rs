//! Timeline panel: a horizontal scroll area hosting the full-width strip.

use crate::app::AppState;
use crate::domain::projection;
use crate::rendering::timeline_renderer;
use eframe::egui;
use egui::{vec2, Rect, Sense};
use nukeline::{GroupKey, ThemeColors};

/// Result of user interaction with the timeline panel
pub enum TimelinePanelInteraction {
    /// A group label was clicked
    LabelClicked(GroupKey),
    /// The scroll offset changed (user gesture or programmatic)
    Scrolled { offset: f32, viewport_width: f32 },
}

pub fn render_timeline_panel(
    ui: &mut egui::Ui,
    state: &mut AppState,
    colors: &ThemeColors,
) -> Option<TimelinePanelInteraction> {
    let Some(geometry) = state.data.geometry() else {
        return None;
    };

    let previous_offset = state.scroll.offset();
    let pending = state.scroll.take_pending_offset();

    let mut scroll_area = egui::ScrollArea::horizontal()
        .id_salt("timeline_scroll")
        .auto_shrink([false, false]);
    if let Some(offset) = pending {
        scroll_area = scroll_area.horizontal_scroll_offset(offset);
    }

    let mut interaction = None;
    let output = scroll_area.show(ui, |ui| {
        let total = vec2(geometry.total_width(), ui.available_height());
        let (rect, _response) = ui.allocate_exact_size(total, Sense::hover());
        let content_rect = Rect::from_min_size(rect.min, total);

        let Some(dataset) = state.data.dataset() else {
            return;
        };
        let slots = projection::stack_groups(state.data.groups(), &geometry);
        let clicked = timeline_renderer::render_timeline(
            ui,
            content_rect,
            &geometry,
            dataset,
            state.data.groups(),
            &slots,
            &state.selection,
            &mut state.scene,
            colors,
        );
        if let Some(key) = clicked {
            interaction = Some(TimelinePanelInteraction::LabelClicked(key));
        }
    });

    let offset = output.state.offset.x;
    let viewport_width = output.inner_rect.width();
    // A label click wins over the scroll notification for this frame
    if interaction.is_none() && (offset - previous_offset).abs() > 0.5 {
        interaction = Some(TimelinePanelInteraction::Scrolled {
            offset,
            viewport_width,
        });
    } else {
        state.scroll.observe(offset, viewport_width);
    }

    interaction
}
