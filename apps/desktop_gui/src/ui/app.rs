use std::time::{Duration, Instant};

use crossbeam_channel::{bounded, Receiver, Sender};
use eframe::egui;
use list_core::{config::Settings, ListModel};
use shared::{
    domain::{Row, ROW_COUNT},
    protocol::ListEvent,
};

use crate::controller::{events::apply_queued_events, orchestration::queue_list_event};
use crate::ui::list_view::ListView;

const EVENT_QUEUE_CAPACITY: usize = 256;
const ROW_CORNER_RADIUS: f32 = 4.0;

pub struct ChecklistApp {
    model: ListModel,
    view: ListView,
    event_tx: Sender<ListEvent>,
    event_rx: Receiver<ListEvent>,
    title: String,
    status: String,
}

impl ChecklistApp {
    pub fn new(settings: &Settings) -> Self {
        let model = ListModel::from_settings(settings);
        let mut view = ListView::new(Duration::from_millis(settings.highlight_ms));
        model.render_into(&mut view);
        let (event_tx, event_rx) = bounded(EVENT_QUEUE_CAPACITY);

        Self {
            model,
            view,
            event_tx,
            event_rx,
            title: settings.window_title.clone(),
            status: String::new(),
        }
    }

    fn show_top_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(&self.title);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("🔀 Shuffle").clicked() {
                        queue_list_event(
                            &self.event_tx,
                            ListEvent::ShuffleRequested,
                            &mut self.status,
                        );
                    }
                    ui.label(
                        egui::RichText::new(format!(
                            "{}/{ROW_COUNT} checked",
                            self.view.checked_count()
                        ))
                        .weak(),
                    );
                });
            });
        });
    }

    fn show_status_bar(&mut self, ctx: &egui::Context) {
        if self.status.is_empty() {
            return;
        }
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.colored_label(ui.visuals().warn_fg_color, &self.status);
                if ui.small_button("Dismiss").clicked() {
                    self.status.clear();
                }
            });
        });
    }

    fn show_rows(&mut self, ctx: &egui::Context, now: Instant) {
        let mut scroll_area = egui::ScrollArea::vertical().auto_shrink([false, false]);
        if self.view.take_scroll_to_top() {
            scroll_area = scroll_area.vertical_scroll_offset(0.0);
        }

        let mut tapped = None;
        egui::CentralPanel::default().show(ctx, |ui| {
            scroll_area.show(ui, |ui| {
                for row in self.view.rows() {
                    let strength = self.view.highlight_strength(row.number, now);
                    if show_row(ui, row, strength) {
                        tapped = Some(row.number);
                    }
                }
            });
        });

        if let Some(number) = tapped {
            queue_list_event(
                &self.event_tx,
                ListEvent::RowTapped(number),
                &mut self.status,
            );
        }
    }
}

/// Draws one row; returns true when it was tapped.
fn show_row(ui: &mut egui::Ui, row: &Row, highlight_strength: f32) -> bool {
    let fill = if highlight_strength > 0.0 {
        ui.visuals()
            .selection
            .bg_fill
            .gamma_multiply(highlight_strength)
    } else {
        egui::Color32::TRANSPARENT
    };

    let mut checkbox_clicked = false;
    let frame = egui::Frame::new()
        .fill(fill)
        .corner_radius(ROW_CORNER_RADIUS)
        .inner_margin(4.0)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            // The model owns the flag; the local copy only feeds the widget.
            let mut checked = row.checked;
            checkbox_clicked = ui.checkbox(&mut checked, row.label()).clicked();
        });

    let row_clicked = frame.response.interact(egui::Sense::click()).clicked();
    checkbox_clicked || row_clicked
}

impl eframe::App for ChecklistApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        if apply_queued_events(&self.event_rx, &mut self.model, &mut self.view, now) > 0 {
            tracing::debug!(checked = self.model.checked_count(), "list updated");
        }

        self.show_top_bar(ctx);
        self.show_status_bar(ctx);
        self.show_rows(ctx, now);

        if !self.event_rx.is_empty() || self.view.is_animating(now) {
            ctx.request_repaint();
        }
    }
}
