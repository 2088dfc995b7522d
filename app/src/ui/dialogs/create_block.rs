use eframe::egui;
use library::interaction::PendingCreation;
use library::model::{Category, MIN_DURATION_HOURS};

/// Values the dialog hands back on confirm; the day range and start hour are
/// the ones captured at selection-commit time.
#[derive(Clone, Debug)]
pub struct CreateBlockRequest {
    pub title: String,
    pub category: Category,
    pub duration: f32,
    pub start_day_index: usize,
    pub end_day_index: usize,
    pub start_hour: f32,
}

/// Modal collecting title/category/duration for a drag-selected range.
/// Cancel discards the pending range; confirm with an empty title keeps the
/// dialog open and mutates nothing.
#[derive(Clone, Debug, Default)]
pub struct CreateBlockDialog {
    pub is_open: bool,
    title: String,
    category: Category,
    duration: f32,
    pending: Option<PendingCreation>,
    wants_focus: bool,
}

impl CreateBlockDialog {
    pub fn open(&mut self, pending: PendingCreation) {
        self.title.clear();
        self.category = Category::DeepWork;
        self.duration = pending.duration;
        self.pending = Some(pending);
        self.is_open = true;
        self.wants_focus = true;
    }

    pub fn show(&mut self, ctx: &egui::Context) -> Option<CreateBlockRequest> {
        if !self.is_open {
            return None;
        }

        let mut confirmed = false;
        let mut should_close = false;
        let mut open = true;

        egui::Window::new("Schedule Block")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .open(&mut open)
            .show(ctx, |ui| {
                ui.label("Activity title");
                let title_edit = ui.add(
                    egui::TextEdit::singleline(&mut self.title)
                        .hint_text("e.g. Deep Work Session")
                        .desired_width(260.0),
                );
                if self.wants_focus {
                    title_edit.request_focus();
                    self.wants_focus = false;
                }
                if title_edit.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    confirmed = true;
                }

                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    egui::ComboBox::from_label("Category")
                        .selected_text(self.category.label())
                        .show_ui(ui, |ui| {
                            for category in Category::ALL {
                                ui.selectable_value(&mut self.category, category, category.label());
                            }
                        });
                    ui.add(
                        egui::DragValue::new(&mut self.duration)
                            .speed(0.25)
                            .range(MIN_DURATION_HOURS..=18.0)
                            .suffix(" h"),
                    );
                });

                ui.add_space(10.0);
                ui.separator();
                ui.horizontal(|ui| {
                    if ui.button("Cancel").clicked() {
                        should_close = true;
                    }
                    if ui.button("Confirm").clicked() {
                        confirmed = true;
                    }
                });
            });
        if !open {
            should_close = true;
        }

        let mut request = None;
        if confirmed && !self.title.trim().is_empty() {
            if let Some(pending) = self.pending.take() {
                request = Some(CreateBlockRequest {
                    title: self.title.trim().to_string(),
                    category: self.category,
                    duration: self.duration.max(MIN_DURATION_HOURS),
                    start_day_index: pending.start_day_index,
                    end_day_index: pending.end_day_index,
                    start_hour: pending.start_hour,
                });
                should_close = true;
            }
        }

        if should_close {
            self.is_open = false;
            self.pending = None;
        }
        request
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui_kittest::kittest::Queryable;
    use egui_kittest::Harness;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn pending() -> PendingCreation {
        PendingCreation {
            start_day_index: 1,
            end_day_index: 1,
            start_hour: 9.0,
            duration: 1.5,
        }
    }

    fn harness_for(
        dialog: Rc<RefCell<CreateBlockDialog>>,
        requests: Rc<RefCell<Vec<CreateBlockRequest>>>,
    ) -> Harness<'static> {
        Harness::builder()
            .with_size(egui::vec2(600.0, 400.0))
            .build(move |ctx| {
                if let Some(request) = dialog.borrow_mut().show(ctx) {
                    requests.borrow_mut().push(request);
                }
            })
    }

    #[test]
    fn open_dialog_shows_fields() {
        let mut dialog = CreateBlockDialog::default();
        dialog.open(pending());
        let dialog = Rc::new(RefCell::new(dialog));
        let requests = Rc::new(RefCell::new(Vec::new()));
        let harness = harness_for(dialog.clone(), requests.clone());

        assert!(harness.query_by_label("Schedule Block").is_some());
        assert!(harness.query_by_label("Activity title").is_some());
        assert!(harness.query_by_label("Confirm").is_some());
        assert!(harness.query_by_label("Cancel").is_some());
    }

    #[test]
    fn closed_dialog_renders_nothing() {
        let dialog = Rc::new(RefCell::new(CreateBlockDialog::default()));
        let requests = Rc::new(RefCell::new(Vec::new()));
        let harness = harness_for(dialog, requests);

        assert!(harness.query_by_label("Schedule Block").is_none());
    }

    #[test]
    fn confirm_with_empty_title_keeps_dialog_open() {
        let mut dialog = CreateBlockDialog::default();
        dialog.open(pending());
        let dialog = Rc::new(RefCell::new(dialog));
        let requests = Rc::new(RefCell::new(Vec::new()));
        let mut harness = harness_for(dialog.clone(), requests.clone());

        harness.get_by_label("Confirm").click();
        harness.run();

        assert!(dialog.borrow().is_open, "empty title must not close the dialog");
        assert!(requests.borrow().is_empty());
    }

    #[test]
    fn cancel_discards_the_pending_range() {
        let mut dialog = CreateBlockDialog::default();
        dialog.open(pending());
        let dialog = Rc::new(RefCell::new(dialog));
        let requests = Rc::new(RefCell::new(Vec::new()));
        let mut harness = harness_for(dialog.clone(), requests.clone());

        harness.get_by_label("Cancel").click();
        harness.run();

        assert!(!dialog.borrow().is_open);
        assert!(requests.borrow().is_empty());
    }
}
