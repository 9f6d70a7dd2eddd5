use crate::coerce::{self, EditValue, FieldMeta, HarvestError};
use crate::project::ProjectStore;
use crate::record::{Record, record_label};
use crate::schema::{SchemaRegistry, ValueKind};
use crate::statics;
use eframe::egui;
use egui_extras::{Column, TableBuilder};
use std::path::PathBuf;

pub fn run_gui(registry: SchemaRegistry) -> eframe::Result {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1280.0, 900.0]),
        ..Default::default()
    };
    let title = format!("{} {}", statics::EN_APP_TITLE, env!("CARGO_PKG_VERSION"));
    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| Ok(Box::new(EditorApp::new(registry)))),
    )
}

/// One field row in the central editor: resolved metadata, the live edit
/// buffer, and a field-scoped error from the last failed harvest.
struct FieldEdit {
    meta: FieldMeta,
    edit: EditValue,
    error: Option<String>,
    // ComboBox selection buffer for adding reference ids.
    ref_pick: String,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum PendingOpen {
    Directory,
    File,
}

/// The main application state and GUI logic. Owns the ProjectStore and the
/// per-selection edit buffers.
struct EditorApp {
    store: ProjectStore,
    dialog_dir: Option<PathBuf>,
    selected_kind: Option<String>,
    selected: Option<Record>,
    field_edits: Vec<FieldEdit>,
    add_field_name: String,
    add_field_kind: ValueKind,
    status: String,
    last_error: Option<String>,
    confirm_delete: bool,
    pending_open: Option<PendingOpen>,
    about_open: bool,
    theme_dark: bool,
}

impl EditorApp {
    fn new(registry: SchemaRegistry) -> Self {
        Self {
            store: ProjectStore::new(registry),
            dialog_dir: None,
            selected_kind: None,
            selected: None,
            field_edits: Vec::new(),
            add_field_name: String::new(),
            add_field_kind: ValueKind::Text,
            status: String::new(),
            last_error: None,
            confirm_delete: false,
            pending_open: None,
            about_open: false,
            theme_dark: true,
        }
    }

    fn has_project(&self) -> bool {
        self.store.root().is_some() || self.store.file_count() > 0
    }

    fn file_dialog(&self) -> rfd::FileDialog {
        let mut dlg = rfd::FileDialog::new()
            .add_filter("JSON data", &[statics::JSON_EXTENSION]);
        if let Some(dir) = self.dialog_dir.clone() {
            dlg = dlg.set_directory(dir);
        }
        dlg
    }

    fn row_text(label: &str, dirty: bool) -> String {
        if dirty {
            format!("{label} *")
        } else {
            label.to_string()
        }
    }

    /// Declared choices plus the current value when it is outside the set,
    /// so the combo never shows a selection it does not contain.
    fn choice_items(choices: &[String], selected: &str) -> Vec<String> {
        let mut items: Vec<String> = choices.to_vec();
        if !selected.is_empty() && !items.iter().any(|c| c == selected) {
            items.push(selected.to_string());
        }
        items
    }

    fn selectable_row_left(
        ui: &mut egui::Ui,
        selected: bool,
        text: &str,
        row_h: f32,
    ) -> egui::Response {
        let w = ui.available_width();
        let (rect, response) = ui.allocate_exact_size(egui::vec2(w, row_h), egui::Sense::click());
        let response = response.on_hover_cursor(egui::CursorIcon::PointingHand);

        let visuals = ui.style().interact_selectable(&response, selected);
        if ui.is_rect_visible(rect) {
            ui.painter()
                .rect_filled(rect, visuals.corner_radius, visuals.bg_fill);
            ui.painter().rect_stroke(
                rect,
                visuals.corner_radius,
                visuals.bg_stroke,
                egui::StrokeKind::Inside,
            );

            let font_id = egui::TextStyle::Button.resolve(ui.style());
            let text_pos = rect.left_center() + egui::vec2(6.0, 0.0);
            ui.painter().text(
                text_pos,
                egui::Align2::LEFT_CENTER,
                text,
                font_id,
                visuals.text_color(),
            );
        }

        response
    }

    // ---- opening ----------------------------------------------------------

    fn request_open(&mut self, what: PendingOpen) {
        if self.store.has_dirty() {
            self.pending_open = Some(what);
        } else {
            self.perform_open(what);
        }
    }

    fn perform_open(&mut self, what: PendingOpen) {
        match what {
            PendingOpen::Directory => self.open_directory(),
            PendingOpen::File => self.open_single_file(),
        }
    }

    fn open_directory(&mut self) {
        let Some(dir) = self.file_dialog().pick_folder() else {
            return;
        };
        match self.store.open_directory(&dir) {
            Ok(summary) => {
                self.dialog_dir = Some(dir.clone());
                self.status = format!(
                    "Loaded {} records from {} files ({} skipped).",
                    summary.records, summary.files, summary.warnings
                );
                self.last_error = None;
                self.reset_selection();
            }
            Err(e) => {
                self.last_error = Some(format!("Failed to open folder: {e}"));
            }
        }
    }

    fn open_single_file(&mut self) {
        let Some(path) = self.file_dialog().pick_file() else {
            return;
        };
        match self.store.open_file(&path) {
            Ok(summary) => {
                self.dialog_dir = path.parent().map(PathBuf::from);
                self.status = format!(
                    "Loaded {} records from {}.",
                    summary.records,
                    path.display()
                );
                self.last_error = None;
                self.reset_selection();
            }
            Err(e) => {
                self.last_error = Some(format!("Failed to open file: {e}"));
            }
        }
    }

    fn reset_selection(&mut self) {
        self.selected_kind = self
            .store
            .registry()
            .iter()
            .map(|s| s.key.clone())
            .next();
        self.selected = None;
        self.field_edits.clear();
        self.confirm_delete = false;
        self.pending_open = None;
    }

    // ---- editing ----------------------------------------------------------

    fn select_record(&mut self, record: Record) {
        self.apply_pending_edits();
        self.selected = Some(record);
        self.rebuild_field_edits();
    }

    fn rebuild_field_edits(&mut self) {
        let Some(record) = self.selected.clone() else {
            self.field_edits.clear();
            return;
        };
        let edits: Option<Vec<FieldEdit>> = (|| {
            let schema = self.store.registry().get(&record.schema_key).ok()?;
            let fields = self.store.fields(&record)?;
            let metas = coerce::resolve_fields(schema, fields);
            Some(
                metas
                    .into_iter()
                    .map(|meta| {
                        let edit = coerce::materialize(&meta, fields.get(&meta.name));
                        FieldEdit {
                            meta,
                            edit,
                            error: None,
                            ref_pick: String::new(),
                        }
                    })
                    .collect(),
            )
        })();
        match edits {
            Some(edits) => self.field_edits = edits,
            None => {
                // Record vanished from under the selection.
                self.selected = None;
                self.field_edits.clear();
            }
        }
    }

    /// Harvest one field back into the store. A parse failure keeps the
    /// stored value and pins the message to this row.
    fn harvest_one(&mut self, idx: usize) {
        let Some(record) = self.selected.clone() else {
            return;
        };
        let (meta, edit) = {
            let fe = &self.field_edits[idx];
            (fe.meta.clone(), fe.edit.clone())
        };
        let prev = self
            .store
            .fields(&record)
            .and_then(|m| m.get(&meta.name).cloned());
        match coerce::harvest(&meta, &edit, prev.as_ref()) {
            Ok(Some(value)) => {
                self.store.set_field(&record, &meta.name, value);
                self.field_edits[idx].error = None;
            }
            Ok(None) => {
                self.field_edits[idx].error = None;
            }
            Err(HarvestError::FieldParseFailure { message, .. }) => {
                self.field_edits[idx].error = Some(message);
            }
        }
    }

    /// Flush every edit buffer into the store. Called before anything that
    /// leaves the current selection (switch, save, open).
    fn apply_pending_edits(&mut self) {
        if self.selected.is_none() {
            return;
        }
        for idx in 0..self.field_edits.len() {
            self.harvest_one(idx);
        }
    }

    fn add_field_clicked(&mut self) {
        let Some(record) = self.selected.clone() else {
            return;
        };
        let name = self.add_field_name.trim().to_string();
        if name.is_empty() {
            return;
        }
        match self.store.add_field(&record, &name, self.add_field_kind) {
            Ok(()) => {
                self.add_field_name.clear();
                self.last_error = None;
                self.rebuild_field_edits();
            }
            Err(e) => {
                self.last_error = Some(e.to_string());
            }
        }
    }

    fn remove_field_clicked(&mut self, name: &str) {
        let Some(record) = self.selected.clone() else {
            return;
        };
        self.store.remove_field(&record, name);
        self.rebuild_field_edits();
    }

    fn new_record_clicked(&mut self) {
        let Some(kind) = self.selected_kind.clone() else {
            return;
        };
        self.apply_pending_edits();
        match self.store.create_record(&kind) {
            Ok(record) => {
                self.status = format!("Created a new record in {}", record.file_path.display());
                self.last_error = None;
                self.selected = Some(record);
                self.rebuild_field_edits();
            }
            Err(e) => {
                self.last_error = Some(e.to_string());
            }
        }
    }

    fn delete_selected(&mut self) {
        let Some(record) = self.selected.take() else {
            return;
        };
        self.field_edits.clear();
        if self.store.delete_record(&record) {
            self.status = format!("Deleted a record from {}", record.file_path.display());
            self.last_error = None;
        }
    }

    // ---- saving -----------------------------------------------------------

    fn save_all_clicked(&mut self) {
        self.apply_pending_edits();
        let errors = self.store.save_all();
        self.report_save(errors, statics::EN_STATUS_SAVED_ALL);
    }

    fn save_dirty_clicked(&mut self) {
        self.apply_pending_edits();
        if !self.store.has_dirty() {
            self.status = statics::EN_STATUS_NOTHING_DIRTY.to_string();
            return;
        }
        let errors = self.store.save_dirty();
        self.report_save(errors, statics::EN_STATUS_SAVED_ALL);
    }

    fn save_current_file_clicked(&mut self) {
        self.apply_pending_edits();
        let Some(record) = self.selected.clone() else {
            return;
        };
        match self.store.save_one(&record.file_path) {
            Ok(()) => {
                self.status = format!("Saved {}", record.file_path.display());
                self.last_error = None;
            }
            Err(e) => {
                self.last_error = Some(e.to_string());
            }
        }
    }

    fn report_save(&mut self, errors: Vec<crate::project::ProjectError>, ok_status: &str) {
        if errors.is_empty() {
            self.status = ok_status.to_string();
            self.last_error = None;
        } else {
            self.last_error = Some(
                errors
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join("; "),
            );
        }
    }
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                if ui.button(statics::EN_BTN_OPEN_DIR).clicked() {
                    self.request_open(PendingOpen::Directory);
                }
                if ui.button(statics::EN_BTN_OPEN_FILE).clicked() {
                    self.request_open(PendingOpen::File);
                }

                ui.separator();

                let has_project = self.has_project();
                if ui
                    .add_enabled(has_project, egui::Button::new(statics::EN_BTN_SAVE_ALL))
                    .clicked()
                {
                    self.save_all_clicked();
                }
                if ui
                    .add_enabled(
                        self.store.has_dirty(),
                        egui::Button::new(statics::EN_BTN_SAVE_DIRTY),
                    )
                    .clicked()
                {
                    self.save_dirty_clicked();
                }
                if ui
                    .add_enabled(
                        self.selected.is_some(),
                        egui::Button::new(statics::EN_BTN_SAVE_FILE),
                    )
                    .clicked()
                {
                    self.save_current_file_clicked();
                }

                ui.separator();

                let can_create = has_project && self.selected_kind.is_some();
                if ui
                    .add_enabled(can_create, egui::Button::new(statics::EN_BTN_NEW_RECORD))
                    .clicked()
                {
                    self.new_record_clicked();
                }
                if ui
                    .add_enabled(
                        self.selected.is_some(),
                        egui::Button::new(statics::EN_BTN_DELETE_RECORD),
                    )
                    .clicked()
                {
                    self.confirm_delete = true;
                }

                ui.separator();

                if ui.button(statics::EN_BTN_TOGGLE_THEME).clicked() {
                    self.theme_dark = !self.theme_dark;
                    if self.theme_dark {
                        ctx.set_visuals(egui::Visuals::dark());
                    } else {
                        ctx.set_visuals(egui::Visuals::light());
                    }
                }
                if ui.button(statics::EN_BTN_ABOUT).clicked() {
                    self.about_open = true;
                }
            });
        });

        if self.about_open {
            let mut open = self.about_open;
            egui::Window::new(statics::EN_WINDOW_ABOUT)
                .collapsible(false)
                .open(&mut open)
                .show(ctx, |ui| {
                    ui.heading(statics::EN_ABOUT_HEADING);
                    ui.label(format!(
                        "{} {}",
                        statics::EN_ABOUT_VERSION,
                        env!("CARGO_PKG_VERSION")
                    ));
                    ui.hyperlink_to(statics::EN_PROJECT_REPO, statics::GITHUB_URL);
                });
            self.about_open = open;
        }

        if let Some(pending) = self.pending_open {
            let mut open = true;
            let mut proceed = false;
            let mut cancel = false;
            egui::Window::new(statics::EN_WINDOW_CONFIRM_DISCARD)
                .collapsible(false)
                .resizable(false)
                .open(&mut open)
                .show(ctx, |ui| {
                    ui.label(statics::EN_CONFIRM_DISCARD_PROMPT);
                    ui.horizontal(|ui| {
                        if ui.button(statics::EN_BTN_DISCARD).clicked() {
                            proceed = true;
                        }
                        if ui.button(statics::EN_BTN_CANCEL).clicked() {
                            cancel = true;
                        }
                    });
                });
            if proceed || cancel || !open {
                self.pending_open = None;
            }
            if proceed {
                self.perform_open(pending);
            }
        }

        if self.confirm_delete {
            let mut open = true;
            let mut do_delete = false;
            let mut cancel = false;
            egui::Window::new(statics::EN_WINDOW_CONFIRM_DELETE)
                .collapsible(false)
                .resizable(false)
                .open(&mut open)
                .show(ctx, |ui| {
                    ui.label(statics::EN_CONFIRM_DELETE_PROMPT);
                    ui.horizontal(|ui| {
                        if ui.button(statics::EN_BTN_YES_DELETE).clicked() {
                            do_delete = true;
                        }
                        if ui.button(statics::EN_BTN_CANCEL).clicked() {
                            cancel = true;
                        }
                    });
                });
            if do_delete {
                self.delete_selected();
            }
            if do_delete || cancel || !open {
                self.confirm_delete = false;
            }
        }

        if let Some(err) = self.last_error.clone() {
            egui::TopBottomPanel::top("error_bar").show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.colored_label(egui::Color32::RED, err);
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.small_button(statics::EN_BTN_CANCEL).clicked() {
                            self.last_error = None;
                        }
                    });
                });
            });
        }

        if !self.has_project() {
            egui::CentralPanel::default().show(ctx, |ui| {
                ui.heading(statics::EN_HOME_HEADING);
                ui.label(statics::EN_HOME_INSTRUCTIONS);
            });
            return;
        }

        egui::TopBottomPanel::bottom("bottom_status").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let root_label = self
                    .store
                    .root()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| statics::EN_PLACEHOLDER_NO_PROJECT.to_string());
                ui.monospace(root_label);
                ui.separator();
                ui.label(format!(
                    "{} {}",
                    statics::EN_LABEL_FILES,
                    self.store.file_count()
                ));
                ui.label(format!(
                    "{} {}",
                    statics::EN_LABEL_RECORDS,
                    self.store.record_count()
                ));
                ui.label(format!(
                    "{} {}",
                    statics::EN_LABEL_DIRTY,
                    self.store.dirty_count()
                ));
                ui.separator();
                ui.label(&self.status);
            });
        });

        // Record kinds.
        let kinds: Vec<(String, String)> = self
            .store
            .registry()
            .iter()
            .map(|s| {
                (
                    s.key.clone(),
                    format!("{} ({})", s.label, self.store.records(&s.key).len()),
                )
            })
            .collect();

        egui::SidePanel::left("kinds_panel")
            .resizable(true)
            .default_width(220.0)
            .show(ctx, |ui| {
                ui.heading(statics::EN_HEADING_KINDS);
                ui.separator();
                let row_h = ui.text_style_height(&egui::TextStyle::Body) + 4.0;
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        for (key, text) in &kinds {
                            let selected = self.selected_kind.as_deref() == Some(key.as_str());
                            if Self::selectable_row_left(ui, selected, text, row_h).clicked()
                                && !selected
                            {
                                self.apply_pending_edits();
                                self.selected_kind = Some(key.clone());
                                self.selected = None;
                                self.field_edits.clear();
                            }
                        }
                    });
            });

        // Records of the selected kind, sorted by label.
        let rows: Vec<(Record, String)> = match self.selected_kind.as_deref() {
            Some(kind) => {
                let schema = self.store.registry().get(kind).ok();
                let mut rows: Vec<(Record, String)> = self
                    .store
                    .records(kind)
                    .iter()
                    .map(|record| {
                        let label = schema
                            .and_then(|s| self.store.fields(record).map(|f| record_label(s, f)))
                            .unwrap_or_else(|| statics::EN_PLACEHOLDER_UNNAMED.to_string());
                        let text =
                            Self::row_text(&label, self.store.is_dirty(&record.file_path));
                        (record.clone(), text)
                    })
                    .collect();
                rows.sort_by(|a, b| a.1.to_lowercase().cmp(&b.1.to_lowercase()));
                rows
            }
            None => Vec::new(),
        };

        egui::SidePanel::left("records_panel")
            .resizable(true)
            .default_width(320.0)
            .show(ctx, |ui| {
                ui.heading(statics::EN_HEADING_RECORDS);
                ui.separator();
                if self.selected_kind.is_none() {
                    ui.label(statics::EN_SELECT_KIND);
                    return;
                }
                let row_h = ui.text_style_height(&egui::TextStyle::Body) + 4.0;
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        for (record, text) in &rows {
                            let selected = self.selected.as_ref() == Some(record);
                            if Self::selectable_row_left(ui, selected, text, row_h).clicked()
                                && !selected
                            {
                                self.select_record(record.clone());
                            }
                        }
                    });
            });

        // Declared fields the selected record does not carry yet, offered by
        // the add-field picker.
        let declared_absent: Vec<(String, ValueKind)> = self
            .selected
            .as_ref()
            .and_then(|record| {
                let schema = self.store.registry().get(&record.schema_key).ok()?;
                let fields = self.store.fields(record)?;
                Some(
                    schema
                        .fields
                        .values()
                        .filter(|f| !fields.contains_key(&f.name))
                        .map(|f| (f.name.clone(), f.kind))
                        .collect(),
                )
            })
            .unwrap_or_default();

        // Reference pickers need their id lists before the field loop takes
        // mutable borrows of the edit buffers.
        let ref_options: Vec<Option<Vec<String>>> = self
            .field_edits
            .iter()
            .map(|fe| {
                let kind_key = fe.meta.reference_kind.as_deref()?;
                let discriminator = self.store.registry().discriminator_for_key(kind_key)?;
                Some(self.store.ids_for_discriminator(discriminator))
            })
            .collect();

        egui::CentralPanel::default().show(ctx, |ui| {
            if self.selected.is_none() {
                ui.label(statics::EN_SELECT_RECORD);
                return;
            }
            ui.heading(statics::EN_HEADING_FIELDS);
            ui.separator();

            let mut remove_field: Option<String> = None;

            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    for idx in 0..self.field_edits.len() {
                        let changed;
                        {
                            let fe = &mut self.field_edits[idx];
                            ui.horizontal(|ui| {
                                let label = ui.strong(&fe.meta.label);
                                if !fe.meta.help.is_empty() {
                                    label.on_hover_text(&fe.meta.help);
                                }
                                if fe.meta.auto_inferred {
                                    ui.weak(statics::EN_BADGE_AUTO)
                                        .on_hover_text(statics::EN_HINT_AUTO_FIELD);
                                }
                                ui.weak(fe.meta.kind.label());
                                ui.with_layout(
                                    egui::Layout::right_to_left(egui::Align::Center),
                                    |ui| {
                                        if ui.small_button(statics::EN_BTN_REMOVE).clicked() {
                                            remove_field = Some(fe.meta.name.clone());
                                        }
                                    },
                                );
                            });

                            changed = Self::render_field_widget(
                                ui,
                                fe,
                                ref_options[idx].as_deref(),
                            );

                            if let Some(err) = &fe.error {
                                ui.colored_label(egui::Color32::RED, err);
                            }
                            ui.separator();
                        }
                        if changed {
                            self.harvest_one(idx);
                        }
                    }

                    // Add-field row.
                    ui.horizontal(|ui| {
                        ui.label(statics::EN_LABEL_ADD_FIELD);
                        if !declared_absent.is_empty() {
                            egui::ComboBox::from_id_salt("add_field_declared")
                                .selected_text(statics::EN_PICK_DECLARED)
                                .show_ui(ui, |ui| {
                                    for (name, kind) in &declared_absent {
                                        if ui.selectable_label(false, name).clicked() {
                                            self.add_field_name = name.clone();
                                            self.add_field_kind = *kind;
                                        }
                                    }
                                });
                        }
                        ui.add(
                            egui::TextEdit::singleline(&mut self.add_field_name)
                                .hint_text(statics::EN_LABEL_CUSTOM_NAME)
                                .desired_width(160.0),
                        );
                        egui::ComboBox::from_id_salt("add_field_kind")
                            .selected_text(self.add_field_kind.label())
                            .show_ui(ui, |ui| {
                                for kind in ValueKind::ALL {
                                    ui.selectable_value(
                                        &mut self.add_field_kind,
                                        kind,
                                        kind.label(),
                                    );
                                }
                            });
                        if ui.button(statics::EN_BTN_ADD).clicked() {
                            self.add_field_clicked();
                        }
                    });
                });

            if let Some(name) = remove_field {
                self.remove_field_clicked(&name);
            }
        });
    }
}

impl EditorApp {
    /// Draw the editor widget for one field. Returns true when the buffer
    /// changed and should be harvested back into the store. Raw JSON is the
    /// exception: it only harvests on its apply button, not per keystroke.
    fn render_field_widget(
        ui: &mut egui::Ui,
        fe: &mut FieldEdit,
        ref_ids: Option<&[String]>,
    ) -> bool {
        match &mut fe.edit {
            EditValue::Text(s) => ui
                .add(egui::TextEdit::singleline(s).desired_width(ui.available_width()))
                .changed(),
            EditValue::Integer(v) => {
                let mut drag = egui::DragValue::new(v).speed(1);
                if let Some((min, max)) = fe.meta.bounds {
                    drag = drag.range(min as i64..=max as i64);
                }
                ui.add(drag).changed()
            }
            EditValue::Real(v) => {
                let mut drag = egui::DragValue::new(v).speed(0.1);
                if let Some((min, max)) = fe.meta.bounds {
                    drag = drag.range(min..=max);
                }
                ui.add(drag).changed()
            }
            EditValue::Toggle(b) => ui.checkbox(b, "").changed(),
            EditValue::Lines(text) => ui
                .add(
                    egui::TextEdit::multiline(text)
                        .desired_width(ui.available_width())
                        .desired_rows(3),
                )
                .changed(),
            EditValue::Refs(ids) => {
                let mut changed = false;
                let mut remove: Option<usize> = None;
                let row_h = ui.text_style_height(&egui::TextStyle::Body) + 6.0;
                if !ids.is_empty() {
                    ui.push_id(("ref_table", fe.meta.name.as_str()), |ui| {
                        TableBuilder::new(ui)
                            .striped(true)
                            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
                            .column(Column::remainder().resizable(true))
                            .column(Column::initial(80.0).resizable(false))
                            .body(|mut body| {
                                for (i, id) in ids.iter().enumerate() {
                                    body.row(row_h, |mut row| {
                                        row.col(|ui| {
                                            ui.monospace(id);
                                        });
                                        row.col(|ui| {
                                            if ui
                                                .small_button(statics::EN_BTN_REMOVE)
                                                .clicked()
                                            {
                                                remove = Some(i);
                                            }
                                        });
                                    });
                                }
                            });
                    });
                }
                if let Some(i) = remove {
                    ids.remove(i);
                    changed = true;
                }
                ui.horizontal(|ui| {
                    match ref_ids {
                        Some(options) => {
                            egui::ComboBox::from_id_salt(("ref_pick", fe.meta.name.as_str()))
                                .selected_text(fe.ref_pick.as_str())
                                .show_ui(ui, |ui| {
                                    for option in options {
                                        ui.selectable_value(
                                            &mut fe.ref_pick,
                                            option.clone(),
                                            option,
                                        );
                                    }
                                });
                        }
                        None => {
                            ui.add(
                                egui::TextEdit::singleline(&mut fe.ref_pick)
                                    .hint_text(statics::EN_HINT_REF_ID)
                                    .desired_width(160.0),
                            );
                        }
                    }
                    if ui.button(statics::EN_BTN_ADD).clicked() {
                        let pick = fe.ref_pick.trim().to_string();
                        if !pick.is_empty() && !ids.iter().any(|i| *i == pick) {
                            ids.push(pick);
                            changed = true;
                        }
                        fe.ref_pick.clear();
                    }
                });
                changed
            }
            EditValue::Raw(text) => {
                ui.add(
                    egui::TextEdit::multiline(text)
                        .font(egui::TextStyle::Monospace)
                        .desired_width(ui.available_width())
                        .desired_rows(6),
                );
                ui.button(statics::EN_BTN_APPLY).clicked()
            }
            EditValue::Choice { selected, ad_hoc } => {
                let items = Self::choice_items(&fe.meta.choices, selected);
                let mut changed = false;
                ui.horizontal(|ui| {
                    egui::ComboBox::from_id_salt(("choice", fe.meta.name.as_str()))
                        .selected_text(selected.as_str())
                        .show_ui(ui, |ui| {
                            for item in &items {
                                if ui
                                    .selectable_value(selected, item.clone(), item)
                                    .changed()
                                {
                                    changed = true;
                                }
                            }
                        });
                    if ui
                        .add(
                            egui::TextEdit::singleline(selected)
                                .hint_text(statics::EN_HINT_CUSTOM_CHOICE)
                                .desired_width(160.0),
                        )
                        .changed()
                    {
                        changed = true;
                    }
                });
                if changed {
                    *ad_hoc =
                        !selected.is_empty() && !fe.meta.choices.iter().any(|c| c == selected);
                }
                changed
            }
        }
    }
}
