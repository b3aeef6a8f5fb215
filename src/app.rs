//! Markpad Application Shell
//!
//! Owns the live edit surface and the visible widgets: the command
//! toolbar, the settings menu, and the raw text editor. The shell is a
//! translation layer: egui key events become [`KeyEvent`]s for the
//! dispatcher, toolbar clicks become orchestrator calls, and surface
//! state is synchronised with the widget every frame.
//!
//! Programmatic edits go through the widget's own text state (value plus
//! cursor range), the same path a keystroke takes, so the built-in text
//! edit undoer records them and Ctrl+Z behaves as if the user had typed
//! the markup. Overwriting the buffer without updating the widget state
//! would bypass that history.

use std::rc::Rc;

use eframe::egui::{
    self,
    text::{CCursor, CCursorRange},
    text_edit::TextEditState,
    FontId, ScrollArea, TextEdit, Ui,
};
use log::{debug, info};

use crate::commands::chord::KeyEvent;
use crate::commands::{default_commands, Command};
use crate::config::{load_config, save_config_silent, Settings, Theme};
use crate::editor::hotkeys::{self, HotkeyOptions};
use crate::editor::orchestrator::CommandOrchestrator;
use crate::editor::surface::EditSurface;
use crate::string_utils::{byte_index_to_char_index, char_index_to_byte_index};
use crate::ui::toolbar;

/// Stable widget id for the editor, so its state survives frames.
const EDITOR_ID: &str = "markpad_editor";

/// The Markpad application.
pub struct MarkpadApp {
    /// The live surface commands operate on. The shell owns its
    /// lifetime; the orchestrator only holds a weak handle.
    surface: Rc<EditSurface>,
    orchestrator: CommandOrchestrator,
    /// Active command registry. Seeded from the defaults; a host build
    /// may append or remove entries freely.
    registry: Vec<Command>,
    settings: Settings,
    settings_dirty: bool,
}

impl MarkpadApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        info!("Initializing Markpad");

        let settings = load_config();
        let surface = Rc::new(EditSurface::new(""));
        let orchestrator = CommandOrchestrator::new(&surface);

        // The host-facing change notification: fires for typed and
        // command-driven edits alike.
        surface.subscribe(|text| debug!("buffer changed ({} bytes)", text.len()));

        if settings.auto_focus {
            surface.request_focus();
        }

        let app = Self {
            surface,
            orchestrator,
            registry: default_commands(),
            settings,
            settings_dirty: false,
        };
        app.apply_theme(&cc.egui_ctx);
        app
    }

    fn editor_id(&self) -> egui::Id {
        egui::Id::new(EDITOR_ID)
    }

    fn apply_theme(&self, ctx: &egui::Context) {
        match self.settings.theme {
            Theme::Dark => ctx.set_visuals(egui::Visuals::dark()),
            Theme::Light => ctx.set_visuals(egui::Visuals::light()),
            // eframe follows the platform theme on its own.
            Theme::System => {}
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Key Interception
    // ─────────────────────────────────────────────────────────────────────────

    /// Run the hotkey dispatcher over this frame's key presses, removing
    /// consumed events so the text widget never sees them (the egui
    /// equivalent of `preventDefault`).
    fn intercept_hotkeys(&mut self, ctx: &egui::Context) {
        // Only intercept while the editor itself has focus.
        if ctx.memory(|m| m.focused()) != Some(self.editor_id()) {
            return;
        }

        let options = HotkeyOptions {
            tab_size: self.settings.tab_size,
        };
        let registry = &self.registry;
        let orchestrator = &self.orchestrator;

        ctx.input_mut(|input| {
            input.events.retain(|event| {
                let egui::Event::Key {
                    key,
                    pressed: true,
                    modifiers,
                    ..
                } = event
                else {
                    return true;
                };
                let key_event = KeyEvent::new(
                    key.name(),
                    modifiers.ctrl,
                    modifiers.mac_cmd,
                    modifiers.shift,
                    modifiers.alt,
                );
                !hotkeys::dispatch(&key_event, registry, orchestrator, options)
            });
        });
    }

    /// Push a pending programmatic edit into the widget state: cursor
    /// range in character coordinates plus focus. Combined with the new
    /// buffer text below, this is exactly what a keystroke leaves
    /// behind, so the widget's undoer snapshots it.
    fn apply_pending_focus(&mut self, ctx: &egui::Context) {
        if !self.surface.take_focus_request() {
            return;
        }

        let value = self.surface.value();
        let (start, end) = self.surface.selection();
        let range = CCursorRange::two(
            CCursor::new(byte_index_to_char_index(&value, start)),
            CCursor::new(byte_index_to_char_index(&value, end)),
        );

        let mut state = TextEditState::load(ctx, self.editor_id()).unwrap_or_default();
        state.cursor.set_char_range(Some(range));
        state.store(ctx, self.editor_id());
        ctx.memory_mut(|memory| memory.request_focus(self.editor_id()));
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Panels
    // ─────────────────────────────────────────────────────────────────────────

    fn show_toolbar_panel(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("markpad_toolbar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if self.settings.show_toolbar {
                    if let Some(command) = toolbar::show(ui, &self.registry) {
                        self.orchestrator.execute(&command);
                    }
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    self.show_settings_menu(ui, ctx);
                });
            });
        });
    }

    fn show_settings_menu(&mut self, ui: &mut Ui, ctx: &egui::Context) {
        ui.menu_button("⚙", |ui| {
            let before = self.settings.clone();

            ui.label("Theme");
            for theme in Theme::all() {
                ui.radio_value(&mut self.settings.theme, *theme, theme.label());
            }
            ui.separator();
            ui.add(
                egui::Slider::new(
                    &mut self.settings.tab_size,
                    Settings::MIN_TAB_SIZE..=Settings::MAX_TAB_SIZE,
                )
                .text("Tab size"),
            );
            ui.add(
                egui::Slider::new(
                    &mut self.settings.font_size,
                    Settings::MIN_FONT_SIZE..=Settings::MAX_FONT_SIZE,
                )
                .text("Font size"),
            );
            ui.separator();
            ui.checkbox(&mut self.settings.word_wrap, "Word wrap");
            ui.checkbox(&mut self.settings.show_toolbar, "Show toolbar");
            ui.checkbox(&mut self.settings.auto_focus, "Focus editor on start");

            if self.settings != before {
                self.settings_dirty = true;
                if self.settings.theme != before.theme {
                    self.apply_theme(ctx);
                }
            }
        })
        .response
        .on_hover_text("Settings");
    }

    fn show_editor_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            self.show_editor(ui);
        });
    }

    fn show_editor(&mut self, ui: &mut Ui) {
        let mut text = self.surface.value();
        let font_size = self.settings.font_size;
        let word_wrap = self.settings.word_wrap;

        let scroll_output = ScrollArea::vertical()
            .id_source("markpad_editor_scroll")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                let mut layouter = move |ui: &Ui, text: &str, wrap_width: f32| {
                    let font_id = FontId::monospace(font_size);
                    let layout_job = if word_wrap {
                        egui::text::LayoutJob::simple(
                            text.to_owned(),
                            font_id,
                            ui.visuals().text_color(),
                            wrap_width,
                        )
                    } else {
                        egui::text::LayoutJob::simple_singleline(
                            text.to_owned(),
                            font_id,
                            ui.visuals().text_color(),
                        )
                    };
                    ui.fonts(|f| f.layout_job(layout_job))
                };

                TextEdit::multiline(&mut text)
                    .id(self.editor_id())
                    .frame(false)
                    .font(FontId::monospace(font_size))
                    .desired_width(f32::INFINITY)
                    .lock_focus(true)
                    .layouter(&mut layouter)
                    .show(ui)
            });

        let output = scroll_output.inner;

        // Widget cursors are character-indexed; the surface works in
        // byte offsets.
        let selection = output.cursor_range.map(|range| {
            let a = range.primary.ccursor.index;
            let b = range.secondary.ccursor.index;
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            (
                char_index_to_byte_index(&text, lo),
                char_index_to_byte_index(&text, hi),
            )
        });

        if output.response.changed() {
            let fallback = (text.len(), text.len());
            self.surface.commit_user_edit(&text, selection.unwrap_or(fallback));
        } else if let Some(selection) = selection {
            self.surface.sync_selection(selection);
        }

        self.surface.set_scroll_offset(scroll_output.state.offset.y);
    }

    fn save_settings_if_dirty(&mut self) {
        if self.settings_dirty && save_config_silent(&self.settings) {
            self.settings_dirty = false;
        }
    }
}

impl eframe::App for MarkpadApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Hotkeys run before the widget renders so the edit (and the
        // removed key event) land in the same frame.
        self.intercept_hotkeys(ctx);

        self.show_toolbar_panel(ctx);

        // Toolbar clicks and hotkeys may both have queued an edit.
        self.apply_pending_focus(ctx);

        self.show_editor_panel(ctx);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        info!("Application exiting");
        self.save_settings_if_dirty();
    }

    fn save(&mut self, _storage: &mut dyn eframe::Storage) {
        self.save_settings_if_dirty();
    }
}
