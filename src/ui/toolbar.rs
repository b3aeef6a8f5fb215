//! Toolbar Strip
//!
//! Renders the command registry as a row of icon buttons. Leaf commands
//! are plain buttons; group commands open a menu of their children. The
//! toolbar only *reports* which command was clicked; the shell forwards
//! it to the orchestrator, keeping presentation and execution separate.

use egui::{Button, RichText, Ui, Vec2};

use crate::commands::{Command, CommandKind};

/// Size of toolbar icon buttons.
const ICON_BUTTON_SIZE: Vec2 = Vec2::new(26.0, 22.0);

/// Render the toolbar for `commands` and return the clicked leaf
/// command, if any.
pub fn show(ui: &mut Ui, commands: &[Command]) -> Option<Command> {
    let mut clicked: Option<Command> = None;

    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 2.0;

        for command in commands {
            match &command.kind {
                CommandKind::Leaf(_) => {
                    if icon_button(ui, command) {
                        clicked = Some(command.clone());
                    }
                }
                CommandKind::Group(children) => {
                    ui.menu_button(RichText::new(&command.icon).strong(), |ui| {
                        for child in children {
                            if ui.button(child.tooltip()).clicked() {
                                clicked = Some(child.clone());
                                ui.close_menu();
                            }
                        }
                    })
                    .response
                    .on_hover_text(&command.label);
                }
            }
        }
    });

    clicked
}

/// One icon button with the command's tooltip. Returns true on click.
fn icon_button(ui: &mut Ui, command: &Command) -> bool {
    ui.add(Button::new(RichText::new(&command.icon)).min_size(ICON_BUTTON_SIZE))
        .on_hover_text(command.tooltip())
        .clicked()
}
