//! Menu bar menus as data so the component only renders and dispatches.

use desktop_app_contract::AppId;

use crate::{
    model::{DesktopState, FinderViewMode},
    reducer::DesktopAction,
};

#[derive(Debug, Clone, PartialEq)]
pub enum MenuCommand {
    Dispatch(DesktopAction),
    /// Shows the lock screen overlay owned by the menu bar.
    LockScreen,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct MenuItem {
    pub label: &'static str,
    pub shortcut: Option<&'static str>,
    pub command: Option<MenuCommand>,
    pub disabled: bool,
    pub checked: bool,
    pub separator: bool,
    pub submenu: Vec<MenuItem>,
}

impl MenuItem {
    fn action(label: &'static str, action: DesktopAction) -> Self {
        Self {
            label,
            command: Some(MenuCommand::Dispatch(action)),
            ..Self::default()
        }
    }

    fn inert(label: &'static str) -> Self {
        Self {
            label,
            ..Self::default()
        }
    }

    fn separator() -> Self {
        Self {
            separator: true,
            ..Self::default()
        }
    }

    fn shortcut(mut self, shortcut: &'static str) -> Self {
        self.shortcut = Some(shortcut);
        self
    }

    fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    fn submenu(mut self, items: Vec<MenuItem>) -> Self {
        self.submenu = items;
        self
    }

    /// Whether clicking the item does something.
    pub fn is_actionable(&self) -> bool {
        !self.disabled && !self.separator && self.command.is_some()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Menu {
    pub id: &'static str,
    pub label: &'static str,
    pub items: Vec<MenuItem>,
}

fn open(app_id: AppId) -> DesktopAction {
    DesktopAction::OpenApp { app_id }
}

fn apple_menu() -> Vec<MenuItem> {
    vec![
        MenuItem::action("About This Portfolio", open(AppId::About)),
        MenuItem::separator(),
        MenuItem::action("System Settings...", open(AppId::Settings)),
        MenuItem::action("App Store...", DesktopAction::OpenLaunchpad),
        MenuItem::separator(),
        MenuItem::inert("Recent Items").submenu(vec![
            MenuItem::action("Projects", open(AppId::Projects)),
            MenuItem::action("Resume.pdf", open(AppId::Resume)),
        ]),
        MenuItem::separator(),
        MenuItem {
            label: "Lock Screen",
            shortcut: Some("⌃⌘Q"),
            command: Some(MenuCommand::LockScreen),
            ..MenuItem::default()
        },
    ]
}

fn file_menu(has_active: bool) -> Vec<MenuItem> {
    vec![
        MenuItem::action("New Finder Window", open(AppId::Finder)).shortcut("⌘N"),
        MenuItem::action("New Terminal", open(AppId::Terminal)),
        MenuItem::inert("New Folder").shortcut("⇧⌘N").disabled(true),
        MenuItem::separator(),
        MenuItem::inert("Open With").submenu(vec![
            MenuItem::inert("Default").checked(true),
            MenuItem::action("Terminal", open(AppId::Terminal)),
        ]),
        MenuItem::separator(),
        MenuItem::action("Close Window", DesktopAction::CloseActiveWindow)
            .shortcut("⌘W")
            .disabled(!has_active),
    ]
}

fn edit_menu() -> Vec<MenuItem> {
    ["Undo", "Redo", "Cut", "Copy", "Paste"]
        .into_iter()
        .map(|label| MenuItem::inert(label).disabled(true))
        .chain([
            MenuItem::separator(),
            MenuItem::action("Spotlight Search", DesktopAction::ToggleSpotlight)
                .shortcut("⌘Space"),
        ])
        .collect()
}

fn view_menu(mode: FinderViewMode) -> Vec<MenuItem> {
    let mut items: Vec<_> = FinderViewMode::ALL
        .into_iter()
        .zip(["⌥⌘1", "⌥⌘2", "⌥⌘3"])
        .map(|(candidate, shortcut)| {
            MenuItem::action(
                candidate.label(),
                DesktopAction::SetFinderViewMode { mode: candidate },
            )
            .shortcut(shortcut)
            .checked(candidate == mode)
        })
        .collect();
    items.extend([
        MenuItem::separator(),
        MenuItem::action("Toggle Appearance", DesktopAction::ToggleTheme).shortcut("⇧⌘T"),
    ]);
    items
}

fn go_menu() -> Vec<MenuItem> {
    vec![
        MenuItem::action("Home", open(AppId::Finder)).shortcut("⇧⌘H"),
        MenuItem::action("Projects", open(AppId::Projects)),
        MenuItem::action("Photos", open(AppId::Gallery)),
        MenuItem::separator(),
        MenuItem::action("Applications", DesktopAction::OpenLaunchpad).shortcut("⌘A"),
    ]
}

fn window_menu(has_active: bool) -> Vec<MenuItem> {
    vec![
        MenuItem::action("Minimize", DesktopAction::MinimizeActiveWindow)
            .shortcut("⌘M")
            .disabled(!has_active),
        MenuItem::action("Zoom", DesktopAction::ToggleMaximizeActiveWindow).disabled(!has_active),
        MenuItem::separator(),
        MenuItem::inert("Bring All to Front").disabled(true),
    ]
}

fn help_menu() -> Vec<MenuItem> {
    vec![
        MenuItem::action("Portfolio Help", open(AppId::About)),
        MenuItem::separator(),
        MenuItem::action("Keyboard Shortcuts", open(AppId::Settings)),
    ]
}

/// Menus left to right, after the logo menu.
pub fn menu_bar_menus(state: &DesktopState) -> Vec<Menu> {
    let has_active = state.active_window_id.is_some();
    vec![
        Menu {
            id: "apple",
            label: "",
            items: apple_menu(),
        },
        Menu {
            id: "file",
            label: "File",
            items: file_menu(has_active),
        },
        Menu {
            id: "edit",
            label: "Edit",
            items: edit_menu(),
        },
        Menu {
            id: "view",
            label: "View",
            items: view_menu(state.finder_view_mode),
        },
        Menu {
            id: "go",
            label: "Go",
            items: go_menu(),
        },
        Menu {
            id: "window",
            label: "Window",
            items: window_menu(has_active),
        },
        Menu {
            id: "help",
            label: "Help",
            items: help_menu(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn menu<'a>(menus: &'a [Menu], id: &str) -> &'a Menu {
        menus.iter().find(|m| m.id == id).expect("menu")
    }

    #[test]
    fn view_menu_checks_current_finder_mode() {
        let mut state = DesktopState::default();
        state.finder_view_mode = FinderViewMode::List;
        let menus = menu_bar_menus(&state);
        let checked: Vec<_> = menu(&menus, "view")
            .items
            .iter()
            .filter(|item| item.checked)
            .map(|item| item.label)
            .collect();
        assert_eq!(checked, vec!["as List"]);
    }

    #[test]
    fn window_commands_disable_without_active_window() {
        let state = DesktopState::default();
        let menus = menu_bar_menus(&state);
        assert!(menu(&menus, "window")
            .items
            .iter()
            .filter(|item| !item.separator)
            .all(|item| !item.is_actionable()));

        let close = menu(&menus, "file")
            .items
            .iter()
            .find(|item| item.label == "Close Window")
            .expect("close item");
        assert!(close.disabled);
    }

    #[test]
    fn menu_labels_follow_mac_order() {
        let labels: Vec<_> = menu_bar_menus(&DesktopState::default())
            .into_iter()
            .map(|m| m.id)
            .collect();
        assert_eq!(
            labels,
            vec!["apple", "file", "edit", "view", "go", "window", "help"]
        );
    }
}
