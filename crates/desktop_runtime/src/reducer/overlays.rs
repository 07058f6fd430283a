//! Reducer helpers for spotlight, launchpad, and Finder view transitions.

use crate::{
    model::DesktopState,
    reducer::{open_app, DesktopAction, ReducerError, RuntimeEffect},
    spotlight::{self, SpotlightCommand},
};

pub(super) fn reduce_overlay_action(
    state: &mut DesktopState,
    action: &DesktopAction,
    effects: &mut Vec<RuntimeEffect>,
) -> Result<bool, ReducerError> {
    match action {
        DesktopAction::ToggleSpotlight => {
            if state.spotlight.open {
                close_spotlight(state);
            } else {
                state.spotlight.open = true;
                state.spotlight.query.clear();
                state.spotlight.selected_index = 0;
            }
        }
        DesktopAction::CloseSpotlight => close_spotlight(state),
        DesktopAction::SetSpotlightQuery { query } => {
            state.spotlight.query = query.clone();
            state.spotlight.selected_index = 0;
        }
        DesktopAction::MoveSpotlightSelection { delta } => {
            let len = spotlight::search(&state.spotlight.query).len();
            state.spotlight.selected_index =
                spotlight::wrap_selection(state.spotlight.selected_index, *delta, len);
        }
        DesktopAction::ActivateSpotlightResult { index } => {
            let results = spotlight::search(&state.spotlight.query);
            let index = index.unwrap_or(state.spotlight.selected_index);
            let Some(result) = results.into_iter().nth(index) else {
                return Ok(true);
            };
            match result.command {
                SpotlightCommand::OpenApp(app_id) => {
                    open_app(state, app_id);
                }
                SpotlightCommand::OpenUrl(url) => {
                    effects.push(RuntimeEffect::OpenExternalUrl(url.to_string()));
                }
                SpotlightCommand::ToggleTheme => {
                    state.appearance.theme_mode = state.appearance.theme_mode.toggled();
                    effects.push(RuntimeEffect::PersistTheme);
                }
            }
            close_spotlight(state);
        }
        DesktopAction::OpenLaunchpad => {
            state.launchpad.open = true;
            state.launchpad.query.clear();
        }
        DesktopAction::CloseLaunchpad => state.launchpad.open = false,
        DesktopAction::SetLaunchpadQuery { query } => state.launchpad.query = query.clone(),
        DesktopAction::LaunchFromLaunchpad { app_id } => {
            open_app(state, *app_id);
            state.launchpad.open = false;
        }
        DesktopAction::DismissOverlays => {
            state.launchpad.open = false;
            if state.spotlight.open {
                close_spotlight(state);
            }
        }
        DesktopAction::SetFinderViewMode { mode } => state.finder_view_mode = *mode,
        _ => return Ok(false),
    }

    Ok(true)
}

fn close_spotlight(state: &mut DesktopState) {
    state.spotlight.open = false;
    state.spotlight.query.clear();
}

#[cfg(test)]
mod tests {
    use desktop_app_contract::{AppId, ThemeMode};
    use pretty_assertions::assert_eq;

    use crate::{
        model::{FinderViewMode, InteractionState},
        reducer::reduce_desktop,
        spotlight::GITHUB_URL,
    };

    use super::*;

    fn reduce(state: &mut DesktopState, action: DesktopAction) -> Vec<RuntimeEffect> {
        reduce_desktop(state, &mut InteractionState::default(), action).expect("reduce")
    }

    #[test]
    fn toggling_spotlight_resets_query_and_selection() {
        let mut state = DesktopState::default();
        reduce(&mut state, DesktopAction::ToggleSpotlight);
        reduce(
            &mut state,
            DesktopAction::SetSpotlightQuery {
                query: "pro".to_string(),
            },
        );
        reduce(&mut state, DesktopAction::MoveSpotlightSelection { delta: 1 });
        reduce(&mut state, DesktopAction::ToggleSpotlight);
        assert!(!state.spotlight.open);
        assert_eq!(state.spotlight.query, "");

        reduce(&mut state, DesktopAction::ToggleSpotlight);
        assert!(state.spotlight.open);
        assert_eq!(state.spotlight.selected_index, 0);
    }

    #[test]
    fn selection_wraps_over_filtered_results() {
        let mut state = DesktopState::default();
        reduce(&mut state, DesktopAction::ToggleSpotlight);
        reduce(
            &mut state,
            DesktopAction::SetSpotlightQuery {
                query: "open".to_string(),
            },
        );
        reduce(&mut state, DesktopAction::MoveSpotlightSelection { delta: -1 });
        assert_eq!(state.spotlight.selected_index, 1);
        reduce(&mut state, DesktopAction::MoveSpotlightSelection { delta: 1 });
        assert_eq!(state.spotlight.selected_index, 0);
    }

    #[test]
    fn activating_results_runs_them_and_closes_spotlight() {
        let mut state = DesktopState::default();
        reduce(&mut state, DesktopAction::ToggleSpotlight);
        reduce(
            &mut state,
            DesktopAction::SetSpotlightQuery {
                query: "skills".to_string(),
            },
        );
        reduce(
            &mut state,
            DesktopAction::ActivateSpotlightResult { index: None },
        );
        assert!(state.is_app_open(AppId::Skills));
        assert!(!state.spotlight.open);

        reduce(&mut state, DesktopAction::ToggleSpotlight);
        reduce(
            &mut state,
            DesktopAction::SetSpotlightQuery {
                query: "git".to_string(),
            },
        );
        let effects = reduce(
            &mut state,
            DesktopAction::ActivateSpotlightResult { index: Some(0) },
        );
        assert_eq!(
            effects,
            vec![RuntimeEffect::OpenExternalUrl(GITHUB_URL.to_string())]
        );

        reduce(&mut state, DesktopAction::ToggleSpotlight);
        reduce(
            &mut state,
            DesktopAction::SetSpotlightQuery {
                query: "theme".to_string(),
            },
        );
        reduce(
            &mut state,
            DesktopAction::ActivateSpotlightResult { index: None },
        );
        assert_eq!(state.appearance.theme_mode, ThemeMode::Light);
    }

    #[test]
    fn activating_with_no_results_keeps_spotlight_open() {
        let mut state = DesktopState::default();
        reduce(&mut state, DesktopAction::ToggleSpotlight);
        reduce(
            &mut state,
            DesktopAction::SetSpotlightQuery {
                query: "nothing matches".to_string(),
            },
        );
        let effects = reduce(
            &mut state,
            DesktopAction::ActivateSpotlightResult { index: None },
        );
        assert!(effects.is_empty());
        assert!(state.spotlight.open);
    }

    #[test]
    fn launchpad_launch_opens_app_and_hides_grid() {
        let mut state = DesktopState::default();
        reduce(&mut state, DesktopAction::OpenLaunchpad);
        reduce(
            &mut state,
            DesktopAction::SetLaunchpadQuery {
                query: "cam".to_string(),
            },
        );
        reduce(
            &mut state,
            DesktopAction::LaunchFromLaunchpad {
                app_id: AppId::Camera,
            },
        );
        assert!(!state.launchpad.open);
        assert!(state.is_app_open(AppId::Camera));

        reduce(&mut state, DesktopAction::OpenLaunchpad);
        assert_eq!(state.launchpad.query, "");
    }

    #[test]
    fn escape_dismisses_every_overlay() {
        let mut state = DesktopState::default();
        reduce(&mut state, DesktopAction::OpenLaunchpad);
        reduce(&mut state, DesktopAction::ToggleSpotlight);
        reduce(&mut state, DesktopAction::DismissOverlays);
        assert!(!state.launchpad.open);
        assert!(!state.spotlight.open);
    }

    #[test]
    fn finder_view_mode_is_stored() {
        let mut state = DesktopState::default();
        reduce(
            &mut state,
            DesktopAction::SetFinderViewMode {
                mode: FinderViewMode::Column,
            },
        );
        assert_eq!(state.finder_view_mode, FinderViewMode::Column);
    }
}
