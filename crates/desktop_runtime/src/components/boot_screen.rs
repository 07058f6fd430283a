use super::*;
use crate::icons::{IconName, IconSize, ShellIcon};

#[component]
pub(super) fn BootScreen() -> impl IntoView {
    view! {
        <div class="boot-screen" role="status" aria-label="Starting up">
            <ShellIcon icon=IconName::Logo size=IconSize::Md />
            <div class="boot-progress">
                <div class="boot-progress-bar"></div>
            </div>
        </div>
    }
}
