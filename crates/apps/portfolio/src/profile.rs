//! Read-only profile pages: About, Skills, Experience and Resume.

use desktop_app_contract::{AppId, AppServices};
use leptos::*;

use crate::content::{EDUCATION, EXPERIENCE, PROFILE, PROJECTS, RESUME_PDF, SKILL_GROUPS};

/// Average proficiency of a skill group, rounded down.
pub fn average_level(levels: &[u8]) -> u8 {
    if levels.is_empty() {
        return 0;
    }
    let total: u32 = levels.iter().map(|level| u32::from(*level)).sum();
    (total / levels.len() as u32) as u8
}

/// Tech tags across every role, deduplicated in first-seen order.
pub fn experience_tech() -> Vec<&'static str> {
    let mut tags = Vec::new();
    for role in EXPERIENCE {
        for tech in role.tech {
            if !tags.contains(tech) {
                tags.push(*tech);
            }
        }
    }
    tags
}

#[component]
/// About page with quick links to other apps.
pub fn AboutApp(
    /// Runtime services used for the call-to-action buttons.
    services: AppServices,
) -> impl IntoView {
    view! {
        <div class="app-shell app-about-shell">
            <header class="about-hero">
                <img class="about-avatar" src=PROFILE.avatar alt=PROFILE.name />
                <div>
                    <h1>{PROFILE.name}</h1>
                    <p class="about-role">{PROFILE.role} " · " {PROFILE.location}</p>
                </div>
            </header>
            <p class="about-summary">{PROFILE.summary}</p>
            <ul class="about-highlights">
                {PROFILE.highlights.iter().map(|line| view! { <li>{*line}</li> }).collect_view()}
            </ul>
            <div class="about-stats">
                <div><strong>{PROJECTS.len()}</strong><span>"Projects"</span></div>
                <div><strong>{EXPERIENCE.len()}</strong><span>"Roles"</span></div>
                <div><strong>{SKILL_GROUPS.iter().map(|group| group.skills.len()).sum::<usize>()}</strong><span>"Skills"</span></div>
            </div>
            <div class="about-actions">
                <button type="button" on:click=move |_| services.shell.open_app(AppId::Projects)>"View Projects"</button>
                <button type="button" on:click=move |_| services.shell.open_app(AppId::Contact)>"Contact Me"</button>
                <button type="button" on:click=move |_| services.shell.open_external_url(PROFILE.github_url)>"GitHub"</button>
            </div>
        </div>
    }
}

#[component]
/// Skill groups with proficiency bars.
pub fn SkillsApp() -> impl IntoView {
    view! {
        <div class="app-shell app-skills-shell">
            <h1>"Skills"</h1>
            <div class="skill-groups">
                {SKILL_GROUPS
                    .iter()
                    .map(|group| {
                        let levels: Vec<u8> = group.skills.iter().map(|skill| skill.level).collect();
                        view! {
                            <section class="skill-group">
                                <header>
                                    <h2>{group.title}</h2>
                                    <span>{format!("{}% avg", average_level(&levels))}</span>
                                </header>
                                {group
                                    .skills
                                    .iter()
                                    .map(|skill| {
                                        view! {
                                            <div class="skill-row">
                                                <span>{skill.name}</span>
                                                <div
                                                    class="skill-bar"
                                                    role="meter"
                                                    aria-valuemin="0"
                                                    aria-valuemax="100"
                                                    aria-valuenow=skill.level.to_string()
                                                >
                                                    <div class="skill-fill" style=format!("width:{}%;", skill.level)></div>
                                                </div>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </section>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
/// Work history timeline.
pub fn ExperienceApp() -> impl IntoView {
    view! {
        <div class="app-shell app-experience-shell">
            <h1>"Experience"</h1>
            <ol class="timeline">
                {EXPERIENCE
                    .iter()
                    .map(|role| {
                        view! {
                            <li class="timeline-item">
                                <header>
                                    <h2>{role.title}</h2>
                                    <span class="timeline-period">{role.period}</span>
                                </header>
                                <p class="timeline-company">{role.company} " · " {role.location}</p>
                                <ul>{role.points.iter().map(|point| view! { <li>{*point}</li> }).collect_view()}</ul>
                                <ul class="tag-list">{role.tech.iter().map(|tech| view! { <li>{*tech}</li> }).collect_view()}</ul>
                            </li>
                        }
                    })
                    .collect_view()}
            </ol>
            <footer class="app-statusbar">{format!("Worked with {}", experience_tech().join(", "))}</footer>
        </div>
    }
}

#[component]
/// Resume summary with a link to the PDF.
pub fn ResumeApp(
    /// Runtime services used to open the PDF.
    services: AppServices,
) -> impl IntoView {
    view! {
        <div class="app-shell app-resume-shell">
            <header class="resume-header">
                <div>
                    <h1>{PROFILE.name}</h1>
                    <p>{PROFILE.role} " · " {PROFILE.email}</p>
                </div>
                <button type="button" on:click=move |_| services.shell.open_external_url(RESUME_PDF)>
                    "Download PDF"
                </button>
            </header>
            <section>
                <h2>"Summary"</h2>
                <p>{PROFILE.summary}</p>
            </section>
            <section>
                <h2>"Experience"</h2>
                {EXPERIENCE
                    .iter()
                    .map(|role| {
                        view! {
                            <div class="resume-entry">
                                <strong>{role.title} ", " {role.company}</strong>
                                <span>{role.period}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </section>
            <section>
                <h2>"Education"</h2>
                {EDUCATION
                    .iter()
                    .map(|(degree, school, period)| {
                        view! {
                            <div class="resume-entry">
                                <strong>{*degree} ", " {*school}</strong>
                                <span>{*period}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </section>
            <section>
                <h2>"Skills"</h2>
                <p>
                    {SKILL_GROUPS
                        .iter()
                        .flat_map(|group| group.skills.iter().map(|skill| skill.name))
                        .collect::<Vec<_>>()
                        .join(" · ")}
                </p>
            </section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn average_level_rounds_down_and_handles_empty() {
        assert_eq!(average_level(&[95, 85, 75, 70, 80]), 81);
        assert_eq!(average_level(&[100, 99]), 99);
        assert_eq!(average_level(&[]), 0);
    }

    #[test]
    fn experience_tech_is_deduplicated() {
        let tech = experience_tech();
        assert_eq!(tech.first(), Some(&"Rust"));
        let mut sorted = tech.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), tech.len());
    }
}
