//! Projects showcase with search across name, description and tech.

use desktop_app_contract::AppServices;
use leptos::*;

use crate::content::{Project, PROJECTS};

/// Projects whose name, tagline, description or tech tags contain `query`
/// (case-insensitive). A blank query matches everything.
pub fn search_projects(query: &str) -> Vec<Project> {
    let query = query.trim().to_lowercase();
    PROJECTS
        .into_iter()
        .filter(|project| {
            query.is_empty()
                || project.name.to_lowercase().contains(&query)
                || project.tagline.to_lowercase().contains(&query)
                || project.description.to_lowercase().contains(&query)
                || project
                    .tech
                    .iter()
                    .any(|tech| tech.to_lowercase().contains(&query))
        })
        .collect()
}

#[component]
fn ProjectCard(project: Project, services: AppServices) -> impl IntoView {
    view! {
        <article class="project-card" style=format!("--accent:{};", project.color)>
            <header>
                <h3>{project.name}</h3>
                <span class="project-year">{project.year}</span>
            </header>
            <p class="project-tagline">{project.tagline}</p>
            <p>{project.description}</p>
            <ul class="tag-list">
                {project.tech.iter().map(|tech| view! { <li>{*tech}</li> }).collect_view()}
            </ul>
            <div class="project-links">
                <button
                    type="button"
                    on:click=move |_| services.shell.open_external_url(project.repo_url)
                >
                    "Source"
                </button>
                {project.live_url.map(|url| {
                    view! {
                        <button type="button" on:click=move |_| services.shell.open_external_url(url)>
                            "Live demo"
                        </button>
                    }
                })}
            </div>
        </article>
    }
}

#[component]
/// Project grid with a search field.
pub fn ProjectsApp(
    /// Runtime services used to open project links.
    services: AppServices,
) -> impl IntoView {
    let query = create_rw_signal(String::new());
    let results = create_memo(move |_| query.with(|query| search_projects(query)));

    view! {
        <div class="app-shell app-projects-shell">
            <header class="app-header">
                <h1>"Projects"</h1>
                <input
                    class="app-search"
                    type="search"
                    placeholder="Search by name or technology"
                    prop:value=move || query.get()
                    on:input=move |ev| query.set(event_target_value(&ev))
                />
            </header>
            <Show
                when=move || !results.with(Vec::is_empty)
                fallback=move || view! { <p class="app-empty">{move || format!("No projects match \"{}\"", query.get())}</p> }
            >
                <div class="project-grid">
                    <For
                        each=move || results.get()
                        key=|project| project.id
                        children=move |project| view! { <ProjectCard project=project services=services /> }
                    />
                </div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn ids(projects: Vec<Project>) -> Vec<&'static str> {
        projects.into_iter().map(|project| project.id).collect()
    }

    #[test]
    fn search_matches_name_description_and_tech() {
        assert_eq!(search_projects("").len(), PROJECTS.len());
        assert_eq!(ids(search_projects("sprout")), vec!["sprout"]);
        assert_eq!(ids(search_projects("QUIC")), vec!["lanternfs"]);
        assert_eq!(ids(search_projects("frost")), vec!["sprout"]);
        assert_eq!(
            ids(search_projects("  webassembly ")),
            vec!["tidepool", "desktop"]
        );
        assert!(search_projects("cobol").is_empty());
    }
}
