//! Portfolio content apps hosted by the desktop runtime: About, Projects, Skills, Experience,
//! Resume, Contact, Journal, Photos, Finder, Camera, Spotify and Youtube.
//!
//! Each app exposes a `mount_*_app` function matching [`desktop_app_contract::AppMountFn`].

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod camera;
pub mod contact;
mod content;
pub mod finder;
pub mod gallery;
pub mod journal;
pub mod media;
pub mod profile;
pub mod projects;

use desktop_app_contract::AppMountContext;
use leptos::*;

use crate::{
    camera::CameraApp,
    contact::ContactApp,
    finder::FinderApp,
    gallery::GalleryApp,
    journal::JournalApp,
    media::{SpotifyApp, YoutubeApp},
    profile::{AboutApp, ExperienceApp, ResumeApp, SkillsApp},
    projects::ProjectsApp,
};

/// Mounts Finder.
pub fn mount_finder_app(context: AppMountContext) -> View {
    view! { <FinderApp services=context.services /> }.into_view()
}

/// Mounts Photos.
pub fn mount_gallery_app(_context: AppMountContext) -> View {
    view! { <GalleryApp /> }.into_view()
}

/// Mounts the contact form.
pub fn mount_contact_app(context: AppMountContext) -> View {
    view! { <ContactApp services=context.services /> }.into_view()
}

/// Mounts the Spotify embed.
pub fn mount_spotify_app(context: AppMountContext) -> View {
    view! { <SpotifyApp services=context.services /> }.into_view()
}

/// Mounts the Youtube player.
pub fn mount_youtube_app(context: AppMountContext) -> View {
    view! { <YoutubeApp services=context.services /> }.into_view()
}

/// Mounts the journal.
pub fn mount_journal_app(_context: AppMountContext) -> View {
    view! { <JournalApp /> }.into_view()
}

/// Mounts the camera.
pub fn mount_camera_app(context: AppMountContext) -> View {
    view! { <CameraApp window_id=context.window_id /> }.into_view()
}

/// Mounts the resume.
pub fn mount_resume_app(context: AppMountContext) -> View {
    view! { <ResumeApp services=context.services /> }.into_view()
}

/// Mounts the about page.
pub fn mount_about_app(context: AppMountContext) -> View {
    view! { <AboutApp services=context.services /> }.into_view()
}

/// Mounts the project showcase.
pub fn mount_projects_app(context: AppMountContext) -> View {
    view! { <ProjectsApp services=context.services /> }.into_view()
}

/// Mounts the skills overview.
pub fn mount_skills_app(_context: AppMountContext) -> View {
    view! { <SkillsApp /> }.into_view()
}

/// Mounts the experience timeline.
pub fn mount_experience_app(_context: AppMountContext) -> View {
    view! { <ExperienceApp /> }.into_view()
}
