//! Static portfolio panels rendered inside windows.

use leptos::*;

use crate::registry::ContentPanel;

struct ExperienceEntry {
    role: &'static str,
    period: &'static str,
    summary: &'static str,
}

const EXPERIENCE: [ExperienceEntry; 2] = [
    ExperienceEntry {
        role: "Senior Developer",
        period: "2022 - Present",
        summary: "Building modern web applications with React and Next.js",
    },
    ExperienceEntry {
        role: "Full Stack Developer",
        period: "2020 - 2022",
        summary: "Developed scalable backend systems and user interfaces",
    },
];

const CONTACTS: [(&str, &str); 3] = [
    ("📧", "joan@example.com"),
    ("🐙", "github.com/joan"),
    ("💼", "linkedin.com/in/joan"),
];

const PROJECTS: [(&str, &str); 2] = [
    ("Project Alpha", "A modern web application"),
    ("Project Beta", "Mobile-first design system"),
];

/// Renders the content panel for a window.
pub(super) fn render_panel(panel: &ContentPanel) -> View {
    match panel {
        ContentPanel::About => view! {
            <article class="panel panel-about">
                <h2>"About Joan"</h2>
                <p>
                    "Welcome to Joan OS - a retro-futuristic desktop experience that brings "
                    "together classic computing aesthetics with modern web technologies. This "
                    "interface showcases my work and projects in an interactive, nostalgic "
                    "environment."
                </p>
            </article>
        }
        .into_view(),
        ContentPanel::Experience => view! {
            <article class="panel panel-experience">
                <h2>"Experience"</h2>
                <ul class="experience-list">
                    {EXPERIENCE
                        .iter()
                        .map(|entry| view! {
                            <li class="experience-entry">
                                <h3>{entry.role}</h3>
                                <p class="muted">{entry.period}</p>
                                <p>{entry.summary}</p>
                            </li>
                        })
                        .collect_view()}
                </ul>
            </article>
        }
        .into_view(),
        ContentPanel::Contact => view! {
            <article class="panel panel-contact">
                <h2>"Contact"</h2>
                <ul class="contact-list">
                    {CONTACTS
                        .iter()
                        .map(|(glyph, value)| view! {
                            <li>
                                <span class="contact-glyph" aria-hidden="true">{*glyph}</span>
                                <span>{*value}</span>
                            </li>
                        })
                        .collect_view()}
                </ul>
            </article>
        }
        .into_view(),
        ContentPanel::Resume => view! {
            <article class="panel panel-resume">
                <h2>"Resume"</h2>
                <div class="resume-card">
                    <p>"📄 Resume.pdf"</p>
                    <button type="button" class="outline">"Download Resume"</button>
                </div>
            </article>
        }
        .into_view(),
        ContentPanel::Credits => view! {
            <article class="panel panel-credits">
                <h2>"Credits"</h2>
                <p>
                    "This retro desktop interface was built with Rust, Leptos, and lots of "
                    "nostalgia for classic operating systems. Special thanks to the open source "
                    "community for making this possible."
                </p>
            </article>
        }
        .into_view(),
        ContentPanel::Projects => view! {
            <article class="panel panel-projects">
                <h2>"Projects"</h2>
                <div class="project-grid">
                    {PROJECTS
                        .iter()
                        .map(|(name, blurb)| view! {
                            <div class="project-card">
                                <h3>{*name}</h3>
                                <p class="muted">{*blurb}</p>
                            </div>
                        })
                        .collect_view()}
                </div>
            </article>
        }
        .into_view(),
        ContentPanel::Placeholder { id, title } => {
            let title = title.clone();
            let id = id.to_string();
            view! {
                <article class="panel panel-placeholder">
                    <p>{format!("Window content for {title}")}</p>
                    <p class="muted">{format!("Unresolved window id: {id}")}</p>
                </article>
            }
            .into_view()
        }
    }
}
