use dioxus::prelude::*;
use dioxus_router::Router;

use crate::routes::Route;
use crate::views::ViewError;

#[component]
pub fn App() -> Element {
    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }

        document::Title { "Skill Drill" }

        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| {
                    tracing::error!(?errors, "view crashed");
                    rsx! {
                        FatalPanel { report: format!("{errors:?}") }
                    }
                },
                Router::<Route> {}
            }
        }
    }
}

/// Shown instead of the routed views after a render error.
///
/// Progress is written after every answer, so nothing is lost by restarting.
#[component]
fn FatalPanel(report: String) -> Element {
    rsx! {
        div { class: "fatal",
            h1 { "{ViewError::Unknown.message()}" }
            p { "Your progress is saved. Restart Skill Drill to pick up where you left off." }
            details {
                summary { "Details" }
                pre { "{report}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fatal_panel_explains_recovery() {
        let html = dioxus_ssr::render_element(rsx! {
            FatalPanel { report: "render failed".to_string() }
        });
        assert!(html.contains("Something went wrong. Please try again."), "{html}");
        assert!(html.contains("Your progress is saved."), "{html}");
        assert!(html.contains("render failed"), "{html}");
    }
}
