use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::views::{PracticeView, TopicsView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", TopicsView)] Topics {},
        #[route("/topic/:topic_id", PracticeView)] Practice { topic_id: String },
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            header { class: "topbar",
                Link { class: "topbar__brand", to: Route::Topics {}, "Skill Drill" }
                span { class: "topbar__tagline", "Practice real-world scenarios" }
            }
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}
