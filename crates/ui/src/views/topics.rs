use dioxus::prelude::*;
use dioxus_router::use_navigator;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{TopicCardVm, filter_topics, map_topic_cards};

#[component]
pub fn TopicsView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let mut query = use_signal(String::new);

    let launch_topic = use_hook(|| ctx.take_initial_topic());
    use_effect(move || {
        if let Some(topic_id) = launch_topic.as_ref() {
            tracing::debug!(topic = %topic_id, "opening launch topic");
            let _ = navigator.replace(Route::Practice {
                topic_id: topic_id.to_string(),
            });
        }
    });

    let quiz_service = ctx.quiz_service();
    let resource = use_resource(move || {
        let quiz_service = quiz_service.clone();
        async move {
            let overview = quiz_service.overview().await;
            Ok::<_, ViewError>(map_topic_cards(&overview))
        }
    });
    let state = view_state_from_resource(resource);

    rsx! {
        div { class: "page topics-page",
            h2 { "Choose a topic" }
            input {
                class: "topics__search",
                r#type: "search",
                placeholder: "Search topics",
                value: "{query}",
                oninput: move |evt| query.set(evt.value()),
            }
            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Ready(cards) => {
                    let visible = filter_topics(&cards, &query.read());
                    rsx! {
                        if visible.is_empty() {
                            p { class: "topics__empty", "No topics match \"{query}\"." }
                        }
                        div { class: "topics__grid",
                            for card in visible {
                                TopicCard { key: "{card.id}", card }
                            }
                        }
                    }
                },
                ViewState::Error(err) => rsx! {
                    p { "{err.message()}" }
                },
            }
        }
    }
}

#[component]
fn TopicCard(card: TopicCardVm) -> Element {
    let navigator = use_navigator();
    let count_label = card.count_label();
    let mastery_label = card.mastery_label();
    let topic_id = card.id.clone();

    rsx! {
        button {
            class: "topic-card",
            r#type: "button",
            disabled: !card.available,
            onclick: move |_| {
                let _ = navigator.push(Route::Practice {
                    topic_id: topic_id.clone(),
                });
            },
            span { class: "topic-card__icon", "{card.icon}" }
            span { class: "topic-card__name", "{card.name}" }
            span { class: "topic-card__description", "{card.description}" }
            span { class: "topic-card__count", "{count_label}" }
            if let Some(label) = mastery_label {
                span { class: "topic-card__mastery", "{label}" }
            }
        }
    }
}
