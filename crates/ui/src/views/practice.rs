use dioxus::document::eval;
use dioxus::prelude::*;
use dioxus_router::use_navigator;

use skill_core::model::TopicId;
use skill_core::quiz::{KeyFocus, KeyInput, OptionStatus, QuizIntent};

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{
    CompletionVm, FeedbackVm, OptionVm, PracticeFrame, QuestionVm, QuizVm, start_quiz,
};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

const KEY_HINTS: &str = "Keys: A S D F answer · H hint · R reveal · Enter next";

fn key_input(key: &Key) -> KeyInput {
    match key {
        Key::Enter => KeyInput::Enter,
        Key::Character(value) if value == " " => KeyInput::Space,
        Key::Character(value) => {
            let mut chars = value.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => KeyInput::Char(c),
                _ => KeyInput::Other,
            }
        }
        _ => KeyInput::Other,
    }
}

#[component]
pub fn PracticeView(topic_id: String) -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let quiz_service = ctx.quiz_service();

    let header = TopicId::new(topic_id.clone())
        .ok()
        .and_then(|id| quiz_service.topic(&id))
        .map(|topic| (topic.icon().to_string(), topic.name().to_string()));

    let vm = use_signal(|| None::<QuizVm>);
    // Last drawn state. The session leaves `vm` while an intent is applied.
    let frame = use_signal(PracticeFrame::default);

    let resource = {
        let topic_id = topic_id.clone();
        use_resource(move || {
            let quiz_service = quiz_service.clone();
            let topic_id = topic_id.clone();
            let mut vm = vm;
            let mut frame = frame;
            async move {
                let started = start_quiz(&quiz_service, &topic_id).await?;
                frame.set(started.frame());
                vm.set(Some(started));
                Ok::<_, ViewError>(())
            }
        })
    };
    let state = view_state_from_resource(resource);

    use_effect(move || {
        if vm.read().is_some() {
            let _ = eval("document.getElementById(\"practice-root\")?.focus();");
        }
    });

    let dispatch_intent = use_callback(move |intent: QuizIntent| {
        let mut vm = vm;
        let mut frame = frame;
        spawn(async move {
            let taken = {
                let mut guard = vm.write();
                guard.take()
            };
            // Another intent is still being applied.
            let Some(mut vm_value) = taken else {
                tracing::debug!(?intent, "dropped intent while busy");
                return;
            };

            vm_value.dispatch(intent).await;

            frame.set(vm_value.frame());
            let mut guard = vm.write();
            *guard = Some(vm_value);
        });
    });

    let on_reset = use_callback(move |()| {
        let mut vm = vm;
        let mut frame = frame;
        spawn(async move {
            let taken = {
                let mut guard = vm.write();
                guard.take()
            };
            let Some(mut vm_value) = taken else {
                return;
            };

            vm_value.reset().await;

            frame.set(vm_value.frame());
            let mut guard = vm.write();
            *guard = Some(vm_value);
        });
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<PracticeTestHandles>() {
                handles.register(dispatch_intent, on_reset);
            }
        }
    }

    let on_key = use_callback(move |evt: KeyboardEvent| {
        if evt.data.key() == Key::Escape {
            evt.prevent_default();
            let _ = navigator.push(Route::Topics {});
            return;
        }
        let modifiers = evt.data.modifiers();
        if modifiers.intersects(Modifiers::CONTROL | Modifiers::META | Modifiers::ALT) {
            return;
        }

        let input = key_input(&evt.data.key());
        let intent = vm
            .read()
            .as_ref()
            .and_then(|vm| vm.intent_for_key(input, KeyFocus::Page));
        if let Some(intent) = intent {
            evt.prevent_default();
            dispatch_intent.call(intent);
        }
    });

    let PracticeFrame {
        question,
        completion,
    } = frame();

    rsx! {
        div { class: "page practice-page", id: "practice-root", tabindex: "0", onkeydown: on_key,
            button {
                class: "practice__back",
                r#type: "button",
                onclick: move |_| {
                    let _ = navigator.push(Route::Topics {});
                },
                "← Back to topics"
            }
            if let Some((icon, name)) = header {
                div { class: "practice__header",
                    span { class: "practice__icon", "{icon}" }
                    h2 { class: "practice__title", "{name}" }
                }
            }
            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Error(err) => rsx! {
                    p { class: "practice__error", "{err.message()}" }
                },
                ViewState::Ready(()) => rsx! {
                    if let Some(stats) = completion {
                        CompletionPanel { stats, on_reset }
                    } else if let Some(question) = question {
                        QuestionPanel { question, on_intent: dispatch_intent, on_reset }
                    }
                },
            }
        }
    }
}

#[component]
fn QuestionPanel(
    question: QuestionVm,
    on_intent: EventHandler<QuizIntent>,
    on_reset: EventHandler<()>,
) -> Element {
    let progress_width = format!("width: {:.0}%", question.progress_percent);

    rsx! {
        div { class: "question-card",
            div { class: "question-card__meta",
                span { class: "question-card__progress", "{question.progress_label}" }
                span { class: "question-card__category", "{question.category}" }
            }
            div { class: "progress-bar",
                div { class: "progress-bar__fill", style: "{progress_width}" }
            }
            p { class: "question-card__problem", "{question.problem}" }
            if !question.visual.is_empty() {
                pre { class: "question-card__visual", "{question.visual}" }
            }
            if let Some(code) = question.problem_code.as_deref() {
                pre { class: "question-card__code", "{code}" }
            }
            p { class: "question-card__keys", "{KEY_HINTS}" }
            div { class: "options",
                for option in question.options.iter().cloned() {
                    OptionButton { key: "{option.index}", option, on_intent }
                }
            }
            div { class: "question-card__actions",
                button {
                    class: "hint-btn",
                    r#type: "button",
                    disabled: !question.can_hint,
                    onclick: move |_| on_intent.call(QuizIntent::Hint),
                    "Hint (H)"
                }
                button {
                    class: "reveal-btn",
                    r#type: "button",
                    disabled: !question.can_reveal,
                    onclick: move |_| on_intent.call(QuizIntent::Reveal),
                    "Reveal Answer (R)"
                }
            }
            if let Some(hint) = question.hint.as_deref() {
                div { class: "hint-bubble", "{hint}" }
            }
            if let Some(feedback) = question.feedback.clone() {
                FeedbackPanel { feedback, on_intent, on_reset }
            }
        }
    }
}

#[component]
fn OptionButton(option: OptionVm, on_intent: EventHandler<QuizIntent>) -> Element {
    let index = option.index;
    let key_label = option.hotkey.map(|c| c.to_string()).unwrap_or_default();
    let is_open = option.status == OptionStatus::Open;

    rsx! {
        button {
            class: "{option.class()}",
            r#type: "button",
            disabled: !is_open,
            onclick: move |_| on_intent.call(QuizIntent::Select(index)),
            span { class: "option__key", "{key_label}" }
            span { class: "option__text", "{option.text}" }
        }
    }
}

#[component]
fn FeedbackPanel(
    feedback: FeedbackVm,
    on_intent: EventHandler<QuizIntent>,
    on_reset: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "{feedback.class()}",
            h3 { class: "feedback__title", "{feedback.title()}" }
            p { class: "feedback__answer",
                "Correct answer: "
                strong { "{feedback.correct_answer}" }
            }
            p { class: "feedback__explanation", "{feedback.explanation}" }
            pre { class: "feedback__solution", "{feedback.solution}" }
            if feedback.needs_restart {
                p { class: "feedback__done", "Some earlier scenarios are still open." }
                button {
                    class: "reset-btn",
                    r#type: "button",
                    onclick: move |_| on_reset.call(()),
                    "Start Over"
                }
            } else if feedback.is_last {
                p { class: "feedback__done", "All scenarios completed!" }
            } else {
                button {
                    class: "next-btn",
                    r#type: "button",
                    onclick: move |_| on_intent.call(QuizIntent::Next),
                    "Next Challenge"
                }
            }
        }
    }
}

#[component]
fn CompletionPanel(stats: CompletionVm, on_reset: EventHandler<()>) -> Element {
    rsx! {
        div { class: "completion",
            h3 { class: "completion__title", "Topic complete" }
            div { class: "completion__stats",
                div {
                    div { class: "completion__value", "{stats.completed}" }
                    div { class: "completion__label", "Completed" }
                }
                div {
                    div { class: "completion__value", "{stats.mastered}" }
                    div { class: "completion__label", "Mastered" }
                }
                div {
                    div { class: "completion__value", "{stats.rate_label()}" }
                    div { class: "completion__label", "Mastery rate" }
                }
            }
            button {
                class: "reset-btn",
                r#type: "button",
                onclick: move |_| on_reset.call(()),
                "Start Over"
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct PracticeTestHandles {
    dispatch: Rc<RefCell<Option<Callback<QuizIntent>>>>,
    reset: Rc<RefCell<Option<Callback<()>>>>,
}

#[cfg(test)]
impl PracticeTestHandles {
    pub(crate) fn register(&self, dispatch: Callback<QuizIntent>, reset: Callback<()>) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.reset.borrow_mut() = Some(reset);
    }

    pub(crate) fn dispatch(&self) -> Callback<QuizIntent> {
        (*self.dispatch.borrow()).expect("practice dispatch registered")
    }

    pub(crate) fn reset(&self) -> Callback<()> {
        (*self.reset.borrow()).expect("practice reset registered")
    }
}
