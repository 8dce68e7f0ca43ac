use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use services::{AppServices, QuestionCatalog, QuizService, StaticCatalog};
use skill_core::model::TopicId;
use storage::repository::{KeyValueStore, Storage};

use crate::context::{UiApp, build_app_context};
use crate::views::practice::PracticeTestHandles;
use crate::views::{PracticeView, TopicsView};

pub const TOPICS: &str = r#"[
    { "id": "hooks", "name": "React Hooks", "icon": "⚛️", "description": "State and effects" },
    { "id": "sql", "name": "SQL", "icon": "🗄️", "description": "Joins and indexes" }
]"#;

pub const HOOKS: &str = r#"[
    {
        "id": "hooks-1", "category": "Beginner • State", "problem": "A counter must re-render on click.",
        "visual": "[ + ] 3", "problemCode": "let count = 0;",
        "options": ["useState", "useEffect", "useRef", "useMemo"],
        "correctAnswer": "useState", "hint": "Does the UI need to update?",
        "explanation": "useState triggers a re-render.", "solution": "const [count, setCount] = useState(0);"
    },
    {
        "id": "hooks-2", "category": "Intermediate • Effects", "problem": "Fetch data after mount.",
        "options": ["useState", "useEffect", "useRef", "useMemo"],
        "correctAnswer": "useEffect", "hint": "Side effects run after render.",
        "explanation": "useEffect runs after the component mounts.", "solution": "useEffect(() => { load(); }, []);"
    }
]"#;

#[derive(Clone)]
struct TestApp {
    initial_topic: Option<TopicId>,
    quiz: Arc<QuizService>,
}

impl UiApp for TestApp {
    fn initial_topic(&self) -> Option<TopicId> {
        self.initial_topic.clone()
    }

    fn quiz_service(&self) -> Arc<QuizService> {
        Arc::clone(&self.quiz)
    }
}

#[derive(Clone, PartialEq, Eq)]
pub enum ViewKind {
    Topics,
    Practice(&'static str),
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    practice_handles: Option<PracticeTestHandles>,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view.clone());
    if let Some(handles) = props.practice_handles.clone() {
        use_context_provider(|| handles);
    }
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Topics => rsx! { TopicsView {} },
        ViewKind::Practice(topic_id) => rsx! { PracticeView { topic_id: topic_id.to_string() } },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub slots: Arc<dyn KeyValueStore>,
    pub practice_handles: Option<PracticeTestHandles>,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Rebuild and let pending resources settle.
    pub async fn settle(&mut self) {
        self.rebuild();
        for _ in 0..3 {
            self.drive_async().await;
        }
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(view: ViewKind) -> ViewHarness {
    setup_view_harness_with_storage(view, Storage::in_memory())
}

pub fn setup_view_harness_with_storage(view: ViewKind, storage: Storage) -> ViewHarness {
    let catalog: Arc<dyn QuestionCatalog> =
        Arc::new(StaticCatalog::from_json(TOPICS, &[("hooks", HOOKS)]).expect("test catalog"));
    let services = AppServices::from_parts(&storage, catalog, None).expect("services");

    let practice_handles = match view {
        ViewKind::Practice(_) => Some(PracticeTestHandles::default()),
        ViewKind::Topics => None,
    };

    let app = Arc::new(TestApp {
        initial_topic: services.initial_topic().cloned(),
        quiz: services.quiz(),
    });

    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app,
            view,
            practice_handles: practice_handles.clone(),
        },
    );

    ViewHarness {
        dom,
        slots: Arc::clone(&storage.slots),
        practice_handles,
    }
}
