use shared::Feedback;
use yew::prelude::*;

mod components;

use components::feedback_panel::render_feedback_panel;
use components::header::render_header;
use components::theme_toggle::render_theme_toggle;

// Session feedback a practice run would produce. Stands in for the API
// payload until a session flow exists to supply one.
const DEMO_FEEDBACK: &str = r#"{
    "overall": "Strong answer overall. Tighten up the close.",
    "items": [
        { "category": "positive", "message": "Clear structure with a concrete example." },
        { "category": "positive", "message": "Good pacing through the technical sections." },
        { "category": "improvement", "message": "The closing trailed off; restate your impact." }
    ]
}"#;

fn demo_feedback() -> Option<Feedback> {
    match serde_json::from_str(DEMO_FEEDBACK) {
        Ok(feedback) => Some(feedback),
        Err(e) => {
            log::warn!("Failed to parse demo feedback: {}", e);
            None
        }
    }
}

// Yew msg components
enum Msg {
    ToggleTheme,
}

// Main component
struct Model {
    feedback: Option<Feedback>,
    theme: String,
}

// Yew component implementation
impl Component for Model {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            feedback: demo_feedback(),
            theme: "light".to_string(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::ToggleTheme => self.handle_toggle_theme(),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="container">
                { render_header() }
                <div class="top-right">
                    { render_theme_toggle(&self.theme, ctx.link()) }
                </div>

                <main class="main-content">
                    { render_feedback_panel(self.feedback.as_ref()) }
                </main>

                <footer class="app-footer">
                    <p>{"Interview Practice Demo | Fullstack Rust WASM"}</p>
                </footer>
            </div>
        }
    }
}

// Handler methods
impl Model {
    fn handle_toggle_theme(&mut self) -> bool {
        let body = web_sys::window().unwrap().document().unwrap().body().unwrap();

        if self.theme == "light" {
            self.theme = "dark".to_string();
            body.class_list().add_1("dark-mode").unwrap();
        } else {
            self.theme = "light".to_string();
            body.class_list().remove_1("dark-mode").unwrap();
        }

        true
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("App starting...");
    yew::Renderer::<Model>::new().render();
}
