use yew::prelude::*;

/// Renders the application header
pub fn render_header() -> Html {
    html! {
        <header class="app-header">
            <div class="brand">
                <span class="brand-badge">{"IP"}</span>
                <h1>{"Interview Practice"}</h1>
            </div>
            <div class="header-actions">
                // Placeholders; recording and settings flows are not wired up yet.
                <button class="ghost-btn" title="Microphone">
                    <i class="fa-solid fa-microphone"></i>
                </button>
                <button class="ghost-btn" title="Settings">
                    <i class="fa-solid fa-gear"></i>
                </button>
            </div>
        </header>
    }
}
