use super::super::Model;
use super::super::Msg;
use yew::html::Scope;
use yew::prelude::*;

pub fn render_theme_toggle(theme: &str, link: &Scope<Model>) -> Html {
    let (icon, tooltip) = if theme == "light" {
        ("fa-moon", "Switch to Dark Mode")
    } else {
        ("fa-sun", "Switch to Light Mode")
    };

    html! {
        <button
            id="theme-toggle"
            class="theme-toggle ghost-btn"
            onclick={link.callback(|_| Msg::ToggleTheme)}
            title={tooltip}
        >
            <i class={classes!("fa-solid", icon)}></i>
        </button>
    }
}
