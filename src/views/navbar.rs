use dioxus::prelude::*;
use crate::configs::ThemeConfig;
use crate::routes::Route;

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");

/// Header with the theme toggle. The icons start hidden; the theme controller
/// reveals the right one once it has resolved the theme.
#[component(no_case_check)]
pub fn Navbar() -> Element {
    let config = use_context::<ThemeConfig>();
    let icon_class = format!("{} theme-icon", config.hidden_class);

    rsx! {
        div {
            document::Link { rel: "stylesheet", href: NAVBAR_CSS }

            nav {
                class: "navbar",
                div {
                    id: "navbar",
                    class: "navbar-inner",
                    Link { class: "navbar-link", to: Route::Home, "Home" }
                    button {
                        id: config.toggle_id.clone(),
                        r#type: "button",
                        class: "theme-toggle",
                        title: "Toggle dark mode",
                        span { id: config.dark_icon_id.clone(), class: icon_class.clone(), "🌙" }
                        span { id: config.light_icon_id.clone(), class: icon_class.clone(), "🌞" }
                    }
                }
            }
            Outlet::<Route> {}
        }
    }
}
