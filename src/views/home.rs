use dioxus::prelude::*;

#[component]
pub fn Home() -> Element {
    rsx! {
        div {
            class: "container",
            h1 {
                class: "title",
                "Theme Switch"
            }
            p {
                class: "muted",
                "Use the button in the top right to switch between light and dark. Your choice is remembered on this device."
            }
        }
    }
}
