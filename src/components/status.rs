use dioxus::prelude::*;

#[component]
pub fn Loading() -> Element {
    rsx! {
        div { style: "text-align: center; padding: 24px; color: #999;", "⏳ Carregando..." }
    }
}

#[component]
pub fn LoadError(message: String) -> Element {
    rsx! {
        div { style: "text-align: center; padding: 24px; color: #a00; background: #ffe6e6; border-radius: 10px;",
            "⚠️ {message}"
        }
    }
}
