use leptos::prelude::*;

#[component]
pub fn Icon(
    /// Имя иконки (без расширения .svg)
    name: &'static str,
    /// CSS классы для стилизации
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    let icon_path = format!("/icons/{}.svg", name);

    view! {
        <img
            src=icon_path
            class=class
            alt=name
            draggable=false
        />
    }
}

/// Предопределенные иконки для удобства использования
#[allow(dead_code)]
pub mod icons {
    pub const USERS: &str = "users";
    pub const LIST: &str = "list";
    pub const PLUS: &str = "plus";
    pub const TRASH: &str = "trash";
    pub const CHECK: &str = "check";
    pub const X: &str = "x";
    pub const CHEVRON_RIGHT: &str = "chevron-right";
    pub const CHEVRON_DOWN: &str = "chevron-down";
    pub const EXTERNAL_LINK: &str = "external-link";
    pub const ALERT_CIRCLE: &str = "alert-circle";
    pub const INFORMATION_CIRCLE: &str = "information-circle";
    pub const LOADER: &str = "loader";
    pub const SUN: &str = "sun";
    pub const MOON: &str = "moon";
    pub const LOGOUT: &str = "logout";
}
