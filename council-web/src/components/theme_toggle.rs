use shared::models::Theme;
use yew::{Callback, Html, MouseEvent, Properties, classes, function_component, html};
use yew_icons::{Icon, IconId};

use super::class_names;

#[derive(Properties, PartialEq)]
pub struct ThemeToggleControlProps {
    /// Theme currently applied by the owner.
    pub theme: Theme,
    pub on_toggle: Callback<()>,
}

/// Button that asks the owner to switch themes.
///
/// It never changes `theme` itself; the label only moves once the owner
/// renders it with a new value.
#[function_component(ThemeToggleControl)]
pub fn theme_toggle_control(props: &ThemeToggleControlProps) -> Html {
    let onclick = props.on_toggle.reform(|_: MouseEvent| ());

    // Sun in dark mode (switch to light), moon in light mode (switch to dark)
    let icon = match props.theme {
        Theme::Dark => IconId::HeroiconsSolidSun,
        Theme::Light => IconId::HeroiconsSolidMoon,
    };

    html! {
        <button
            type="button"
            class={classes!(class_names::THEME_TOGGLE, "btn", "btn-ghost", "btn-sm", "gap-1")}
            {onclick}
        >
            <Icon icon_id={icon} class="h-4 w-4" />
            <span>{ props.theme.toggle_label() }</span>
        </button>
    }
}
