use web_sys::{MouseEvent, ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;

const SECTIONS: [(&str, &str); 8] = [
    ("about", "About"),
    ("tracks", "Tracks"),
    ("timeline", "Timeline"),
    ("prizes", "Prizes"),
    ("organisers", "Organisers"),
    ("sponsors", "Sponsors"),
    ("faqs", "FAQs"),
    ("contact", "Contact"),
];

fn scroll_to(id: &'static str) -> Callback<MouseEvent> {
    Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        if let Some(element) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(id))
        {
            let mut options = ScrollIntoViewOptions::new();
            options.behavior(ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
    })
}

#[function_component(Navbar)]
pub fn navbar() -> Html {
    html! {
        <nav class="navbar">
            <a class="navbar-brand" href="/">{"SPECTRUM"}</a>
            <div class="navbar-links">
                { for SECTIONS.iter().map(|&(id, label)| html! {
                    <a href={format!("#{}", id)} onclick={scroll_to(id)}>{label}</a>
                }) }
            </div>
        </nav>
    }
}
