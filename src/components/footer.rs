use leptos::prelude::*;

use crate::util::format::copyright_line;
use crate::util::navigation::current_year;

#[component]
pub fn Footer() -> impl IntoView {
    let line = copyright_line(current_year());
    view! {
        <footer class="footer">
            <p class="footer__text">{line}</p>
        </footer>
    }
}
