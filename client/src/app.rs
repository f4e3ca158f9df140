//! Root application component.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::components::uploader_card::UploaderCard;
use crate::util::labels::CARD_TITLE;

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=CARD_TITLE/>
        <main class="uploader-page">
            <UploaderCard/>
        </main>
    }
}
