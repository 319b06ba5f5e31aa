//! Root application component.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::pages::register_test::RegisterTestPage;

/// Root application component.
///
/// The harness has a single page, so there is no router.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Registration Test"/>
        <RegisterTestPage/>
    }
}
