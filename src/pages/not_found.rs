use leptos::prelude::*;
use leptos_router::components::A;

/// 404 page
#[component]
pub fn NotFound() -> impl IntoView {
	view! {
		<div class="not-found">
			<h1>"404"</h1>
			<p>"There is nothing at this address."</p>
			<A href="/">"Back to the dashboard"</A>
		</div>
	}
}
