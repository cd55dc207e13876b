use leptos::prelude::*;

use crate::components::mind_map::MindMapCanvas;
use crate::layout::default_nodes;

const INSTRUCTIONS: [&str; 3] = [
	"Click on the central node to expand the mind map",
	"Hover over nodes to see descriptions",
	"Click the central node again to collapse the map",
];

/// Dismissible usage notes shown above the map.
#[component]
fn Instructions() -> impl IntoView {
	let (visible, set_visible) = signal(true);

	view! {
		<Show when=move || visible.get()>
			<div class="instructions">
				<div class="instructions-header">
					<h2>"How to Use"</h2>
					<button class="hide-button" on:click=move |_| set_visible.set(false)>
						"Hide"
					</button>
				</div>
				<ul>
					{INSTRUCTIONS.iter().map(|line| view! { <li>{*line}</li> }).collect_view()}
				</ul>
			</div>
		</Show>
	}
}

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	let nodes = Signal::derive(default_nodes);

	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>

			<div class="page">
				<header>
					<h1>"Mind Map of Creativity"</h1>
				</header>
				<main>
					<Instructions />
					<div class="mind-map-frame">
						<MindMapCanvas nodes=nodes />
					</div>
				</main>
				<footer>
					<p>"Simple Mind Map Visualization"</p>
				</footer>
			</div>
		</ErrorBoundary>
	}
}
