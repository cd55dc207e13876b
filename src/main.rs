//! Browser entry point: mounts the app into the page body.

use mind_map_canvas::{App, init_logging};

fn main() {
	init_logging();
	leptos::mount::mount_to_body(App);
}
