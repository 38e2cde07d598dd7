//! starfield: animated star network backdrop for a portfolio landing page.
//!
//! This crate provides a WASM canvas component that renders a drifting,
//! twinkling star network behind the hero section, plus the minimal page
//! shell that mounts it.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;

pub use components::star_network::{StarNetworkCanvas, StarfieldOptions, Theme};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("starfield: logging initialized");
}

/// Load starfield overrides from a script element with id="starfield-config".
/// Expected format: JSON with optional { preset, density, connection_distance, shooting_stars, seed }
fn load_options() -> Option<StarfieldOptions> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("starfield-config")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match StarfieldOptions::from_json(&json_text) {
		Ok(options) => {
			info!("starfield: loaded options {:?}", options);
			Some(options)
		}
		Err(e) => {
			warn!("starfield: failed to parse options: {}", e);
			None
		}
	}
}

/// Main application component.
/// Renders the hero section with the star network behind it.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let options = load_options().unwrap_or_default();

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />
		<Title text="Portfolio" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<section id="home" class="hero">
			<StarNetworkCanvas options=options />
			<div class="hero-content">
				<h1>"Hi, I build things for the web"</h1>
				<p class="subtitle">"Software engineer. Scroll down for experience, projects and contact."</p>
			</div>
		</section>
	}
}
