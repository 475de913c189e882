//! Startup check for the rendering backend, with a static fallback message
//! when it is missing.

use bevy::prelude::App;
use tracing::warn;

/// Whether the renderer can run here at all.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RenderSupport {
    Supported,
    Unsupported { reason: String },
}

impl RenderSupport {
    pub fn is_supported(&self) -> bool {
        matches!(self, RenderSupport::Supported)
    }
}

/// Text shown in place of the canvas.
pub fn fallback_message(reason: &str) -> String {
    format!("Your browser or graphics card does not seem to support WebGPU ({reason}).")
}

/// Somewhere to put the fallback message.
pub trait FallbackSink {
    fn show(&mut self, message: &str);
}

/// Inserts the message into the page (`#container`, else `<body>`) on the
/// web; prints it on native.
pub struct PageFallback;

impl FallbackSink for PageFallback {
    fn show(&mut self, message: &str) {
        warn!("rendering unavailable, showing fallback: {message}");
        #[cfg(target_arch = "wasm32")]
        web::insert_message(message);
        #[cfg(not(target_arch = "wasm32"))]
        eprintln!("{message}");
    }
}

/// Check once, synchronously, before anything else is built.
pub fn probe() -> RenderSupport {
    #[cfg(target_arch = "wasm32")]
    {
        web::probe()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        RenderSupport::Supported
    }
}

/// Build the app when rendering is supported; otherwise show the fallback and
/// build nothing. The fallback is terminal for the session.
pub fn launch<S, F>(support: RenderSupport, sink: &mut S, build: F) -> Option<App>
where
    S: FallbackSink + ?Sized,
    F: FnOnce(&mut App),
{
    match support {
        RenderSupport::Supported => {
            let mut app = App::new();
            build(&mut app);
            Some(app)
        }
        RenderSupport::Unsupported { reason } => {
            sink.show(&fallback_message(&reason));
            None
        }
    }
}

/// Log a failed fallback insertion; returns whether it succeeded.
pub fn report_insert<T, E: std::fmt::Debug>(result: Result<T, E>) -> bool {
    match result {
        Ok(_) => true,
        Err(err) => {
            warn!(?err, "could not insert the fallback message into the page");
            false
        }
    }
}

#[cfg(target_arch = "wasm32")]
mod web {
    use super::RenderSupport;
    use wasm_bindgen::JsValue;

    pub fn probe() -> RenderSupport {
        let Some(window) = web_sys::window() else {
            return RenderSupport::Unsupported {
                reason: "no browser window".into(),
            };
        };
        let navigator = window.navigator();
        match js_sys::Reflect::get(&navigator, &JsValue::from_str("gpu")) {
            Ok(gpu) if !gpu.is_undefined() && !gpu.is_null() => RenderSupport::Supported,
            _ => RenderSupport::Unsupported {
                reason: "navigator.gpu is not available".into(),
            },
        }
    }

    pub fn insert_message(message: &str) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let Ok(element) = document.create_element("div") else {
            return;
        };
        element.set_id("webgpu-error-message");
        element.set_text_content(Some(message));

        let parent = document
            .get_element_by_id("container")
            .or_else(|| document.body().map(web_sys::Element::from));
        if let Some(parent) = parent {
            super::report_insert(parent.append_child(&element));
        } else {
            super::report_insert::<(), _>(Err("no #container or <body> to attach to"));
        }
    }
}
