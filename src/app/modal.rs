use std::time::Duration;

use leptos::{ev, prelude::*};
use leptos_use::{use_event_listener, use_window};

use crate::overlay::{Document, Overlay};

/// Matches the exit animation length in `input.css`.
const HIDE_DELAY: Duration = Duration::from_millis(200);

/// State flips immediately; `AnimatedShow` cancels a pending hide on reopen.
#[component]
pub fn CertificateModal(overlay: RwSignal<Overlay>) -> impl IntoView {
    let is_open = Signal::derive(move || overlay.with(Overlay::is_open));
    // last shown document stays on screen while the hide animation plays
    let shown = Memo::new(move |prev: Option<&Option<Document>>| {
        overlay
            .with(|o| o.document().cloned())
            .or_else(|| prev.cloned().flatten())
    });

    let _ = use_event_listener(use_window(), ev::keydown, move |e: ev::KeyboardEvent| {
        let key = e.key();
        overlay.maybe_update(|o| o.dismiss_on_key(&key));
    });

    view! {
        <AnimatedShow
            when=is_open
            show_class="overlay-show"
            hide_class="overlay-hide"
            hide_delay=HIDE_DELAY
        >
            <div
                class="fixed inset-0 z-50 bg-black/70 backdrop-blur flex items-center justify-center p-4"
                role="dialog"
                aria-modal="true"
            >
                <div class="overlay-panel relative bg-[#0b1020] rounded-2xl p-6 max-w-4xl w-full h-[80vh] flex flex-col">
                    <button
                        on:click=move |_| overlay.update(Overlay::close)
                        class="absolute top-3 right-3 text-white/70 hover:text-white"
                        aria-label="Close"
                    >
                        <i class="extra-close" />
                    </button>
                    {move || {
                        shown
                            .get()
                            .map(|doc| {
                                view! {
                                    <h3 class="mb-4 text-lg font-semibold">{doc.title.clone()}</h3>
                                    <iframe
                                        src=doc.url
                                        title=doc.title
                                        class="flex-1 w-full rounded-lg border border-white/10"
                                    />
                                }
                            })
                    }}
                </div>
            </div>
        </AnimatedShow>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::content::CERTIFICATES;

    fn render_with(overlay: Overlay) -> String {
        let owner = Owner::new();
        owner.set();
        let overlay = RwSignal::new(overlay);
        view! { <CertificateModal overlay /> }.to_html()
    }

    #[test]
    fn test_open_renders_viewer() {
        let mut overlay = Overlay::default();
        overlay.open("/E1.pdf", "Machine Learning Certification");
        let html = render_with(overlay);
        assert!(html.contains("role=\"dialog\""));
        assert!(html.contains("<iframe"));
        assert!(html.contains("src=\"/E1.pdf\""));
        assert!(html.contains("title=\"Machine Learning Certification\""));
        assert!(html.contains("aria-label=\"Close\""));
    }

    #[test]
    fn test_closed_renders_nothing() {
        let html = render_with(Overlay::Closed);
        assert!(!html.contains("role=\"dialog\""));
        assert!(!html.contains("<iframe"));
    }

    #[test]
    fn test_reopened_viewer_shows_latest() {
        let mut overlay = Overlay::default();
        overlay.open_certificate(&CERTIFICATES[0]);
        overlay.open_certificate(&CERTIFICATES[3]);
        let html = render_with(overlay);
        assert!(html.contains(&format!("src=\"{}\"", CERTIFICATES[3].file)));
        assert!(!html.contains(CERTIFICATES[0].file));
    }
}
