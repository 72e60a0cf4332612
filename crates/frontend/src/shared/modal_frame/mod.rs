use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Modal frame container (overlay + positioned surface).
///
/// The frame renders no header: dialogs draw their own compact header with a
/// close control. Escape and overlay clicks report through `on_close`; the
/// owner decides whether that actually closes anything.
/// Runs `on_close` unless its owner was disposed while the close was pending.
fn close_if_mounted(on_close: Callback<()>) -> bool {
    on_close.try_run(()).is_some()
}

#[component]
pub fn ModalFrame(
    /// Called when the user asks to dismiss the modal.
    on_close: Callback<()>,
    /// Extra class for the modal surface (`div.modal`).
    #[prop(optional)]
    modal_class: Option<String>,
    children: Children,
) -> impl IntoView {
    let overlay_mouse_down = RwSignal::new(false);

    // Defer close to next tick: the overlay may be removed during its own event dispatch.
    let close_deferred = move || {
        spawn_local(async move {
            TimeoutFuture::new(0).await;
            if !close_if_mounted(on_close) {
                log::debug!("modal owner already disposed, close ignored");
            }
        });
    };

    let escape_listener = window_event_listener(ev::keydown, move |ev: ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            close_deferred();
        }
    });
    on_cleanup(move || escape_listener.remove());

    let is_direct_overlay_event = |ev: &ev::MouseEvent| -> bool {
        match (ev.target(), ev.current_target()) {
            (Some(t), Some(ct)) => t == ct,
            _ => false,
        }
    };

    // Close only if both press and release happened on the overlay itself,
    // so a text selection that ends outside the surface keeps the modal open.
    let handle_overlay_mouse_down = move |ev: ev::MouseEvent| {
        overlay_mouse_down.set(is_direct_overlay_event(&ev));
    };

    let handle_overlay_click = move |ev: ev::MouseEvent| {
        let should_close = overlay_mouse_down.get() && is_direct_overlay_event(&ev);
        overlay_mouse_down.set(false);
        if should_close {
            close_deferred();
        }
    };

    let stop_propagation = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
    };

    let modal_class = match modal_class {
        Some(cls) => format!("modal {cls}"),
        None => "modal".to_string(),
    };

    view! {
        <div
            class="modal-overlay"
            style="z-index: 1000;"
            on:mousedown=handle_overlay_mouse_down
            on:click=handle_overlay_click
        >
            <div
                class=modal_class
                style="position: relative;"
                role="dialog"
                aria-modal="true"
                on:click=stop_propagation
            >
                {children()}
            </div>
        </div>
    }
}
