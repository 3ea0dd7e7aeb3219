//! Studio page: pick a photo, generate the figure, download the result.
//!
//! DESIGN
//! ======
//! All transient page state lives in one [`UploadState`] signal; handlers go
//! through its transitions and never touch DOM state directly. The raw
//! `web_sys::File` is browser-only and is held in a separate local-storage
//! signal so the state machine itself stays host-testable. Validation runs
//! before any network call; errors surface as blocking alerts, matching the
//! documented behavior.

use leptos::prelude::*;

use crate::state::upload::UploadState;
use crate::util::relay_urls::proxied_image_url;
use crate::util::validate::validate_image;

#[component]
pub fn StudioPage() -> impl IntoView {
    let upload = RwSignal::new(UploadState::default());
    let dragging = RwSignal::new(false);
    let file_input_ref: NodeRef<leptos::html::Input> = NodeRef::new();
    let result_ref: NodeRef<leptos::html::Section> = NodeRef::new();

    #[cfg(feature = "csr")]
    let selected_file = RwSignal::new_local(None::<web_sys::File>);

    #[cfg(feature = "csr")]
    suppress_window_drops();

    let on_box_click = move |_ev: leptos::ev::MouseEvent| {
        #[cfg(feature = "csr")]
        {
            // Only open the picker while no image is selected; clicks on the
            // preview belong to its own controls.
            if upload.get_untracked().selected.is_none()
                && let Some(input) = file_input_ref.get_untracked()
            {
                input.click();
            }
        }
    };

    let on_file_change = move |_ev: leptos::ev::Event| {
        #[cfg(feature = "csr")]
        {
            if let Some(input) = file_input_ref.get_untracked()
                && let Some(files) = input.files()
                && let Some(file) = files.get(0)
            {
                if handle_file(&file, upload) {
                    selected_file.set(Some(file));
                }
            }
        }
    };

    let on_dragover = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        dragging.set(true);
    };

    let on_dragleave = move |_ev: leptos::ev::DragEvent| {
        dragging.set(false);
    };

    let on_drop = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        dragging.set(false);
        #[cfg(feature = "csr")]
        {
            if let Some(transfer) = ev.data_transfer()
                && let Some(files) = transfer.files()
                && let Some(file) = files.get(0)
            {
                if handle_file(&file, upload) {
                    selected_file.set(Some(file));
                }
            }
        }
    };

    let on_remove = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        upload.update(UploadState::clear_selection);
        #[cfg(feature = "csr")]
        {
            selected_file.set(None);
            if let Some(input) = file_input_ref.get_untracked() {
                input.set_value("");
            }
        }
    };

    let on_generate = move |_ev: leptos::ev::MouseEvent| {
        #[cfg(feature = "csr")]
        {
            let Some(file) = selected_file.get_untracked() else {
                return;
            };
            let mut started = false;
            upload.update(|state| started = state.begin_generate());
            if !started {
                return;
            }

            leptos::task::spawn_local(async move {
                match crate::net::api::generate_figure(&file).await {
                    Ok(url) => {
                        upload.update(|state| state.finish_generate(Some(url)));
                        scroll_result_into_view(result_ref);
                    }
                    Err(message) => {
                        upload.update(|state| state.finish_generate(None));
                        alert(&message);
                    }
                }
            });
        }
    };

    let on_download = move |_ev: leptos::ev::MouseEvent| {
        #[cfg(feature = "csr")]
        {
            // The original (non-relayed) URL goes to the download relay.
            if let Some(original) = upload.get_untracked().result_url
                && let Some(window) = web_sys::window()
            {
                let target = crate::util::relay_urls::download_url(&original);
                if window.location().set_href(&target).is_err() {
                    log::warn!("download navigation failed");
                }
            }
        }
    };

    let on_reset = move |_ev: leptos::ev::MouseEvent| {
        upload.update(UploadState::reset);
        #[cfg(feature = "csr")]
        {
            selected_file.set(None);
            if let Some(input) = file_input_ref.get_untracked() {
                input.set_value("");
            }
            scroll_to_top();
        }
    };

    view! {
        <main class="studio">
            <header class="studio__header">
                <h1>"Figure Studio"</h1>
                <p class="studio__tagline">"Ubah fotomu menjadi action figure"</p>
            </header>

            <div
                class="upload-box"
                class:dragover=move || dragging.get()
                on:click=on_box_click
                on:dragover=on_dragover
                on:dragleave=on_dragleave
                on:drop=on_drop
            >
                <input
                    type="file"
                    accept="image/*"
                    class="file-input"
                    node_ref=file_input_ref
                    on:change=on_file_change
                />
                <Show
                    when=move || upload.get().selected.is_some()
                    fallback=|| {
                        view! {
                            <div class="upload-content">
                                <p class="upload-content__title">"Seret gambar ke sini"</p>
                                <p class="upload-content__hint">"atau klik untuk memilih file (maks. 10MB)"</p>
                            </div>
                        }
                    }
                >
                    <div class="preview">
                        <Show when=move || upload.get().preview().is_some()>
                            <img
                                class="preview__image"
                                src=move || upload.get().preview().unwrap_or_default().to_owned()
                                alt="preview"
                            />
                        </Show>
                        <button class="preview__remove" on:click=on_remove>
                            "\u{00d7}"
                        </button>
                    </div>
                </Show>
            </div>

            <button
                class="generate-button"
                disabled=move || !upload.get().can_generate()
                on:click=on_generate
            >
                {move || if upload.get().generating { "Membuat figure..." } else { "Buat Figure" }}
            </button>

            <Show when=move || upload.get().result_url.is_some()>
                <section class="result" node_ref=result_ref>
                    <h2>"Hasil"</h2>
                    <img
                        class="result__image"
                        src=move || {
                            upload.get().result_url.as_deref().map(proxied_image_url).unwrap_or_default()
                        }
                        alt="figure result"
                    />
                    <div class="result__actions">
                        <button class="button" on:click=on_download>
                            "Download"
                        </button>
                        <button class="button button--ghost" on:click=on_reset>
                            "Buat Baru"
                        </button>
                    </div>
                </section>
            </Show>

            <Show when=move || upload.get().generating>
                <div class="loading-overlay">
                    <div class="loading-overlay__spinner"></div>
                    <p>"Sedang membuat figure, mohon tunggu..."</p>
                </div>
            </Show>
        </main>
    }
}

/// Validate and record a chosen file, then kick off the async preview read.
/// Returns whether the file was accepted.
#[cfg(feature = "csr")]
fn handle_file(file: &web_sys::File, upload: RwSignal<UploadState>) -> bool {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let size = file.size() as u64;
    if let Err(err) = validate_image(&file.type_(), size) {
        alert(err.message());
        return false;
    }

    upload.update(|state| state.select(file.name(), file.type_(), size));

    // Local preview via FileReader; no network involved.
    let Ok(reader) = web_sys::FileReader::new() else {
        return true;
    };
    let reader_for_cb = reader.clone();
    let onload = Closure::<dyn FnMut()>::new(move || {
        if let Ok(value) = reader_for_cb.result()
            && let Some(data_url) = value.as_string()
        {
            upload.update(|state| state.set_preview(data_url));
        }
    });
    reader.set_onload(Some(onload.as_ref().unchecked_ref()));
    onload.forget();
    if reader.read_as_data_url(file).is_err() {
        log::warn!("preview read failed");
    }
    true
}

#[cfg(feature = "csr")]
fn alert(message: &str) {
    if let Some(window) = web_sys::window()
        && window.alert_with_message(message).is_err()
    {
        log::warn!("alert failed: {message}");
    }
}

/// Smooth-scroll the result section into view shortly after it renders.
#[cfg(feature = "csr")]
fn scroll_result_into_view(result_ref: NodeRef<leptos::html::Section>) {
    gloo_timers::callback::Timeout::new(300, move || {
        if let Some(section) = result_ref.get_untracked() {
            let options = web_sys::ScrollIntoViewOptions::new();
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            options.set_block(web_sys::ScrollLogicalPosition::Center);
            section.scroll_into_view_with_scroll_into_view_options(&options);
        }
    })
    .forget();
}

#[cfg(feature = "csr")]
fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        let options = web_sys::ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

/// The page handles drops itself; stop the browser from navigating away when
/// a file lands outside the drop zone.
#[cfg(feature = "csr")]
fn suppress_window_drops() {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let Some(window) = web_sys::window() else {
        return;
    };
    for event in ["dragover", "drop"] {
        let prevent = Closure::<dyn FnMut(web_sys::Event)>::new(|ev: web_sys::Event| {
            ev.prevent_default();
        });
        if window
            .add_event_listener_with_callback(event, prevent.as_ref().unchecked_ref())
            .is_ok()
        {
            prevent.forget();
        }
    }
}
