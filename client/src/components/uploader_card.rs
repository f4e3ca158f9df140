//! Uploader card: drop zone, picker, preview, progress, and result banners.
//!
//! SYSTEM CONTEXT
//! ==============
//! The card owns one `Uploader` in a thread-local signal. User events call
//! into it synchronously; the upload itself runs in a spawned task that
//! races the request against `gloo-timers` ticks and settles the signal with
//! `try_update`, so a task outliving the card does nothing.
//!
//! Disposing the card drops the uploader, which drops any live `ObjectUrl`
//! and revokes it.

use gloo_timers::future::IntervalStream;
use leptos::prelude::*;
use uploader::{ACCEPT_FILTER, CandidateFile, PROGRESS_TICK_MS, Uploader, with_simulated_progress};

use crate::net::api::upload_file;
use crate::state::config::widget_config;
use crate::state::file::{BrowserFile, ObjectUrlPreviews};
use crate::state::selection::SelectedView;
use crate::util::labels::{
    CARD_TITLE, DROP_HINT, PREVIEW_ALT, SUCCESS_TITLE, progress_label, show_progress, upload_button_label,
};

type WidgetUploader = Uploader<BrowserFile, ObjectUrlPreviews>;
type UploaderSignal = RwSignal<WidgetUploader, LocalStorage>;

fn offer_file(uploader: UploaderSignal, file: web_sys::File) {
    uploader.update(|u| {
        if let Err(err) = u.select(BrowserFile::new(file)) {
            log::info!("selection not applied: {err}");
        }
    });
}

#[component]
pub fn UploaderCard() -> impl IntoView {
    let config = StoredValue::new(widget_config());
    let uploader: UploaderSignal = RwSignal::new_local(Uploader::new(ObjectUrlPreviews));
    let input_ref = NodeRef::<leptos::html::Input>::new();

    let config_error = config.with_value(|c| c.as_ref().err().map(ToString::to_string));
    if let Some(err) = &config_error {
        log::error!("uploads disabled: {err}");
    }
    let config_missing = config_error.is_some();

    let on_change = move |_| {
        let Some(input) = input_ref.get() else {
            return;
        };
        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            offer_file(uploader, file);
        }
        // Allow picking the same file again after a clear.
        input.set_value("");
    };

    let on_drag_over = move |ev: leptos::ev::DragEvent| ev.prevent_default();

    let on_drop = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        let dropped = ev
            .data_transfer()
            .and_then(|transfer| transfer.files())
            .and_then(|files| files.get(0));
        if let Some(file) = dropped {
            offer_file(uploader, file);
        }
    };

    let on_zone_click = move |_| {
        if uploader.with(|u| u.file().is_none()) {
            if let Some(input) = input_ref.get() {
                input.click();
            }
        }
    };

    let on_upload = move |_| {
        let config = match config.get_value() {
            Ok(config) => config,
            Err(err) => {
                log::warn!("upload unavailable: {err}");
                return;
            }
        };
        let mut ticket = None;
        uploader.update(|u| ticket = u.begin_upload().ok());
        let Some(ticket) = ticket else {
            return;
        };

        leptos::task::spawn_local(async move {
            let outcome = with_simulated_progress(
                upload_file(&config, ticket.file()),
                IntervalStream::new(PROGRESS_TICK_MS),
                |percent| {
                    let _ = uploader.try_update(|u| u.record_progress(percent));
                },
            )
            .await;
            if let Err(err) = &outcome {
                log::warn!("upload of {} failed: {err}", ticket.file().name());
            }
            if uploader.try_update(|u| u.finish(outcome)).is_none() {
                log::debug!("uploader disposed before upload settled");
            }
        });
    };

    // Progress ticks must not rebuild the preview.
    let selected = Memo::new(move |_| uploader.with(SelectedView::of));
    let progress = move || uploader.with(WidgetUploader::progress);
    let error = move || uploader.with(|u| u.error().map(str::to_owned));
    let uploaded_url = move || uploader.with(|u| u.uploaded_url().map(str::to_owned));

    view! {
        <div class="uploader-card">
            <h2 class="uploader-card__title">{CARD_TITLE}</h2>

            {config_error.map(|msg| view! { <div class="alert alert--error" role="alert">{msg}</div> })}

            <input
                type="file"
                class="uploader-card__input"
                hidden=true
                accept=ACCEPT_FILTER
                node_ref=input_ref
                on:change=on_change
            />
            <div class="drop-zone" on:dragover=on_drag_over on:drop=on_drop on:click=on_zone_click>
                {move || match selected.get() {
                    None => view! { <p class="drop-zone__hint">{DROP_HINT}</p> }.into_any(),
                    Some(selected) => selected_file_view(uploader, selected).into_any(),
                }}
            </div>

            <Show when=move || show_progress(progress())>
                <div class="uploader-card__progress">
                    <progress max="100" value=move || progress().to_string()></progress>
                    <p class="uploader-card__progress-label">{move || progress_label(progress())}</p>
                </div>
            </Show>

            <Show when=move || error().is_some()>
                <div class="alert alert--error" role="alert">{move || error().unwrap_or_default()}</div>
            </Show>

            <Show when=move || uploaded_url().is_some()>
                <div class="alert alert--success">
                    <p class="alert__title">{SUCCESS_TITLE}</p>
                    <a
                        class="alert__link"
                        href=move || uploaded_url().unwrap_or_default()
                        target="_blank"
                        rel="noopener noreferrer"
                    >
                        {move || uploaded_url().unwrap_or_default()}
                    </a>
                </div>
            </Show>

            <button
                class="btn btn--primary uploader-card__submit"
                on:click=on_upload
                disabled=move || config_missing || !uploader.with(WidgetUploader::can_upload)
            >
                {move || upload_button_label(uploader.with(WidgetUploader::is_uploading))}
            </button>
        </div>
    }
}

/// Preview (or file name) plus the clear control, hidden while uploading.
fn selected_file_view(uploader: UploaderSignal, selected: SelectedView) -> impl IntoView {
    let SelectedView { name, preview_src, uploading } = selected;
    let on_clear = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        uploader.update(|u| {
            u.clear();
        });
    };

    let body = match preview_src {
        Some(src) => view! { <img class="drop-zone__preview" src=src alt=PREVIEW_ALT/> }.into_any(),
        None => view! {
            <div class="drop-zone__file">
                <span class="drop-zone__file-icon" aria-hidden="true"></span>
                <span class="drop-zone__file-name">{name}</span>
            </div>
        }
        .into_any(),
    };

    view! {
        <div class="drop-zone__selected">
            {body}
            {(!uploading)
                .then(|| {
                    view! {
                        <button class="drop-zone__clear" title="Remove file" on:click=on_clear>
                            "×"
                        </button>
                    }
                })}
        </div>
    }
}
