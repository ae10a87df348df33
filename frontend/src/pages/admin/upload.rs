use crate::api::{files, ApiError, UploadResponse};
use leptos::*;

#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub file_name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

pub type UploadAction = Action<ImageUpload, Result<UploadResponse, ApiError>>;

pub fn use_upload_action() -> UploadAction {
    let repository = super::repository::AdminRepository::from_context();
    create_action(move |upload: &ImageUpload| {
        let repo = repository.clone();
        let upload = upload.clone();
        async move {
            repo.upload_image(upload.file_name, upload.mime, upload.bytes)
                .await
        }
    })
}

/// Adds a stored file name once; re-uploading the same image is a no-op.
pub fn append_image(images: &mut Vec<String>, file_name: String) {
    if !images.contains(&file_name) {
        images.push(file_name);
    }
}

/// Thumbnails with remove buttons and a file input that uploads straight away.
#[component]
pub fn ImagePicker(
    images: RwSignal<Vec<String>>,
    upload_action: UploadAction,
    error: RwSignal<Option<String>>,
) -> impl IntoView {
    let uploading = upload_action.pending();

    create_effect(move |_| {
        if let Some(result) = upload_action.value().get() {
            match result {
                Ok(uploaded) => images.update(|list| append_image(list, uploaded.file_name)),
                Err(err) => error.set(Some(err.to_string())),
            }
        }
    });

    view! {
        <fieldset class="space-y-2">
            <legend class="text-sm font-medium text-fg-muted">"Photos"</legend>
            <div class="flex flex-wrap gap-2">
                {move || images
                    .get()
                    .into_iter()
                    .map(|name| {
                        let src = files::image_src(Some(name.as_str()));
                        let remove = name.clone();
                        view! {
                            <div class="relative">
                                <img src=src alt=name class="h-20 w-28 object-cover rounded-md" />
                                <button
                                    type="button"
                                    aria-label="Remove photo"
                                    class="absolute top-1 right-1 rounded-full bg-overlay-backdrop text-xs text-white px-1"
                                    on:click=move |_| images.update(|list| list.retain(|existing| *existing != remove))
                                >
                                    "✕"
                                </button>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
            <input
                type="file"
                accept="image/jpeg,image/png,image/webp,image/gif,image/svg+xml"
                class="text-sm"
                disabled=move || uploading.get()
                on:change=move |ev| upload_selected_file(ev, upload_action, error)
            />
            <Show when=move || uploading.get()>
                <p class="text-xs text-fg-muted">"Uploading..."</p>
            </Show>
        </fieldset>
    }
}

#[cfg(target_arch = "wasm32")]
fn upload_selected_file(ev: ev::Event, upload_action: UploadAction, error: RwSignal<Option<String>>) {
    use wasm_bindgen::JsCast;

    let Some(input) = ev
        .target()
        .and_then(|target| target.dyn_into::<web_sys::HtmlInputElement>().ok())
    else {
        return;
    };
    let Some(file) = input.files().and_then(|list| list.get(0)) else {
        return;
    };
    input.set_value("");
    spawn_local(async move {
        match files::read_file_bytes(&file).await {
            Ok(bytes) => upload_action.dispatch(ImageUpload {
                file_name: file.name(),
                mime: file.type_(),
                bytes,
            }),
            Err(err) => error.set(Some(err.to_string())),
        }
    });
}

#[cfg(not(target_arch = "wasm32"))]
fn upload_selected_file(_ev: ev::Event, _upload_action: UploadAction, _error: RwSignal<Option<String>>) {}
