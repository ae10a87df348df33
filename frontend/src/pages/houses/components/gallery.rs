use crate::api::files;
use leptos::*;

#[component]
pub fn HouseGallery(images: Vec<String>, #[prop(into)] alt: String) -> impl IntoView {
    let selected = create_rw_signal(0usize);
    let images = store_value(images);
    let main_src = move || {
        images.with_value(|images| files::image_src(images.get(selected.get()).map(String::as_str)))
    };
    let thumbnails = images.with_value(|images| {
        if images.len() < 2 {
            return Vec::new();
        }
        images
            .iter()
            .enumerate()
            .map(|(index, name)| (index, files::image_src(Some(name))))
            .collect::<Vec<_>>()
    });
    let main_alt = alt.clone();

    view! {
        <div class="space-y-2">
            <img src=main_src alt=main_alt class="w-full h-72 sm:h-96 object-cover rounded-lg" />
            <div class="flex gap-2 overflow-x-auto">
                {thumbnails
                    .into_iter()
                    .map(|(index, src)| {
                        let thumb_alt = format!("{} photo {}", alt, index + 1);
                        view! {
                            <button
                                type="button"
                                class=move || if selected.get() == index {
                                    "shrink-0 rounded-md ring-2 ring-action-primary-bg"
                                } else {
                                    "shrink-0 rounded-md opacity-70 hover:opacity-100"
                                }
                                on:click=move |_| selected.set(index)
                            >
                                <img src=src alt=thumb_alt class="h-16 w-24 object-cover rounded-md" loading="lazy" />
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
