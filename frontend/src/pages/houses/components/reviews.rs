use crate::{
    api::{ApiError, CreateReview, Review},
    components::{
        cards::{RatingStars, ReviewCard},
        forms::TextAreaField,
        layout::{ErrorMessage, LoadingSpinner},
    },
    pages::houses::utils::{average_rating, ReviewFormState},
    state::auth::use_auth,
    utils::{format, navigation},
};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn ReviewsSection(
    house_id: i64,
    #[prop(into)] reviews: Signal<Vec<Review>>,
    #[prop(into)] loading: Signal<bool>,
    review_action: Action<CreateReview, Result<Review, ApiError>>,
    delete_review_action: Action<i64, Result<(), ApiError>>,
) -> impl IntoView {
    let (auth, _set_auth) = use_auth();
    let is_authenticated = move || auth.get().is_authenticated;
    let is_admin = move || auth.get().is_admin();
    let on_delete = Callback::new(move |id: i64| {
        delete_review_action.dispatch(id);
    });
    let login_href = navigation::login_path_with_redirect(Some(&format!("/houses/{}", house_id)));

    let summary = move || {
        reviews.with(|reviews| {
            average_rating(reviews).map(|average| {
                (
                    average,
                    format!(
                        "{} from {}",
                        format::format_rating(Some(average)),
                        format::pluralize(reviews.len() as i64, "review", "reviews")
                    ),
                )
            })
        })
    };

    view! {
        <section class="space-y-4">
            <div class="flex items-center gap-3">
                <h2 class="text-xl font-semibold text-fg">"Reviews"</h2>
                {move || summary().map(|(average, text)| view! {
                    <span class="flex items-center gap-2 text-sm text-fg-muted">
                        <RatingStars rating=average />
                        {text}
                    </span>
                })}
            </div>
            <Show when=move || loading.get()>
                <LoadingSpinner />
            </Show>
            <Show when=move || !loading.get() && reviews.with(Vec::is_empty)>
                <p class="text-sm text-fg-muted">"No reviews yet."</p>
            </Show>
            <div class="space-y-3">
                <For
                    each=move || reviews.get()
                    key=|review| review.id
                    children=move |review: Review| {
                        if is_admin() {
                            view! { <ReviewCard review=review on_delete=on_delete /> }
                        } else {
                            view! { <ReviewCard review=review /> }
                        }
                    }
                />
            </div>
            <Show
                when=is_authenticated
                fallback=move || {
                    let href = login_href.clone();
                    view! {
                        <p class="text-sm text-fg-muted">
                            <a href=href class="text-link hover:text-link-hover">"Sign in"</a>
                            " to leave a review."
                        </p>
                    }
                }
            >
                <ReviewForm house_id=house_id review_action=review_action />
            </Show>
        </section>
    }
}

#[component]
pub fn ReviewForm(
    house_id: i64,
    review_action: Action<CreateReview, Result<Review, ApiError>>,
) -> impl IntoView {
    let rating = create_rw_signal(ReviewFormState::default().rating);
    let comment = create_rw_signal(String::new());
    let error = create_rw_signal(None::<String>);
    let pending = review_action.pending();

    create_effect(move |_| {
        if let Some(Ok(_)) = review_action.value().get() {
            comment.set(String::new());
            rating.set(ReviewFormState::default().rating);
        }
    });

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        let state = ReviewFormState {
            rating: rating.get(),
            comment: comment.get(),
        };
        match state.to_request(house_id) {
            Ok(request) => {
                error.set(None);
                review_action.dispatch(request);
            }
            Err(message) => error.set(Some(message)),
        }
    };

    view! {
        <form class="bg-surface-elevated rounded-lg border border-border p-4 space-y-3" on:submit=handle_submit>
            <h3 class="text-sm font-semibold text-fg">"Write a review"</h3>
            <div class="flex gap-1" role="radiogroup" aria-label="Rating">
                {(1..=5u8)
                    .map(|value| view! {
                        <button
                            type="button"
                            class=move || if value <= rating.get() {
                                "text-2xl text-status-warning-text"
                            } else {
                                "text-2xl text-fg-muted opacity-40"
                            }
                            aria-label=format!("{} stars", value)
                            on:click=move |_| rating.set(value)
                        >
                            "★"
                        </button>
                    })
                    .collect_view()}
            </div>
            <TextAreaField label="Comment" value=comment id="review-comment" rows=3 />
            {move || error.get().map(|message| view! { <ErrorMessage message=message /> })}
            <button
                type="submit"
                class="inline-flex justify-center rounded-md px-4 py-2 text-sm font-semibold bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover disabled:opacity-50"
                disabled=move || pending.get()
            >
                {move || if pending.get() { "Posting..." } else { "Post review" }}
            </button>
        </form>
    }
}
