use leptos::ev::SubmitEvent;
use leptos::*;

use crate::models::review::{comment_length, NewReview, ReviewDraft, COMMENT_MAX, RATING_CHOICES};

/// Form for submitting a review: a 1-5 star radio group with a live numeric
/// display, a comment field with a running character counter, and an error
/// region. Validation happens on submit; the first failure wins and nothing
/// is persisted. The parent remounts this component when the selected item
/// changes, which resets every control to its blank state.
#[component]
pub fn ReviewForm(on_submit: Callback<NewReview>) -> impl IntoView {
    let (rating, set_rating) = create_signal(None::<u8>);
    let (comment, set_comment) = create_signal(String::new());
    let (error, set_error) = create_signal(String::new());

    let rating_display = move || match rating.get() {
        Some(value) => format!("{:.1}", f64::from(value)),
        None => "0.0".to_string(),
    };

    let char_count = move || format!("{}/{}", comment_length(&comment.get()), COMMENT_MAX);

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        // Every attempt starts with a clean error region
        set_error.set(String::new());

        let draft = ReviewDraft {
            rating: rating.get(),
            comment: comment.get(),
        };
        match draft.validate() {
            Ok(new_review) => {
                on_submit.call(new_review);
                set_rating.set(None);
                set_comment.set(String::new());
            }
            Err(err) => set_error.set(err.to_string()),
        }
    };

    view! {
        <form class="review-form" on:submit=handle_submit>
            <fieldset class="rating-group">
                <legend>{ "Your rating" }</legend>
                {RATING_CHOICES
                    .iter()
                    .map(|&value| {
                        view! {
                            <label class="rating-option">
                                <input
                                    type="radio"
                                    name="rating"
                                    value=value
                                    prop:checked=move || rating.get() == Some(value)
                                    on:change=move |_| {
                                        set_rating.set(Some(value));
                                        set_error.set(String::new());
                                    }
                                />
                                {value.to_string()}
                            </label>
                        }
                    })
                    .collect::<Vec<_>>()}
                <span class="rating-value">{rating_display}</span>
            </fieldset>
            <textarea
                placeholder="Write your review here"
                prop:value=comment
                on:input=move |e| set_comment.set(event_target_value(&e))
            />
            <div class="char-count">{char_count}</div>
            <div class="form-error">{error}</div>
            <button type="submit">{ "Submit Review" }</button>
        </form>
    }
}
