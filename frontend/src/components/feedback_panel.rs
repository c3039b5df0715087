use shared::{Feedback, FeedbackCategory, FeedbackItem};
use yew::prelude::*;

/// Renders session feedback as a card: the overall summary as a heading,
/// then one row per remark in the order the reviewer produced them.
/// Renders nothing when there is no feedback to show.
pub fn render_feedback_panel(feedback: Option<&Feedback>) -> Html {
    match feedback {
        Some(feedback) if !feedback.items.is_empty() => html! {
            <div class="feedback-container">
                <h2 class="feedback-overall">{ &feedback.overall }</h2>
                <div class="feedback-items">
                    { for feedback.items.iter().enumerate().map(|(index, item)| render_feedback_item(index, item)) }
                </div>
            </div>
        },
        _ => html! {},
    }
}

fn render_feedback_item(index: usize, item: &FeedbackItem) -> Html {
    html! {
        <div class={classes!("feedback-item", item.category.to_string())} key={index.to_string()}>
            <i class={classes!("fa-solid", category_icon(item.category))}></i>
            <p class="feedback-message">{ &item.message }</p>
        </div>
    }
}

// Positive remarks get the check mark; everything else reads as a caution.
fn category_icon(category: FeedbackCategory) -> &'static str {
    match category {
        FeedbackCategory::Positive => "fa-circle-check",
        _ => "fa-triangle-exclamation",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(category: FeedbackCategory, message: &str) -> FeedbackItem {
        FeedbackItem {
            category,
            message: message.to_string(),
        }
    }

    #[test]
    fn absent_feedback_renders_nothing() {
        assert_eq!(render_feedback_panel(None), html! {});
    }

    #[test]
    fn empty_items_render_nothing() {
        let feedback = Feedback {
            overall: "Needs work".to_string(),
            items: vec![],
        };

        assert_eq!(render_feedback_panel(Some(&feedback)), html! {});
    }

    #[test]
    fn positive_items_get_the_check_icon() {
        assert_eq!(category_icon(FeedbackCategory::Positive), "fa-circle-check");
    }

    #[test]
    fn other_categories_get_the_warning_icon() {
        assert_eq!(
            category_icon(FeedbackCategory::Improvement),
            "fa-triangle-exclamation"
        );
    }

    #[test]
    fn rows_carry_the_category_marker_and_message() {
        let row = render_feedback_item(0, &item(FeedbackCategory::Positive, "Clear answer"));

        let expected = html! {
            <div class={classes!("feedback-item", "positive".to_string())} key={0.to_string()}>
                <i class={classes!("fa-solid", "fa-circle-check")}></i>
                <p class="feedback-message">{ "Clear answer" }</p>
            </div>
        };

        assert_eq!(row, expected);
    }

    #[test]
    fn renders_one_row_per_item_in_input_order() {
        let feedback = Feedback {
            overall: "Great job!".to_string(),
            items: vec![
                item(FeedbackCategory::Positive, "Clear answer"),
                item(FeedbackCategory::Improvement, "Slow down"),
            ],
        };

        let rows = vec![
            html! {
                <div class={classes!("feedback-item", "positive".to_string())} key={0.to_string()}>
                    <i class={classes!("fa-solid", "fa-circle-check")}></i>
                    <p class="feedback-message">{ "Clear answer" }</p>
                </div>
            },
            html! {
                <div class={classes!("feedback-item", "improvement".to_string())} key={1.to_string()}>
                    <i class={classes!("fa-solid", "fa-triangle-exclamation")}></i>
                    <p class="feedback-message">{ "Slow down" }</p>
                </div>
            },
        ];
        let expected = html! {
            <div class="feedback-container">
                <h2 class="feedback-overall">{ "Great job!" }</h2>
                <div class="feedback-items">
                    { for rows.into_iter() }
                </div>
            </div>
        };

        assert_eq!(render_feedback_panel(Some(&feedback)), expected);
    }
}
