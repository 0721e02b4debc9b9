//! The form for adding a transaction.

use maud::{Markup, html};
use time::Date;

use crate::{
    amount::Amount,
    category::{TransactionType, allowed_categories},
    endpoints,
    html::{
        BUTTON_PRIMARY_STYLE, FORM_LABEL_STYLE, FORM_RADIO_GROUP_STYLE, FORM_RADIO_INPUT_STYLE,
        FORM_RADIO_LABEL_STYLE, FORM_TEXT_INPUT_STYLE, SECTION_HEADING_STYLE, loading_spinner,
    },
};

/// The initial values of the transaction form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransactionFormDefaults {
    /// The transaction type that is selected, which also decides the category options.
    pub transaction_type: TransactionType,
    /// The initial date.
    pub date: Date,
    /// The smallest amount the amount input accepts.
    pub minimum_amount: Amount,
}

/// Render the `<option>` elements for the categories of `transaction_type`.
///
/// The first category is selected.
pub fn category_options(transaction_type: TransactionType) -> Markup {
    html! {
        @for (index, category) in allowed_categories(transaction_type).iter().enumerate() {
            option value=(category.id()) selected[index == 0] { (category) }
        }
    }
}

/// Render the form for adding a transaction.
///
/// A successful submission replaces `#tracker-content`, an error response
/// goes to `#alert-container` so the form keeps its input.
pub fn transaction_form(defaults: &TransactionFormDefaults) -> Markup {
    let spinner = loading_spinner();

    html! {
        form
            hx-post=(endpoints::TRANSACTIONS_API)
            hx-target="#tracker-content"
            hx-swap="outerHTML"
            hx-target-error="#alert-container"
            class="w-full space-y-4"
        {
            h2 class=(SECTION_HEADING_STYLE) { "Add Transaction" }

            fieldset class="space-y-2"
            {
                legend class=(FORM_LABEL_STYLE) { "Type" }

                div class=(FORM_RADIO_GROUP_STYLE)
                {
                    @for transaction_type in TransactionType::ALL {
                        @let input_id = format!("transaction-type-{}", transaction_type.id());

                        div class="flex items-center gap-3"
                        {
                            input
                                name="type_"
                                id=(input_id)
                                type="radio"
                                value=(transaction_type.id())
                                checked[transaction_type == defaults.transaction_type]
                                required
                                tabindex="0"
                                hx-get=(endpoints::CATEGORY_OPTIONS)
                                hx-trigger="change"
                                hx-target="#category"
                                hx-swap="innerHTML"
                                class=(FORM_RADIO_INPUT_STYLE);

                            label
                                for=(input_id)
                                class=(FORM_RADIO_LABEL_STYLE)
                            {
                                (transaction_type)
                            }
                        }
                    }
                }
            }

            div
            {
                label
                    for="date"
                    class=(FORM_LABEL_STYLE)
                {
                    "Date"
                }

                input
                    name="date"
                    id="date"
                    type="date"
                    value=(defaults.date)
                    required
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label
                    for="amount"
                    class=(FORM_LABEL_STYLE)
                {
                    "Amount"
                }

                input
                    name="amount"
                    id="amount"
                    type="number"
                    step="0.01"
                    min=(defaults.minimum_amount)
                    max=(Amount::MAXIMUM)
                    placeholder=(defaults.minimum_amount)
                    required
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label
                    for="category"
                    class=(FORM_LABEL_STYLE)
                {
                    "Category"
                }

                select
                    name="category"
                    id="category"
                    required
                    class=(FORM_TEXT_INPUT_STYLE)
                {
                    (category_options(defaults.transaction_type))
                }
            }

            div
            {
                label
                    for="description"
                    class=(FORM_LABEL_STYLE)
                {
                    "Description"
                }

                textarea
                    name="description"
                    id="description"
                    rows="2"
                    placeholder="Description"
                    class=(FORM_TEXT_INPUT_STYLE)
                {}
            }

            button type="submit" id="submit-button" tabindex="0" class=(BUTTON_PRIMARY_STYLE)
            {
                span
                    id="indicator"
                    class="inline htmx-indicator"
                {
                    (spinner)
                }
                " Add"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use scraper::{Html, Selector};
    use time::macros::date;

    use crate::{
        amount::Amount,
        category::{Category, TransactionType, allowed_categories},
        endpoints,
        test_utils::{
            assert_form_input_with_value, assert_form_submit_button_with_text, assert_hx_endpoint,
            assert_valid_html, must_get_form,
        },
        transaction::form::{TransactionFormDefaults, category_options, transaction_form},
    };

    fn render_form(transaction_type: TransactionType) -> Html {
        let form = transaction_form(&TransactionFormDefaults {
            transaction_type,
            date: date!(2024 - 03 - 15),
            minimum_amount: Amount::from_units(1),
        });

        Html::parse_fragment(&form.into_string())
    }

    fn option_values(html: &Html) -> Vec<String> {
        html.select(&Selector::parse("option").unwrap())
            .map(|option| option.value().attr("value").unwrap_or_default().to_owned())
            .collect()
    }

    #[test]
    fn form_posts_to_transactions_api() {
        let html = render_form(TransactionType::Income);
        assert_valid_html(&html);

        let form = must_get_form(&html);

        assert_hx_endpoint(&form, endpoints::TRANSACTIONS_API, "hx-post");
        assert_hx_endpoint(&form, "#alert-container", "hx-target-error");
        assert_form_input_with_value(&form, "date", "date", "2024-03-15");
        assert_form_submit_button_with_text(&form, "Add");
    }

    #[test]
    fn amount_input_uses_minimum_amount() {
        let html = render_form(TransactionType::Income);

        let amount = html
            .select(&Selector::parse("input[name=amount]").unwrap())
            .next()
            .expect("no amount input");

        assert_eq!(amount.value().attr("type"), Some("number"));
        assert_eq!(amount.value().attr("min"), Some("1.00"));
        assert_eq!(amount.value().attr("max"), Some("1000000000.00"));
    }

    #[test]
    fn form_checks_selected_type() {
        for (transaction_type, want_checked) in [
            (TransactionType::Income, "income"),
            (TransactionType::Expense, "expense"),
        ] {
            let html = render_form(transaction_type);

            let inputs = html
                .select(&Selector::parse("input[type=radio][name=type_]").unwrap())
                .collect::<Vec<_>>();
            assert_eq!(inputs.len(), 2);
            let checked = inputs
                .iter()
                .find(|input| input.value().attr("checked").is_some())
                .and_then(|input| input.value().attr("value"));
            assert_eq!(checked, Some(want_checked));
        }
    }

    #[test]
    fn type_inputs_request_category_options() {
        let html = render_form(TransactionType::Income);

        for input in html.select(&Selector::parse("input[type=radio]").unwrap()) {
            assert_eq!(
                input.value().attr("hx-get"),
                Some(endpoints::CATEGORY_OPTIONS)
            );
            assert_eq!(input.value().attr("hx-target"), Some("#category"));
        }
    }

    #[test]
    fn category_select_lists_categories_for_selected_type() {
        for transaction_type in TransactionType::ALL {
            let html = render_form(transaction_type);

            let want = allowed_categories(transaction_type)
                .iter()
                .map(|category| category.id().to_owned())
                .collect::<Vec<_>>();
            assert_eq!(option_values(&html), want);
        }
    }

    #[test]
    fn category_options_selects_first_category() {
        let html = Html::parse_fragment(&category_options(TransactionType::Expense).into_string());

        let selected = html
            .select(&Selector::parse("option[selected]").unwrap())
            .map(|option| option.value().attr("value").unwrap_or_default().to_owned())
            .collect::<Vec<_>>();

        assert_eq!(selected, vec![Category::Food.id().to_owned()]);
    }
}
