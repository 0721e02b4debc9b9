//! Alert system for displaying success and error messages to users.
//!
//! Alerts are rendered into the page's `#alert-container`, either as the
//! target of an htmx error response or as an out-of-band swap alongside a
//! successful response.

use maud::{Markup, html};

/// A message shown to the user after an action.
#[derive(Debug, Clone, PartialEq)]
pub enum Alert {
    /// The action succeeded.
    Success {
        /// The headline of the alert.
        message: String,
        /// Extra information, may be empty.
        details: String,
    },
    /// The action failed.
    Error {
        /// The headline of the alert.
        message: String,
        /// What went wrong and how to fix it, may be empty.
        details: String,
    },
}

impl Alert {
    /// Render the alert for swapping into `#alert-container`.
    pub fn into_html(self) -> Markup {
        let (container_style, message, details) = match self {
            Alert::Success { message, details } => (
                "p-4 mb-4 text-sm text-green-800 rounded-lg bg-green-50 \
                dark:bg-gray-800 dark:text-green-400 shadow",
                message,
                details,
            ),
            Alert::Error { message, details } => (
                "p-4 mb-4 text-sm text-red-800 rounded-lg bg-red-50 \
                dark:bg-gray-800 dark:text-red-400 shadow",
                message,
                details,
            ),
        };

        html! {
            div class=(container_style) role="alert"
            {
                div class="flex items-start justify-between gap-4"
                {
                    div
                    {
                        span class="font-semibold" { (message) }

                        @if !details.is_empty() {
                            p class="mt-1" { (details) }
                        }
                    }

                    button
                        type="button"
                        aria-label="Dismiss"
                        class="font-bold"
                        onclick="this.closest('[role=alert]').remove()"
                    {
                        "×"
                    }
                }
            }
        }
    }

    /// Render the alert so that htmx swaps it into `#alert-container`
    /// out-of-band, i.e. in addition to the main response content.
    pub fn into_oob_html(self) -> Markup {
        html! {
            div
                id="alert-container"
                hx-swap-oob="innerHTML"
            {
                (self.into_html())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use scraper::{Html, Selector};

    use super::Alert;

    #[test]
    fn error_alert_shows_message_and_details() {
        let alert = Alert::Error {
            message: "Invalid Amount".to_owned(),
            details: "must be at least 1.00, got 0.00".to_owned(),
        };

        let html = Html::parse_fragment(&alert.into_html().into_string());

        let text = html
            .select(&Selector::parse("[role=alert]").unwrap())
            .next()
            .expect("no alert found")
            .text()
            .collect::<String>();
        assert!(text.contains("Invalid Amount"), "got {text:?}");
        assert!(text.contains("must be at least 1.00"), "got {text:?}");
    }

    #[test]
    fn success_alert_without_details_has_no_paragraph() {
        let alert = Alert::Success {
            message: "Transaction added".to_owned(),
            details: String::new(),
        };

        let html = Html::parse_fragment(&alert.into_html().into_string());

        assert!(
            html.select(&Selector::parse("p").unwrap()).next().is_none(),
            "want no details paragraph"
        );
    }

    #[test]
    fn out_of_band_alert_targets_alert_container() {
        let alert = Alert::Success {
            message: "Transaction added".to_owned(),
            details: String::new(),
        };

        let html = Html::parse_fragment(&alert.into_oob_html().into_string());

        let container = html
            .select(&Selector::parse("#alert-container").unwrap())
            .next()
            .expect("no alert container found");
        assert_eq!(container.value().attr("hx-swap-oob"), Some("innerHTML"));
    }
}
