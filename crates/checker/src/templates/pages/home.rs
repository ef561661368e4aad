use maud::{html, Markup};

use crate::templates::fragments::{error_notice, report_card};
use crate::templates::layouts::{base, PageConfig};
use crate::weather::{ReportError, WeatherReport};

/// The single page: search form plus an optional report or error notice
pub fn home_page(report: Option<&WeatherReport>, error: Option<&ReportError>) -> Markup {
    let config = PageConfig {
        title: "Weather Checker",
    };

    base(&config, content(report, error))
}

fn content(report: Option<&WeatherReport>, error: Option<&ReportError>) -> Markup {
    html! {
        (search_form())

        @if let Some(error) = error {
            (error_notice(error))
        }

        @if let Some(report) = report {
            (report_card(report))
        }
    }
}

fn search_form() -> Markup {
    html! {
        form method="post" action="/" class="box" {
            div class="field has-addons" {
                div class="control is-expanded" {
                    input class="input" type="text" name="city"
                          placeholder="City name, e.g. Paris" autofocus;
                }
                div class="control" {
                    button class="button is-link" type="submit" {
                        "Check Weather"
                    }
                }
            }
        }
    }
}
