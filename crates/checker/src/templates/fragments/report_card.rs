use maud::{html, Markup};

use crate::weather::{DailyOutlook, ReportError, WeatherReport};

/// Error notice shown in place of a report
pub fn error_notice(error: &ReportError) -> Markup {
    html! {
        div class="notification is-danger is-light" {
            "❌ " (error)
        }
    }
}

/// Current conditions plus the 7-day forecast table
pub fn report_card(report: &WeatherReport) -> Markup {
    html! {
        div class="box" {
            h2 class="title is-4" {
                (report.icon) " " (report.place)
            }
            p class="subtitle is-5" { (report.condition) }

            nav class="level" {
                (level_item("Temperature", &format!("{:.1} °C / {:.1} °F", report.temp_c, report.temp_f)))
                (level_item("Wind speed", &format!("{:.1} km/h", report.windspeed)))
                (level_item("Wind direction", &format!("{:.0}°", report.winddir)))
            }

            (forecast_table(&report.forecast))
        }
    }
}

fn level_item(label: &str, value: &str) -> Markup {
    html! {
        div class="level-item has-text-centered" {
            div {
                p class="heading" { (label) }
                p class="title is-5" { (value) }
            }
        }
    }
}

fn forecast_table(days: &[DailyOutlook]) -> Markup {
    html! {
        h3 class="title is-5 mb-3" { "7-Day Forecast" }
        div class="table-container" {
            table class="table is-fullwidth is-striped is-hoverable" {
                thead {
                    tr {
                        th { "Date" }
                        th { "Conditions" }
                        th class="has-text-right" { "Min / Max (°C)" }
                        th class="has-text-right" { "Min / Max (°F)" }
                    }
                }
                tbody {
                    @for day in days {
                        tr {
                            td { (day.date) }
                            td {
                                (day.icon) " " (day.condition)
                            }
                            td class="has-text-right" {
                                (format!("{:.1} / {:.1}", day.temp_min_c, day.temp_max_c))
                            }
                            td class="has-text-right" {
                                (format!("{:.1} / {:.1}", day.temp_min_f, day.temp_max_f))
                            }
                        }
                    }
                }
            }
        }
    }
}
