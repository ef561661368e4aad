use maud::{html, Markup, DOCTYPE};

pub struct PageConfig<'a> {
    pub title: &'a str,
}

pub fn base(config: &PageConfig, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (config.title) }
                link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/bulma@1.0.4/css/bulma.min.css";
            }
            body {
                section class="section" {
                    div class="container is-max-desktop" {
                        a href="/" class="has-text-current" style="text-decoration: none;" {
                            h1 class="title" { "⛅ Weather Checker" }
                        }
                        p class="subtitle is-6" {
                            "Current conditions and a 7-day forecast for any city"
                        }

                        div id="main-content" {
                            (content)
                        }
                    }
                }
            }
        }
    }
}
