use maud::{html, Markup, PreEscaped, DOCTYPE};

use crate::article::Article;

const DATE_FORMAT: &str = "%Y-%m-%d";

fn layout(page_title: &str, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (page_title) }
                link rel="stylesheet" href="/static/style.css";
            }
            body { (body) }
        }
    }
}

pub fn index_page(page_title: &str, articles: &[Article]) -> Markup {
    layout(
        page_title,
        html! {
            h1 { (page_title) }
            ul.article-list {
                @for article in articles {
                    li {
                        a href={ "/article/" (article.name) } { (article.display_name) }
                        " "
                        time.updated datetime=(article.updated_at.to_rfc3339()) {
                            (article.updated_at.format(DATE_FORMAT))
                        }
                    }
                }
            }
        },
    )
}

pub fn article_page(article: &Article) -> Markup {
    // `title` and `contents` are fragments the markdown renderer already
    // produced; splice them through unescaped.
    layout(
        &article.display_name,
        html! {
            header { (PreEscaped(&article.title)) }
            article { (PreEscaped(&article.contents)) }
            footer {
                "Updated "
                time datetime=(article.updated_at.to_rfc3339()) {
                    (article.updated_at.format(DATE_FORMAT))
                }
            }
        },
    )
}
