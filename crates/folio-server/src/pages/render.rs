//! Server-side HTML rendering for the page façade.
//!
//! Pages are assembled with plain string building around a shared layout.
//! Every piece of stored or configured text goes through [`escape`].

use folio_core::config::SiteConfig;
use folio_db::models::Work;

/// Escape text for inclusion in HTML element content or attribute values.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Wrap `body` in the site chrome: head, navigation and footer.
fn layout(site: &SiteConfig, page_title: &str, body: &str) -> String {
    let site_title = escape(&site.title);
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\"><head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str(&format!(
        "<title>{} | {}</title>\n",
        escape(page_title),
        site_title
    ));
    html.push_str("<style>\n");
    html.push_str("body { font-family: system-ui, sans-serif; max-width: 760px; margin: 2rem auto; padding: 0 1rem; }\n");
    html.push_str("nav a { margin-right: 1rem; }\n");
    html.push_str(".work { border-bottom: 1px solid #ddd; padding: 0.75rem 0; }\n");
    html.push_str("label { display: block; margin-top: 0.75rem; }\n");
    html.push_str("input, textarea { width: 100%; }\n");
    html.push_str("</style>\n</head><body>\n");

    html.push_str(&format!("<header><h1>{site_title}</h1>\n"));
    html.push_str("<nav><a href=\"/\">Home</a><a href=\"/about\">About</a>");
    html.push_str("<a href=\"/portfolio\">Portfolio</a><a href=\"/contact\">Contact</a>");
    html.push_str("<a href=\"/add_work\">Add work</a></nav></header>\n");

    html.push_str("<main>\n");
    html.push_str(body);
    html.push_str("</main>\n");

    html.push_str(&format!("<footer><p>{site_title}</p></footer>\n"));
    html.push_str("</body></html>");
    html
}

pub fn home(site: &SiteConfig) -> String {
    let body = format!(
        "<h2>Welcome</h2>\n<p>{}</p>\n<p><a href=\"/portfolio\">Browse the portfolio</a></p>\n",
        escape(&site.tagline)
    );
    layout(site, "Home", &body)
}

pub fn about(site: &SiteConfig) -> String {
    let body = format!("<h2>About</h2>\n<p>{}</p>\n", escape(&site.about));
    layout(site, "About", &body)
}

pub fn contact(site: &SiteConfig) -> String {
    let email = escape(&site.contact_email);
    let body = format!(
        "<h2>Contact</h2>\n<p>Write to <a href=\"mailto:{email}\">{email}</a>.</p>\n"
    );
    layout(site, "Contact", &body)
}

/// List every work in the order the store returned them.
pub fn portfolio(site: &SiteConfig, works: &[Work]) -> String {
    let mut body = String::from("<h2>Portfolio</h2>\n");

    if works.is_empty() {
        body.push_str("<p class=\"empty\">No works yet. <a href=\"/add_work\">Add the first one</a>.</p>\n");
    }

    for work in works {
        body.push_str(&format!("<article class=\"work\" id=\"work-{}\">\n", work.id));
        body.push_str(&format!("  <h3>{}</h3>\n", escape(&work.title)));
        body.push_str(&format!("  <p>{}</p>\n", escape(&work.description)));
        body.push_str("</article>\n");
    }

    layout(site, "Portfolio", &body)
}

/// Empty creation form posting back to `/add_work`.
pub fn add_work_form(site: &SiteConfig) -> String {
    let body = "<h2>Add work</h2>\n\
        <form method=\"post\" action=\"/add_work\">\n\
        <label for=\"title\">Title</label>\n\
        <input type=\"text\" id=\"title\" name=\"title\" maxlength=\"120\" required>\n\
        <label for=\"description\">Description</label>\n\
        <textarea id=\"description\" name=\"description\" rows=\"6\" required></textarea>\n\
        <p><button type=\"submit\">Save</button></p>\n\
        </form>\n";
    layout(site, "Add work", body)
}
