//! HTML rendering for the archive pages.
//!
//! Pages are small enough that they are assembled with `format!` directly.
//! Every interpolated value goes through [`escape`]; URLs placed into
//! query strings go through [`encode`].

use archive_core::embed::to_embed_url;
use archive_core::record::StreamRecord;
use archive_core::types::Timestamp;
use axum::http::StatusCode;

use crate::query::{non_empty, ListParams};

const STYLE: &str = "body{font-family:sans-serif;margin:2rem auto;max-width:72rem;padding:0 1rem}\
.grid{display:grid;grid-template-columns:repeat(auto-fill,minmax(20rem,1fr));gap:1.5rem}\
.card{border:1px solid #ddd;border-radius:4px;padding:1rem;box-shadow:0 1px 2px rgba(0,0,0,.08)}\
.card h2{font-size:1.1rem;margin:0 0 .5rem}\
.meta{color:#666;font-size:.8rem;margin:.25rem 0}\
.date{color:#555;font-size:.9rem}\
.error{color:#b00020;border:1px solid #b00020;border-radius:4px;padding:.75rem;margin:1rem 0}\
.empty{color:#666;margin-top:1rem}\
.filters{display:flex;flex-wrap:wrap;gap:.5rem;margin:1rem 0}\
input[type=text]{width:100%;box-sizing:border-box;padding:.5rem;margin:.5rem 0}\
select{padding:.4rem}\
iframe{border:0;width:100%}";

// ---------------------------------------------------------------------------
// Listing view
// ---------------------------------------------------------------------------

/// Everything the listing page needs for one render: the raw parameters
/// (to preserve control state), the derived vocabularies, the filtered
/// snapshot, and whether the fetch failed.
pub struct ListingView<'a> {
    pub params: &'a ListParams,
    pub seasons: &'a [String],
    pub streamers: &'a [String],
    pub tags: &'a [String],
    pub streams: &'a [&'a StreamRecord],
    pub fetch_error: bool,
}

pub fn listing_page(view: &ListingView<'_>) -> String {
    let mut body = String::from("<h1>Stream Archive</h1>");

    body.push_str("<form method=\"get\" action=\"/\">");

    // Calendar date filter with its clear affordance. Clearing resets only
    // the date criterion; the link reproduces every other parameter.
    let date_value = non_empty(view.params.date.as_deref()).unwrap_or("");
    body.push_str(&format!(
        "<p><label>Date <input type=\"date\" name=\"date\" value=\"{}\"></label>",
        escape(date_value)
    ));
    if !date_value.is_empty() {
        body.push_str(&format!(
            " <a href=\"{}\">Clear Date Filter</a>",
            clear_date_href(view.params)
        ));
    }
    body.push_str("</p>");

    let search_value = view.params.search.as_deref().unwrap_or("");
    body.push_str(&format!(
        "<input type=\"text\" name=\"search\" placeholder=\"Search streams...\" value=\"{}\">",
        escape(search_value)
    ));

    body.push_str("<div class=\"filters\">");
    body.push_str(&select_control(
        "season",
        "All Seasons",
        view.seasons,
        view.params.season.as_deref(),
    ));
    body.push_str(&select_control(
        "streamer",
        "All Streamers",
        view.streamers,
        view.params.streamer.as_deref(),
    ));
    body.push_str(&flag_control("smp", "SMP (all)", view.params.smp.as_deref()));
    body.push_str(&flag_control(
        "subtitles",
        "Subtitles (all)",
        view.params.subtitles.as_deref(),
    ));
    body.push_str(&select_control(
        "tag",
        "All Tags",
        view.tags,
        view.params.tag.as_deref(),
    ));
    body.push_str("<button type=\"submit\">Apply Filters</button>");
    body.push_str("</div></form>");

    if view.fetch_error {
        body.push_str(
            "<p class=\"error\">Failed to load streams from the archive. \
Try reloading the page.</p>",
        );
    } else if view.streams.is_empty() {
        body.push_str("<p class=\"empty\">No streams found.</p>");
    } else {
        body.push_str("<div class=\"grid\">");
        for stream in view.streams {
            body.push_str(&stream_card(stream));
        }
        body.push_str("</div>");
    }

    page("Stream Archive", &body)
}

fn stream_card(stream: &StreamRecord) -> String {
    let mut card = format!(
        "<article class=\"card\">\
<h2><a href=\"/stream/{id}\">{title}</a></h2>\
<p class=\"date\">{date}</p>\
<iframe height=\"225\" src=\"{src}\" allowfullscreen title=\"{title}\"></iframe>\
<p>{description}</p>\
<p class=\"meta\">Season: {season} | Streamer: {streamer} | SMP: {smp} | Subtitles: {subtitles}</p>",
        id = stream.id,
        title = escape(&stream.title),
        date = format_date(&stream.date),
        src = escape(&to_embed_url(&stream.youtube_url)),
        description = escape(stream.description.as_deref().unwrap_or("")),
        season = escape(or_na(stream.season.as_deref())),
        streamer = escape(or_na(stream.streamer.as_deref())),
        smp = yes_no(stream.smp),
        subtitles = yes_no(stream.subtitles),
    );
    if let Some(tags) = stream.tags.as_deref() {
        if !tags.is_empty() {
            card.push_str(&format!(
                "<p class=\"meta\">Tags: {}</p>",
                escape(&tags.join(", "))
            ));
        }
    }
    card.push_str("</article>");
    card
}

/// Reproduce the current query string without the date criterion.
fn clear_date_href(params: &ListParams) -> String {
    let pairs = [
        ("search", params.search.as_deref()),
        ("season", params.season.as_deref()),
        ("streamer", params.streamer.as_deref()),
        ("smp", params.smp.as_deref()),
        ("subtitles", params.subtitles.as_deref()),
        ("tag", params.tag.as_deref()),
    ];

    let query: Vec<String> = pairs
        .iter()
        .filter_map(|(name, value)| {
            non_empty(*value).map(|v| format!("{name}={}", encode(v)))
        })
        .collect();

    if query.is_empty() {
        "/".to_string()
    } else {
        format!("/?{}", query.join("&amp;"))
    }
}

fn select_control(
    name: &str,
    all_label: &str,
    options: &[String],
    selected: Option<&str>,
) -> String {
    let mut control = format!(
        "<select name=\"{name}\"><option value=\"\">{}</option>",
        escape(all_label)
    );
    for option in options {
        let marker = if selected == Some(option.as_str()) {
            " selected"
        } else {
            ""
        };
        control.push_str(&format!(
            "<option value=\"{value}\"{marker}>{value}</option>",
            value = escape(option)
        ));
    }
    control.push_str("</select>");
    control
}

/// The one-sided yes/any controls for SMP and subtitles.
fn flag_control(name: &str, all_label: &str, selected: Option<&str>) -> String {
    let marker = if selected == Some("yes") { " selected" } else { "" };
    format!(
        "<select name=\"{name}\"><option value=\"\">{}</option>\
<option value=\"yes\"{marker}>Yes</option></select>",
        escape(all_label)
    )
}

// ---------------------------------------------------------------------------
// Detail view
// ---------------------------------------------------------------------------

pub fn detail_page(stream: &StreamRecord) -> String {
    let mut body = format!(
        "<h1>{title}</h1>\
<p class=\"date\">{date}</p>\
<iframe height=\"500\" src=\"{src}\" allowfullscreen title=\"{title}\"></iframe>\
<p>{description}</p>\
<p class=\"meta\">Season: {season}</p>\
<p class=\"meta\">Streamer: {streamer}</p>\
<p class=\"meta\">SMP: {smp}</p>\
<p class=\"meta\">Subtitles: {subtitles}</p>",
        title = escape(&stream.title),
        date = format_date(&stream.date),
        src = escape(&to_embed_url(&stream.youtube_url)),
        description = escape(stream.description.as_deref().unwrap_or("")),
        season = escape(or_na(stream.season.as_deref())),
        streamer = escape(or_na(stream.streamer.as_deref())),
        smp = yes_no(stream.smp),
        subtitles = yes_no(stream.subtitles),
    );
    if let Some(tags) = stream.tags.as_deref() {
        if !tags.is_empty() {
            body.push_str(&format!(
                "<p class=\"meta\">Tags: {}</p>",
                escape(&tags.join(", "))
            ));
        }
    }
    body.push_str("<p><a href=\"/\">Back to archive</a></p>");

    page(&stream.title, &body)
}

// ---------------------------------------------------------------------------
// Error pages
// ---------------------------------------------------------------------------

pub fn error_page(status: StatusCode, message: &str) -> String {
    let body = format!(
        "<h1>{}</h1><p class=\"error\">{}</p><p><a href=\"/\">Back to archive</a></p>",
        status.as_u16(),
        escape(message)
    );
    page("Stream Archive", &body)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn page(title: &str, body: &str) -> String {
    format!(
        "<!doctype html><html><head><meta charset=\"utf-8\">\
<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\
<title>{}</title><style>{STYLE}</style></head><body>{}</body></html>",
        escape(title),
        body
    )
}

/// Render a timestamp as a human-readable calendar date.
pub fn format_date(ts: &Timestamp) -> String {
    ts.format("%B %-d, %Y").to_string()
}

fn or_na(value: Option<&str>) -> &str {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => "N/A",
    }
}

fn yes_no(value: Option<bool>) -> &'static str {
    if value == Some(true) {
        "Yes"
    } else {
        "No"
    }
}

/// Minimal HTML escaping for text and attribute positions.
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
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

/// Percent-encode a query-string component.
fn encode(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char);
            }
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
