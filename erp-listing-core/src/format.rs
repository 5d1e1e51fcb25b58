use crate::navigation::{NavControl, NavStrip};

/// Markup knobs for [`strip_to_html_with`].
#[derive(Debug, Clone)]
pub struct StripOptions {
    pub button_class: String,
    pub active_class: String,
    pub previous_icon: String,
    pub next_icon: String,
}

impl Default for StripOptions {
    fn default() -> Self {
        StripOptions {
            button_class: "btn-page".to_string(),
            active_class: "active".to_string(),
            previous_icon: "fas fa-chevron-left".to_string(),
            next_icon: "fas fa-chevron-right".to_string(),
        }
    }
}

/// Escape record text for use inside element content or a quoted attribute.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// One-line text rendering, e.g. `‹ 1 [2] 3 ›`.
///
/// Disabled arrows are shown as `·` so the layout does not shift.
pub fn strip_to_text(strip: &NavStrip) -> String {
    strip
        .controls
        .iter()
        .map(|control| match control {
            NavControl::Previous { enabled: true } => "‹".to_string(),
            NavControl::Next { enabled: true } => "›".to_string(),
            NavControl::Previous { enabled: false } | NavControl::Next { enabled: false } => {
                "·".to_string()
            }
            NavControl::Page {
                number,
                active: true,
                ..
            } => format!("[{}]", number),
            NavControl::Page { number, .. } => number.to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn strip_to_html(strip: &NavStrip) -> String {
    strip_to_html_with(strip, &StripOptions::default())
}

/// Button markup for a strip, one `<button>` per control.
pub fn strip_to_html_with(strip: &NavStrip, options: &StripOptions) -> String {
    let disabled = |enabled: bool| if enabled { "" } else { " disabled" };

    strip
        .controls
        .iter()
        .map(|control| match *control {
            NavControl::Previous { enabled } => format!(
                "<button class=\"{}\"{}><i class=\"{}\"></i></button>",
                options.button_class,
                disabled(enabled),
                options.previous_icon
            ),
            NavControl::Next { enabled } => format!(
                "<button class=\"{}\"{}><i class=\"{}\"></i></button>",
                options.button_class,
                disabled(enabled),
                options.next_icon
            ),
            NavControl::Page {
                number,
                active,
                enabled,
            } => {
                let class = if active {
                    format!("{} {}", options.button_class, options.active_class)
                } else {
                    options.button_class.clone()
                };
                format!(
                    "<button class=\"{}\" data-page=\"{}\"{}>{}</button>",
                    class,
                    number,
                    disabled(enabled),
                    number
                )
            }
        })
        .collect()
}

/// Human summary of where the strip is, e.g. `Page 2 of 3 (58 records)`.
pub fn page_summary(strip: &NavStrip, item_count: usize) -> String {
    let noun = if item_count == 1 { "record" } else { "records" };
    format!(
        "Page {} of {} ({} {})",
        strip.current_page, strip.total_pages, item_count, noun
    )
}
