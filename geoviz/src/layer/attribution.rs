//! Credits for the data shown by a layer.

use crate::render::escape_html;

/// Attribution text with an optional link to the source, displayed in the corner of the map.
#[derive(Debug, Clone, PartialEq)]
pub struct Attribution {
    text: String,
    url: Option<String>,
}

impl Attribution {
    /// Creates a new `Attribution` with the given text and optional URL.
    pub fn new(text: impl Into<String>, url: Option<String>) -> Self {
        Self {
            text: text.into(),
            url,
        }
    }

    /// Returns a reference to the text of the attribution.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns a reference to the URL associated with the attribution, if any.
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    /// HTML fragment for the attribution control: a link if the URL is set, escaped text otherwise.
    pub fn to_html(&self) -> String {
        match &self.url {
            Some(url) => format!(
                "&copy; <a href=\"{}\">{}</a>",
                escape_html(url),
                escape_html(&self.text)
            ),
            None => format!("&copy; {}", escape_html(&self.text)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn html_with_link() {
        let attribution = Attribution::new(
            "OpenStreetMap contributors",
            Some("https://www.openstreetmap.org/copyright".to_string()),
        );
        assert_eq!(
            attribution.to_html(),
            "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap contributors</a>"
        );
    }

    #[test]
    fn html_without_link_is_escaped() {
        let attribution = Attribution::new("Tiles <b>& data</b>", None);
        assert_eq!(
            attribution.to_html(),
            "&copy; Tiles &lt;b&gt;&amp; data&lt;/b&gt;"
        );
    }
}
