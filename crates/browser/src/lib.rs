// browser crate

use headless_chrome::{Browser, Element, LaunchOptions, Tab};
use std::sync::Arc;
use thiserror::Error;

/// Fatal session errors: the page never became checkable
#[derive(Error, Debug)]
pub enum BrowserError {
    #[error("Failed to launch browser: {0}")]
    LaunchError(String),

    #[error("Failed to open '{url}': {message}")]
    NavigationError { url: String, message: String },
}

/// Per-element errors, collected into validation reports by callers
#[derive(Error, Debug)]
pub enum ResolutionError {
    #[error("unable to locate element '{0}'")]
    ElementNotFound(String),

    #[error("unable to inspect element '{locator}': {message}")]
    Uninspectable { locator: String, message: String },

    #[error("element '{locator}' has no '{property}' value")]
    MissingProperty { locator: String, property: String },
}

/// One open browser tab pointed at the page under check.
///
/// Destination URLs are read from DOM properties rather than raw
/// attributes, so relative hrefs come back absolute.
pub struct PageSession {
    _browser: Browser,
    tab: Arc<Tab>,
}

impl PageSession {
    /// Start a Chrome instance and open an empty tab
    pub fn launch(headless: bool) -> Result<PageSession, BrowserError> {
        let options = LaunchOptions::default_builder()
            .headless(headless)
            .build()
            .map_err(|e| BrowserError::LaunchError(e.to_string()))?;

        let browser =
            Browser::new(options).map_err(|e| BrowserError::LaunchError(e.to_string()))?;

        let tab = browser
            .new_tab()
            .map_err(|e| BrowserError::LaunchError(e.to_string()))?;

        Ok(PageSession {
            _browser: browser,
            tab,
        })
    }

    /// Navigate to the page and wait for the load to settle
    pub fn goto(&self, url: &str) -> Result<(), BrowserError> {
        self.tab
            .navigate_to(url)
            .and_then(|tab| tab.wait_until_navigated())
            .map_err(|e| BrowserError::NavigationError {
                url: url.to_string(),
                message: e.to_string(),
            })?;

        Ok(())
    }

    /// Where the anchor at `locator` points (its `href` property)
    pub fn link_destination(&self, locator: &str) -> Result<String, ResolutionError> {
        self.string_property(locator, "href")
    }

    /// What the image at `locator` loads (its `src` property)
    pub fn image_source(&self, locator: &str) -> Result<String, ResolutionError> {
        self.string_property(locator, "src")
    }

    /// What the media element at `locator` streams (its `src` property)
    pub fn media_source(&self, locator: &str) -> Result<String, ResolutionError> {
        self.string_property(locator, "src")
    }

    /// Whether the element at `locator` is rendered with a non-empty box
    pub fn is_visible(&self, locator: &str) -> Result<bool, ResolutionError> {
        let element = self.find(locator)?;

        // An element the layout engine gave no box to is not on screen
        let object = element
            .call_js_fn(
                "function() { const rect = this.getBoundingClientRect(); \
                 return rect.width > 0 && rect.height > 0; }",
                vec![],
                false,
            )
            .map_err(|e| ResolutionError::Uninspectable {
                locator: locator.to_string(),
                message: e.to_string(),
            })?;

        match object.value {
            Some(serde_json::Value::Bool(visible)) => Ok(visible),
            _ => Ok(false),
        }
    }

    fn find(&self, locator: &str) -> Result<Element<'_>, ResolutionError> {
        self.tab
            .find_element(locator)
            .map_err(|_| ResolutionError::ElementNotFound(locator.to_string()))
    }

    fn string_property(&self, locator: &str, property: &str) -> Result<String, ResolutionError> {
        let element = self.find(locator)?;

        let function = format!("function() {{ return this.{}; }}", property);
        let object = element
            .call_js_fn(&function, vec![], false)
            .map_err(|e| ResolutionError::Uninspectable {
                locator: locator.to_string(),
                message: e.to_string(),
            })?;

        match object.value {
            Some(serde_json::Value::String(value)) => Ok(value),
            _ => Err(ResolutionError::MissingProperty {
                locator: locator.to_string(),
                property: property.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Browser tests need a local Chrome; opt in explicitly
    fn should_skip_browser_tests() -> bool {
        std::env::var("PAGECHECK_BROWSER_TESTS").is_err()
    }

    #[test]
    fn resolves_hrefs_from_an_inline_page() {
        if should_skip_browser_tests() {
            return;
        }

        let session = PageSession::launch(true).unwrap();
        session
            .goto("data:text/html,<a id=about href=https://example.com/about/>About</a>")
            .unwrap();

        let url = session.link_destination("#about").unwrap();
        assert_eq!(url, "https://example.com/about/");
    }

    #[test]
    fn a_missing_element_is_a_resolution_error() {
        if should_skip_browser_tests() {
            return;
        }

        let session = PageSession::launch(true).unwrap();
        session
            .goto("data:text/html,<p>empty</p>")
            .unwrap();

        let err = session.link_destination("#missing").unwrap_err();
        assert!(matches!(err, ResolutionError::ElementNotFound(_)));
    }

    #[test]
    fn a_hidden_element_is_not_visible() {
        if should_skip_browser_tests() {
            return;
        }

        let session = PageSession::launch(true).unwrap();
        session
            .goto("data:text/html,<div id=cta style=display:none>Go</div>")
            .unwrap();

        assert_eq!(session.is_visible("#cta").unwrap(), false);
    }
}
