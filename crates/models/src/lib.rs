/// One recorded check failure: what failed, and why
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationFailure {
    pub subject: String,
    pub detail: String,
}

/// Ordered collection of failures from a validation pass.
///
/// An empty report means the pass succeeded. Failure order always matches
/// the order of the inputs that produced them.
#[derive(Debug, Default)]
pub struct ValidationReport {
    pub failures: Vec<ValidationFailure>,
}

impl ValidationReport {
    pub fn new() -> Self {
        ValidationReport {
            failures: Vec::new(),
        }
    }

    pub fn add_failure(&mut self, subject: String, detail: String) {
        self.failures.push(ValidationFailure { subject, detail });
    }

    pub fn passed(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn len(&self) -> usize {
        self.failures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.failures.is_empty()
    }

    /// Append another report's failures after this one's
    pub fn merge(&mut self, other: ValidationReport) {
        self.failures.extend(other.failures);
    }
}

/// A locator paired with the suffix its destination URL must end with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkSpec {
    pub locator: String,
    pub expected_suffix: String,
}

impl LinkSpec {
    pub fn new(locator: impl Into<String>, expected_suffix: impl Into<String>) -> Self {
        LinkSpec {
            locator: locator.into(),
            expected_suffix: expected_suffix.into(),
        }
    }
}

// Page spec models
pub mod page {
    use serde::{Deserialize, Serialize};

    /// Declarative description of one page and the checks to run on it
    #[derive(Debug, Serialize, Deserialize, Clone)]
    pub struct PageSpec {
        /// Human-readable page name used in reports
        pub name: String,

        /// Address the browser navigates to
        pub url: String,

        /// Anchor checks, matched against the resolved `href`
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        pub links: Vec<ElementCheck>,

        /// Image checks, matched against the resolved `src`
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        pub images: Vec<ElementCheck>,

        /// Media source checks, primarily probed for reachability
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        pub sources: Vec<ElementCheck>,

        /// Locators of elements that must be visibly rendered
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        pub visible: Vec<String>,
    }

    /// One element whose destination URL is checked
    #[derive(Debug, Serialize, Deserialize, Clone)]
    pub struct ElementCheck {
        pub locator: String,

        /// Expected tail of the resolved URL; optional for images and sources
        #[serde(skip_serializing_if = "Option::is_none")]
        pub suffix: Option<String>,
    }

    impl PageSpec {
        pub fn has_checks(&self) -> bool {
            !(self.links.is_empty()
                && self.images.is_empty()
                && self.sources.is_empty()
                && self.visible.is_empty())
        }
    }
}
