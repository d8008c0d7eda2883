use crate::schema::SchemaValidator;
use lazy_static::lazy_static;
use models::page::{ElementCheck, PageSpec};
use models::ValidationReport;
use regex::Regex;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PageSpecError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Schema validation error: {0}")]
    SchemaValidationError(String),
}

lazy_static! {
    static ref PAGE_URL_REGEX: Regex =
        Regex::new(r"^https?://").expect("Failed to compile page URL regex - this is a critical error");
}

/// Parse a page spec file
pub fn parse_page_spec(spec_path: &Path) -> Result<PageSpec, PageSpecError> {
    // Read the spec file
    let spec_content = fs::read_to_string(spec_path)?;

    // Validate against schema
    let validator = SchemaValidator::new().map_err(PageSpecError::SchemaValidationError)?;

    validator
        .validate_document(&spec_content)
        .map_err(PageSpecError::SchemaValidationError)?;

    // Parse the spec YAML
    let spec: PageSpec = serde_yaml::from_str(&spec_content)?;

    Ok(spec)
}

/// Validate the basic structure of a page spec
pub fn validate_spec_structure(spec: &PageSpec) -> ValidationReport {
    let mut report = ValidationReport::new();

    if spec.name.trim().is_empty() {
        report.add_failure(
            "name".to_string(),
            "Page name must not be empty".to_string(),
        );
    }

    if !PAGE_URL_REGEX.is_match(&spec.url) {
        report.add_failure(
            "url".to_string(),
            format!("'{}' is not an http(s) URL", spec.url),
        );
    }

    if !spec.has_checks() {
        report.add_failure(
            "checks".to_string(),
            "Spec must declare at least one check section".to_string(),
        );
    }

    // Links must carry a suffix; the suffix check is what a link check is
    for (i, check) in spec.links.iter().enumerate() {
        let subject = format!("links[{}]", i);
        if check.locator.trim().is_empty() {
            report.add_failure(subject.clone(), "Link check must have a locator".to_string());
        }
        match &check.suffix {
            Some(suffix) if suffix.is_empty() => {
                report.add_failure(subject, "Link suffix must not be empty".to_string());
            }
            None => {
                report.add_failure(
                    subject,
                    "Link check must declare an expected suffix".to_string(),
                );
            }
            _ => {}
        }
    }

    validate_src_checks("images", &spec.images, &mut report);
    validate_src_checks("sources", &spec.sources, &mut report);

    for (i, locator) in spec.visible.iter().enumerate() {
        if locator.trim().is_empty() {
            report.add_failure(
                format!("visible[{}]", i),
                "Visibility check must have a locator".to_string(),
            );
        }
    }

    report
}

// images and sources share one shape: suffix is optional but never empty
fn validate_src_checks(section: &str, checks: &[ElementCheck], report: &mut ValidationReport) {
    for (i, check) in checks.iter().enumerate() {
        let subject = format!("{}[{}]", section, i);
        if check.locator.trim().is_empty() {
            report.add_failure(
                subject.clone(),
                format!("{} check must have a locator", section),
            );
        }
        if let Some(suffix) = &check.suffix {
            if suffix.is_empty() {
                report.add_failure(subject, "Suffix must not be empty when declared".to_string());
            }
        }
    }
}
