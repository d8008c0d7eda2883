use models::{LinkSpec, ValidationReport};
use std::fmt::Display;

/// Resolve every spec to a destination URL and tail-match it against the
/// expected suffix.
///
/// Failures are collected in input order; a spec that fails to resolve is
/// recorded and does not stop the specs after it. Matching is an exact,
/// case-sensitive `ends_with`, so an empty resolved URL never matches a
/// non-empty suffix.
pub fn validate_suffixes<F, E>(specs: &[LinkSpec], mut resolve_url: F) -> ValidationReport
where
    F: FnMut(&str) -> Result<String, E>,
    E: Display,
{
    let mut report = ValidationReport::new();

    for spec in specs {
        match resolve_url(&spec.locator) {
            Ok(url) => {
                if !url.ends_with(&spec.expected_suffix) {
                    report.add_failure(
                        spec.locator.clone(),
                        format!("'{}' does not end with '{}'", url, spec.expected_suffix),
                    );
                }
            }
            Err(e) => report.add_failure(spec.locator.clone(), e.to_string()),
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver<'a>(map: &'a [(&'a str, &'a str)]) -> impl FnMut(&str) -> Result<String, String> + 'a {
        move |locator| {
            map.iter()
                .find(|(known, _)| *known == locator)
                .map(|(_, url)| url.to_string())
                .ok_or_else(|| format!("unable to locate element '{}'", locator))
        }
    }

    #[test]
    fn all_matching_specs_produce_an_empty_report() {
        let specs = vec![
            LinkSpec::new("about-link", "/about/"),
            LinkSpec::new("contact-link", "/contact/"),
        ];
        let report = validate_suffixes(
            &specs,
            resolver(&[
                ("about-link", "https://example.com/about/"),
                ("contact-link", "https://example.com/contact/"),
            ]),
        );
        assert!(report.passed());
    }

    #[test]
    fn a_mismatch_reports_the_locator_and_both_strings() {
        let specs = vec![LinkSpec::new("about-link", "/about/")];
        let report = validate_suffixes(&specs, |_: &str| {
            Ok::<_, String>("https://example.com/contact/".to_string())
        });

        assert_eq!(report.len(), 1);
        assert_eq!(report.failures[0].subject, "about-link");
        assert!(report.failures[0]
            .detail
            .contains("https://example.com/contact/"));
        assert!(report.failures[0].detail.contains("/about/"));
    }

    #[test]
    fn empty_specs_are_trivially_valid() {
        let report = validate_suffixes(&[], |_: &str| Ok::<_, String>(String::new()));
        assert!(report.passed());
    }

    #[test]
    fn a_resolution_failure_is_recorded_without_short_circuiting() {
        let specs = vec![
            LinkSpec::new("missing-link", "/about/"),
            LinkSpec::new("contact-link", "/contact/"),
            LinkSpec::new("privacy-link", "/privacy/"),
        ];
        let report = validate_suffixes(
            &specs,
            resolver(&[
                ("contact-link", "https://example.com/contact/"),
                ("privacy-link", "https://example.com/legal/"),
            ]),
        );

        assert_eq!(report.len(), 2);
        assert_eq!(report.failures[0].subject, "missing-link");
        assert!(report.failures[0].detail.contains("unable to locate"));
        assert_eq!(report.failures[1].subject, "privacy-link");
    }

    #[test]
    fn an_empty_url_never_matches_a_suffix() {
        let specs = vec![LinkSpec::new("blank-link", "/about/")];
        let report = validate_suffixes(&specs, |_: &str| Ok::<_, String>(String::new()));
        assert_eq!(report.len(), 1);
    }

    #[test]
    fn duplicate_locators_are_each_checked() {
        let specs = vec![
            LinkSpec::new("about-link", "/about/"),
            LinkSpec::new("about-link", "/misc/"),
        ];
        let report = validate_suffixes(&specs, |_: &str| {
            Ok::<_, String>("https://example.com/about/".to_string())
        });

        assert_eq!(report.len(), 1);
        assert_eq!(report.failures[0].subject, "about-link");
    }

    #[test]
    fn matching_is_case_sensitive() {
        let specs = vec![LinkSpec::new("about-link", "/About/")];
        let report = validate_suffixes(&specs, |_: &str| {
            Ok::<_, String>("https://example.com/about/".to_string())
        });
        assert_eq!(report.len(), 1);
    }
}
