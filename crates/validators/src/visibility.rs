use models::ValidationReport;
use std::fmt::Display;

/// Check that every locator resolves to a visibly rendered element.
///
/// A present-but-hidden element and an element that cannot be resolved at
/// all are both failures; checking continues through the whole list.
pub fn validate_visibility<F, E>(locators: &[String], mut is_visible: F) -> ValidationReport
where
    F: FnMut(&str) -> Result<bool, E>,
    E: Display,
{
    let mut report = ValidationReport::new();

    for locator in locators {
        match is_visible(locator) {
            Ok(true) => {}
            Ok(false) => report.add_failure(
                locator.clone(),
                format!("the element at '{}' is not visible", locator),
            ),
            Err(e) => report.add_failure(locator.clone(), e.to_string()),
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;

    fn locators(list: &[&str]) -> Vec<String> {
        list.iter().map(|locator| locator.to_string()).collect()
    }

    #[test]
    fn visible_elements_produce_an_empty_report() {
        let targets = locators(&[".billboard a.cta", "#download-button"]);
        let report = validate_visibility(&targets, |_| Ok::<_, String>(true));
        assert!(report.passed());
    }

    #[test]
    fn a_hidden_element_is_reported_by_locator() {
        let targets = locators(&[".billboard a.cta", "#download-button"]);
        let report = validate_visibility(&targets, |locator| {
            Ok::<_, String>(locator != "#download-button")
        });

        assert_eq!(report.len(), 1);
        assert_eq!(report.failures[0].subject, "#download-button");
        assert!(report.failures[0].detail.contains("not visible"));
    }

    #[test]
    fn a_resolution_error_is_collected() {
        let targets = locators(&["#gone"]);
        let report =
            validate_visibility(&targets, |_| Err::<bool, _>("stale element".to_string()));

        assert_eq!(report.len(), 1);
        assert!(report.failures[0].detail.contains("stale element"));
    }

    #[test]
    fn empty_input_is_trivially_valid() {
        let report = validate_visibility(&[], |_| Ok::<_, String>(true));
        assert!(report.passed());
    }
}
