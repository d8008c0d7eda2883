use models::ValidationReport;
use std::fmt::Display;

/// Probe every URL and require an exact HTTP 200.
///
/// Any other status code is a failure, other 2xx codes included. Network
/// errors are recorded with the failing URL and probing continues, so one
/// dead URL cannot hide the rest.
pub fn validate_reachability<F, E>(urls: &[String], mut fetch_status: F) -> ValidationReport
where
    F: FnMut(&str) -> Result<u16, E>,
    E: Display,
{
    let mut report = ValidationReport::new();

    for url in urls {
        match fetch_status(url) {
            Ok(200) => {}
            Ok(code) => report.add_failure(
                url.clone(),
                format!("'{}' is not a valid url - status code: {}", url, code),
            ),
            Err(e) => report.add_failure(url.clone(), e.to_string()),
        }
    }

    report
}
