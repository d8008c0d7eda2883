// Command handlers
use browser::PageSession;
use colored::*;
use models::page::ElementCheck;
use models::{LinkSpec, ValidationReport};
use probe::StatusProbe;
use std::collections::HashSet;
use std::io;
use std::path::{Path, PathBuf};
use validators::{validate_reachability, validate_suffixes, validate_visibility};

// Validate a spec file or a directory containing spec files
#[allow(clippy::ptr_arg)]
pub fn validate_specs(path: &PathBuf) -> io::Result<bool> {
    let mut spec_files = Vec::new();

    if path.is_dir() {
        let entries = std::fs::read_dir(path)?;

        for entry in entries {
            let entry = entry?;
            let entry_path = entry.path();

            if entry_path.is_file() && parser::is_spec_file(&entry_path) {
                spec_files.push(entry_path);
            }
        }
    } else if path.is_file() {
        spec_files.push(path.clone());
    } else {
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("Path does not exist: {}", path.display()),
        ));
    }

    let mut valid_count = 0;
    let mut invalid_count = 0;

    println!("Validating {} spec file(s)...", spec_files.len());

    for spec_path in spec_files {
        match parser::parse_page_spec(&spec_path) {
            Ok(spec) => {
                let report = parser::validate_spec_structure(&spec);

                if report.passed() {
                    println!("✅ Valid: {}", spec_path.display());
                    valid_count += 1;
                } else {
                    println!("❌ Invalid: {}", spec_path.display());
                    for (i, failure) in report.failures.iter().enumerate() {
                        println!("   {}. {}: {}", i + 1, failure.subject, failure.detail);
                    }
                    invalid_count += 1;
                }
            }
            Err(e) => {
                println!("❌ Error processing {}: {}", spec_path.display(), e);
                invalid_count += 1;
            }
        }
    }

    println!("\nSummary: {} valid, {} invalid", valid_count, invalid_count);

    Ok(invalid_count == 0)
}

// Run every check a page spec declares against the live page
pub fn check_page(
    spec_path: &Path,
    reachability: bool,
    timeout_secs: u64,
    headless: bool,
) -> io::Result<bool> {
    let spec = parser::parse_page_spec(spec_path).map_err(|e| {
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!("Cannot parse {}: {}", spec_path.display(), e),
        )
    })?;

    let structure = parser::validate_spec_structure(&spec);
    if !structure.passed() {
        println!("❌ Invalid spec: {}", spec_path.display());
        for (i, failure) in structure.failures.iter().enumerate() {
            println!("   {}. {}: {}", i + 1, failure.subject, failure.detail);
        }
        return Ok(false);
    }

    logging::info(&format!("Launching browser for '{}'", spec.name));

    let session = PageSession::launch(headless)
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;

    logging::info(&format!("Navigating to {}", spec.url));

    session
        .goto(&spec.url)
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;

    println!("Checking '{}' at {}\n", spec.name, spec.url);

    // Every URL that resolves is kept for the optional reachability pass
    let mut resolved: Vec<String> = Vec::new();
    let mut checks_run = 0;
    let mut failures_total = 0;

    // Links: each anchor's href must end with its declared suffix
    let link_specs = suffix_specs(&spec.links);
    let links_report = validate_suffixes(&link_specs, |locator| {
        let destination = session.link_destination(locator);
        if let Ok(url) = &destination {
            resolved.push(url.clone());
        }
        destination
    });
    checks_run += spec.links.len();
    failures_total += print_section("Links", spec.links.len(), &links_report);

    // Images: same suffix check against the resolved src; entries without
    // a suffix are resolved for the reachability pass only
    let image_specs = suffix_specs(&spec.images);
    let mut images_report = validate_suffixes(&image_specs, |locator| {
        let source = session.image_source(locator);
        if let Ok(url) = &source {
            resolved.push(url.clone());
        }
        source
    });
    for check in suffixless(&spec.images) {
        match session.image_source(&check.locator) {
            Ok(url) => resolved.push(url),
            Err(e) => images_report.add_failure(check.locator.clone(), e.to_string()),
        }
    }
    checks_run += spec.images.len();
    failures_total += print_section("Images", spec.images.len(), &images_report);

    // Media sources follow the image rules
    let source_specs = suffix_specs(&spec.sources);
    let mut sources_report = validate_suffixes(&source_specs, |locator| {
        let source = session.media_source(locator);
        if let Ok(url) = &source {
            resolved.push(url.clone());
        }
        source
    });
    for check in suffixless(&spec.sources) {
        match session.media_source(&check.locator) {
            Ok(url) => resolved.push(url),
            Err(e) => sources_report.add_failure(check.locator.clone(), e.to_string()),
        }
    }
    checks_run += spec.sources.len();
    failures_total += print_section("Sources", spec.sources.len(), &sources_report);

    let visibility_report = validate_visibility(&spec.visible, |locator| session.is_visible(locator));
    checks_run += spec.visible.len();
    failures_total += print_section("Visibility", spec.visible.len(), &visibility_report);

    if reachability {
        // One page repeats its footer links; probe each URL once
        let mut seen = HashSet::new();
        resolved.retain(|url| seen.insert(url.clone()));

        logging::info(&format!("Probing {} resolved URL(s)", resolved.len()));

        let status_probe = StatusProbe::new(timeout_secs)
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;

        let reachability_report =
            validate_reachability(&resolved, |url| status_probe.status(url));
        checks_run += resolved.len();
        failures_total += print_section("Reachability", resolved.len(), &reachability_report);
    }

    println!();
    if failures_total == 0 {
        println!(
            "{} All {} check(s) passed for '{}'",
            "✓".green(),
            checks_run,
            spec.name
        );
        Ok(true)
    } else {
        println!(
            "{} {} of {} check(s) failed for '{}'",
            "✗".red(),
            failures_total,
            checks_run,
            spec.name
        );
        Ok(false)
    }
}

// Probe URLs given on the command line
pub fn probe_urls(urls: &[String], timeout_secs: u64) -> io::Result<bool> {
    let status_probe = StatusProbe::new(timeout_secs)
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;

    println!("Probing {} URL(s)...", urls.len());

    let report = validate_reachability(urls, |url| status_probe.status(url));

    for (i, failure) in report.failures.iter().enumerate() {
        println!("   {}. {}", i + 1, failure.detail);
    }

    println!(
        "\nSummary: {} reachable, {} unreachable",
        urls.len() - report.len(),
        report.len()
    );

    Ok(report.passed())
}

fn print_section(title: &str, checked: usize, report: &ValidationReport) -> usize {
    if checked == 0 {
        return 0;
    }

    if report.passed() {
        println!("✅ {}: {} check(s) passed", title, checked);
    } else {
        println!("❌ {}: {} of {} check(s) failed", title, report.len(), checked);
        for (i, failure) in report.failures.iter().enumerate() {
            println!("   {}. {}: {}", i + 1, failure.subject, failure.detail);
        }
    }

    report.len()
}

fn suffix_specs(checks: &[ElementCheck]) -> Vec<LinkSpec> {
    checks
        .iter()
        .filter_map(|check| {
            check
                .suffix
                .as_ref()
                .map(|suffix| LinkSpec::new(check.locator.as_str(), suffix.as_str()))
        })
        .collect()
}

fn suffixless(checks: &[ElementCheck]) -> impl Iterator<Item = &ElementCheck> {
    checks.iter().filter(|check| check.suffix.is_none())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(locator: &str, suffix: Option<&str>) -> ElementCheck {
        ElementCheck {
            locator: locator.to_string(),
            suffix: suffix.map(|s| s.to_string()),
        }
    }

    #[test]
    fn suffix_specs_keep_declaration_order() {
        let checks = vec![
            check("#footer a.about", Some("/about/")),
            check("video source", None),
            check("#footer a.privacy", Some("/privacy/")),
        ];

        let specs = suffix_specs(&checks);

        assert_eq!(specs.len(), 2);
        assert_eq!(specs[0], LinkSpec::new("#footer a.about", "/about/"));
        assert_eq!(specs[1], LinkSpec::new("#footer a.privacy", "/privacy/"));
    }

    #[test]
    fn suffixless_checks_are_the_complement() {
        let checks = vec![
            check("img.hero", Some("hero.png")),
            check("video source", None),
        ];

        let rest: Vec<_> = suffixless(&checks).collect();

        assert_eq!(rest.len(), 1);
        assert_eq!(rest[0].locator, "video source");
    }
}
