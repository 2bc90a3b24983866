use crate::dependency_lookup::domain::{DependencyList, RequestParameters};
use crate::dependency_lookup::services::ValidationError;
use std::fmt::Write;

const PARAMETERS_HEADER: &str = "=== Configuration parameters ===";
const PARAMETERS_FOOTER: &str = "================================";
const NOT_SPECIFIED: &str = "not specified";

/// ConsoleFormatter renders request parameters and lookup results as text
///
/// Rendering is pure: the same input always produces the same string, and
/// the field order is fixed in code rather than taken from any map.
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Renders the seven request parameters between fixed banner lines
    pub fn format_parameters(&self, params: &RequestParameters) -> String {
        let fields = [
            ("Package name", params.package_name().to_string()),
            ("Repository URL", params.repository_location().to_string()),
            ("Test repository mode", on_off(params.test_mode())),
            (
                "Package version",
                params.version().unwrap_or(NOT_SPECIFIED).to_string(),
            ),
            ("Output image file", params.output_path().to_string()),
            ("ASCII tree mode", on_off(params.ascii_tree())),
            (
                "Filter substring",
                params.filter().unwrap_or(NOT_SPECIFIED).to_string(),
            ),
        ];

        let mut output = String::new();
        output.push_str(PARAMETERS_HEADER);
        output.push('\n');
        for (label, value) in fields {
            let _ = writeln!(output, "{}: {}", label, value);
        }
        output.push_str(PARAMETERS_FOOTER);
        output.push('\n');
        output
    }

    /// Renders a 1-based numbered list, or a fixed message when it is empty
    pub fn format_dependencies(
        &self,
        package_name: &str,
        version: Option<&str>,
        dependencies: &DependencyList,
    ) -> String {
        if dependencies.is_empty() {
            return format!("No dependencies found for package '{}'\n", package_name);
        }

        let mut output = match version {
            Some(version) => format!(
                "Direct dependencies of {} (version {}):\n",
                package_name, version
            ),
            None => format!("Direct dependencies of {}:\n", package_name),
        };
        for (index, dependency) in dependencies.iter().enumerate() {
            let _ = writeln!(output, "  {}. {}", index + 1, dependency);
        }
        output
    }

    /// Renders validation errors as a bulleted list
    pub fn format_validation_errors(&self, errors: &[ValidationError]) -> String {
        let mut output = String::from("Parameter validation errors:\n");
        for error in errors {
            let _ = writeln!(output, "  - {}", error);
        }
        output
    }
}

impl Default for ConsoleFormatter {
    fn default() -> Self {
        Self::new()
    }
}

fn on_off(enabled: bool) -> String {
    let label = if enabled { "enabled" } else { "disabled" };
    label.to_string()
}
