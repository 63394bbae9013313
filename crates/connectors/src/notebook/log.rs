use lazy_static::lazy_static;
use regex::Regex;

/// Marker the service prints immediately before the command output.
pub const OUTPUT_START_MARKER: &str = ">>> Invoking Beeline command line now >>>";

/// Marker the service prints immediately after the command output.
pub const OUTPUT_END_MARKER: &str = "<<< Invocation of Beeline command completed <<<";

lazy_static! {
    static ref COMMAND_OUTPUT: Regex = Regex::new(&format!(
        "(?s){}(.*?){}",
        regex::escape(OUTPUT_START_MARKER),
        regex::escape(OUTPUT_END_MARKER)
    ))
    .expect("command output pattern is valid");
}

/// Extract everything printed between the output markers, concatenating
/// every delimited block in order. Empty when no complete block exists.
pub fn extract_command_output(stdout: &str) -> String {
    COMMAND_OUTPUT
        .captures_iter(stdout)
        .map(|captures| captures[1].to_string())
        .collect::<Vec<_>>()
        .join("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_exact_substring_between_markers() {
        let stdout = format!(
            "container launch\n{OUTPUT_START_MARKER}\n0: jdbc> SELECT 1\n+---+\n{OUTPUT_END_MARKER}\nshutdown"
        );
        assert_eq!(
            extract_command_output(&stdout),
            "\n0: jdbc> SELECT 1\n+---+\n"
        );
    }

    #[test]
    fn missing_start_marker_yields_empty() {
        let stdout = format!("some output\n{OUTPUT_END_MARKER}\n");
        assert_eq!(extract_command_output(&stdout), "");
    }

    #[test]
    fn missing_end_marker_yields_empty() {
        let stdout = format!("{OUTPUT_START_MARKER}\ntruncated log");
        assert_eq!(extract_command_output(&stdout), "");
    }

    #[test]
    fn multiple_blocks_concatenate_in_order() {
        let stdout = format!(
            "{OUTPUT_START_MARKER}first{OUTPUT_END_MARKER}noise{OUTPUT_START_MARKER}second{OUTPUT_END_MARKER}"
        );
        assert_eq!(extract_command_output(&stdout), "firstsecond");
    }
}
