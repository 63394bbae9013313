/// Autocomplete endpoint of the notebook front end.
pub const AUTOCOMPLETE_PATH: &str = "/notebook/api/autocomplete";

/// Job browser application path of the notebook front end.
pub const JOB_BROWSER_PATH: &str = "/jobbrowser/apps";

/// Path of the autocomplete call, with the database segment appended when
/// one is requested.
pub fn autocomplete_path(database: Option<&str>) -> String {
    match database {
        Some(database) => format!("{AUTOCOMPLETE_PATH}/{database}"),
        None => AUTOCOMPLETE_PATH.to_string(),
    }
}

/// Deep link into the job browser for a submitted job.
pub fn job_browser_link(job_id: &str) -> String {
    format!("{JOB_BROWSER_PATH}#!{job_id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn autocomplete_path_without_database() {
        assert_eq!(autocomplete_path(None), "/notebook/api/autocomplete");
    }

    #[test]
    fn autocomplete_path_appends_database() {
        assert_eq!(
            autocomplete_path(Some("sales")),
            "/notebook/api/autocomplete/sales"
        );
    }

    #[test]
    fn job_browser_link_appends_fragment() {
        assert_eq!(job_browser_link("job-42"), "/jobbrowser/apps#!job-42");
    }
}
