use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Submit a SQL statement as a job and print the handle
    Submit {
        #[arg(long, help = "SQL statement to submit")]
        statement: String,
    },
    /// Check the status of a submitted job
    Status {
        #[arg(long, help = "Job ID returned at submission")]
        job_id: String,
    },
    /// Cancel a submitted job
    Cancel {
        #[arg(long, help = "Job ID returned at submission")]
        job_id: String,
    },
    /// Print the extracted command output of a job
    Log {
        #[arg(long, help = "Job ID returned at submission")]
        job_id: String,
    },
    /// Print the job browser listing for a job
    Jobs {
        #[arg(long, help = "Job ID returned at submission")]
        job_id: String,
    },
    /// Print the result payload of a completed job
    Result {
        #[arg(long, help = "Job ID returned at submission")]
        job_id: String,
    },
    /// Autocomplete databases through the front end
    Autocomplete {
        #[arg(long, help = "Database to scope the lookup")]
        database: Option<String>,
    },
}
