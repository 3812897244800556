pub(crate) mod report {
    use crate::errors::CliError;
    use std::path::Path;

    pub(crate) fn error(error: &CliError) {
        eprintln!("Error: {error}");
    }

    pub(crate) fn fetching(endpoint: &str) {
        println!("Fetching schema from {endpoint}...");
    }

    pub(crate) fn analyzed(table_count: usize) {
        println!("Analyzed {table_count} tables");
    }

    pub(crate) fn done(output_dir: &Path) {
        println!("Generated client in {}", output_dir.display());
    }
}
