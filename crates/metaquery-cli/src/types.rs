use std::path::PathBuf;

use metaquery_cli::pipeline::BuildOutput;
use metaquery_report::ArtifactPaths;

#[derive(Debug)]
pub struct BuildReport {
    pub output: BuildOutput,
    pub output_dir: PathBuf,
    /// `None` for dry runs.
    pub artifacts: Option<ArtifactPaths>,
}

impl BuildReport {
    pub fn exit_code(&self) -> i32 {
        self.output.exit_code()
    }
}
