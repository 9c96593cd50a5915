use std::path::Path;

use chrono::Utc;
use tracing::debug;
use vbump_operations::operations::{BumpInput, BumpOperation};
use vbump_operations::providers::{
    FileSystemProjectProvider, FileSystemVersionWriter, Git2Provider,
};
use vbump_project::ConfigOverrides;
use vbump_version::BumpMode;

use crate::error::Result;

pub(crate) fn run(project_root: &Path, mode: BumpMode, overrides: ConfigOverrides) -> Result<()> {
    let operation = BumpOperation::new(
        FileSystemProjectProvider::new(),
        Git2Provider::new(),
        FileSystemVersionWriter::new(),
    );

    let input = BumpInput {
        mode,
        overrides,
        timestamp: Utc::now(),
    };
    let output = operation.execute(project_root, input)?;

    debug!(
        constant = %output.constant_path.display(),
        manifest = %output.manifest_path.display(),
        constant_replaced = output.constant_replaced,
        "bump complete"
    );
    println!("{} -> {}", output.previous, output.next);

    Ok(())
}
