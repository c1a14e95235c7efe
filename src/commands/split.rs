//! Split command handler
//!
//! Shows where the import header of a fragment ends.

use std::path::Path;
use std::process::ExitCode;

use anyhow::Result;

use scriptmerge::domain::entities::Fragment;
use scriptmerge::domain::ports::FileSystem;
use scriptmerge::error::MergeError;
use scriptmerge::infrastructure::LocalFs;

use super::GlobalArgs;

pub fn cmd_split(file: &Path, global: &GlobalArgs) -> Result<ExitCode> {
    let text = LocalFs::new()
        .read(file)
        .map_err(|e| MergeError::FragmentRead {
            path: file.to_path_buf(),
            source: e.into_io(),
        })?;
    let fragment = Fragment::new(file, text);
    let split = fragment.split()?;

    if global.json {
        let output = serde_json::json!({
            "event": "split",
            "command": "split",
            "file": file.display().to_string(),
            "header_line_count": split.header_line_count,
            "header": split.header,
            "body": split.body,
        });
        println!("{}", output);
    } else {
        println!("header lines: {}", split.header_line_count);
        println!("--- header");
        if !split.header.is_empty() {
            println!("{}", split.header);
        }
        println!("--- body");
        print!("{}", split.body);
    }

    Ok(ExitCode::SUCCESS)
}
