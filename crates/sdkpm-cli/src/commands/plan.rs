//! Handler for `sdkpm plan`.

use std::path::PathBuf;

use miette::Result;

use sdkpm_ops::ops_plan::{self, PlanOptions};

use crate::cli::FormatArg;

pub fn exec(
    packages: Vec<String>,
    universe: Option<PathBuf>,
    tree: bool,
    depth: Option<u32>,
    why: Option<String>,
    format: Option<FormatArg>,
    output: Option<PathBuf>,
) -> Result<()> {
    let opts = PlanOptions {
        packages,
        universe,
        tree,
        depth: depth.map(|d| d as usize),
        why,
        format: format.map(Into::into),
        output,
    };

    ops_plan::plan(&opts)
}
