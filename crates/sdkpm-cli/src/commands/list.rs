//! Handler for `sdkpm list`.

use std::path::PathBuf;

use miette::Result;

use sdkpm_ops::ops_list::{self, ListOptions};

pub fn exec(universe: Option<PathBuf>, updates: bool) -> Result<()> {
    ops_list::list(&ListOptions { universe, updates })
}
