//! Operation: compute and display an install plan.

use std::path::PathBuf;

use sdkpm_core::config::OutputFormat;
use sdkpm_core::package::Package;
use sdkpm_core::universe::PackageUniverse;
use sdkpm_resolver::InstallPlan;
use sdkpm_util::errors::SdkpmError;
use sdkpm_util::progress;

use crate::ConsoleDiagnostics;

/// Options for `sdkpm plan`.
#[derive(Debug, Default)]
pub struct PlanOptions {
    /// Ids of the packages to install.
    pub packages: Vec<String>,
    /// Universe descriptor; falls back to the configured one.
    pub universe: Option<PathBuf>,
    /// Show the dependency tree instead of the flat order.
    pub tree: bool,
    /// Maximum tree depth to display.
    pub depth: Option<usize>,
    /// Explain why a package is part of the plan.
    pub why: Option<String>,
    /// Output format; falls back to the configured one.
    pub format: Option<OutputFormat>,
    /// Write the plan to this file as well.
    pub output: Option<PathBuf>,
}

/// Resolve the requested packages and print the install plan.
pub fn plan(opts: &PlanOptions) -> miette::Result<()> {
    let config = crate::load_config();
    let universe_path = crate::universe_path(opts.universe.as_deref(), &config)?;
    let universe = PackageUniverse::from_path(&universe_path)?;
    let format = opts.format.unwrap_or(config.output.format);

    let plan = compute_plan(&opts.packages, &universe)?;
    print!("{}", render_plan(&plan, opts, format)?);

    for constraint in plan.constraints.iter() {
        progress::status_info("note", &constraint.to_string());
    }

    if let Some(ref path) = opts.output {
        plan.to_plan_file().write(path)?;
        progress::status("Wrote", &path.display().to_string());
    }

    progress::status(
        "Planned",
        &format!("{} package(s) to install", plan.len()),
    );
    Ok(())
}

/// Look up the requested ids and run the resolver.
pub fn compute_plan(ids: &[String], universe: &PackageUniverse) -> miette::Result<InstallPlan> {
    if ids.is_empty() {
        return Err(SdkpmError::Generic {
            message: "No packages requested".to_string(),
        }
        .into());
    }
    let requests = lookup_requests(ids, universe)?;

    progress::status(
        "Resolving",
        &format!("{} requested package(s)", requests.len()),
    );
    let mut diagnostics = ConsoleDiagnostics;
    sdkpm_resolver::compute_required_packages(&requests, universe, &mut diagnostics).map_err(
        |e| {
            SdkpmError::Resolution {
                message: e.to_string(),
            }
            .into()
        },
    )
}

/// Each requested id must be offered by a remote source.
fn lookup_requests(ids: &[String], universe: &PackageUniverse) -> miette::Result<Vec<Package>> {
    ids.iter()
        .map(|id| {
            universe
                .get(id)
                .and_then(|entry| entry.remote.clone())
                .ok_or_else(|| {
                    miette::Report::from(SdkpmError::Generic {
                        message: format!("No remote package '{id}' in universe"),
                    })
                })
        })
        .collect()
}

/// Render the plan the way `opts` asks for.
pub fn render_plan(
    plan: &InstallPlan,
    opts: &PlanOptions,
    format: OutputFormat,
) -> miette::Result<String> {
    if let Some(ref target) = opts.why {
        let graph = plan.graph();
        let mut out = String::new();
        match graph.find_path(target) {
            Some(path) => {
                out.push_str(&format!("Path to {target}:\n"));
                for (i, node) in path.iter().enumerate() {
                    let indent = "  ".repeat(i);
                    out.push_str(&format!("{indent}{node}\n"));
                }
            }
            None => out.push_str(&format!("Package '{target}' is not part of the plan.\n")),
        }
        return Ok(out);
    }

    if opts.tree {
        return Ok(plan.graph().print_tree(opts.depth));
    }

    match format {
        OutputFormat::Text => Ok(plan
            .packages
            .iter()
            .map(|p| format!("{p}\n"))
            .collect()),
        OutputFormat::Json => {
            let mut json =
                serde_json::to_string_pretty(&plan.to_plan_file()).map_err(|e| {
                    SdkpmError::Generic {
                        message: format!("Failed to serialize plan: {e}"),
                    }
                })?;
            json.push('\n');
            Ok(json)
        }
    }
}
