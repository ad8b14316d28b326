use std::fs;
use std::path::{Path, PathBuf};

use crate::chart::{DashboardState, RenderOptions, build_chart};
use crate::cli::{Cli, RenderArgs};
use crate::output::{ChartReport, ColorMode};
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result};

use super::context::{
    CommandContext, Diagnostics, config_actions, is_all_tracks, render_actions, replay,
};

#[must_use]
pub fn run_render(args: &RenderArgs, cli: &Cli) -> i32 {
    let diag = Diagnostics::from_cli(cli);
    match run_render_impl(args, cli, &diag) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            diag.error(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Render the requested tracks and write them to stdout or `--output`.
///
/// # Errors
/// Returns an error if config or dataset loading fails, a flag names an
/// unknown track or company, or the output cannot be written.
pub fn run_render_impl(args: &RenderArgs, cli: &Cli, diag: &Diagnostics) -> Result<()> {
    let ctx = CommandContext::load(cli, &args.data)?;
    ctx.report_sources(diag);

    for key in &ctx.config().display.hidden {
        if !ctx.dataset.companies.contains(key) {
            diag.warning(&format!("display.hidden names unknown company '{key}'"));
        }
    }

    let report = build_report(&ctx, args, diag)?;
    let output = args
        .format
        .formatter(ColorMode::from(cli.color))
        .format(&report)?;

    let output_path = args.output.as_deref().map(|p| output_path_for(p, args));
    write_output(output_path.as_deref(), &output)?;
    if let Some(path) = &output_path {
        diag.verbose("Output", &format!("wrote {}", path.display()));
    }
    Ok(())
}

/// `--output` without an extension gets the one matching `--format`.
fn output_path_for(path: &Path, args: &RenderArgs) -> PathBuf {
    if path.extension().is_some() {
        path.to_path_buf()
    } else {
        path.with_extension(args.format.extension())
    }
}

/// Replay config defaults and CLI flags, then build one chart per selected track.
///
/// # Errors
/// Returns an error if a flag names an unknown track or company.
pub fn build_report(
    ctx: &CommandContext,
    args: &RenderArgs,
    diag: &Diagnostics,
) -> Result<ChartReport> {
    let config = ctx.config();
    let (baseline, _) = replay(
        DashboardState::new(&ctx.dataset),
        config_actions(config, &ctx.dataset),
    );
    let (state, notifications) = replay(baseline, render_actions(args, &ctx.dataset)?);
    for notification in &notifications {
        diag.notify(notification);
    }

    let conversion_rate = config.rate_for(state.currency);
    let narrow = args.narrow || config.display.narrow;
    let charts = ctx
        .dataset
        .tracks
        .iter()
        .filter(|t| is_all_tracks(&args.track) || t.id == state.active_track)
        .map(|track| {
            let options = RenderOptions {
                currency: state.currency,
                conversion_rate,
                country_filter: state.country_filter,
                visibility: state.visibility_for(&track.id),
                narrow,
            };
            build_chart(track, &ctx.dataset.companies, &options)
        })
        .collect();

    Ok(ChartReport {
        currency: state.currency,
        conversion_rate,
        country_filter: state.country_filter,
        active_track: Some(state.active_track.clone()),
        charts,
    })
}

fn write_output(output_path: Option<&Path>, content: &str) -> Result<()> {
    if let Some(path) = output_path {
        fs::write(path, content)?;
    } else {
        print!("{content}");
        if !content.ends_with('\n') {
            println!();
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod tests;
