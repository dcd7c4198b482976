use anyhow::{bail, Context, Result};
use colored::Colorize;
use serde_json::json;
use skill_app::View;
use skill_router::{NavigationTarget, Router};
use std::process::ExitCode;

use super::resolve::print_resolved;

/// One step of a replayed session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Back,
    Forward,
    Go(NavigationTarget),
}

/// Parses `back`, `forward`, `@Name[:k=v,...]` or a path
pub fn parse_step(raw: &str) -> Result<Step> {
    match raw {
        "back" => return Ok(Step::Back),
        "forward" => return Ok(Step::Forward),
        _ => {}
    }

    let Some(named) = raw.strip_prefix('@') else {
        return Ok(Step::Go(NavigationTarget::path(raw)));
    };

    let (name, params) = named.split_once(':').unwrap_or((named, ""));
    if name.is_empty() {
        bail!("named step `{}` has no route name", raw);
    }

    params
        .split(',')
        .filter(|pair| !pair.is_empty())
        .try_fold(NavigationTarget::named(name), |target, pair| {
            let (k, v) = pair
                .split_once('=')
                .with_context(|| format!("expected key=value in `{}`", raw))?;
            Ok::<_, anyhow::Error>(target.with_param(k, v))
        })
        .map(Step::Go)
}

/// Applies one step, returning whether the router moved
pub fn apply_step(router: &mut Router<View>, step: &Step) -> skill_router::Result<bool> {
    Ok(match step {
        Step::Back => router.back().is_some(),
        Step::Forward => router.forward().is_some(),
        Step::Go(target) => {
            router.push(target.clone())?;
            true
        }
    })
}

pub fn execute(mut router: Router<View>, steps: &[String], json: bool) -> Result<ExitCode> {
    let steps = steps
        .iter()
        .map(|raw| parse_step(raw))
        .collect::<Result<Vec<_>>>()?;

    let mut report = Vec::new();

    for (idx, step) in steps.into_iter().enumerate() {
        let moved = apply_step(&mut router, &step)
            .with_context(|| format!("Step {} failed", idx + 1))?;

        let current = router.current();
        if json {
            report.push(json!({
                "step": idx + 1,
                "moved": moved,
                "href": router.mode().href(&current.location),
                "resolved": current,
            }));
            continue;
        }

        print!("{:>3}. ", idx + 1);
        if !moved {
            println!("{}", "no history entry, staying put".yellow());
            continue;
        }
        print_resolved(current);
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    Ok(ExitCode::SUCCESS)
}
