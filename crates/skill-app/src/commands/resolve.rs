use anyhow::Result;
use colored::Colorize;
use skill_app::View;
use skill_router::{Resolved, Router};
use std::process::ExitCode;

pub fn execute(router: &Router<View>, url: &str, json: bool) -> Result<ExitCode> {
    let resolved = router.resolve_url(url);

    if json {
        println!("{}", serde_json::to_string_pretty(&resolved)?);
    } else {
        print_resolved(&resolved);
    }

    Ok(if resolved.is_matched() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}

pub fn print_resolved(resolved: &Resolved<View>) {
    match &resolved.matched {
        Some(m) => {
            println!(
                "{} {} → {} ({})",
                "✓".green(),
                resolved.location.full_path().cyan(),
                m.name().bold(),
                m.view().module().dimmed()
            );
            for (key, value) in &m.params {
                println!("    {} = {}", key, value);
            }
        }
        None => {
            println!(
                "{} {} → {}",
                "✗".red(),
                resolved.location.full_path().cyan(),
                "no matching route".yellow()
            );
        }
    }
}
