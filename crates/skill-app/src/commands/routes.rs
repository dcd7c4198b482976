use anyhow::Result;
use colored::Colorize;
use serde_json::json;
use skill_app::View;
use skill_router::Router;
use std::process::ExitCode;

pub fn execute(router: &Router<View>, json: bool) -> Result<ExitCode> {
    if json {
        let routes: Vec<_> = router
            .routes()
            .iter()
            .map(|route| {
                json!({
                    "name": route.name,
                    "path": route.path(),
                    "view": route.view,
                    "module": route.view.module(),
                    "meta": route.meta,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&routes)?);
        return Ok(ExitCode::SUCCESS);
    }

    println!("{}", "Routes".green().bold());
    println!("History: {}", router.mode().to_string().cyan());
    println!();

    for route in router.routes() {
        println!(
            "  {:<12} {:<14} {:<10} {}",
            route.name.bold(),
            route.path().cyan(),
            route.view.to_string(),
            route.view.module().dimmed()
        );
    }

    Ok(ExitCode::SUCCESS)
}
