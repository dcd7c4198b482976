use anyhow::{Context, Result};
use skill_app::View;
use skill_router::{NavigationTarget, Router};
use std::process::ExitCode;

pub fn execute(
    router: &Router<View>,
    name: &str,
    params: Vec<(String, String)>,
    query: Vec<(String, String)>,
    hash: Option<String>,
) -> Result<ExitCode> {
    let target = NavigationTarget::Named {
        name: name.to_string(),
        params: params.into_iter().collect(),
        query,
        hash,
    };

    let href = router
        .href(target)
        .with_context(|| format!("Failed to build URL for route `{}`", name))?;
    println!("{}", href);

    Ok(ExitCode::SUCCESS)
}
