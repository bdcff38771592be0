use chrono::Utc;
use clap::Args;
use crate::infra::standard_dispatch_service;
use skill_dispatch::dispatch::{AssignmentSolver, DispatchService};
use skill_dispatch::error::AppError;

#[derive(Args, Debug, Default)]
pub(crate) struct SolveArgs {
    /// Print the JSON plan view instead of the text rendering
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_solve(args: SolveArgs) -> Result<(), AppError> {
    let service = standard_dispatch_service();
    println!("{}", render_plan(&service, args.json)?);
    Ok(())
}

fn render_plan<S>(service: &DispatchService<S>, json: bool) -> Result<String, AppError>
where
    S: AssignmentSolver + 'static,
{
    let plan = service.optimize()?;
    if json {
        Ok(serde_json::to_string_pretty(&plan.view(Utc::now()))?)
    } else {
        Ok(plan.to_string())
    }
}
