use super::Host;
use super::common::{CommonArgs, Session};
use crate::Result;
use crate::reports::{generate_nutrition_logs_console, generate_nutrition_plan_console};
use clap::Parser;

#[derive(Parser, Debug)]
pub struct NutritionArgs {
    /// Id of the client whose nutrition data to show
    #[arg(value_name = "CLIENT_ID")]
    pub client_id: u64,

    #[command(flatten)]
    pub common: CommonArgs,
}

pub async fn show_nutrition_plan<H: Host>(host: &mut H, args: &NutritionArgs) -> Result<()> {
    let mut session = Session::new(host, &args.common)?;
    let plan = session.service().client_nutrition_plan(args.client_id).await?;

    session.emit(&plan, |text, use_colors| generate_nutrition_plan_console(&plan, use_colors, text))
}

pub async fn show_nutrition_logs<H: Host>(host: &mut H, args: &NutritionArgs) -> Result<()> {
    let mut session = Session::new(host, &args.common)?;
    let logs = session.service().client_daily_nutrition_logs(args.client_id).await?;

    session.emit(&logs, |text, use_colors| generate_nutrition_logs_console(&logs, use_colors, text))
}
