use super::Host;
use super::common::{CommonArgs, Session};
use crate::Result;
use crate::metrics::LogDiagnostics;
use crate::reports::{generate_metrics_console, select_metrics};
use clap::Parser;
use ohno::bail;

#[derive(Parser, Debug)]
pub struct MetricsArgs {
    /// Id of the client whose metrics to show
    #[arg(value_name = "CLIENT_ID")]
    pub client_id: u64,

    /// Only show the group with this name (case-insensitive, a trailing "(...)" is ignored)
    #[arg(long, value_name = "NAME")]
    pub group: Option<String>,

    /// Only show assessments with this name (case-insensitive, a trailing "(...)" is ignored)
    #[arg(long, value_name = "NAME")]
    pub assessment: Option<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

pub async fn show_metrics<H: Host>(host: &mut H, args: &MetricsArgs) -> Result<()> {
    let mut session = Session::new(host, &args.common)?;

    let (metrics, failure) = match session.service().metrics(args.client_id, &LogDiagnostics).await {
        Ok(metrics) => (metrics, None),
        Err(partial) => {
            let (metrics, error) = partial.into_parts();
            (metrics, Some(error))
        }
    };

    let selection = select_metrics(&metrics, args.group.as_deref(), args.assessment.as_deref());

    if failure.is_some() && !metrics.is_empty() {
        session.warn("Metrics are incomplete, showing what was resolved before the failure");
    }

    if failure.is_none() || !metrics.is_empty() {
        session.emit(&selection, |text, use_colors| generate_metrics_console(&selection, use_colors, text))?;
    }

    if let Some(error) = failure {
        return Err(error);
    }

    if selection.is_empty() && (args.group.is_some() || args.assessment.is_some()) {
        bail!("no metrics of client {} match the requested group or assessment", args.client_id);
    }

    Ok(())
}
