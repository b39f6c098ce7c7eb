use super::Host;
use super::common::{CommonArgs, Session};
use crate::Result;
use crate::reports::generate_clients_console;
use clap::Parser;

#[derive(Parser, Debug)]
pub struct ClientsArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

pub async fn list_clients<H: Host>(host: &mut H, args: &ClientsArgs) -> Result<()> {
    let mut session = Session::new(host, &args.common)?;
    let clients = session.service().clients().await?;

    session.emit(&clients, |text, use_colors| generate_clients_console(&clients, use_colors, text))
}
