use anyhow::Result;
use clap::Parser;
use log::{error, info};
use stock_ticker_dashboard::{
    api::StocksApi,
    app::{App, CycleOutcome, HtmlDashboard, RefreshLoop, html},
    config::Args,
    logger::init_logger,
};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let args = Args::parse();

    let log_file = args.log_file();
    init_logger((!args.is_headless()).then_some(log_file.as_path()))?;

    let api = StocksApi::new(&args.url, args.timeout())?;
    info!(
        "Polling {}/api/stocks every {}s",
        api.base_url(),
        args.interval
    );

    if !args.is_headless() {
        let mut app = App::new(api, args.interval(), args.html_out());
        return app.run().await;
    }

    let html_out = args.html_out();
    let mut refresh = RefreshLoop::new(api, args.interval());
    let mut dashboard = HtmlDashboard::default();

    if args.once {
        let Some(CycleOutcome::Rendered(_)) = refresh.refresh_once(&mut dashboard).await else {
            return Err(anyhow::anyhow!("Refresh failed, see log for details"));
        };
        match &html_out {
            Some(path) => html::write_page(path, &dashboard)?,
            None => print!("{}", html::render_page(&dashboard)),
        }
        return Ok(());
    }

    refresh
        .run(&mut dashboard, |dashboard, outcome| {
            let CycleOutcome::Rendered(_) = outcome else {
                return;
            };
            if let Some(path) = &html_out {
                if let Err(e) = html::write_page(path, dashboard) {
                    error!("Failed to write dashboard page: {:?}", e);
                }
            }
        })
        .await;

    Ok(())
}
