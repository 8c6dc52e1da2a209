use std::io;

use guard::SessionGuard;
use session::Session;
use storage::FlatFile;

mod error;
mod guard;
mod menu;
mod session;
mod settings;

fn main() -> error::Result<()> {
    let settings = settings::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "budget={level},engine={level},storage={level}",
            level = settings.log_level
        ))
        .with_writer(io::stderr)
        .init();

    tracing::info!("using {}", settings.data_file.display());
    let mut guard = SessionGuard::open(FlatFile::new(&settings.data_file));
    tracing::debug!("{} transactions in memory", guard.store().len());
    if let Some(err) = guard.load_error() {
        eprintln!(
            "Unable to open {} ({err}); starting with no transactions.",
            settings.data_file.display()
        );
    }

    {
        let stdin = io::stdin();
        let stdout = io::stdout();
        let mut session = Session::new(
            guard.store_mut(),
            stdin.lock(),
            stdout.lock(),
            &settings.currency_symbol,
        );
        session.run()?;
    }

    if let Err(err) = guard.close() {
        tracing::error!("unable to save transactions: {err}");
        eprintln!("Unable to save transactions: {err}");
        return Err(err.into());
    }
    Ok(())
}
