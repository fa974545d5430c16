use hatfinder::{Result, config, console::Terminal, logic::GameField, session::Session};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // stdout belongs to the game screen
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let params = config::params_from_env();
    info!(
        "🎩 Building {}x{} field ({} difficulty, {} holes)",
        params.width,
        params.height,
        params.difficulty,
        params.hole_count()
    );

    let field = GameField::new(params)?;
    let mut session = Session::new(field, Terminal::new());
    session.run()?;

    Ok(())
}
