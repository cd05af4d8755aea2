use std::io::{self, Write};

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::cli::{Cli, Commands};
use crate::core::{Catalog, HistoryCap};
use crate::error::AppError;
use crate::output::{
    HistoryTableOptions, output_catalog_json, output_generate_json, output_history_json,
    output_reset_json, print_history_table,
};
use crate::play::{PlayLoop, SessionSink};
use crate::session::{Session, SessionName, SessionStore};

pub(crate) struct CommandContext<'a> {
    pub(crate) cli: &'a Cli,
    pub(crate) store: &'a SessionStore,
    pub(crate) session: &'a SessionName,
    pub(crate) cap: HistoryCap,
}

impl CommandContext<'_> {
    fn rng(&self) -> StdRng {
        match self.cli.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

fn load_catalog(cli: &Cli) -> Result<Catalog, AppError> {
    let path = cli.catalog_path();
    let catalog = Catalog::load(&path)?;
    tracing::debug!(
        "Loaded {} creature types from {}",
        catalog.len(),
        path.display()
    );
    Ok(catalog)
}

/// Persists every change the play loop makes
struct StoreSink<'a> {
    store: &'a SessionStore,
}

impl SessionSink for StoreSink<'_> {
    fn recorded(&mut self, session: &Session) -> Result<(), AppError> {
        self.store.save(session)
    }

    fn cleared(&mut self, session: &Session) -> Result<(), AppError> {
        self.store.remove(&session.name).map(|_| ())
    }
}

fn handle_generate(catalog: &Catalog, ctx: &CommandContext<'_>) -> Result<(), AppError> {
    let mut rng = ctx.rng();
    let creature = catalog.choose(&mut rng)?;

    let mut session = ctx.store.load(ctx.session)?;
    session.record(creature, ctx.cap);
    ctx.store.save(&session)?;
    tracing::info!(
        session = %session.name,
        history = ?session.history.entries(),
        "generated {creature}"
    );

    if ctx.cli.json {
        println!("{}", output_generate_json(creature, &session.history)?);
    } else {
        println!("{creature}");
    }
    Ok(())
}

fn handle_play(catalog: &Catalog, ctx: &CommandContext<'_>) -> Result<(), AppError> {
    let mut rng = ctx.rng();
    let mut session = ctx.store.load(ctx.session)?;
    let mut sink = StoreSink { store: ctx.store };

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let outcome = PlayLoop {
        catalog,
        cap: ctx.cap,
        rng: &mut rng,
    }
    .run(stdin.lock(), &mut stdout, &mut session, &mut sink)?;
    stdout.flush()?;

    tracing::debug!(
        "Play ended after {} draws (cleared: {})",
        outcome.generated,
        outcome.cleared
    );
    Ok(())
}

fn handle_history(ctx: &CommandContext<'_>) -> Result<(), AppError> {
    let session = ctx.store.load(ctx.session)?;
    if ctx.cli.json {
        println!("{}", output_history_json(&session, ctx.cap)?);
    } else {
        print_history_table(
            &session,
            HistoryTableOptions {
                cap: ctx.cap,
                use_color: ctx.cli.use_color(),
            },
        );
    }
    Ok(())
}

fn handle_reset(ctx: &CommandContext<'_>) -> Result<(), AppError> {
    let existed = ctx.store.remove(ctx.session)?;
    tracing::info!(session = %ctx.session, existed, "history reset");

    if ctx.cli.json {
        println!("{}", output_reset_json()?);
    } else {
        println!("History cleared.");
    }
    Ok(())
}

fn handle_catalog(catalog: &Catalog, ctx: &CommandContext<'_>) -> Result<(), AppError> {
    if ctx.cli.json {
        println!("{}", output_catalog_json(catalog)?);
        return Ok(());
    }
    catalog.ensure_non_empty()?;
    let mut stdout = io::stdout().lock();
    for entry in catalog.entries() {
        writeln!(stdout, "{entry}")?;
    }
    Ok(())
}

pub(crate) fn handle_command(command: Commands, ctx: &CommandContext<'_>) -> Result<(), AppError> {
    tracing::debug!(
        "Running {command:?} for session {} (cap {}) stored under {}",
        ctx.session,
        ctx.cap,
        ctx.store.root().display()
    );

    let catalog = if command.needs_catalog() {
        load_catalog(ctx.cli)?
    } else {
        Catalog::default()
    };

    match command {
        Commands::Generate => handle_generate(&catalog, ctx),
        Commands::Play => handle_play(&catalog, ctx),
        Commands::History => handle_history(ctx),
        Commands::Reset => handle_reset(ctx),
        Commands::Catalog => handle_catalog(&catalog, ctx),
    }
}
