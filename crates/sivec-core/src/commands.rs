use std::cell::RefCell;
use std::io::{self, Write};

use anyhow::{Context, anyhow};
use serde::Serialize;
use sivec_gui_shared::{TitleObserver, TitleResolver, TitleSink, TitleSlot};
use tracing::{debug, info, instrument, warn};

use crate::cli::Command;
use crate::config::LoadedConfig;

/// Writes each applied title as its own line.
///
/// The first write error is kept and later titles are dropped; callers
/// pick it up with [`LineSink::take_error`].
pub struct LineSink<W: Write> {
    out: RefCell<W>,
    error: RefCell<Option<io::Error>>,
}

impl<W: Write> LineSink<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: RefCell::new(out),
            error: RefCell::new(None),
        }
    }

    pub fn take_error(&self) -> Option<io::Error> {
        self.error.borrow_mut().take()
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }
}

impl<W: Write> TitleSink for LineSink<W> {
    fn set_title(&self, title: &str) {
        if self.error.borrow().is_some() {
            return;
        }
        if let Err(error) = writeln!(self.out.borrow_mut(), "{title}") {
            warn!(%error, title, "failed writing title");
            *self.error.borrow_mut() = Some(error);
        }
    }
}

#[derive(Debug, Serialize)]
struct RouteTitleRow<'a> {
    path: &'a str,
    title: String,
}

#[instrument(skip_all)]
pub fn dispatch<W: Write>(loaded: &LoadedConfig, command: Command, out: &mut W) -> anyhow::Result<()> {
    let resolver = TitleResolver::from_config(&loaded.titles);
    debug!(source = %loaded.source, ?command, "dispatching command");

    match command {
        Command::Title { paths, at_rest } => cmd_title(resolver, &paths, at_rest, out),
        Command::Routes { json } => cmd_routes(&resolver, json, out),
        Command::Config => cmd_config(loaded, out),
    }
}

#[instrument(skip(resolver, out))]
fn cmd_title<W: Write>(resolver: TitleResolver, paths: &[String], at_rest: bool, out: &mut W) -> anyhow::Result<()> {
    if at_rest {
        let slot = TitleSlot::new();
        let observer = TitleObserver::new(resolver, &slot);
        for path in paths {
            observer.observe(path);
        }
        let title = slot
            .current()
            .ok_or_else(|| anyhow!("no path was observed"))?;
        info!(writes = slot.writes(), "title at rest");
        writeln!(out, "{title}").context("failed writing title")?;
        return Ok(());
    }

    let observer = TitleObserver::new(resolver, LineSink::new(&mut *out));
    for path in paths {
        observer.observe(path);
    }
    if let Some(error) = observer.sink().take_error() {
        return Err(error).context("failed writing title");
    }
    Ok(())
}

fn cmd_routes<W: Write>(resolver: &TitleResolver, json: bool, out: &mut W) -> anyhow::Result<()> {
    let pattern = resolver.detail().pattern();
    let mut rows: Vec<RouteTitleRow<'_>> = resolver
        .routes()
        .iter()
        .map(|(path, _)| RouteTitleRow {
            path,
            title: resolver.resolve(path),
        })
        .collect();
    rows.push(RouteTitleRow {
        path: &pattern,
        title: resolver.resolve(&pattern),
    });

    if json {
        serde_json::to_writer_pretty(&mut *out, &rows).context("failed encoding routes")?;
        writeln!(out)?;
        return Ok(());
    }

    let width = rows.iter().map(|row| row.path.len()).max().unwrap_or(0);
    for row in &rows {
        writeln!(out, "{:<width$}  {}", row.path, row.title)?;
    }
    Ok(())
}

fn cmd_config<W: Write>(loaded: &LoadedConfig, out: &mut W) -> anyhow::Result<()> {
    let encoded = loaded.titles.to_toml_string().map_err(|e| anyhow!(e))?;
    writeln!(out, "# source: {}", loaded.source)?;
    write!(out, "{encoded}")?;
    Ok(())
}
