use anyhow::Context;
use mazemask::app::MazeApp;
use mazemask::command::{self, Command, HELP};
use mazemask::render::TextView;
use mazemask::settings::Settings;
use std::io::{self, BufRead, Stdout, Write};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let settings = Settings::load();
    let mut app = MazeApp::new(&settings, TextView::new(io::stdout()))
        .context("failed to start maze session")?;

    println!("{HELP}");
    println!("{}", app.view().picker_options());
    prompt(&app)?;

    for line in io::stdin().lock().lines() {
        let line = line.context("failed to read stdin")?;
        match command::parse(&line) {
            Ok(None) => {}
            Ok(Some(Command::Quit)) => break,
            Ok(Some(Command::Help)) => println!("{HELP}"),
            Ok(Some(command)) => {
                for event in command.events() {
                    if let Err(e) = app.handle(event) {
                        eprintln!("error: {e}");
                        break;
                    }
                }
            }
            Err(e) => eprintln!("{e}"),
        }
        prompt(&app)?;
    }
    Ok(())
}

fn prompt(app: &MazeApp<TextView<Stdout>>) -> io::Result<()> {
    let mut out = io::stdout().lock();
    let view = app.view();
    writeln!(out, "{} [{}]", view.selection_summary(), view.controls_summary())?;
    write!(out, "> ")?;
    out.flush()
}
