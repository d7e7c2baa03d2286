//! tasklist CLI - Interactive in-memory task list

use anyhow::Result;
use clap::Parser;
use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;
use tasklist::app::Controller;
use tasklist::store::TaskStore;
use tasklist::ui::{
    Cli, Command, CommandError, JsonPresenter, OutputFormat, Presenter, TablePresenter, USAGE,
    error,
};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| writeln!(buf, "{}", record.args()))
        .init();

    let cli = Cli::parse();

    let store = if cli.empty {
        TaskStore::with_tasks(Vec::new())
    } else {
        TaskStore::new()
    };

    let result = match cli.format {
        OutputFormat::Table => run(store, TablePresenter),
        OutputFormat::Json => run(store, JsonPresenter),
    };

    if let Err(e) = &result {
        error(&e.to_string());
        std::process::exit(1);
    }

    Ok(())
}

fn run<P: Presenter + 'static>(store: TaskStore, presenter: P) -> Result<()> {
    let presenter = Rc::new(RefCell::new(presenter));
    let mut controller = Controller::new(store, presenter);

    log::info!("Type 'help' for commands, 'quit' to exit.");

    // One gesture per line; each runs to completion before the next is read.
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            break;
        }

        match line.parse::<Command>() {
            Ok(Command::Add(text)) => controller.add_task(&text),
            Ok(Command::Edit(id, text)) => controller.edit_task(id, &text),
            Ok(Command::Delete(id)) => controller.delete_task(id),
            Ok(Command::Toggle(id)) => controller.toggle_task(id),
            Ok(Command::List) => controller.refresh(),
            Ok(Command::Help) => println!("{}", USAGE),
            Ok(Command::Quit) => break,
            Err(CommandError::Empty) => {}
            Err(e) => error(&e.to_string()),
        }
    }

    Ok(())
}
