//! Terminal shortest-path visualizer using crossterm.
//!
//! Run: cargo run --bin pathviz -- --rows 20 --cols 50

use std::time::Instant;

use pathviz_demos::{Editor, Options, term::Terminal};

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let opts = Options::parse(std::env::args().skip(1))?;
    let mut editor = Editor::new(&opts)?;
    let mut term = Terminal::open()?;
    term.draw(&editor)?;

    let mut last = Instant::now();
    while !editor.should_quit() {
        let action = term.poll(editor.poll_timeout())?;
        let now = Instant::now();
        let mut dirty = editor.tick(now - last);
        last = now;
        if let Some(action) = action {
            editor.update(action);
            dirty = true;
        }
        if dirty {
            term.draw(&editor)?;
        }
    }
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
