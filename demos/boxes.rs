//! Boxes demo: a resizable screen built from a layout tree.
//!
//! Press any key to log it, `q` or `Ctrl+C` to quit.

use std::io::{self, Write};

use boxer::layout::even_split;
use boxer::{Boxer, Internal, LayoutConfig, LayoutError, LogView, StatusBar, Text};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute, queue,
    style::Print,
    terminal::{self, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};

fn build(boxer: &mut Boxer) -> Result<(), LayoutError> {
    let mut status = StatusBar::new();
    status.set_all("boxer", "demo", "q: quit");

    let root = Internal::vertical([
        boxer.create_leaf("status", status)?,
        Internal::horizontal([
            boxer.create_leaf("left", Text::new("left"))?,
            boxer.create_leaf("keys", LogView::new(200))?,
            boxer.create_leaf("right", Text::new("right"))?,
        ])
        .with_border(true)
        .into(),
        boxer.create_leaf("footer", Text::new("resize the terminal"))?,
    ])
    .with_border(true)
    .with_size_fn(|_, extent| match extent {
        0..=2 => even_split(3, extent),
        _ => vec![1, extent - 2, 1],
    });
    boxer.set_root(root.into());
    Ok(())
}

fn draw(out: &mut impl Write, boxer: &mut Boxer) -> io::Result<()> {
    queue!(out, terminal::Clear(ClearType::All))?;
    for (row, line) in boxer.view().lines().enumerate() {
        let row = u16::try_from(row).unwrap_or(u16::MAX);
        queue!(out, cursor::MoveTo(0, row), Print(line))?;
    }
    out.flush()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut boxer = Boxer::with_config(LayoutConfig::box_drawing())?;
    build(&mut boxer)?;

    let (width, height) = terminal::size()?;
    boxer.resize(width, height);

    terminal::enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, cursor::Hide)?;

    let result = (|| -> io::Result<()> {
        loop {
            draw(&mut stdout, &mut boxer)?;
            let event = event::read()?;
            if boxer.handle_event(&event) {
                continue;
            }
            if let Event::Key(key) = event {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                let quit = key.code == KeyCode::Char('q')
                    || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL));
                if quit {
                    return Ok(());
                }
                let _ = boxer.edit_typed_by_name("keys", |mut log: LogView| {
                    log.push(&format!("{:?}", key.code));
                    Ok::<_, ()>(log)
                });
            }
        }
    })();

    execute!(stdout, cursor::Show, LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;
    Ok(result?)
}
