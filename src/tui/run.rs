//! TUI entry point and terminal setup.

use std::io;

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{prelude::CrosstermBackend, Terminal};

use crate::board::Board;
use crate::store::JsonStore;
use crate::tui::board::BoardApp;
use crate::tui::enums::{BoardExit, MenuExit};
use crate::tui::menu::MenuApp;

/// Initialise the terminal and run the interactive UI: the project menu
/// and the kanban board, switching between the two until the user quits.
pub fn run_tui(board: &mut Board<JsonStore>, open_menu_first: bool) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_loop(board, &mut terminal, open_menu_first);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_loop(
    board: &mut Board<JsonStore>,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut show_menu: bool,
) -> io::Result<()> {
    loop {
        if show_menu {
            let mut menu = MenuApp::new(board);
            menu.run(terminal)?;
            match menu.exit_action() {
                MenuExit::Quit => return Ok(()),
                MenuExit::OpenProject(id) => {
                    board.select_project(&id);
                }
            }
            show_menu = false;
        }

        let mut app = BoardApp::new(board);
        app.run(terminal)?;
        match app.exit_action() {
            BoardExit::Quit => return Ok(()),
            BoardExit::OpenMenu => show_menu = true,
        }
    }
}
