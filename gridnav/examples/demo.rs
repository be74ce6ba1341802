use std::fs::File;
use std::io::{stdout, Write};

use crossterm::cursor::MoveTo;
use crossterm::event::{read, Event as CrosstermEvent, KeyEventKind};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode, Clear, ClearType};
use crossterm::execute;
use gridnav::{
    CellRef, ColumnDefinition, DirectionTree, FocusCoordinator, FocusInput, GridModel, Key,
    KeyInput, MountedRow, MountedWindow, RowPositionIndex, RowRecord, TextDirection,
    DEFAULT_ITEM_HEIGHT,
};
use simplelog::{Config, LevelFilter, WriteLogger};

/// Rows kept mounted at a time (the simulated virtualization window).
const WINDOW_ROWS: usize = 5;

fn main() -> std::io::Result<()> {
    // Set up file logging
    let log_file = File::create("demo.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    enable_raw_mode()?;
    let result = run();
    disable_raw_mode()?;
    result
}

fn run() -> std::io::Result<()> {
    let columns = vec![
        ColumnDefinition::new("name", "Name", "2fr"),
        ColumnDefinition::new("age", "Age", "1fr"),
        ColumnDefinition::new("city", "City", "1fr"),
    ];
    let rows = sample_rows();
    let model = GridModel::new(&columns, &rows, "id");

    let mut positions = RowPositionIndex::new();
    positions.rebuild(&rows, DEFAULT_ITEM_HEIGHT, None);
    let viewport_height = WINDOW_ROWS as u32 * u32::from(DEFAULT_ITEM_HEIGHT);

    let mut directions = DirectionTree::new();
    directions.attach("grid", Some("root"));
    let mut rtl = false;

    let mut coordinator = FocusCoordinator::new(&model, None, None);
    let mut scroll_top: u32 = 0;

    loop {
        // Keep the focus row inside the simulated viewport.
        let focus_index = model.row_index_of(&coordinator.state().row_key);
        if let Some(position) = positions.get(focus_index) {
            if position.top < scroll_top {
                scroll_top = position.top;
            } else if position.bottom > scroll_top + viewport_height {
                scroll_top = position.bottom - viewport_height;
            }
        }

        // First visible row: the first one whose bottom reaches the offset.
        let first_visible = positions.threshold_row_index(0, scroll_top + 1);
        let window = mount_window(&model, first_visible);

        draw(&model, &rows, &coordinator, &window, rtl)?;

        let CrosstermEvent::Key(key_event) = read()? else {
            continue;
        };
        if key_event.kind != KeyEventKind::Press {
            continue;
        }

        let mut input = KeyInput::from(key_event);
        match input.key {
            Key::Char('q') | Key::Escape => return Ok(()),
            Key::Char('d') => {
                rtl = !rtl;
                if rtl {
                    directions.declare("root", TextDirection::Rtl);
                } else {
                    directions.undeclare("root");
                }
                continue;
            }
            _ => {}
        }

        let cell = CellRef::new(
            coordinator.state().row_key.clone(),
            coordinator.state().column_key.clone(),
        );
        if let Some(target) =
            coordinator.handle_cell_key_down(&cell, &mut input, &model, &window, &directions)
        {
            // Stand in for the rendering layer: grant focus and report back.
            coordinator.handle_cell_focus(&target.cell, &FocusInput::new());
        }
    }
}

fn sample_rows() -> Vec<RowRecord> {
    let people = [
        ("Ada", "36", "London"),
        ("Grace", "45", "Arlington"),
        ("Edsger", "42", "Austin"),
        ("Barbara", "38", "Boston"),
        ("Donald", "41", "Stanford"),
        ("Tony", "39", "Oxford"),
        ("Niklaus", "44", "Zurich"),
        ("Leslie", "40", "New York"),
        ("Frances", "37", "Philadelphia"),
        ("John", "43", "Princeton"),
        ("Katherine", "35", "Hampton"),
        ("Alan", "34", "Manchester"),
    ];

    people
        .iter()
        .enumerate()
        .map(|(i, (name, age, city))| {
            let mut row = RowRecord::new();
            row.insert("id".to_string(), i.to_string());
            row.insert("name".to_string(), (*name).to_string());
            row.insert("age".to_string(), (*age).to_string());
            row.insert("city".to_string(), (*city).to_string());
            row
        })
        .collect()
}

/// Mount WINDOW_ROWS rows starting at `first`, tagging elements with
/// predictable ids the way a rendering layer would.
fn mount_window(model: &GridModel, first: usize) -> MountedWindow {
    let mut window = MountedWindow::new();
    window.set_grid_element("grid");

    for index in first..first + WINDOW_ROWS {
        let Some(key) = model.row_key_at(index) else {
            break;
        };
        let mut row = MountedRow::new(key.clone(), format!("row-{key}"));
        for column_index in 0..model.column_count() {
            if let Some(column_key) = model.column_key_at(column_index) {
                row = row.with_cell(column_key, format!("cell-{key}-{column_key}"));
            }
        }
        window.mount_row(row);
    }

    window
}

fn draw(
    model: &GridModel,
    rows: &[RowRecord],
    coordinator: &FocusCoordinator,
    window: &MountedWindow,
    rtl: bool,
) -> std::io::Result<()> {
    let mut out = stdout();
    execute!(out, Clear(ClearType::All), MoveTo(0, 0))?;

    write!(out, "  ")?;
    for index in 0..model.column_count() {
        if let Some(column) = model.column_at(index) {
            write!(out, " {:<14}", column.title)?;
        }
    }
    write!(out, "\r\n")?;

    for mounted in window.rows() {
        let row_key = mounted.row_key();
        let index = model.row_index_of(row_key);
        let Some(record) = rows.get(index) else {
            continue;
        };

        write!(out, "  ")?;
        for column_index in 0..model.column_count() {
            let Some(column_key) = model.column_key_at(column_index) else {
                continue;
            };
            let value = record.get(column_key).map_or("", String::as_str);
            let focused = coordinator.state().row_key == row_key
                && coordinator.state().column_key == column_key;
            if focused {
                write!(out, "[{value:<12}] ")?;
            } else {
                write!(out, " {value:<12}  ")?;
            }
        }
        write!(out, "\r\n")?;
    }

    write!(
        out,
        "\r\n  focus=({}, {})  direction={}  window={} rows\r\n",
        coordinator.state().row_key,
        coordinator.state().column_key,
        if rtl { "rtl" } else { "ltr" },
        window.len(),
    )?;
    write!(
        out,
        "  arrows/Home/End/Ctrl move, d toggles rtl, q quits\r\n"
    )?;
    out.flush()
}
