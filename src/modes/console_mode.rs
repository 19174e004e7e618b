use crossterm::{
    cursor::{self, Hide, Show},
    event::{poll, read, Event, KeyCode, KeyEventKind},
    queue,
    style::{Color, Colors, Print, ResetColor, SetColors},
    terminal::{
        disable_raw_mode, enable_raw_mode, size, Clear, ClearType, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};

use fps_clock::FpsClock;

use std::{
    io::{stdout, Write},
    time::Duration,
};

use crate::{
    data::{config::Config, Background, CAP_MILLI_HZ},
    error::Result,
    graphics::{blend::Argb, Pixel, COLOR_BLACK},
};

/// Field pixels per terminal column. A cell is two blocks stacked, each
/// block covering `CELL_SCALE x CELL_SCALE` field pixels.
const CELL_SCALE: usize = 4;
const DEFAULT_TERMINAL_HZ: u32 = 30;

/// Restores the terminal when dropped, error paths included.
struct TerminalGuard;

impl TerminalGuard {
    fn enter(stdout: &mut impl Write) -> Result<Self> {
        enable_raw_mode()?;
        let guard = Self;

        queue!(stdout, EnterAlternateScreen, Hide, Clear(ClearType::All))?;
        stdout.flush()?;

        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let mut stdout = stdout();
        let _ = queue!(stdout, ResetColor, LeaveAlternateScreen, Show);
        let _ = stdout.flush();
        let _ = disable_raw_mode();
    }
}

fn grayb(r: u8, g: u8, b: u8) -> u8 {
    ((r as u16 + g as u16 + 2 * b as u16) / 4) as u8
}

fn field_size((cols, rows): (u16, u16)) -> (usize, usize) {
    (cols as usize * CELL_SCALE, rows as usize * 2 * CELL_SCALE)
}

/// Brightest pixel of the block whose top left corner is `(x, y)`.
fn brightest(frame: &[Argb], width: usize, x: usize, y: usize) -> Argb {
    (y..y + CELL_SCALE)
        .flat_map(|row| frame[row * width + x..row * width + x + CELL_SCALE].iter())
        .copied()
        .max_by_key(|p| {
            let [_, r, g, b] = p.decompose();
            grayb(r, g, b)
        })
        .unwrap_or(COLOR_BLACK)
}

fn to_color(p: Argb) -> Color {
    let [_, r, g, b] = p.decompose();
    Color::Rgb { r, g, b }
}

/// Prints `frame` as half blocks: the upper block is the foreground, the
/// lower one the background. Colour changes are only emitted when needed.
fn print_frame(stdout: &mut impl Write, frame: &[Argb], width: usize) -> Result<()> {
    if width == 0 {
        return Ok(());
    }

    let cols = width / CELL_SCALE;
    let rows = frame.len() / width / (2 * CELL_SCALE);

    let mut last: Option<(Argb, Argb)> = None;

    for row in 0..rows {
        queue!(stdout, cursor::MoveTo(0, row as u16))?;

        for col in 0..cols {
            let x = col * CELL_SCALE;
            let y = row * 2 * CELL_SCALE;

            let top = brightest(frame, width, x, y);
            let bottom = brightest(frame, width, x, y + CELL_SCALE);

            if last != Some((top, bottom)) {
                queue!(stdout, SetColors(Colors::new(to_color(top), to_color(bottom))))?;
                last = Some((top, bottom));
            }

            queue!(stdout, Print('▀'))?;
        }
    }

    stdout.flush()?;
    Ok(())
}

/// Drains pending input. Returns `false` once the user asked to quit.
fn handle_events(background: &mut Background) -> Result<bool> {
    while poll(Duration::ZERO)? {
        match read()? {
            Event::Key(event) if event.kind == KeyEventKind::Press => match event.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(false),
                _ => {}
            },

            Event::Resize(w, h) => {
                let (fw, fh) = field_size((w, h));
                background.resize(fw, fh);
                queue!(stdout(), Clear(ClearType::All))?;
            }

            _ => {}
        }
    }

    Ok(true)
}

pub fn con_main(config: Config) -> Result<()> {
    let mut stdout = stdout();

    let (fw, fh) = field_size(size()?);

    let Some(mut background) = Background::mount(fw, fh, &config) else {
        return Ok(());
    };

    let hz = config
        .milli_hz()
        .map_or(DEFAULT_TERMINAL_HZ, |m| m.min(CAP_MILLI_HZ) / 1000)
        .max(1);

    log::info!("terminal refresh rate {hz}hz");

    let guard = TerminalGuard::enter(&mut stdout)?;
    let mut clock = FpsClock::new(hz);
    let mut frame = Vec::new();

    while handle_events(&mut background)? {
        background.render();

        let (width, height) = (background.pix.width(), background.pix.height());
        frame.resize(width * height, 0);
        background.present_to(&mut frame, width);

        print_frame(&mut stdout, &frame, width)?;

        clock.tick();
    }

    drop(guard);
    background.dispose();

    Ok(())
}
