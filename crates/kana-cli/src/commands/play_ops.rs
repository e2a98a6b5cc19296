//! Interactive terminal trainer.

use std::io::{self, Stdout, Write};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::{cursor, execute, queue, terminal};

use kana_engine::mode::SessionMode;
use kana_engine::session::{KeyEvent, Phase, SessionView, TrainerSession};
use kana_engine::unicode::display_width;

use super::corpus_ops;

const FRAME: Duration = Duration::from_millis(30);
const BAR_WIDTH: usize = 40;

/// Restores the terminal when dropped, including on early return.
struct RawTerminal {
    out: Stdout,
}

impl RawTerminal {
    fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let mut out = io::stdout();
        execute!(out, terminal::EnterAlternateScreen, cursor::Hide)?;
        Ok(Self { out })
    }
}

impl Drop for RawTerminal {
    fn drop(&mut self) {
        let _ = execute!(self.out, cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

pub fn play(mode: Option<&str>, corpus: Option<&str>, seed: Option<u64>) {
    let mode = mode.map(|m| die!(m.parse::<SessionMode>(), "Error: {}"));
    let corpus = Arc::new(corpus_ops::load(corpus));
    let mut session = match seed {
        Some(seed) => TrainerSession::seeded(corpus, seed),
        None => TrainerSession::new(corpus),
    };
    if let Some(mode) = mode {
        session.set_mode(mode);
    }
    die!(run(&mut session), "Terminal error: {}");
}

fn run(session: &mut TrainerSession) -> io::Result<()> {
    let mut term = RawTerminal::enter()?;
    let clock = Instant::now();
    let now = || u64::try_from(clock.elapsed().as_millis()).unwrap_or(u64::MAX);

    loop {
        session.tick(now());
        draw(&mut term.out, &session.view(now()))?;

        if !event::poll(FRAME)? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        let quit = key.code == KeyCode::Esc
            || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL));
        if quit {
            return Ok(());
        }
        session.handle_key(to_key_event(key.code), now());
    }
}

fn to_key_event(code: KeyCode) -> KeyEvent {
    match code {
        KeyCode::Char(' ') => KeyEvent::Space,
        KeyCode::Char(c) => KeyEvent::Char(c),
        KeyCode::Enter => KeyEvent::Enter,
        KeyCode::Tab => KeyEvent::Tab,
        _ => KeyEvent::Other,
    }
}

fn draw(out: &mut Stdout, view: &SessionView) -> io::Result<()> {
    let (cols, rows) = terminal::size()?;
    let top = (rows / 2).saturating_sub(3);
    queue!(out, terminal::Clear(terminal::ClearType::All))?;

    let line = |out: &mut Stdout, row: u16, spans: &[(&str, Color)]| -> io::Result<()> {
        let width: usize = spans.iter().map(|(s, _)| display_width(s)).sum();
        let col = (usize::from(cols).saturating_sub(width) / 2) as u16;
        queue!(out, cursor::MoveTo(col, row))?;
        for (text, color) in spans {
            queue!(out, SetForegroundColor(*color), Print(text))?;
        }
        queue!(out, ResetColor)
    };

    match view.phase {
        Phase::Start => {
            line(out, top, &[("かなタイピング", Color::White)])?;
            let mode = format!("< {} >", view.mode.label());
            line(out, top + 2, &[(mode.as_str(), Color::Cyan)])?;
            line(
                out,
                top + 4,
                &[("[Tab] mode   [Space] start   [Esc] quit", Color::DarkGrey)],
            )?;
        }
        Phase::Countdown(n) => {
            let text = if n == 0 { "GO!".to_string() } else { n.to_string() };
            line(out, top + 2, &[(text.as_str(), Color::Yellow)])?;
        }
        Phase::Typing => {
            let bar = progress_bar(view.progress);
            line(out, top, &[(bar.as_str(), Color::Green)])?;
            if let Some(display) = &view.display {
                line(out, top + 2, &[(display.as_str(), Color::White)])?;
            }
            line(
                out,
                top + 3,
                &[
                    (view.done.as_str(), Color::DarkGrey),
                    (view.next.as_str(), Color::Yellow),
                    (view.remaining.as_str(), Color::White),
                ],
            )?;
            if let Some(last) = &view.last_round {
                let stats = format!(
                    "{}  {}  {:.2}s  {:.1} keys/s",
                    last.display, last.typed, last.seconds, last.chars_per_sec
                );
                line(out, top + 5, &[(stats.as_str(), Color::DarkGrey)])?;
            }
            let count = format!("{} words", view.words_completed);
            line(out, top + 6, &[(count.as_str(), Color::DarkGrey)])?;
        }
        Phase::Result => {
            if let Some(result) = &view.result {
                let headline = if result.mode.is_time_boxed() {
                    format!("{} words", result.words_completed)
                } else {
                    format!("{:.2} s", result.elapsed_secs)
                };
                let detail = format!(
                    "{}  ·  {} keys  ·  {:.2} keys/s",
                    result.mode.label(),
                    result.chars_typed,
                    result.chars_per_sec
                );
                line(out, top, &[(headline.as_str(), Color::Cyan)])?;
                line(out, top + 2, &[(detail.as_str(), Color::White)])?;
            }
            line(
                out,
                top + 4,
                &[("[Enter] retry   [Esc] quit", Color::DarkGrey)],
            )?;
        }
    }
    out.flush()
}

fn progress_bar(ratio: f64) -> String {
    let filled = ((ratio * BAR_WIDTH as f64).round() as usize).min(BAR_WIDTH);
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled))
}
