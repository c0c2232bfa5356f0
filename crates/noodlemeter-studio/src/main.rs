use std::io::{self, BufRead, Write};
use std::thread;

use anyhow::{Context, Result};

use noodlemeter_engine::core::{App, AppControl};
use noodlemeter_engine::logging;
use noodlemeter_engine::meter::MeterFrame;
use noodlemeter_engine::runtime::{Runtime, RuntimeConfig};

/// Terminal front panel: a single status line, redrawn in place.
///
/// The currency symbol appears while the meter is paused, matching the
/// cue the engine publishes on `DisplayFrame::paused`.
struct FrontPanel {
    stdout: io::Stdout,
}

impl App for FrontPanel {
    fn on_frame(&mut self, frame: &MeterFrame) -> AppControl {
        let display = frame.display();
        let cue = if display.paused { "€" } else { " " };
        let state = if display.paused { "PAUSED " } else { "RUNNING" };

        let mut out = self.stdout.lock();
        // Terminal write failures are not worth stopping the fare for.
        let _ = write!(
            out,
            "\r  {cue} {cost}   next increase in {countdown:>5} ms   [{state}]  ",
            cost = display.cost_text,
            countdown = display.countdown_ms,
        );
        let _ = out.flush();

        AppControl::Continue
    }
}

fn banner() {
    println!();
    println!("  ╔════════════════════════════════════════╗");
    println!("  ║        NOODLEMETER FRONT PANEL         ║");
    println!("  ║   the fare is running. it always is.   ║");
    println!("  ╠════════════════════════════════════════╣");
    println!("  ║  Enter  toggle the meter               ║");
    println!("  ║  p / r  pause / resume                 ║");
    println!("  ║  q      settle up and quit             ║");
    println!("  ╚════════════════════════════════════════╝");
    println!();
}

fn main() -> Result<()> {
    logging::init_logging(None);

    banner();

    let panel = FrontPanel { stdout: io::stdout() };

    Runtime::run_with(RuntimeConfig::default(), panel, |handle| {
        // Keyboard collaborator. Lines instead of raw keys keeps the
        // terminal in cooked mode; Enter stands in for the original's
        // click-anywhere toggle.
        thread::spawn(move || {
            for line in io::stdin().lock().lines() {
                match line.as_deref().map(str::trim) {
                    Ok("q") | Ok("quit") | Err(_) => break,
                    Ok("p") => handle.pause(),
                    Ok("r") => handle.resume(),
                    Ok(_) => handle.toggle(),
                }
            }
            log::debug!("keyboard collaborator finished");
            handle.exit();
        });
    })
    .context("meter loop failed")?;

    println!();
    println!("  Fare settled. Thanks for riding.");
    Ok(())
}
