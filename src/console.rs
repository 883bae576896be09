//! Interactive console driver for the layout engine.
//!
//! A line-oriented front end standing in for a canvas: each line is parsed
//! into a [`LayoutCommand`] or a driver action (save/load/show/quit), and
//! the engine's events are drained and echoed after every command.

use anyhow::Result;
use palletkit_core::geometry::Point;
use palletkit_layout::fields::{parse_count_field, parse_dimension_field};
use palletkit_layout::{EngineParams, LayoutCommand, LayoutEngine};
use palletkit_settings::Config;
use std::io::{BufRead, Write};
use std::time::Instant;
use tokio::sync::broadcast;
use tracing::warn;

const HELP: &str = "\
Commands:
  add <x_count> <y_count> [x_margin] [y_margin]  place a batch of workpieces
  down <id> <x> <y>                              start dragging a piece
  move <x> <y>                                   drag to a pointer position
  up                                             release the drag
  rotl | rotr                                    rotate the selection 90 degrees
  del                                            delete the last workpiece
  clear                                          remove all workpieces
  reset                                          restore the fixture layout
  undo | redo                                    step through history
  snap                                           toggle grid snapping
  coll                                           toggle collision detection
  platform <width> <height>                      resize the pallet
  block <width> <height>                         set the block size for new pieces
  save <path> | load <path>                      layout file I/O
  show                                           print the current layout
  help                                           this text
  quit                                           exit";

/// Runs the console loop over stdin/stdout until `quit` or end of input.
///
/// `config.last_layout_file` is read to restore the previous session's
/// layout and updated on every successful save/load; the caller persists
/// the config afterwards.
pub fn run(config: &mut Config) -> Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    run_with_io(config, &mut stdin.lock(), &mut stdout.lock())
}

fn run_with_io(
    config: &mut Config,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> Result<()> {
    let mut engine = LayoutEngine::with_fixed_blocks(EngineParams {
        pallet_width: config.platform.width,
        pallet_height: config.platform.height,
        block_width: config.block.width,
        block_height: config.block.height,
    })?;
    if engine.grid_snap_enabled() != config.interaction.grid_snap {
        engine.toggle_grid_snap();
    }
    if engine.collision_detection_enabled() != config.interaction.collision_detection {
        engine.toggle_collision_detection();
    }
    let mut events = engine.subscribe();

    writeln!(output, "palletkit {} (type 'help' for commands)", crate::VERSION)?;
    if let Some(path) = config.last_layout_file.clone() {
        if path.exists() {
            match engine.load_layout_file(&path) {
                Ok(count) => {
                    writeln!(output, "restored {} elements from {}", count, path.display())?
                }
                Err(err) => {
                    warn!("Could not restore {}: {}", path.display(), err);
                    writeln!(output, "could not restore {}: {}", path.display(), err)?;
                }
            }
            drain_events(&mut events, output)?;
        }
    }
    let mut line = String::new();
    loop {
        write!(output, "> ")?;
        output.flush()?;
        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let Some(&verb) = tokens.first() else {
            continue;
        };
        if verb == "quit" || verb == "exit" {
            break;
        }

        match dispatch(&mut engine, config, verb, &tokens[1..], output) {
            Ok(()) => {}
            Err(err) => writeln!(output, "error: {}", err)?,
        }
        drain_events(&mut events, output)?;
        engine.tick_feedback(Instant::now());
    }
    Ok(())
}

fn dispatch(
    engine: &mut LayoutEngine,
    config: &mut Config,
    verb: &str,
    args: &[&str],
    output: &mut impl Write,
) -> Result<()> {
    let arg = |i: usize| args.get(i).copied().unwrap_or("");
    match verb {
        "add" => {
            let command = LayoutCommand::AddWorkpieces {
                x_count: parse_count_field(arg(0)),
                y_count: parse_count_field(arg(1)),
                x_margin: parse_dimension_field(arg(2), config.interaction.x_margin),
                y_margin: parse_dimension_field(arg(3), config.interaction.y_margin),
            };
            engine.execute(command)?;
        }
        "down" => {
            let id = parse_count_field(arg(0)) as u64;
            let position = Point::new(
                parse_dimension_field(arg(1), 0.0),
                parse_dimension_field(arg(2), 0.0),
            );
            engine.execute(LayoutCommand::PointerDown { id, position })?;
        }
        "move" => {
            let position = Point::new(
                parse_dimension_field(arg(0), 0.0),
                parse_dimension_field(arg(1), 0.0),
            );
            engine.execute(LayoutCommand::PointerMove { position })?;
        }
        "up" => engine.execute(LayoutCommand::PointerUp)?,
        "rotl" => engine.execute(LayoutCommand::RotateLeft)?,
        "rotr" => engine.execute(LayoutCommand::RotateRight)?,
        "del" => engine.execute(LayoutCommand::DeleteLast)?,
        "clear" => engine.execute(LayoutCommand::ClearAll)?,
        "reset" => engine.execute(LayoutCommand::ResetLayout)?,
        "undo" => {
            if !engine.undo() {
                writeln!(output, "nothing to undo")?;
            }
        }
        "redo" => {
            if !engine.redo() {
                writeln!(output, "nothing to redo")?;
            }
        }
        "snap" => {
            let on = engine.toggle_grid_snap();
            writeln!(output, "grid snap {}", if on { "on" } else { "off" })?;
        }
        "coll" => {
            let on = engine.toggle_collision_detection();
            writeln!(output, "collision detection {}", if on { "on" } else { "off" })?;
        }
        "platform" => {
            engine.execute(LayoutCommand::SetPlatformSize {
                width: parse_dimension_field(arg(0), config.platform.width),
                height: parse_dimension_field(arg(1), config.platform.height),
            })?;
        }
        "block" => {
            engine.execute(LayoutCommand::SetBlockSize {
                width: parse_dimension_field(arg(0), config.block.width),
                height: parse_dimension_field(arg(1), config.block.height),
            })?;
        }
        "save" => {
            if args.is_empty() {
                writeln!(output, "usage: save <path>")?;
            } else {
                engine.save_layout_file(args[0])?;
                config.last_layout_file = Some(args[0].into());
                writeln!(output, "saved {}", args[0])?;
            }
        }
        "load" => {
            if args.is_empty() {
                writeln!(output, "usage: load <path>")?;
            } else {
                let count = engine.load_layout_file(args[0])?;
                config.last_layout_file = Some(args[0].into());
                writeln!(output, "loaded {} elements", count)?;
            }
        }
        "show" => print_layout(engine, output)?,
        "help" => writeln!(output, "{}", HELP)?,
        other => {
            warn!("Unknown command {:?}", other);
            writeln!(output, "unknown command '{}' (try 'help')", other)?;
        }
    }
    Ok(())
}

fn print_layout(engine: &LayoutEngine, output: &mut impl Write) -> Result<()> {
    let pallet = engine.pallet();
    writeln!(output, "pallet {} x {}", pallet.width, pallet.height)?;
    for piece in engine.pieces() {
        writeln!(
            output,
            "  {:<14} at ({:>6.1}, {:>6.1})  {:>5.1} x {:>5.1}  rot {:>3}{}",
            piece.name,
            piece.position.x,
            piece.position.y,
            piece.effective_width(),
            piece.effective_height(),
            piece.rotation.degrees(),
            if piece.selected { "  [selected]" } else { "" },
        )?;
    }
    if let Some(message) = engine.feedback().message() {
        writeln!(output, "  * {}", message)?;
    }
    Ok(())
}

fn drain_events(
    events: &mut broadcast::Receiver<palletkit_core::event::LayoutEvent>,
    output: &mut impl Write,
) -> Result<()> {
    loop {
        match events.try_recv() {
            Ok(event) => writeln!(output, "  [{}]", event)?,
            Err(broadcast::error::TryRecvError::Lagged(skipped)) => {
                warn!("Event stream lagged, skipped {} events", skipped);
            }
            Err(_) => break,
        }
    }
    Ok(())
}
