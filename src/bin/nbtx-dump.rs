//! A small demo CLI: loads an NBTx document and prints its ASCII dump,
//! in the spirit of the reference's `check.c`/`main.c` harnesses.
//!
//! Usage: `nbtx-dump [--compressed] <path>`

use nbtx::ascii::{dump_ascii, Style};
use nbtx::{io, map, size};
use std::ops::ControlFlow;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let mut compressed = false;
    let mut path = None;
    for arg in args.by_ref() {
        if arg == "--compressed" {
            compressed = true;
        } else {
            path = Some(arg);
        }
    }

    let Some(path) = path else {
        eprintln!("usage: nbtx-dump [--compressed] <path>");
        return ExitCode::FAILURE;
    };

    let tree = if compressed { io::load_compressed_path(&path) } else { io::load_path(&path) };

    let tree = match tree {
        Ok(tree) => tree,
        Err(e) => {
            log::error!("failed to load {}: {}", path, e);
            return ExitCode::FAILURE;
        }
    };

    let node_count = size(&tree);
    let mut visited = 0usize;
    let _ = map(&tree, &mut |_| {
        visited += 1;
        ControlFlow::Continue(())
    });
    debug_assert_eq!(node_count, visited);
    log::debug!("{} loaded {} node(s)", path, node_count);

    let clone = tree.clone();
    if clone != tree {
        log::error!("clone of {} is not structurally equal to the original", path);
        return ExitCode::FAILURE;
    }

    print!("{}", dump_ascii(&tree, &Style::default()));
    ExitCode::SUCCESS
}
