//! Terminal renderer: applies [`ViewState`] transitions to stdout/stderr.
//!
//! The only place CLI output for the operation happens; everything above it
//! computes states.

use vsixget_core::controller::{ItemInfo, Render, VersionSlot, ViewState};

pub struct TermRenderer;

impl Render for TermRenderer {
    fn render(&mut self, state: &ViewState) {
        match state {
            // Nothing on screen between operations; entering Loading with no
            // info yet just marks the operation as busy.
            ViewState::Idle | ViewState::Loading { info: None } => {}
            ViewState::Loading { info: Some(info) } => print_info(info),
            ViewState::Success {
                info,
                link,
                filename,
            } => {
                print_info(info);
                println!("Download link: {}", link);
                println!("Saving as:     {}", filename);
            }
            ViewState::Error { message } => eprintln!("✗ {}", message),
        }
    }
}

fn print_info(info: &ItemInfo) {
    println!("Publisher: {}", info.publisher);
    println!("Extension: {}", info.extension);
    match &info.version {
        VersionSlot::Pending => println!("Version:   fetching…"),
        VersionSlot::Found(v) => println!("Version:   {}", v),
    }
}
