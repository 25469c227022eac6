use std::io;

use grid_cell::projects::error::ViewerError;
use grid_cell::projects::viewer::{run_viewer, ViewerConfig};
use log::warn;

fn prompt(text: &str) -> Result<String, ViewerError> {
    println!("{}", text);
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line)
}

fn main() -> Result<(), ViewerError> {
    env_logger::init();
    println!("\nWelcome to the grid cell viewer!\nEnter 'q' to quit.");
    loop {
        let choice = prompt("\n\nHow should cells be addressed?\n\n1) Linear index\n2) Explicit x/y")?;
        let addressing = match ViewerConfig::parse_addressing(&choice) {
            Ok(Some(addressing)) => addressing,
            Ok(None) => break,
            Err(e) => {
                warn!("{}", e);
                println!("\nERROR: Must input 1, 2 or q.");
                continue;
            }
        };

        let fill = prompt("\nFill probability between 0 and 1 (blank for 0.5)")?;
        let fill = match ViewerConfig::parse_fill(&fill) {
            Ok(fill) => fill,
            Err(e) => {
                warn!("{}", e);
                println!("\nERROR: Must input a number between 0 and 1.");
                continue;
            }
        };

        println!("\n\nControls:\nC: clear\nI: invert\nR: reseed\nMouse: toggle and draw\nESC: close");
        if let Err(e) = run_viewer(ViewerConfig { addressing, fill }) {
            println!("{}", e);
        }
    }
    Ok(())
}
