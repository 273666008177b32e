/// Headless portfolio driver for native builds
#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::io::BufRead;

    use folio::driver::{self, Command, DEFAULT_WIDTH};
    use folio::{AppConfig, Catalog, Headless};

    let config = AppConfig::load();
    folio_dom::init_logging(config.log_level.to_level_filter());

    let catalog = match std::env::args().nth(1) {
        Some(path) => match Catalog::load(std::path::Path::new(&path)) {
            Ok(catalog) => catalog,
            Err(e) => {
                eprintln!("Failed to load catalog {}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => Catalog::builtin(),
    };

    let mut host = Headless::new(catalog, config.layout, DEFAULT_WIDTH);
    println!(
        "{} ({} projects). Type 'help' for commands.",
        config.app_name,
        host.controller.catalog().len()
    );

    for line in std::io::stdin().lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                eprintln!("Input error: {}", e);
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }

        match line.parse::<Command>() {
            Ok(Command::Quit) => break,
            Ok(command) => println!("{}", driver::execute(&mut host, command)),
            Err(e) => eprintln!("{}", e),
        }
    }
}

// WASM doesn't use main(), it uses wasm_bindgen's start function
#[cfg(target_arch = "wasm32")]
fn main() {}
