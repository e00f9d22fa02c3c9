//! Demonstrates path inspection.
//!
//! Inspects the "current script" (`script_path` setting, this file by default)
//! and its directory, then joins and resolves a few paths.
//!
//! Run with: cargo run --example paths
//! Override with:
//! PATHCAST_SCRIPT_PATH=/srv/app/index.js PATHCAST_CWD=/srv cargo run --example paths

use pathcast::prelude::*;

fn main() -> Result<()> {
    let settings = SettingsLoader::new()
        .with_script_path(concat!(env!("CARGO_MANIFEST_DIR"), "/demos/paths.rs"))
        .load()?;
    pathcast::logging::init(&settings.log_filter);

    let paths = settings.inspector();
    let file = settings.script_path.as_str();
    let dir = settings.script_dir();

    println!("=== Path Example ===\n");

    // file path and directory path
    println!("{}", file);
    println!("{}", dir);

    println!("{}", paths.basename(file));
    println!("{}", paths.basename(dir));

    println!("{:?}", paths.extname(file));
    println!("{:?}", paths.extname(dir));

    let entry = paths.parse(file);
    println!("{:#?}", entry);

    println!("{}", paths.format(&entry));

    println!("{}", paths.is_absolute(file));
    println!("{}", paths.is_absolute("../index.js"));

    println!("{}", paths.join(["folder1", "folder2", "index.html"]));
    println!("{}", paths.join(["/folder1", "folder2", "index.html"]));
    println!("{}", paths.join([dir, "data.json"]));

    println!("{}", paths.resolve(["folder1", "folder2", "index.html"])?);
    println!("{}", paths.resolve(["/folder1", "folder2", "index.html"])?);
    println!("{}", paths.resolve([dir, "data.json"])?);

    Ok(())
}
