//! The `memverse init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    if std::path::Path::new("memverse.toml").exists() {
        println!("memverse.toml already exists, skipping.");
    } else {
        std::fs::write("memverse.toml", SAMPLE_CONFIG)?;
        println!("Created memverse.toml");
    }

    std::fs::create_dir_all("passages")?;
    let example_path = std::path::Path::new("passages/example.toml");
    if example_path.exists() {
        println!("passages/example.toml already exists, skipping.");
    } else {
        std::fs::write(example_path, EXAMPLE_LIBRARY)?;
        println!("Created passages/example.toml");
    }

    println!("\nNext steps:");
    println!("  1. Add your own passages to passages/example.toml");
    println!("  2. Run: memverse validate --library passages");
    println!("  3. Run: memverse drill --passage john-3-16");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# memverse configuration

library = "./passages"
words_per_step = 1
clear_screen = true
# seed = 42
"#;

const EXAMPLE_LIBRARY: &str = r#"[library]
id = "example"
name = "Example Passages"
description = "A few passages to get started"

[[passages]]
id = "john-3-16"
reference = "John 3:16"
text = """
For God so loved the world, that he gave his only begotten Son,
that whosoever believeth in him should not perish, but have everlasting life.
"""
tags = ["new-testament"]

[[passages]]
id = "alma-32-21"
reference = "Alma 32:21"
text = """
And now as I said concerning faith, faith is not to have a perfect knowledge
of things; therefore if ye have faith ye hope for things which are not seen,
which are true.
"""
tags = ["book-of-mormon", "faith"]

[[passages]]
id = "moroni-10-4-5"
reference = "Moroni 10:4-5"
text = """
And when ye shall receive these things, I would exhort you that ye would ask
God, the Eternal Father, in the name of Christ, if these things are not true.
"""
tags = ["book-of-mormon"]
"#;
