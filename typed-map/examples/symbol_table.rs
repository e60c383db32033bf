use std::sync::Arc;

use anyhow::Context;
use log::{info, LevelFilter};
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};
use typed_map::{ops, raw_record, MultiMap, RawRecord, TypedMap};

enum Declarations {}
enum References {}

fn main() -> anyhow::Result<()> {
    TermLogger::init(
        LevelFilter::Trace,
        ConfigBuilder::new().build(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )?;

    let builtins = Arc::new(raw_record! { "print" => 0, "len" => 0 });
    let mut globals = RawRecord::with_prototype(builtins);
    globals.set("main", 1);

    let code = "fn main() { let x = len(items); print(x); print(main); }";
    let mut declarations = TypedMap::<usize>::new().brand::<Declarations>();
    let mut references = MultiMap::<usize, References>::default();

    for (line, name) in ["main", "x", "items", "len", "print", "x", "print", "main"]
        .into_iter()
        .enumerate()
    {
        if !globals.contains(name) && !declarations.has(name) {
            declarations.set(name, line);
            continue;
        }
        references.multi_map_add(name, line);
    }

    info!("{code}");
    info!("declarations: {declarations:?}");
    info!("references: {references:?}");
    info!("own globals: {:?}", ops::get_own_keys(&globals));

    let x = declarations
        .try_get("x")
        .context("`x` should have been declared")?;
    info!("`x` declared at {x}");

    if let Err(error) = references.try_multi_map_remove("main", &99) {
        info!("nothing to remove under `{}`: {error}", error.key());
    }

    references.try_multi_map_remove("main", &7)?;
    references.try_multi_map_remove("main", &0)?;
    info!("references after removing `main`: {references:?}");

    Ok(())
}
