use crate::cli::{
    context::AppContext,
    output,
    ui::{Table, TableColumn},
};
use crate::errors::Result;

pub fn show(ctx: &AppContext) -> Result<()> {
    let mut table = Table::new(vec![TableColumn::left("Key"), TableColumn::left("Value")]);
    for (key, value) in ctx.config().entries() {
        table.push_row(vec![key.to_string(), value]);
    }
    println!("{}", table.render());
    output::info(format!(
        "data directory: {}, config file: {}",
        ctx.base_dir().display(),
        ctx.config_path().display()
    ));
    Ok(())
}

pub fn set(ctx: &mut AppContext, key: &str, value: &str) -> Result<()> {
    let mut config = ctx.config().clone();
    config.set(key, value)?;
    ctx.save_config(config)?;
    output::success(format!("{key} updated"));
    Ok(())
}
