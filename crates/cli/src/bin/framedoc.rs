use anyhow::Result;

fn main() -> Result<()> {
    framedoc_cli::main_entry()
}
