mod command;
mod tui;
mod util;

fn main() -> anyhow::Result<()> {
    command::run()
}
