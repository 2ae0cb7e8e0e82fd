use self::screen::DistributionScreen;
use crate::{tui, util::SurveyArg};

mod screen;
mod widgets;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct ViewArg {
    #[command(flatten)]
    pub(crate) survey: SurveyArg,
}

pub(crate) fn run(arg: &ViewArg) -> anyhow::Result<()> {
    let context = arg.survey.load_context()?;
    let mut screen = DistributionScreen::new(context);
    tui::run(&mut screen)?;
    Ok(())
}
