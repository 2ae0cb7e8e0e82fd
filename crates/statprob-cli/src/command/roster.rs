use crate::util::SurveyArg;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct RosterArg {
    #[command(flatten)]
    pub(crate) survey: SurveyArg,
}

pub(crate) fn run(arg: &RosterArg) -> anyhow::Result<()> {
    let context = arg.survey.load_context()?;
    let roster = context.roster();

    println!(
        "  {:<12} {:<24} {:<8} {:<28}",
        "ID", "Name", "Gender", "Most liked show"
    );
    println!("  {}", "-".repeat(75));
    for entry in roster {
        println!(
            "  {:<12} {:<24} {:<8} {:<28}",
            entry.student_id.to_string(),
            entry.name,
            entry.gender.label(),
            entry.show,
        );
    }
    println!();
    println!("  {} students", roster.len());
    Ok(())
}
