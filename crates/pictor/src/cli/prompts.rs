//! The `pictor prompts` command.

use clap::Args;
use pictor_core::prompts::pick;
use pictor_core::ScreenProfile;

/// Arguments for the `prompts` command.
#[derive(Args, Debug)]
pub struct PromptsArgs {
    /// Screen whose prompts to list (history examples or studio surprises)
    #[arg(long, default_value = "history")]
    pub screen: ScreenProfile,

    /// Print a single prompt chosen at random
    #[arg(long)]
    pub random: bool,
}

/// Execute the prompts command.
pub fn execute(args: PromptsArgs) -> anyhow::Result<()> {
    let set = args.screen.prompt_set();

    if args.random {
        let prompt = pick(set, &mut rand::thread_rng())
            .ok_or_else(|| anyhow::anyhow!("No prompts for the {} screen", args.screen))?;
        println!("{prompt}");
    } else {
        for line in numbered(set) {
            println!("{line}");
        }
    }

    Ok(())
}

fn numbered(set: &[&str]) -> Vec<String> {
    set.iter()
        .enumerate()
        .map(|(i, prompt)| format!("{:>2}. {prompt}", i + 1))
        .collect()
}
