use crate::component::capture_organizer::DialoguerAsk;
use crate::component::{CaptureOrganizer, RunOutcome, SuffixCopier};
use crate::config::Config;
use crate::pause;
use anyhow::Result;
use console::{Term, style};
use log::debug;
use std::sync::Arc;
use std::sync::atomic::AtomicBool;

fn report(outcome: Result<RunOutcome>) {
    match outcome {
        Ok(outcome) => debug!("執行結束: {outcome:?}"),
        Err(e) => eprintln!("{} {:#}", style("錯誤:").red().bold(), e),
    }
}

pub fn run_capture_organizer(
    term: &Term,
    shutdown_signal: &Arc<AtomicBool>,
    config: &Config,
) -> Result<()> {
    let organizer = CaptureOrganizer::new(config.clone(), Arc::clone(shutdown_signal));
    report(organizer.run(&mut DialoguerAsk));

    pause(term)?;
    Ok(())
}

pub fn run_suffix_copier(
    term: &Term,
    shutdown_signal: &Arc<AtomicBool>,
    config: &Config,
) -> Result<()> {
    let copier = SuffixCopier::new(config.clone(), Arc::clone(shutdown_signal));
    report(copier.run(&mut DialoguerAsk));

    pause(term)?;
    Ok(())
}
