use crate::reports;
use clap::Args;
use langrank::config::Config;
use langrank::corpus::LanguageSpec;
use langrank::language::train_language;
use langrank::LrResult;
use rayon::prelude::*;

#[derive(Args, Debug, Clone)]
pub struct TrainArgs {
    #[command(flatten)]
    pub config: Config,

    /// Language to (re)train as NAME=CORPUS_PATH (repeatable)
    #[arg(short, long = "lang", required = true)]
    pub languages: Vec<LanguageSpec>,
}

pub fn run(args: &TrainArgs, config: &Config) -> LrResult<()> {
    let (candidates, corpus) = super::candidates(&args.languages)?;
    let extractor = config.profile.extractor()?;
    let store = config.store.open(config.profile.ngram);

    let trained = candidates
        .par_iter()
        .map(|language| train_language(language, &corpus, &store, &extractor))
        .collect::<LrResult<Vec<_>>>()?;

    reports::print_training_summary(&trained, &store);
    Ok(())
}
