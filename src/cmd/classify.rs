use crate::reports;
use clap::Args;
use langrank::config::Config;
use langrank::corpus::{read_text_file, LanguageSpec};
use langrank::{Classifier, LrResult};
use std::path::PathBuf;
use tracing::{debug, info};

#[derive(Args, Debug, Clone)]
pub struct ClassifyArgs {
    #[command(flatten)]
    pub config: Config,

    /// Document to identify
    pub document: PathBuf,

    /// Candidate language as NAME=CORPUS_PATH (repeatable)
    #[arg(short, long = "lang", required = true)]
    pub languages: Vec<LanguageSpec>,

    /// Print the result as JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: &ClassifyArgs, config: &Config) -> LrResult<()> {
    let (candidates, corpus) = super::candidates(&args.languages)?;

    let store = config.store.open(config.profile.ngram);
    debug!("   Profile store: {}", store.dir().display());

    let classifier = Classifier::prepare(&candidates, &corpus, &store, &config.profile)?;

    info!("🔎 Classifying: {}", args.document.display());
    let text = read_text_file(&args.document)?;
    let ranking = classifier.classify(&text)?;

    if args.json {
        reports::print_json(&ranking)
    } else {
        reports::print_prediction(&ranking);
        reports::print_ranking(&ranking, &classifier);
        Ok(())
    }
}
