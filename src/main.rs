use std::path::PathBuf;

use clap::Parser;
use konnichi_quiz::{
    config::DEFAULT_LOG_LEVEL, logging, BadgePolicy, Quiz, QuizConfig, SilverThreshold,
};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON file to load the questions from (built-in set when omitted)
    #[arg(short, long)]
    questions: Option<PathBuf>,

    /// Correct answers needed for a silver badge
    #[arg(long, conflicts_with = "silver_percent")]
    silver_threshold: Option<usize>,

    /// Percentage of questions needed for a silver badge
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
    silver_percent: Option<u8>,

    /// Append trace output to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = DEFAULT_LOG_LEVEL)]
    log_level: String,
}

impl Args {
    fn into_config(self) -> QuizConfig {
        let mut badge_policy = BadgePolicy::default();
        if let Some(count) = self.silver_threshold {
            badge_policy.silver = SilverThreshold::Count(count);
        } else if let Some(percent) = self.silver_percent {
            badge_policy.silver = SilverThreshold::Percent(percent);
        }

        QuizConfig {
            questions: self.questions,
            badge_policy,
            log_file: self.log_file,
            log_level: self.log_level,
        }
    }
}

fn main() {
    let config = Args::parse().into_config();

    if let Err(e) = logging::init_tracing(&config) {
        eprintln!("Error opening log file: {}", e);
        std::process::exit(1);
    }

    let quiz = match Quiz::from_config(&config) {
        Ok(quiz) => quiz,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = quiz.run() {
        eprintln!("Error running quiz: {}", e);
        std::process::exit(1);
    }
}
